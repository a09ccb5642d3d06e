//! Page model — elements, typed lookup, and the demo landing page.

pub mod document;
pub mod element;
pub mod registry;
