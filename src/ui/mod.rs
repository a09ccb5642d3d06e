//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the page model and turns it into cells on the terminal.
//! No input handling or animation state lives here.

pub mod layout;
pub mod render;
pub mod theme;
