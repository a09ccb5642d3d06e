//! Application orchestration — state management, event loop, and input handling.

pub mod controller;
pub mod event;
pub mod handler;
pub mod resize;
pub mod state;
