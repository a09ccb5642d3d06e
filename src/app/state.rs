//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use crate::app::controller::PageController;
use crate::config::AppConfig;
use crate::page::document::Document;

/// Top-level application state.
pub struct AppState {
    /// The landing page being scrolled.
    pub document: Document,
    /// Scroll physics, trigger bindings and the resize lifecycle.
    pub controller: PageController,
    /// User configuration (scroll speed, wheel step, debounce).
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Seconds since startup, advanced once per frame.  Drives decorative
    /// motion such as the marquee drift.
    pub elapsed: f64,
}

impl AppState {
    pub fn new(document: Document, controller: PageController, config: AppConfig) -> Self {
        Self {
            document,
            controller,
            config,
            should_quit: false,
            status_message: None,
            elapsed: 0.0,
        }
    }

    /// Advance one frame: physics first, then every scroll binding, then the
    /// pending-resize check.
    pub fn frame(&mut self, now: f64) {
        self.elapsed = now;
        self.controller.frame(now, &mut self.document);
    }
}
