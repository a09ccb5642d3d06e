//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::page::document::Viewport;

/// Primary screen layout with the page area and a bottom status bar.
pub struct AppLayout {
    pub page_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // page (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            page_area: chunks[0],
            status_area: chunks[1],
        }
    }
}

/// Logical-pixel viewport for a terminal of `cols` x `rows` cells, minus the
/// status bar row.
pub fn page_viewport(cols: u16, rows: u16) -> Viewport {
    Viewport::from_cells(cols, rows.saturating_sub(1))
}
