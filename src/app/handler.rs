//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::app::state::AppState;
use crate::ui::layout::page_viewport;

/// Pixels scrolled by a single line key (arrow / j / k): three rows.
const LINE_STEP: f32 = 48.0;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let page = state.document.viewport().height * 0.9;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => state.controller.scroll_by(LINE_STEP),
        KeyCode::Up | KeyCode::Char('k') => state.controller.scroll_by(-LINE_STEP),
        KeyCode::PageDown => state.controller.scroll_by(page),
        KeyCode::PageUp => state.controller.scroll_by(-page),
        KeyCode::Char(' ') => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                state.controller.scroll_by(-page);
            } else {
                state.controller.scroll_by(page);
            }
        }
        KeyCode::Home | KeyCode::Char('g') => state.controller.scroll_to(0.0),
        KeyCode::End | KeyCode::Char('G') => {
            let bottom = state.document.max_scroll();
            state.controller.scroll_to(bottom);
        }
        _ => {}
    }
}

/// Process a mouse event.  Only the wheel drives the page.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let step = state.config.wheel_step_px;
    match mouse.kind {
        MouseEventKind::ScrollDown => state.controller.scroll_by(step),
        MouseEventKind::ScrollUp => state.controller.scroll_by(-step),
        _ => {}
    }
}

/// Process a terminal resize at timestamp `now`.  The rebuild itself is
/// debounced and runs from the frame loop.
pub fn handle_resize(state: &mut AppState, cols: u16, rows: u16, now: f64) {
    state.controller.notify_resize(page_viewport(cols, rows), now);
}
