//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

// Page palette.  Kept as RGB triples so effects can blend toward the
// backdrop instead of flipping between indexed colours.
pub const PAGE_BG: (u8, u8, u8) = (12, 14, 17);
pub const PANEL_BG: (u8, u8, u8) = (24, 28, 35);
pub const TEXT: (u8, u8, u8) = (232, 228, 216);
pub const MUTED: (u8, u8, u8) = (148, 155, 164);
pub const ACCENT_BLUE: (u8, u8, u8) = (37, 99, 235);
pub const SWIPE_GRAY: (u8, u8, u8) = (75, 85, 99);

/// Mix `color` toward `over`; 1 keeps the colour, 0 dissolves it.
pub fn blend(color: (u8, u8, u8), over: (u8, u8, u8), alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    let ch = |c: u8, o: u8| (f32::from(o) + (f32::from(c) - f32::from(o)) * a).round() as u8;
    Color::Rgb(
        ch(color.0, over.0),
        ch(color.1, over.1),
        ch(color.2, over.2),
    )
}

pub fn rgb(c: (u8, u8, u8)) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── page ───────────────────────────────────────────────────
    pub fn page_style() -> Style {
        Style::default().bg(rgb(PAGE_BG)).fg(rgb(TEXT))
    }

    pub fn heading_style() -> Style {
        Style::default()
            .fg(rgb(TEXT))
            .add_modifier(Modifier::BOLD)
    }

    pub fn paragraph_style() -> Style {
        Style::default().fg(rgb(MUTED))
    }

    /// Page text at partial opacity over the page background.
    pub fn faded_text_style(opacity: f32) -> Style {
        Style::default().fg(blend(TEXT, PAGE_BG, opacity))
    }

    pub fn marquee_style(opacity: f32) -> Style {
        Style::default()
            .fg(blend(MUTED, PAGE_BG, opacity))
            .add_modifier(Modifier::ITALIC)
    }

    // ── navbar ─────────────────────────────────────────────────
    pub fn navbar_panel_style() -> Style {
        Style::default().bg(rgb(PANEL_BG))
    }

    pub fn logo_style() -> Style {
        Style::default()
            .fg(rgb(TEXT))
            .add_modifier(Modifier::BOLD)
    }

    pub fn navbar_link_style() -> Style {
        Style::default().fg(rgb(MUTED)).bg(rgb(PANEL_BG))
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
