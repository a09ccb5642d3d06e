//! Page renderer.
//!
//! The page model lives in logical pixels (8x16 px per cell); this module
//! rasterises it into the terminal buffer.  Flowing elements are culled and
//! positioned against the scroll offset, then the fixed navbar pieces are
//! painted on top in document order, which is already back to front.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::app::state::AppState;
use crate::page::document::{CELL_PX_H, CELL_PX_W};
use crate::page::element::{Element, Geometry, Selector};
use crate::ui::layout::AppLayout;
use crate::ui::theme::{self, Theme};

/// Marquee drift speed in cells per second.
const MARQUEE_DRIFT: f64 = 8.0;
/// Separator between marquee repetitions.
const MARQUEE_JOINT: &str = "   ·   ";
/// Widest letter-spacing (in cells) the wordmark is allowed.
const MAX_TRACKING: i32 = 3;

const STATUS_HINT: &str = "wheel / j·k / Space scroll · g/G jump · q quit";

/// Draw one frame: the page, then the status bar.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let layout = AppLayout::from_area(frame.area());

    frame.render_widget(PageWidget { state }, layout.page_area);

    let left = if state.controller.is_resize_pending() {
        "resizing…"
    } else {
        state.status_message.as_deref().unwrap_or(STATUS_HINT)
    };
    let right = format!("{:.0}% ", state.controller.scroll_progress() * 100.0);
    let body = (layout.status_area.width as usize).saturating_sub(right.chars().count() + 1);
    let status = format!(" {left:<body$.body$}{right}");
    frame.render_widget(
        Paragraph::new(status).style(Theme::status_bar_style()),
        layout.status_area,
    );
}

// ───────────────────────────────────────── page widget ───────

/// The scrolled page, rendered as a single widget.
pub struct PageWidget<'a> {
    pub state: &'a AppState,
}

impl Widget for PageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 3 {
            return;
        }
        buf.set_style(area, Theme::page_style());

        let doc = &self.state.document;
        let scroll = self.state.controller.scroll_offset();
        let vh = doc.viewport().height;
        let mut canvas = Canvas { buf, area };

        for el in doc.elements() {
            if el.fixed {
                continue;
            }
            let rect = el.effective_rect();
            let top = rect.y - scroll;
            if top > vh || top + rect.height < 0.0 {
                continue;
            }
            let rect = Geometry::new(rect.x, top, rect.width, rect.height);
            match el.selector {
                Selector::SectionHeading => {
                    canvas.text(rect.x, rect.y, &el.text, Theme::heading_style());
                }
                Selector::Paragraph => {
                    canvas.text(rect.x, rect.y, &el.text, Theme::paragraph_style());
                }
                Selector::Highlight => draw_highlight(&mut canvas, el, &rect),
                Selector::HeroTagline => draw_tagline(&mut canvas, el, &rect),
                Selector::ScrollMarquee => {
                    draw_marquee(&mut canvas, el, &rect, self.state.elapsed);
                }
                // The backdrop only exists to anchor the morph region.
                _ => {}
            }
        }

        for el in doc.elements() {
            if !el.fixed {
                continue;
            }
            let rect = el.effective_rect();
            match el.selector {
                Selector::NavbarBackground | Selector::NavbarItems => {
                    canvas.fill(&rect, Theme::navbar_panel_style());
                }
                Selector::NavbarLink => draw_link(&mut canvas, el, &rect),
                Selector::NavbarLogo => draw_logo(&mut canvas, el, &rect),
                _ => {}
            }
        }
    }
}

// ───────────────────────────────────────── element passes ────

fn text_px(s: &str) -> f32 {
    s.chars().count() as f32 * CELL_PX_W
}

fn draw_marquee(canvas: &mut Canvas, el: &Element, rect: &Geometry, elapsed: f64) {
    let opacity = el.opacity();
    if opacity <= 0.01 {
        return;
    }
    let unit = format!("{}{}", el.text, MARQUEE_JOINT);
    let unit_len = unit.chars().count().max(1);
    let cols = (rect.width / CELL_PX_W) as usize;
    let drift = (elapsed * MARQUEE_DRIFT) as usize % unit_len;
    let line: String = unit.chars().cycle().skip(drift).take(cols).collect();
    canvas.text(rect.x, rect.y, &line, Theme::marquee_style(opacity));
}

fn draw_tagline(canvas: &mut Canvas, el: &Element, rect: &Geometry) {
    let opacity = el.opacity();
    if opacity <= 0.01 {
        return;
    }
    let x = rect.x + (rect.width - text_px(&el.text)) / 2.0;
    canvas.text(x, rect.y, &el.text, Theme::faded_text_style(opacity));
}

fn draw_highlight(canvas: &mut Canvas, el: &Element, rect: &Geometry) {
    let gray = el.style.gray_scale.unwrap_or(0.0);
    let blue = el.style.blue_scale.unwrap_or(0.0);
    let visible = el.style.text_visible.unwrap_or(true);

    let cells = (rect.width / CELL_PX_W).round().max(1.0) as i32;
    let chars: Vec<char> = el.text.chars().collect();
    let col0 = canvas.col(rect.x);
    let row = canvas.row(rect.y);

    for c in 0..cells {
        // Both swipes grow from the centre out, so colour by the cell's
        // normalised distance from it.
        let dist = ((c as f32 + 0.5) / cells as f32 - 0.5).abs() * 2.0;
        let bg = if dist <= blue {
            theme::ACCENT_BLUE
        } else if dist <= gray {
            theme::SWIPE_GRAY
        } else {
            theme::PAGE_BG
        };
        // Text sits one cell in from the left edge; hidden text takes the
        // swipe colour, exactly like `color: transparent`.
        let ch = if c == 0 {
            ' '
        } else {
            chars.get(c as usize - 1).copied().unwrap_or(' ')
        };
        let fg = if visible { theme::TEXT } else { bg };
        let style = Style::default().bg(theme::rgb(bg)).fg(theme::rgb(fg));
        canvas.cell(col0 + c, row, ch, style);
    }
}

fn draw_link(canvas: &mut Canvas, el: &Element, rect: &Geometry) {
    canvas.fill(rect, Theme::navbar_link_style());
    let x = rect.x + (rect.width - text_px(&el.text)) / 2.0;
    let y = rect.y + (rect.height - CELL_PX_H) / 2.0;
    canvas.text(x, y, &el.text, Theme::navbar_link_style());
}

fn draw_logo(canvas: &mut Canvas, el: &Element, rect: &Geometry) {
    let chars: Vec<char> = el.text.chars().collect();
    if chars.is_empty() {
        return;
    }
    let cells = (rect.width / CELL_PX_W) as i32;
    let n = chars.len() as i32;
    // Wide tracking while the wordmark owns the hero; it tightens as the
    // morph shrinks the box toward the corner.
    let gap = if n > 1 {
        ((cells - n) / (n - 1)).clamp(0, MAX_TRACKING)
    } else {
        0
    };
    let mut spaced = String::new();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 {
            for _ in 0..gap {
                spaced.push(' ');
            }
        }
        spaced.push(*ch);
    }
    let x = rect.x + (rect.width - text_px(&spaced)) / 2.0;
    let y = rect.y + (rect.height - CELL_PX_H) / 2.0;
    canvas.text(x, y, &spaced, Theme::logo_style());
}

// ───────────────────────────────────────── canvas ────────────

/// Clipped px→cell painter over the widget area.  Coordinates are logical
/// pixels relative to the area's top-left corner; everything outside the
/// area is dropped, never panicked on.
struct Canvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl Canvas<'_> {
    fn col(&self, x_px: f32) -> i32 {
        i32::from(self.area.x) + (x_px / CELL_PX_W).round() as i32
    }

    fn row(&self, y_px: f32) -> i32 {
        i32::from(self.area.y) + (y_px / CELL_PX_H).round() as i32
    }

    /// Paint a single cell if it falls inside the area.
    fn cell(&mut self, col: i32, row: i32, ch: char, style: Style) {
        if col < i32::from(self.area.left())
            || col >= i32::from(self.area.right())
            || row < i32::from(self.area.top())
            || row >= i32::from(self.area.bottom())
        {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((col as u16, row as u16)) {
            cell.set_char(ch);
            cell.set_style(style);
        }
    }

    /// Fill a px rect, clearing whatever was underneath.
    fn fill(&mut self, rect: &Geometry, style: Style) {
        let x0 = self.col(rect.x).max(i32::from(self.area.left()));
        let x1 = self.col(rect.x + rect.width).min(i32::from(self.area.right()));
        let y0 = self.row(rect.y).max(i32::from(self.area.top()));
        let y1 = self.row(rect.y + rect.height).min(i32::from(self.area.bottom()));
        for row in y0..y1 {
            for col in x0..x1 {
                if let Some(cell) = self.buf.cell_mut((col as u16, row as u16)) {
                    cell.set_char(' ');
                    cell.set_style(style);
                }
            }
        }
    }

    /// Draw a string, clipped on both sides.
    fn text(&mut self, x_px: f32, y_px: f32, text: &str, style: Style) {
        let row = self.row(y_px);
        if row < i32::from(self.area.top()) || row >= i32::from(self.area.bottom()) {
            return;
        }
        let mut col = self.col(x_px);
        let mut skip = 0usize;
        if col < i32::from(self.area.left()) {
            skip = (i32::from(self.area.left()) - col) as usize;
            col = i32::from(self.area.left());
        }
        let avail = (i32::from(self.area.right()) - col).max(0) as usize;
        if avail == 0 {
            return;
        }
        let clipped: String = text.chars().skip(skip).take(avail).collect();
        if !clipped.is_empty() {
            self.buf
                .set_stringn(col as u16, row as u16, clipped, avail, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::PageController;
    use crate::config::AppConfig;
    use crate::page::document::Document;
    use crate::ui::layout::page_viewport;
    use crate::ui::theme::{rgb, ACCENT_BLUE, PAGE_BG, PANEL_BG, SWIPE_GRAY};

    fn state_at(cols: u16, rows: u16) -> AppState {
        let mut doc = Document::build(page_viewport(cols, rows));
        let config = AppConfig::default();
        let controller = PageController::new(&mut doc, &config, 0.0).unwrap();
        let mut state = AppState::new(doc, controller, config);
        state.frame(0.0);
        state
    }

    fn rows_of(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|row| {
                (0..buf.area.width)
                    .map(|col| buf.cell((col, row)).map(|c| c.symbol()).unwrap_or(" "))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn hero_frame_shows_tracked_wordmark_and_marquee() {
        let state = state_at(80, 30);
        let area = Rect::new(0, 0, 80, 29);
        let mut buf = Buffer::empty(area);
        PageWidget { state: &state }.render(area, &mut buf);

        let screen = rows_of(&buf);
        assert!(screen
            .iter()
            .any(|row| row.contains("S   C   R   O   L   L   T   E   R   M")));
        assert!(screen.iter().any(|row| row.contains("scroll to explore")));
    }

    #[test]
    fn morph_end_pins_the_wordmark_and_drops_the_marquee() {
        let mut state = state_at(80, 30);
        state.controller.scroll_to(state.document.viewport().height);
        state.frame(10.0);

        let area = Rect::new(0, 0, 80, 29);
        let mut buf = Buffer::empty(area);
        PageWidget { state: &state }.render(area, &mut buf);

        let screen = rows_of(&buf);
        assert!(screen
            .iter()
            .any(|row| row.contains("S  C  R  O  L  L  T  E  R  M")));
        assert!(!screen.iter().any(|row| row.contains("scroll to explore")));
        // The stretched panel reaches cells the resting navbar never touched.
        let panel = buf.cell((40, 10)).map(|c| c.style().bg);
        assert_eq!(panel, Some(Some(rgb(PANEL_BG))));
    }

    #[test]
    fn highlight_swipes_grow_from_the_centre() {
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        let mut el = Element::new(Selector::Highlight, Geometry::new(0.0, 0.0, 320.0, 20.0))
            .text("steady center reveal here yes ok");
        el.style.gray_scale = Some(0.5);
        el.style.blue_scale = Some(0.1);
        el.style.text_visible = Some(false);
        let rect = el.effective_rect();
        {
            let mut canvas = Canvas {
                buf: &mut buf,
                area,
            };
            draw_highlight(&mut canvas, &el, &rect);
        }

        let bg = |col: u16| buf.cell((col, 0)).and_then(|c| c.style().bg);
        assert_eq!(bg(20), Some(rgb(ACCENT_BLUE)));
        assert_eq!(bg(12), Some(rgb(SWIPE_GRAY)));
        assert_eq!(bg(1), Some(rgb(PAGE_BG)));
        // Hidden text dissolves into the swipe.
        let fg = buf.cell((12, 0)).and_then(|c| c.style().fg);
        assert_eq!(fg, bg(12));
    }
}
