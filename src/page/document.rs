//! The demo landing page.
//!
//! Geometry is computed in logical pixels from the viewport size.  One
//! terminal cell maps to 8x16 px, so a 90-column terminal is a 720 px wide
//! page.  `relayout` recomputes stylesheet geometry for a new viewport
//! without touching inline overrides; clearing those is the controller's
//! job, element by element, during its resize teardown.

use crate::page::element::{Element, ElementId, Geometry, Selector};

/// Logical pixels per terminal column.
pub const CELL_PX_W: f32 = 8.0;
/// Logical pixels per terminal row.
pub const CELL_PX_H: f32 = 16.0;

/// Page height in viewport-heights: hero, three sections, closing strip.
const PAGE_VH: f32 = 4.5;
/// Document offset where the first content section starts.
const SECTIONS_TOP_VH: f32 = 1.2;
const SECTION_VH: f32 = 1.0;

const LOGO_TEXT: &str = "SCROLLTERM";
const NAV_LINKS: [&str; 4] = ["features", "motion", "config", "github"];
const TAGLINE: &str = "Scroll-driven storytelling at sixty frames a second.";
const MARQUEE: &str = "scroll to explore";
const FOOTER: &str = "rendered entirely in your terminal";

/// Viewport size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self::new(f32::from(cols) * CELL_PX_W, f32::from(rows) * CELL_PX_H)
    }
}

// ───────────────────────────────────────── document ──────────

#[derive(Debug)]
pub struct Document {
    viewport: Viewport,
    height: f32,
    elements: Vec<Element>,
}

impl Document {
    /// Build the landing page for a viewport.
    pub fn build(viewport: Viewport) -> Self {
        Self {
            viewport,
            height: PAGE_VH * viewport.height,
            elements: build_elements(viewport),
        }
    }

    /// Recompute stylesheet geometry for a new viewport.  Element identity,
    /// inline styles and marker classes are preserved.
    pub fn relayout(&mut self, viewport: Viewport) {
        let fresh = build_elements(viewport);
        debug_assert_eq!(fresh.len(), self.elements.len());
        for (el, new) in self.elements.iter_mut().zip(fresh) {
            debug_assert_eq!(el.selector, new.selector);
            el.layout = new.layout;
            el.pinned_layout = new.pinned_layout;
        }
        self.viewport = viewport;
        self.height = PAGE_VH * viewport.height;
    }

    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id]
    }

    pub fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id]
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn max_scroll(&self) -> f32 {
        (self.height - self.viewport.height).max(0.0)
    }

    /// Drop every element matching `selector`.  Pages with gaps only exist
    /// in tests.
    #[cfg(test)]
    pub fn strip(&mut self, selector: Selector) {
        self.elements.retain(|el| el.selector != selector);
    }
}

// ───────────────────────────────────────── layout ────────────

fn text_px(s: &str) -> f32 {
    s.chars().count() as f32 * CELL_PX_W
}

enum Line {
    Plain(&'static str),
    Highlight(&'static str),
}

struct Section {
    heading: &'static str,
    lines: &'static [Line],
}

const SECTIONS: [Section; 3] = [
    Section {
        heading: "Motion that follows the wheel",
        lines: &[
            Line::Plain("The page never jumps. Every wheel tick sets a target and the"),
            Line::Plain("viewport glides there, settling to the quarter pixel."),
            Line::Highlight("smooth scrolling without easing tables"),
            Line::Highlight("reads the clock, not the frame count"),
        ],
    },
    Section {
        heading: "A navbar that knows where it is",
        lines: &[
            Line::Plain("Scroll past the hero and the wordmark folds itself into the"),
            Line::Plain("corner while the menu stretches to meet it."),
            Line::Highlight("one morph, driven by scroll position"),
        ],
    },
    Section {
        heading: "Text that earns its entrance",
        lines: &[
            Line::Plain("Copy stays quiet until it reaches the reading line, then a"),
            Line::Plain("swipe of gray and blue carries the words in."),
            Line::Highlight("revealed in reading order"),
        ],
    },
];

fn build_elements(viewport: Viewport) -> Vec<Element> {
    let vw = viewport.width;
    let vh = viewport.height;
    let mut out = Vec::new();

    // Fixed navbar overlay. The logo starts as the hero wordmark and owns an
    // alternate corner layout for the pinned state.
    let bar = Geometry::new(vw * 0.07, 12.0, vw * 0.86, 72.0);
    out.push(Element::new(Selector::NavbarBackground, bar).fixed());

    let link_h = 32.0;
    let link_gap = 8.0;
    let link_widths: Vec<f32> = NAV_LINKS.iter().map(|l| text_px(l) + 32.0).collect();
    let items_w: f32 =
        link_widths.iter().sum::<f32>() + link_gap * (NAV_LINKS.len() as f32 - 1.0);
    let items = Geometry::new(bar.x + bar.width - items_w - 24.0, 32.0, items_w, link_h);
    out.push(Element::new(Selector::NavbarItems, items).fixed());

    let mut link_x = items.x;
    for (label, w) in NAV_LINKS.iter().zip(&link_widths) {
        out.push(
            Element::new(Selector::NavbarLink, Geometry::new(link_x, items.y, *w, link_h))
                .fixed()
                .text(*label),
        );
        link_x += w + link_gap;
    }

    let logo_w = (vw * 0.5).min(560.0);
    out.push(
        Element::new(
            Selector::NavbarLogo,
            Geometry::new((vw - logo_w) / 2.0, vh * 0.30 - 48.0, logo_w, 96.0),
        )
        .fixed()
        .pinned_layout(Geometry::new(24.0, 24.0, 250.0, 48.0))
        .text(LOGO_TEXT),
    );

    // Hero block. The backdrop spans exactly one viewport from the document
    // top; the navbar morph plays out across it.
    out.push(Element::new(
        Selector::NavbarBackdrop,
        Geometry::new(0.0, 0.0, vw, vh),
    ));
    out.push(
        Element::new(Selector::ScrollMarquee, Geometry::new(0.0, vh - 40.0, vw, 24.0))
            .text(MARQUEE),
    );
    let tag_w = (vw * 0.62).min(660.0);
    out.push(
        Element::new(
            Selector::HeroTagline,
            Geometry::new((vw - tag_w) / 2.0, vh, tag_w, 24.0),
        )
        .text(TAGLINE),
    );

    // Content sections.
    let left = vw * 0.08;
    for (i, section) in SECTIONS.iter().enumerate() {
        let top = (SECTIONS_TOP_VH + i as f32 * SECTION_VH) * vh;
        out.push(
            Element::new(
                Selector::SectionHeading,
                Geometry::new(left, top + 56.0, vw * 0.84, 32.0),
            )
            .text(section.heading),
        );
        let mut cursor = top + 120.0;
        for line in section.lines {
            match line {
                Line::Plain(text) => {
                    out.push(
                        Element::new(
                            Selector::Paragraph,
                            Geometry::new(left, cursor, text_px(text), 18.0),
                        )
                        .text(*text),
                    );
                }
                Line::Highlight(text) => {
                    out.push(
                        Element::new(
                            Selector::Highlight,
                            Geometry::new(left, cursor, text_px(text) + 16.0, 20.0),
                        )
                        .text(*text),
                    );
                }
            }
            cursor += 28.0;
        }
    }

    // Closing strip.
    out.push(
        Element::new(
            Selector::Paragraph,
            Geometry::new(
                (vw - text_px(FOOTER)) / 2.0,
                PAGE_VH * vh - 0.25 * vh,
                text_px(FOOTER),
                18.0,
            ),
        )
        .text(FOOTER),
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Document {
        Document::build(Viewport::new(1024.0, 480.0))
    }

    #[test]
    fn page_has_the_expected_structure() {
        let doc = demo();
        let count = |sel| doc.elements().iter().filter(|e| e.selector == sel).count();
        assert_eq!(count(Selector::NavbarBackground), 1);
        assert_eq!(count(Selector::NavbarItems), 1);
        assert_eq!(count(Selector::NavbarLink), 4);
        assert_eq!(count(Selector::NavbarLogo), 1);
        assert_eq!(count(Selector::NavbarBackdrop), 1);
        assert_eq!(count(Selector::ScrollMarquee), 1);
        assert_eq!(count(Selector::HeroTagline), 1);
        assert_eq!(count(Selector::SectionHeading), 3);
        assert_eq!(count(Selector::Highlight), 4);
    }

    #[test]
    fn backdrop_spans_one_viewport_from_the_top() {
        let doc = demo();
        let backdrop = doc
            .elements()
            .iter()
            .find(|e| e.selector == Selector::NavbarBackdrop)
            .unwrap();
        assert_eq!(backdrop.layout.y, 0.0);
        assert_eq!(backdrop.layout.height, 480.0);
        assert!(!backdrop.fixed);
    }

    #[test]
    fn tagline_starts_below_the_fold() {
        let doc = demo();
        let tagline = doc
            .elements()
            .iter()
            .find(|e| e.selector == Selector::HeroTagline)
            .unwrap();
        assert!(tagline.layout.y >= 480.0);
    }

    #[test]
    fn every_highlight_can_finish_its_reveal() {
        // A highlight finishes when its top passes 35% of the viewport, so
        // top - 0.35 * vh must be reachable by scrolling.
        let doc = demo();
        let vh = doc.viewport().height;
        for el in doc.elements().iter().filter(|e| e.selector == Selector::Highlight) {
            assert!(el.layout.y - 0.35 * vh <= doc.max_scroll());
        }
    }

    #[test]
    fn relayout_rescales_geometry_but_keeps_overrides() {
        let mut doc = demo();
        let logo = doc
            .elements()
            .iter()
            .position(|e| e.selector == Selector::NavbarLogo)
            .unwrap();
        doc.get_mut(logo).style.width = Some(250.0);
        doc.get_mut(logo).pinned = true;
        let old_layout = doc.get(logo).layout;

        doc.relayout(Viewport::new(640.0, 320.0));
        assert_eq!(doc.get(logo).style.width, Some(250.0));
        assert!(doc.get(logo).pinned);
        assert_ne!(doc.get(logo).layout, old_layout);
        assert_eq!(doc.max_scroll(), 320.0 * PAGE_VH - 320.0);
    }
}
