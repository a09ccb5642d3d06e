//! Page element model.
//!
//! Elements carry two layers of presentation: the stylesheet layout computed
//! by the document for the current viewport, and inline overrides written by
//! the animation controllers.  Clearing the inline layer restores exactly
//! what the stylesheet says, which is what the resize path relies on.

use crate::core::flip::{LayoutSnapshot, Transform};

/// Index into [`crate::page::document::Document`] elements.
pub type ElementId = usize;

// ───────────────────────────────────────── selectors ─────────

/// The fixed set of element classes the controllers and renderer know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    NavbarBackground,
    NavbarItems,
    NavbarLink,
    NavbarLogo,
    NavbarBackdrop,
    ScrollMarquee,
    HeroTagline,
    Highlight,
    SectionHeading,
    Paragraph,
}

impl Selector {
    /// Class name as it would appear in a stylesheet.
    pub fn as_str(self) -> &'static str {
        match self {
            Selector::NavbarBackground => "navbar-background",
            Selector::NavbarItems => "navbar-items",
            Selector::NavbarLink => "navbar-links",
            Selector::NavbarLogo => "navbar-logo",
            Selector::NavbarBackdrop => "navbar-backdrop",
            Selector::ScrollMarquee => "scroll-marquee",
            Selector::HeroTagline => "hero-tagline",
            Selector::Highlight => "highlight",
            Selector::SectionHeading => "section-heading",
            Selector::Paragraph => "paragraph",
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ───────────────────────────────────────── geometry ──────────

/// Rect in logical pixels.  `y` is document space for flowing elements and
/// viewport space for fixed ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::new(self.x, self.y, self.width, self.height)
    }
}

// ───────────────────────────────────────── inline style ──────

/// Per-element overrides written by the controllers; `None` means "use the
/// stylesheet value".  The resize path clears the whole layer at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// 0 = invisible, 1 = opaque.  Rendered as a blend toward the background.
    pub opacity: Option<f32>,
    /// Vertical offset in pixels (tagline slide-in).
    pub y_offset: Option<f32>,
    /// Gray swipe coverage of a highlight, 0..=1 of its width.
    pub gray_scale: Option<f32>,
    /// Blue swipe coverage of a highlight, 0..=1 of its width.
    pub blue_scale: Option<f32>,
    /// Whether highlight text renders in the foreground color (vs transparent).
    pub text_visible: Option<bool>,
    /// FLIP transform (logo morph).
    pub transform: Option<Transform>,
}

impl InlineStyle {
    /// Drop every override, restoring stylesheet values.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}

// ───────────────────────────────────────── element ───────────

/// A single page element.
#[derive(Debug, Clone)]
pub struct Element {
    pub selector: Selector,
    /// Stylesheet layout for the current viewport.
    pub layout: Geometry,
    /// Alternate stylesheet layout applied while `pinned` is set
    /// (only the navbar logo has one).
    pub pinned_layout: Option<Geometry>,
    /// Inline overrides owned by the controllers.
    pub style: InlineStyle,
    /// Marker class toggled by the navbar controller (`navbar-logo-pinned`).
    pub pinned: bool,
    /// True for viewport-anchored elements (the navbar pieces).
    pub fixed: bool,
    /// Rendered text content, if any.
    pub text: String,
}

impl Element {
    pub fn new(selector: Selector, layout: Geometry) -> Self {
        Self {
            selector,
            layout,
            pinned_layout: None,
            style: InlineStyle::default(),
            pinned: false,
            fixed: false,
            text: String::new(),
        }
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn pinned_layout(mut self, layout: Geometry) -> Self {
        self.pinned_layout = Some(layout);
        self
    }

    /// Stylesheet rect currently in effect (pinned layout when the marker
    /// class is set).
    pub fn base_rect(&self) -> Geometry {
        if self.pinned {
            self.pinned_layout.unwrap_or(self.layout)
        } else {
            self.layout
        }
    }

    /// Rect after inline overrides and transforms — what `offsetWidth`-style
    /// live reads and the renderer see.
    pub fn effective_rect(&self) -> Geometry {
        let base = self.base_rect();
        let mut rect = Geometry::new(
            base.x,
            base.y + self.style.y_offset.unwrap_or(0.0),
            self.style.width.unwrap_or(base.width),
            self.style.height.unwrap_or(base.height),
        );
        if let Some(t) = self.style.transform {
            let moved = t.apply_to(rect.snapshot());
            rect = Geometry::new(moved.x, moved.y, moved.width, moved.height);
        }
        rect
    }

    pub fn opacity(&self) -> f32 {
        self.style.opacity.unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flip::Transform;

    #[test]
    fn inline_overrides_shadow_the_stylesheet() {
        let mut el = Element::new(
            Selector::NavbarBackground,
            Geometry::new(0.0, 0.0, 600.0, 72.0),
        );
        assert_eq!(el.effective_rect().width, 600.0);

        el.style.width = Some(800.0);
        el.style.height = Some(480.0);
        assert_eq!(el.effective_rect().width, 800.0);
        assert_eq!(el.effective_rect().height, 480.0);

        el.style.clear();
        assert_eq!(el.effective_rect().width, 600.0);
        assert!(el.style.is_clear());
    }

    #[test]
    fn pinned_marker_switches_the_base_layout() {
        let mut logo = Element::new(
            Selector::NavbarLogo,
            Geometry::new(200.0, 160.0, 400.0, 96.0),
        )
        .pinned_layout(Geometry::new(16.0, 8.0, 250.0, 48.0));

        assert_eq!(logo.base_rect().width, 400.0);
        logo.pinned = true;
        assert_eq!(logo.base_rect().width, 250.0);
        assert_eq!(logo.base_rect().x, 16.0);
    }

    #[test]
    fn transform_applies_after_size_overrides() {
        let mut el = Element::new(
            Selector::NavbarLogo,
            Geometry::new(10.0, 10.0, 100.0, 50.0),
        );
        el.style.transform = Some(Transform {
            translate_x: 5.0,
            translate_y: -5.0,
            scale_x: 2.0,
            scale_y: 1.0,
        });
        let rect = el.effective_rect();
        assert_eq!(rect.x, 15.0);
        assert_eq!(rect.y, 5.0);
        assert_eq!(rect.width, 200.0);
        assert_eq!(rect.height, 50.0);
    }
}
