//! Page animation controller.
//!
//! Owns the scroll physics, every scroll-trigger binding and the resize
//! lifecycle.  `frame` is the single per-frame entry point and fixes the
//! ordering: physics advance first, then trigger refresh, then the
//! pending-resize check.  Timestamps are caller-supplied seconds, so the
//! whole controller runs under a synthetic clock in tests.

use crate::app::resize::ResizeDebounce;
use crate::config::AppConfig;
use crate::core::flip::FlipTransform;
use crate::core::ramp::{lerp, Ramp};
use crate::core::scroll::ScrollPhysics;
use crate::core::trigger::{TriggerId, TriggerRegion, TriggerSet};
use crate::core::tween::Tween;
use crate::page::document::{Document, Viewport};
use crate::page::element::{ElementId, Selector};
use crate::page::registry::{PageError, PageRegistry};

/// Viewports narrower than this skip the morph and pin the navbar up front.
pub const MOBILE_BREAKPOINT: f32 = 720.0;
/// Wordmark width once pinned to the corner, in px.
pub const PINNED_LOGO_WIDTH: f32 = 250.0;

// Reveal phases of a highlight, as fractions of its trigger progress.
const GRAY_SWIPE: Ramp = Ramp::over(0.0, 0.4);
const BLUE_SWIPE: Ramp = Ramp::over(0.3, 0.7);
const TEXT_REVEAL: Ramp = Ramp::over(0.6, 1.0);
/// The marquee fades out over the first half of the morph.
const MARQUEE_FADE: Ramp = Ramp::over(0.0, 0.5);

/// Tagline tween length in seconds, retargeted on every progress change.
const TAGLINE_TWEEN: f32 = 0.1;
const TAGLINE_RISE: f32 = 20.0;

/// Navbar elements the controller styles; kept for teardown.
struct NavBinding {
    background: ElementId,
    items: ElementId,
    links: Vec<ElementId>,
    logo: ElementId,
}

impl NavBinding {
    fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        [self.background, self.items, self.logo]
            .into_iter()
            .chain(self.links.iter().copied())
    }
}

/// Tagline reveal: a probe trigger chased by two short tweens.
struct TaglineFx {
    element: ElementId,
    probe: TriggerId,
    opacity: Tween,
    rise: Tween,
    last_target: f32,
}

pub struct PageController {
    physics: ScrollPhysics,
    triggers: TriggerSet<Document>,
    nav: Option<NavBinding>,
    tagline: Option<TaglineFx>,
    resize: ResizeDebounce,
    pending_viewport: Option<Viewport>,
    text_effects: bool,
    last_frame: f64,
}

impl PageController {
    /// Bind every animation to `doc` and prime the scroll physics.  Fails if
    /// the page is missing a structural navbar element.
    pub fn new(doc: &mut Document, config: &AppConfig, now: f64) -> Result<Self, PageError> {
        let mut physics = ScrollPhysics::new(config.scroll_speed);
        physics.set_max(doc.max_scroll());

        let mut controller = Self {
            physics,
            triggers: TriggerSet::new(),
            nav: None,
            tagline: None,
            resize: ResizeDebounce::new(config.debounce_ms),
            pending_viewport: None,
            text_effects: config.text_effects,
            last_frame: now,
        };
        controller.init(doc)?;
        Ok(controller)
    }

    // ───────────────────────────────────────── frame loop ────────

    /// Advance one frame at timestamp `now` (seconds).
    pub fn frame(&mut self, now: f64, doc: &mut Document) {
        let dt = (now - self.last_frame).max(0.0) as f32;
        self.last_frame = now;

        self.physics.advance(dt);
        self.triggers.update(doc, self.physics.offset(), dt);

        if let Some(fx) = &mut self.tagline {
            let progress = self.triggers.progress_of(fx.probe);
            if (progress - fx.last_target).abs() > 1e-4 {
                fx.opacity.retarget(now, progress, TAGLINE_TWEEN);
                fx.rise
                    .retarget(now, TAGLINE_RISE - progress * TAGLINE_RISE, TAGLINE_TWEEN);
                fx.last_target = progress;
            }
            let el = doc.get_mut(fx.element);
            el.style.opacity = Some(fx.opacity.sample(now));
            el.style.y_offset = Some(fx.rise.sample(now));
        }

        if self.resize.poll(now) {
            if let Some(viewport) = self.pending_viewport.take() {
                self.reinit(doc, viewport);
            }
        }
    }

    // ───────────────────────────────────────── scroll input ──────

    pub fn scroll_by(&mut self, delta: f32) {
        self.physics.scroll_by(delta);
    }

    pub fn scroll_to(&mut self, pos: f32) {
        self.physics.scroll_to(pos);
    }

    pub fn scroll_offset(&self) -> f32 {
        self.physics.offset()
    }

    /// Position within the scrollable range, 0..=1.
    pub fn scroll_progress(&self) -> f32 {
        if self.physics.max() > 0.0 {
            self.physics.offset() / self.physics.max()
        } else {
            0.0
        }
    }

    // ───────────────────────────────────────── resize ────────────

    /// Note a terminal resize.  The rebuild runs from `frame` once the burst
    /// goes quiet.
    pub fn notify_resize(&mut self, viewport: Viewport, now: f64) {
        self.pending_viewport = Some(viewport);
        self.resize.arm(now);
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "resize pending"
        );
    }

    pub fn is_resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    fn reinit(&mut self, doc: &mut Document, viewport: Viewport) {
        let t0 = std::time::Instant::now();
        self.dispose(doc);
        doc.relayout(viewport);
        self.physics.set_max(doc.max_scroll());
        match self.init(doc) {
            Ok(()) => tracing::debug!(
                "reinit: {:.2?} viewport={}x{}",
                t0.elapsed(),
                viewport.width,
                viewport.height
            ),
            Err(err) => tracing::warn!("reinit failed, page left static: {err}"),
        }
    }

    /// Kill every binding and restore the navbar to stylesheet defaults.
    fn dispose(&mut self, doc: &mut Document) {
        self.triggers.kill_all();
        self.tagline = None;
        if let Some(nav) = self.nav.take() {
            for id in nav.ids() {
                doc.get_mut(id).style.clear();
            }
            doc.get_mut(nav.logo).pinned = false;
        }
    }

    // ───────────────────────────────────────── bindings ──────────

    fn init(&mut self, doc: &mut Document) -> Result<(), PageError> {
        let registry = PageRegistry::index(doc);
        self.init_navbar(doc, &registry)?;
        if self.text_effects {
            self.init_text(doc, &registry);
        }
        tracing::debug!(triggers = self.triggers.len(), "page bindings ready");
        Ok(())
    }

    fn init_navbar(&mut self, doc: &mut Document, registry: &PageRegistry) -> Result<(), PageError> {
        let background = registry.require(Selector::NavbarBackground)?;
        let items = registry.require(Selector::NavbarItems)?;
        let links: Vec<ElementId> = registry.all(Selector::NavbarLink).to_vec();
        if links.is_empty() {
            return Err(PageError::MissingElement(Selector::NavbarLink));
        }
        let logo = registry.require(Selector::NavbarLogo)?;
        let viewport = doc.viewport();

        self.nav = Some(NavBinding {
            background,
            items,
            links: links.clone(),
            logo,
        });

        if viewport.width < MOBILE_BREAKPOINT {
            // Narrow terminals get the end state up front, no morph.
            let el = doc.get_mut(logo);
            el.pinned = true;
            el.style.width = Some(PINNED_LOGO_WIDTH);
            for id in [background, items] {
                let el = doc.get_mut(id);
                el.style.width = Some(viewport.width);
                el.style.height = Some(viewport.height);
            }
            tracing::debug!(width = viewport.width, "viewport below breakpoint, navbar pinned");
            return Ok(());
        }

        let initial = doc.get(background).effective_rect();
        let initial_link_widths: Vec<f32> = links
            .iter()
            .map(|id| doc.get(*id).effective_rect().width)
            .collect();

        // FLIP: capture the wordmark, pin it, then play the move back from
        // the captured state as scroll progress advances.
        let logo_first = doc.get(logo).effective_rect().snapshot();
        {
            let el = doc.get_mut(logo);
            el.pinned = true;
            el.style.width = Some(PINNED_LOGO_WIDTH);
        }
        let logo_last = doc.get(logo).effective_rect().snapshot();
        let flip = FlipTransform::between(logo_first, logo_last);
        doc.get_mut(logo).style.transform = Some(flip.at(0.0));

        let backdrop = registry.require(Selector::NavbarBackdrop)?;
        let region = TriggerRegion::spanning(doc.get(backdrop).layout.y, viewport.height);

        let link_ids = links;
        self.triggers.create(
            region,
            1.0,
            Box::new(move |doc, p| {
                for id in [background, items] {
                    let el = doc.get_mut(id);
                    el.style.width = Some(lerp(initial.width, viewport.width, p));
                    el.style.height = Some(lerp(initial.height, viewport.height, p));
                }
                // Links chase their captured width from whatever the layout
                // currently gives them.
                for (id, target) in link_ids.iter().zip(&initial_link_widths) {
                    let live = doc.get(*id).effective_rect().width;
                    doc.get_mut(*id).style.width = Some(lerp(live, *target, p));
                }
                doc.get_mut(logo).style.transform = Some(flip.at(p));
            }),
        );

        if let Some(marquee) = registry.optional(Selector::ScrollMarquee) {
            self.triggers.create(
                region,
                1.0,
                Box::new(move |doc, p| {
                    doc.get_mut(marquee).style.opacity = Some(MARQUEE_FADE.falling_at(p));
                }),
            );
        }

        Ok(())
    }

    fn init_text(&mut self, doc: &mut Document, registry: &PageRegistry) {
        let viewport_h = doc.viewport().height;

        for &highlight in registry.all(Selector::Highlight) {
            {
                let el = doc.get_mut(highlight);
                el.style.gray_scale = Some(0.0);
                el.style.blue_scale = Some(0.0);
            }
            let region =
                TriggerRegion::viewport_anchored(doc.get(highlight).layout.y, viewport_h, 0.85, 0.35);
            self.triggers.create(
                region,
                0.5,
                Box::new(move |doc, p| {
                    let el = doc.get_mut(highlight);
                    el.style.gray_scale = Some(GRAY_SWIPE.at(p));
                    el.style.blue_scale = Some(BLUE_SWIPE.at(p));
                    el.style.text_visible = Some(TEXT_REVEAL.at(p) > 0.5);
                }),
            );
        }

        if let Some(tagline) = registry.optional(Selector::HeroTagline) {
            {
                let el = doc.get_mut(tagline);
                el.style.opacity = Some(0.0);
                el.style.y_offset = Some(TAGLINE_RISE);
            }
            let region =
                TriggerRegion::viewport_anchored(doc.get(tagline).layout.y, viewport_h, 0.90, 0.70);
            let probe = self.triggers.create_probe(region, 1.0);
            self.tagline = Some(TaglineFx {
                element: tagline,
                probe,
                opacity: Tween::settled(0.0),
                rise: Tween::settled(TAGLINE_RISE),
                last_target: 0.0,
            });
        }
    }
}
