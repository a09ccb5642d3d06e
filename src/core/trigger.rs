//! Scroll-region observers.
//!
//! A trigger watches a span of document scroll offsets and reports normalized
//! progress through it.  Progress is clamped to [0,1] here, at the source, so
//! effect callbacks never see out-of-range interpolation inputs.  `scrub`
//! smooths the reported progress toward the raw scroll-derived value with the
//! given time constant in seconds (0 disables smoothing).
//!
//! Triggers are owned by a [`TriggerSet`], which the frame loop feeds once per
//! frame after the scroll physics update.  Teardown is global: the resize
//! path kills the whole set and re-registers from fresh geometry.

use super::ramp::Ramp;

/// Span of document scroll offsets a trigger is active over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRegion {
    pub start: f32,
    pub end: f32,
}

impl TriggerRegion {
    /// Region running from `start` for `length` pixels of scrolling.
    pub fn spanning(start: f32, length: f32) -> Self {
        Self {
            start,
            end: start + length,
        }
    }

    /// Region bounded by where an element's top crosses two viewport anchors.
    ///
    /// Anchors are fractions of viewport height measured from its top: the
    /// region starts when the element top reaches `from * viewport_h` down the
    /// screen and ends when it reaches `to * viewport_h`.  Offsets may be
    /// negative for elements close to the document top; progress clamping
    /// makes that harmless.
    pub fn viewport_anchored(element_top: f32, viewport_h: f32, from: f32, to: f32) -> Self {
        Self {
            start: element_top - viewport_h * from,
            end: element_top - viewport_h * to,
        }
    }

    /// Normalized [0,1] position of `scroll_pos` within the region.
    pub fn progress(&self, scroll_pos: f32) -> f32 {
        Ramp::over(self.start, self.end).at(scroll_pos)
    }
}

/// Callback invoked with the owning context and the trigger's progress.
pub type OnProgress<T> = Box<dyn FnMut(&mut T, f32)>;

/// Handle to a trigger within its set.  Valid until the next `kill_all`.
pub type TriggerId = usize;

/// One registered scroll observer.
pub struct ScrollTrigger<T> {
    region: TriggerRegion,
    /// Scrub time constant in seconds; 0 follows the scroll position exactly.
    scrub: f32,
    progress: f32,
    last_emitted: Option<f32>,
    /// `None` for probes, whose progress is polled instead.
    on_update: Option<OnProgress<T>>,
}

impl<T> ScrollTrigger<T> {
    fn update(&mut self, ctx: &mut T, scroll_pos: f32, dt: f32) {
        let raw = self.region.progress(scroll_pos);

        if self.scrub > 0.0 {
            let alpha = 1.0 - (-dt.max(0.0) / self.scrub).exp();
            self.progress += (raw - self.progress) * alpha;
            if (raw - self.progress).abs() < 1e-3 {
                self.progress = raw;
            }
        } else {
            self.progress = raw;
        }

        if self.last_emitted != Some(self.progress) {
            self.last_emitted = Some(self.progress);
            if let Some(on_update) = &mut self.on_update {
                on_update(ctx, self.progress);
            }
        }
    }
}

/// All live scroll observers, updated in registration order.
pub struct TriggerSet<T> {
    triggers: Vec<ScrollTrigger<T>>,
}

impl<T> Default for TriggerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TriggerSet<T> {
    pub fn new() -> Self {
        Self {
            triggers: Vec::new(),
        }
    }

    /// Register an observer over `region`.
    pub fn create(&mut self, region: TriggerRegion, scrub: f32, on_update: OnProgress<T>) -> TriggerId {
        self.push(region, scrub, Some(on_update))
    }

    /// Register a callback-less observer whose progress is read with
    /// [`TriggerSet::progress_of`].
    pub fn create_probe(&mut self, region: TriggerRegion, scrub: f32) -> TriggerId {
        self.push(region, scrub, None)
    }

    fn push(
        &mut self,
        region: TriggerRegion,
        scrub: f32,
        on_update: Option<OnProgress<T>>,
    ) -> TriggerId {
        self.triggers.push(ScrollTrigger {
            region,
            scrub: scrub.max(0.0),
            progress: 0.0,
            last_emitted: None,
            on_update,
        });
        self.triggers.len() - 1
    }

    /// Current (scrubbed) progress of a trigger; 0 for dead handles.
    pub fn progress_of(&self, id: TriggerId) -> f32 {
        self.triggers.get(id).map(|t| t.progress).unwrap_or(0.0)
    }

    /// Feed the current scroll position to every trigger.  Called once per
    /// frame, strictly after the scroll physics advance.
    pub fn update(&mut self, ctx: &mut T, scroll_pos: f32, dt: f32) {
        for trigger in &mut self.triggers {
            trigger.update(ctx, scroll_pos, dt);
        }
    }

    /// Dispose every observer.  The set can be reused afterward.
    pub fn kill_all(&mut self) {
        self.triggers.clear();
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn viewport_anchors_resolve_to_scroll_offsets() {
        // Element top at 1000 px, 480 px viewport, active while the top
        // travels from 85% to 35% of the screen.
        let region = TriggerRegion::viewport_anchored(1000.0, 480.0, 0.85, 0.35);
        assert!(close(region.start, 1000.0 - 408.0));
        assert!(close(region.end, 1000.0 - 168.0));
    }

    #[test]
    fn progress_is_clamped_outside_the_region() {
        let region = TriggerRegion::spanning(100.0, 200.0);
        assert!(close(region.progress(0.0), 0.0));
        assert!(close(region.progress(100.0), 0.0));
        assert!(close(region.progress(200.0), 0.5));
        assert!(close(region.progress(300.0), 1.0));
        assert!(close(region.progress(9999.0), 1.0));
    }

    #[test]
    fn unscrubbed_trigger_reports_raw_progress() {
        let mut set: TriggerSet<Vec<f32>> = TriggerSet::new();
        set.create(
            TriggerRegion::spanning(0.0, 100.0),
            0.0,
            Box::new(|seen, p| seen.push(p)),
        );

        let mut seen = Vec::new();
        set.update(&mut seen, 25.0, 0.016);
        set.update(&mut seen, 150.0, 0.016);
        assert_eq!(seen.len(), 2);
        assert!(close(seen[0], 0.25));
        assert!(close(seen[1], 1.0));
    }

    #[test]
    fn scrubbed_trigger_lags_then_converges() {
        let mut set: TriggerSet<Vec<f32>> = TriggerSet::new();
        set.create(
            TriggerRegion::spanning(0.0, 100.0),
            0.5,
            Box::new(|seen, p| seen.push(p)),
        );

        let mut seen = Vec::new();
        set.update(&mut seen, 100.0, 0.016);
        assert!(seen[0] > 0.0 && seen[0] < 1.0, "first frame lags the jump");

        for _ in 0..600 {
            set.update(&mut seen, 100.0, 0.016);
        }
        assert!(close(*seen.last().unwrap(), 1.0));

        // Each step moves toward the raw value.
        for pair in seen.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn callbacks_fire_only_on_change() {
        let mut set: TriggerSet<Vec<f32>> = TriggerSet::new();
        set.create(
            TriggerRegion::spanning(0.0, 100.0),
            0.0,
            Box::new(|seen, p| seen.push(p)),
        );

        let mut seen = Vec::new();
        set.update(&mut seen, 50.0, 0.016);
        set.update(&mut seen, 50.0, 0.016);
        set.update(&mut seen, 50.0, 0.016);
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn update_runs_in_registration_order() {
        let mut set: TriggerSet<Vec<&'static str>> = TriggerSet::new();
        set.create(
            TriggerRegion::spanning(0.0, 1.0),
            0.0,
            Box::new(|order, _| order.push("navbar")),
        );
        set.create(
            TriggerRegion::spanning(0.0, 1.0),
            0.0,
            Box::new(|order, _| order.push("marquee")),
        );

        let mut order = Vec::new();
        set.update(&mut order, 0.5, 0.016);
        assert_eq!(order, vec!["navbar", "marquee"]);
    }

    #[test]
    fn probes_are_polled_and_scrubbed() {
        let mut set: TriggerSet<()> = TriggerSet::new();
        let id = set.create_probe(TriggerRegion::spanning(0.0, 100.0), 0.0);
        assert!(close(set.progress_of(id), 0.0));

        set.update(&mut (), 40.0, 0.016);
        assert!(close(set.progress_of(id), 0.4));

        set.kill_all();
        assert!(close(set.progress_of(id), 0.0));
    }

    #[test]
    fn kill_all_disposes_every_observer() {
        let mut set: TriggerSet<u32> = TriggerSet::new();
        set.create(
            TriggerRegion::spanning(0.0, 1.0),
            0.0,
            Box::new(|hits, _| *hits += 1),
        );
        set.create(
            TriggerRegion::spanning(0.0, 1.0),
            0.0,
            Box::new(|hits, _| *hits += 1),
        );
        assert_eq!(set.len(), 2);

        set.kill_all();
        assert!(set.is_empty());

        let mut hits = 0;
        set.update(&mut hits, 0.5, 0.016);
        assert_eq!(hits, 0);
    }
}
