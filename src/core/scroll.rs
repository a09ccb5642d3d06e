//! Smooth-scroll physics.
//!
//! Wheel and key input move a target offset; each frame the visible offset
//! eases toward it with an exponential settle.  The step is integrated over
//! the raw elapsed time — no frame-rate lag smoothing — so a 33 ms frame and
//! two 16.5 ms frames land on the same offset.

/// Document scroll state with eased motion toward a target offset.
#[derive(Debug, Clone)]
pub struct ScrollPhysics {
    /// Offset currently on screen, in document pixels.
    offset: f32,
    /// Offset the physics is settling toward.
    target: f32,
    /// Largest valid offset (document height minus viewport height).
    max: f32,
    /// Settle rate in 1/seconds.  Good range: 3–12.
    speed: f32,
}

impl ScrollPhysics {
    pub fn new(speed: f32) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            max: 0.0,
            speed: speed.clamp(0.5, 20.0),
        }
    }

    /// Set the scrollable range.  Both target and offset are re-clamped so a
    /// shrinking document cannot leave the viewport past its end.
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.target = self.target.clamp(0.0, self.max);
        self.offset = self.offset.clamp(0.0, self.max);
    }

    /// Move the target by `delta` pixels (positive scrolls down).
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.target + delta);
    }

    /// Aim the target at an absolute offset.
    pub fn scroll_to(&mut self, pos: f32) {
        self.target = pos.clamp(0.0, self.max);
    }

    /// Advance the physics by `dt` seconds and return the new offset.
    /// Residuals under a quarter pixel snap to the target.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let remaining = self.target - self.offset;
        if remaining != 0.0 {
            let step = 1.0 - (-self.speed * dt.max(0.0)).exp();
            self.offset += remaining * step;
            if (self.target - self.offset).abs() < 0.25 {
                self.offset = self.target;
            }
        }
        self.offset
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn max(&self) -> f32 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_clamped_to_document_range() {
        let mut s = ScrollPhysics::new(6.0);
        s.set_max(1000.0);
        s.scroll_by(-50.0);
        assert_eq!(s.target(), 0.0);
        s.scroll_to(5000.0);
        assert_eq!(s.target(), 1000.0);
    }

    #[test]
    fn advance_converges_and_snaps() {
        let mut s = ScrollPhysics::new(6.0);
        s.set_max(1000.0);
        s.scroll_to(400.0);

        let mut prev = s.offset();
        for _ in 0..300 {
            let now = s.advance(1.0 / 60.0);
            assert!(now >= prev, "offset must approach the target monotonically");
            prev = now;
        }
        assert_eq!(s.offset(), 400.0);
    }

    #[test]
    fn elapsed_time_is_exact_regardless_of_frame_slicing() {
        // One 100 ms frame lands where two 50 ms frames do.
        let mut whole = ScrollPhysics::new(6.0);
        whole.set_max(10_000.0);
        whole.scroll_to(8000.0);
        whole.advance(0.1);

        let mut halves = ScrollPhysics::new(6.0);
        halves.set_max(10_000.0);
        halves.scroll_to(8000.0);
        halves.advance(0.05);
        halves.advance(0.05);

        assert!((whole.offset() - halves.offset()).abs() < 0.01);
    }

    #[test]
    fn shrinking_max_pulls_the_viewport_back() {
        let mut s = ScrollPhysics::new(6.0);
        s.set_max(1000.0);
        s.scroll_to(1000.0);
        for _ in 0..600 {
            s.advance(1.0 / 60.0);
        }
        assert_eq!(s.offset(), 1000.0);

        s.set_max(300.0);
        assert_eq!(s.target(), 300.0);
        assert_eq!(s.offset(), 300.0);
    }
}
