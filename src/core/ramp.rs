//! Clamped piecewise-linear ramps.
//!
//! Every effect phase in this crate is "0 until some progress, linear up to 1,
//! then saturated".  Centralising that here keeps the per-effect code down to
//! naming its breakpoints and removes unclamped interpolation bugs.

/// Linear interpolation between `a` and `b` at parameter `t`.
///
/// `t` is not clamped — callers that need clamping feed a [`Ramp`] output.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Maps an input to [0,1]: 0 at or below `start`, 1 at or above `end`,
/// linear in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    start: f32,
    end: f32,
}

impl Ramp {
    /// Ramp rising over `[start, end]`.  A degenerate span (`end <= start`)
    /// behaves as a step at `start`.
    pub const fn over(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Clamped ramp value at `x`.
    pub fn at(&self, x: f32) -> f32 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if x < self.start { 0.0 } else { 1.0 };
        }
        ((x - self.start) / span).clamp(0.0, 1.0)
    }

    /// Complementary ramp: 1 at or below `start`, falling to 0 at `end`.
    pub fn falling_at(&self, x: f32) -> f32 {
        1.0 - self.at(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn gray_swipe_phase() {
        // Gray swipe rises over the first 40% of progress, then saturates.
        let gray = Ramp::over(0.0, 0.4);
        assert!(close(gray.at(0.0), 0.0));
        assert!(close(gray.at(0.2), 0.5));
        assert!(close(gray.at(0.4), 1.0));
        assert!(close(gray.at(0.8), 1.0));
    }

    #[test]
    fn blue_swipe_phase() {
        // Blue swipe is delayed to 30% and completes at 70%.
        let blue = Ramp::over(0.3, 0.7);
        assert!(close(blue.at(0.0), 0.0));
        assert!(close(blue.at(0.3), 0.0));
        assert!(close(blue.at(0.5), 0.5));
        assert!(close(blue.at(0.7), 1.0));
        assert!(close(blue.at(0.9), 1.0));
    }

    #[test]
    fn text_reveal_phase() {
        let text = Ramp::over(0.6, 1.0);
        assert!(close(text.at(0.6), 0.0));
        assert!(close(text.at(0.8), 0.5));
        assert!(close(text.at(1.0), 1.0));
    }

    #[test]
    fn falling_clamps_instead_of_going_negative() {
        // The marquee fades out over the first half of the morph; past that
        // the raw 1 - 2p formula would be negative, so it pins at 0.
        let fade = Ramp::over(0.0, 0.5);
        assert!(close(fade.falling_at(0.0), 1.0));
        assert!(close(fade.falling_at(0.25), 0.5));
        assert!(close(fade.falling_at(0.5), 0.0));
        assert!(close(fade.falling_at(0.9), 0.0));
    }

    #[test]
    fn degenerate_span_is_a_step() {
        let step = Ramp::over(0.5, 0.5);
        assert!(close(step.at(0.49), 0.0));
        assert!(close(step.at(0.5), 1.0));
        assert!(close(step.at(0.51), 1.0));
    }

    #[test]
    fn inputs_outside_range_are_clamped() {
        let r = Ramp::over(0.2, 0.8);
        assert!(close(r.at(-5.0), 0.0));
        assert!(close(r.at(5.0), 1.0));
    }
}
