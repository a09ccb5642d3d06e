//! Short retargetable tween.
//!
//! The tagline effect never sets its values directly: each trigger update
//! re-aims a ~100 ms tween at the new target and the frame loop samples it.
//! Retargeting mid-flight starts from the currently sampled value, so rapid
//! scroll direction changes stay continuous.

use super::ease::ease_out_cubic;

/// A single eased value animating from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    start: f64,
    duration: f32,
}

impl Tween {
    /// A tween that is already settled at `value`.
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
        }
    }

    pub fn new(from: f32, to: f32, start: f64, duration: f32) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.max(0.0),
        }
    }

    /// Eased value at time `now` (seconds).
    pub fn sample(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ((now - self.start) as f32 / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    /// Re-aim at `new_to`, restarting from the value currently on screen.
    pub fn retarget(&mut self, now: f64, new_to: f32, duration: f32) {
        let current = self.sample(now);
        *self = Self::new(current, new_to, now, duration);
    }
}
