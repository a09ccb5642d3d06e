//! Easing curves for tweens.

/// Ease-out cubic: fast start, slow finish.  `1 - (1-t)^3`.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
