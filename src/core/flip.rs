//! FLIP layout transitions.
//!
//! Capture an element's rect before a layout change, apply the change, then
//! build a transform whose progress 0 is the full inverse (the element still
//! appears where it used to be) and whose progress 1 is identity.  Scrubbing
//! the progress plays the move.  Scaling is about the rect's top-left corner.

use super::ramp::lerp;

/// An element rect at capture time — position and size in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutSnapshot {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Translation + scale applied on top of an element's current layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Transform {
    /// Rect this transform produces when applied to `rect`.
    pub fn apply_to(&self, rect: LayoutSnapshot) -> LayoutSnapshot {
        LayoutSnapshot {
            x: rect.x + self.translate_x,
            y: rect.y + self.translate_y,
            width: rect.width * self.scale_x,
            height: rect.height * self.scale_y,
        }
    }
}

/// A scrubbed move from a captured layout to the current one.
#[derive(Debug, Clone, Copy)]
pub struct FlipTransform {
    first: LayoutSnapshot,
    last: LayoutSnapshot,
}

impl FlipTransform {
    /// `first` is the snapshot taken before the layout change, `last` the
    /// element's layout after it.
    pub fn between(first: LayoutSnapshot, last: LayoutSnapshot) -> Self {
        Self { first, last }
    }

    /// Transform at `progress` ∈ [0,1] (clamped).
    pub fn at(&self, progress: f32) -> Transform {
        let p = progress.clamp(0.0, 1.0);
        let scale = |from: f32, to: f32| if to > 0.0 { from / to } else { 1.0 };
        Transform {
            translate_x: (self.first.x - self.last.x) * (1.0 - p),
            translate_y: (self.first.y - self.last.y) * (1.0 - p),
            scale_x: lerp(scale(self.first.width, self.last.width), 1.0, p),
            scale_y: lerp(scale(self.first.height, self.last.height), 1.0, p),
        }
    }
}
