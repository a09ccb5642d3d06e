//! Core animation engine — ramps, tweens, scroll physics, triggers, FLIP.
//!
//! Nothing in this module depends on any TUI or rendering crate, and nothing
//! reads a real clock: callers pass timestamps and deltas in, so the whole
//! engine runs under a synthetic clock in tests.

pub mod ease;
pub mod flip;
pub mod ramp;
pub mod scroll;
pub mod trigger;
pub mod tween;
