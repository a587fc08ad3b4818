#![forbid(unsafe_code)]

//! Tick-driven animation primitives.
//!
//! Animations advance only when the owner calls [`Animation::tick`] with the
//! time elapsed since the previous frame. Nothing here reads a clock, so a
//! test can drive any animation deterministically.
//!
//! # Invariants
//!
//! 1. `value()` is in `[0.0, 1.0]` for every animation in this module.
//! 2. Once `is_complete()` returns true it stays true until `reset()`.
//! 3. Easing functions map 0.0 to 0.0 and 1.0 to 1.0.

mod timed;
mod tween;

use std::time::Duration;

pub use timed::Timed;
pub use tween::{Tween, lerp};

/// A value that progresses over time.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current eased progress in `[0.0, 1.0]`.
    fn value(&self) -> f32;

    /// Rewind to the start.
    fn reset(&mut self);
}

/// Maps linear progress to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[inline]
#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in.
#[inline]
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out.
#[inline]
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Cosine accelerate-decelerate curve, the default for property animations
/// on most toolkits.
#[inline]
#[must_use]
pub fn accelerate_decelerate(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    (((t + 1.0) * std::f32::consts::PI).cos() / 2.0) + 0.5
}
