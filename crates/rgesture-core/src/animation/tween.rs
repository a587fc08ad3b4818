#![forbid(unsafe_code)]

//! Fixed-duration eased progress.

use std::time::Duration;

use super::{Animation, EasingFn, accelerate_decelerate};

/// Linear interpolation between `a` and `b`.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Progress from 0.0 to 1.0 over a fixed duration.
///
/// A zero duration completes on the first tick (and reports 1.0 right away),
/// so callers can use it for "jump without animating".
#[derive(Clone, Copy)]
pub struct Tween {
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

impl std::fmt::Debug for Tween {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}

impl Tween {
    /// Create a tween with the accelerate-decelerate curve.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            easing: accelerate_decelerate,
        }
    }

    /// Replace the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Linear (uneased) progress.
    #[must_use]
    pub fn raw_progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Interpolate between `from` and `to` at the current eased progress.
    #[must_use]
    pub fn interpolate(&self, from: f32, to: f32) -> f32 {
        lerp(from, to, self.value())
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        if self.is_complete() {
            return 1.0;
        }
        (self.easing)(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
