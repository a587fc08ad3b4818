#![forbid(unsafe_code)]

//! Animations anchored to the instant they started.

use web_time::Instant;

use super::Animation;

/// An animation that derives its own `dt` from frame timestamps.
///
/// Each animation remembers when it was last advanced, so one started from a
/// pointer event at `t` and first pumped at `t + 16ms` advances by exactly
/// 16ms, regardless of what else the owner is animating.
#[derive(Debug, Clone, Copy)]
pub struct Timed<A> {
    animation: A,
    last: Instant,
}

impl<A: Animation> Timed<A> {
    /// Start `animation` at `start`.
    #[must_use]
    pub fn new(animation: A, start: Instant) -> Self {
        Self {
            animation,
            last: start,
        }
    }

    /// Advance to `now`. Timestamps earlier than the last one are ignored.
    pub fn advance_to(&mut self, now: Instant) {
        if now > self.last {
            self.animation.tick(now.saturating_duration_since(self.last));
            self.last = now;
        }
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.animation.value()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.animation.is_complete()
    }

    /// The wrapped animation.
    #[must_use]
    pub fn inner(&self) -> &A {
        &self.animation
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::animation::{Tween, linear};

    #[test]
    fn advances_from_start_instant() {
        let t0 = Instant::now();
        let mut timed = Timed::new(Tween::new(Duration::from_millis(100)).easing(linear), t0);
        timed.advance_to(t0 + Duration::from_millis(25));
        assert!((timed.value() - 0.25).abs() < 1e-4);
        timed.advance_to(t0 + Duration::from_millis(10));
        assert!((timed.value() - 0.25).abs() < 1e-4);
        timed.advance_to(t0 + Duration::from_millis(150));
        assert!(timed.is_complete());
        assert_eq!(timed.value(), 1.0);
        assert_eq!(timed.inner().elapsed(), Duration::from_millis(100));
    }
}
