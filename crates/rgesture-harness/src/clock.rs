#![forbid(unsafe_code)]

//! Manual clock and pointer scripts.

use std::time::Duration;

use rgesture_core::{Instant, Point, PointerEvent};

/// One display frame at 60 Hz, rounded.
pub const FRAME: Duration = Duration::from_millis(16);

/// A clock that only moves when told to.
#[derive(Debug, Clone, Copy)]
pub struct TestClock {
    now: Instant,
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Move forward by `d` and return the new time.
    pub fn advance(&mut self, d: Duration) -> Instant {
        self.now += d;
        self.now
    }

    /// Move forward by `ms` milliseconds.
    pub fn advance_ms(&mut self, ms: u64) -> Instant {
        self.advance(Duration::from_millis(ms))
    }
}

/// Builds pointer event sequences against a [`TestClock`].
///
/// ```ignore
/// let events = PointerScript::new(&mut clock)
///     .down(start)
///     .hold_ms(500)
///     .move_to(end, 10, 16)
///     .up()
///     .build();
/// ```
#[derive(Debug)]
pub struct PointerScript<'a> {
    clock: &'a mut TestClock,
    at: Point,
    events: Vec<PointerEvent>,
}

impl<'a> PointerScript<'a> {
    #[must_use]
    pub fn new(clock: &'a mut TestClock) -> Self {
        Self {
            clock,
            at: Point::ZERO,
            events: Vec::new(),
        }
    }

    /// Press at `p` at the current time.
    #[must_use]
    pub fn down(mut self, p: Point) -> Self {
        self.at = p;
        self.events.push(PointerEvent::down(p, self.clock.now()));
        self
    }

    /// Let time pass without input.
    #[must_use]
    pub fn hold_ms(self, ms: u64) -> Self {
        self.clock.advance_ms(ms);
        self
    }

    /// Move in `steps` equal increments to `to`, `step_ms` apart.
    #[must_use]
    pub fn move_to(mut self, to: Point, steps: u32, step_ms: u64) -> Self {
        let from = self.at;
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let p = from + (to - from) * t;
            let now = self.clock.advance_ms(step_ms);
            self.events.push(PointerEvent::moved(p, now));
        }
        self.at = to;
        self
    }

    /// Move by `delta` in `steps` increments.
    #[must_use]
    pub fn move_by(self, delta: Point, steps: u32, step_ms: u64) -> Self {
        let to = self.at + delta;
        self.move_to(to, steps, step_ms)
    }

    /// Release where the pointer is.
    #[must_use]
    pub fn up(mut self) -> Self {
        self.events.push(PointerEvent::up(self.at, self.clock.now()));
        self
    }

    /// Platform cancel where the pointer is.
    #[must_use]
    pub fn cancel(mut self) -> Self {
        self.events.push(PointerEvent::cancel(self.at, self.clock.now()));
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<PointerEvent> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgesture_core::PointerKind;

    #[test]
    fn clock_advances() {
        let mut clock = TestClock::new();
        let t0 = clock.now();
        let t1 = clock.advance_ms(25);
        assert_eq!(t1 - t0, Duration::from_millis(25));
        assert_eq!(clock.now(), t1);
    }

    #[test]
    fn script_interpolates_moves() {
        let mut clock = TestClock::new();
        let t0 = clock.now();
        let events = PointerScript::new(&mut clock)
            .down(Point::new(0.0, 0.0))
            .move_to(Point::new(0.0, 40.0), 4, 10)
            .up()
            .build();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0].kind, PointerKind::Down);
        assert_eq!(events[2].position, Point::new(0.0, 20.0));
        assert_eq!(events[4].time - t0, Duration::from_millis(40));
        assert!(matches!(events[5], PointerEvent { kind: PointerKind::Up, .. }));
        assert_eq!(events[5].position, Point::new(0.0, 40.0));
    }

    #[test]
    fn hold_delays_following_events() {
        let mut clock = TestClock::new();
        let t0 = clock.now();
        let events = PointerScript::new(&mut clock)
            .down(Point::ZERO)
            .hold_ms(500)
            .move_by(Point::new(10.0, 0.0), 1, 16)
            .cancel()
            .build();
        assert_eq!(events[1].time - t0, Duration::from_millis(516));
        assert_eq!(events[2].kind, PointerKind::Cancel);
    }
}
