#![forbid(unsafe_code)]

//! Edge auto-scroll while dragging.
//!
//! The loop itself holds only its direction. The owning controller posts a
//! frame task while the loop runs and calls [`AutoScrollLoop::tick`] from it;
//! the tick looks one step ahead and refuses to scroll a boundary row under
//! the overlay.
//!
//! # Invariants
//!
//! 1. At most one direction is active; starting the other one replaces it.
//! 2. Starting the active direction again is a no-op.
//! 3. A tick that would make the overlay hover a boundary stops the loop
//!    without scrolling.
//! 4. A blocked direction stays blocked until the loop is stopped or asked
//!    to scroll the other way.

use rgesture_core::{ListHost, Rect, trace};

use super::behavior::{DragBehavior, ScrollDirection};
use super::policy::{BoundaryMarkers, ResolvedMarkers};

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTick {
    /// The loop was not running.
    Idle,
    /// A boundary stopped the loop.
    Blocked,
    /// Content moved by one step.
    Scrolled,
}

/// Fixed-step scroll toward one end of the list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoScrollLoop {
    direction: Option<ScrollDirection>,
    /// Direction a boundary stopped, latched until the overlay leaves the
    /// edge.
    blocked: Option<ScrollDirection>,
    step: f32,
}

impl AutoScrollLoop {
    /// Loop scrolling `step` pixels per tick.
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self {
            direction: None,
            blocked: None,
            step,
        }
    }

    /// Start scrolling toward `direction`. Returns `false` if the loop was
    /// already running that way or a boundary blocked that way.
    pub fn start(&mut self, direction: ScrollDirection) -> bool {
        if self.direction == Some(direction) || self.blocked == Some(direction) {
            return false;
        }
        self.blocked = None;
        self.direction = Some(direction);
        true
    }

    /// Stop scrolling and release any block. Returns whether the loop was
    /// running.
    pub fn stop(&mut self) -> bool {
        self.blocked = None;
        self.direction.take().is_some()
    }

    /// Direction a boundary stopped, if the loop has not been stopped since.
    #[must_use]
    pub fn blocked(&self) -> Option<ScrollDirection> {
        self.blocked
    }

    #[must_use]
    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.direction.is_some()
    }

    /// Scroll one step unless that would carry a boundary under `overlay`.
    pub fn tick<H: ListHost + ?Sized>(
        &mut self,
        host: &mut H,
        behavior: &dyn DragBehavior,
        overlay: Rect,
        markers: &BoundaryMarkers,
    ) -> ScrollTick {
        let Some(direction) = self.direction else {
            return ScrollTick::Idle;
        };
        let delta = behavior.scroll_delta(direction, self.step);

        // Content moving by `delta` is the overlay moving by `delta` relative
        // to it.
        if hovers(behavior, overlay.translate(delta), &markers.resolve(&*host)) {
            trace!(?direction, "drag.autoscroll.blocked");
            self.block(direction);
            return ScrollTick::Blocked;
        }

        host.scroll_by(delta);

        // A boundary that was not laid out before the scroll may be now.
        if hovers(behavior, overlay, &markers.resolve(&*host)) {
            trace!(?direction, "drag.autoscroll.blocked_after_scroll");
            self.block(direction);
            return ScrollTick::Blocked;
        }
        ScrollTick::Scrolled
    }

    fn block(&mut self, direction: ScrollDirection) {
        self.direction = None;
        self.blocked = Some(direction);
    }
}

/// Whether `overlay` passes over either resolved boundary.
pub(crate) fn hovers(behavior: &dyn DragBehavior, overlay: Rect, markers: &ResolvedMarkers) -> bool {
    markers
        .previous
        .is_some_and(|b| behavior.will_hover_previous(overlay, b))
        || markers
            .next
            .is_some_and(|b| behavior.will_hover_next(overlay, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::behavior::VerticalBehavior;
    use rgesture_core::Point;
    use rgesture_harness::{HostCall, SimulatedList};

    #[test]
    fn start_is_idempotent_and_switches_direction() {
        let mut auto = AutoScrollLoop::new(16.0);
        assert!(auto.start(ScrollDirection::ToEnd));
        assert!(!auto.start(ScrollDirection::ToEnd));
        assert!(auto.start(ScrollDirection::ToStart));
        assert_eq!(auto.direction(), Some(ScrollDirection::ToStart));
        assert!(auto.stop());
        assert!(!auto.stop());
    }

    #[test]
    fn idle_tick_does_nothing() {
        let mut list = SimulatedList::vertical(20, 50.0, 300.0, 200.0);
        let mut auto = AutoScrollLoop::new(16.0);
        let overlay = Rect::new(0.0, 150.0, 300.0, 50.0);
        let tick = auto.tick(&mut list, &VerticalBehavior, overlay, &BoundaryMarkers::default());
        assert_eq!(tick, ScrollTick::Idle);
        assert!(list.calls().is_empty());
    }

    #[test]
    fn tick_scrolls_one_step() {
        let mut list = SimulatedList::vertical(20, 50.0, 300.0, 200.0);
        let mut auto = AutoScrollLoop::new(16.0);
        auto.start(ScrollDirection::ToEnd);
        let overlay = Rect::new(0.0, 150.0, 300.0, 50.0);
        let tick = auto.tick(&mut list, &VerticalBehavior, overlay, &BoundaryMarkers::default());
        assert_eq!(tick, ScrollTick::Scrolled);
        assert_eq!(list.calls(), &[HostCall::ScrollBy(Point::new(0.0, 16.0))]);
        assert_eq!(list.scroll_offset(), 16.0);
    }

    #[test]
    fn boundary_one_step_ahead_blocks_without_scrolling() {
        // Row 4 is a boundary laid out at y = 200..250, partly visible; the
        // overlay ends at 210.
        let mut list = SimulatedList::vertical(20, 50.0, 300.0, 210.0);
        let mut auto = AutoScrollLoop::new(16.0);
        auto.start(ScrollDirection::ToEnd);
        let markers = BoundaryMarkers {
            previous: None,
            next: Some(4),
        };
        let overlay = Rect::new(0.0, 160.0, 300.0, 50.0);
        let first = auto.tick(&mut list, &VerticalBehavior, overlay, &markers);
        assert_eq!(first, ScrollTick::Scrolled);
        // Boundary now ends at 234; overlay + 16 would end at 226: still fine.
        assert_eq!(auto.tick(&mut list, &VerticalBehavior, overlay, &markers), ScrollTick::Scrolled);
        // Boundary now ends at 218; overlay + 16 would end at 226.
        assert_eq!(auto.tick(&mut list, &VerticalBehavior, overlay, &markers), ScrollTick::Blocked);
        assert!(!auto.is_running());
        assert_eq!(list.scroll_offset(), 32.0);
    }

    #[test]
    fn blocked_direction_stays_latched_until_stopped() {
        let mut list = SimulatedList::vertical(20, 50.0, 300.0, 250.0);
        let mut auto = AutoScrollLoop::new(16.0);
        auto.start(ScrollDirection::ToEnd);
        let markers = BoundaryMarkers {
            previous: None,
            next: Some(4),
        };
        // Overlay rests on the boundary's bottom edge at the viewport end.
        let overlay = Rect::new(0.0, 200.0, 300.0, 50.0);
        assert_eq!(auto.tick(&mut list, &VerticalBehavior, overlay, &markers), ScrollTick::Blocked);
        assert_eq!(auto.blocked(), Some(ScrollDirection::ToEnd));

        assert!(!auto.start(ScrollDirection::ToEnd));
        assert!(!auto.is_running());
        assert!(list.calls().is_empty());

        // Leaving the edge releases the block.
        assert!(!auto.stop());
        assert_eq!(auto.blocked(), None);
        assert!(auto.start(ScrollDirection::ToEnd));
    }

    #[test]
    fn other_direction_clears_the_block() {
        let mut list = SimulatedList::vertical(20, 50.0, 300.0, 250.0);
        let mut auto = AutoScrollLoop::new(16.0);
        auto.start(ScrollDirection::ToEnd);
        let markers = BoundaryMarkers {
            previous: None,
            next: Some(4),
        };
        let overlay = Rect::new(0.0, 200.0, 300.0, 50.0);
        auto.tick(&mut list, &VerticalBehavior, overlay, &markers);
        assert!(auto.start(ScrollDirection::ToStart));
        assert_eq!(auto.blocked(), None);
        assert_eq!(auto.direction(), Some(ScrollDirection::ToStart));
    }
}
