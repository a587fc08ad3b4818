#![allow(dead_code)]

//! Shared drivers for controller integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use rgesture::{GestureController, RecordingListener};
use rgesture_core::PointerEvent;
use rgesture_harness::{FRAME, SimulatedList, TestClock};

/// Upper bound on frames any single animation phase needs in these tests.
pub const MAX_FRAMES: usize = 500;

/// Forward `events` in order; returns how many were consumed.
pub fn feed<C>(ctl: &mut C, list: &mut SimulatedList, events: &[PointerEvent]) -> usize
where
    C: GestureController<SimulatedList>,
{
    events
        .iter()
        .filter(|event| ctl.handle_event(event, list))
        .count()
}

/// Run exactly `frames` frames.
pub fn pump<C>(ctl: &mut C, list: &mut SimulatedList, clock: &mut TestClock, frames: usize)
where
    C: GestureController<SimulatedList>,
{
    for _ in 0..frames {
        let now = clock.advance(FRAME);
        ctl.on_frame(now, list);
    }
}

/// Run frames until the controller stops asking for them. Returns the frame
/// count, or panics past [`MAX_FRAMES`].
pub fn settle<C>(ctl: &mut C, list: &mut SimulatedList, clock: &mut TestClock) -> usize
where
    C: GestureController<SimulatedList>,
{
    for frame in 1..=MAX_FRAMES {
        let now = clock.advance(FRAME);
        if !ctl.on_frame(now, list) {
            return frame;
        }
    }
    panic!("controller still animating after {MAX_FRAMES} frames");
}

/// A listener the test can inspect after handing a clone to a controller.
pub fn recorder() -> Rc<RefCell<RecordingListener>> {
    Rc::new(RefCell::new(RecordingListener::default()))
}
