#![forbid(unsafe_code)]

//! The interface a host drives every controller through.

use rgesture_core::{GestureHost, Instant, PointerEvent};

/// A pointer-driven controller pumped by its host.
///
/// The host forwards every pointer event before its own handling and calls
/// [`on_frame`](Self::on_frame) once per display frame for as long as it
/// returns `true`. Controllers never read a clock: `event.time` and the
/// `now` passed to `on_frame` are the only time sources.
pub trait GestureController<H: GestureHost + ?Sized> {
    /// Feed one pointer event. Returns `true` if the controller consumed it
    /// and the list must not handle it.
    fn handle_event(&mut self, event: &PointerEvent, host: &mut H) -> bool;

    /// Run due tasks and advance animations. Returns `true` while more
    /// frames are needed.
    fn on_frame(&mut self, now: Instant, host: &mut H) -> bool;

    /// Allow or block new gestures. An in-flight gesture is not aborted.
    fn set_enabled(&mut self, enabled: bool);

    fn is_enabled(&self) -> bool;

    /// No gesture in flight and nothing scheduled.
    fn is_idle(&self) -> bool;

    /// Earliest pending task deadline, for hosts that sleep between frames.
    fn next_deadline(&self) -> Option<Instant>;
}
