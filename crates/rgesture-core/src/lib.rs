#![forbid(unsafe_code)]

//! Core: geometry, pointer events, animation, scheduling, and host traits.
//!
//! # Role in rgesture
//! `rgesture-core` holds everything the gesture controllers need that is not
//! a gesture: pixel geometry projected onto a list axis, raw pointer events,
//! velocity estimation, tick-driven tweens, a keyed frame-callback queue, and
//! the traits a hosting list implements.
//!
//! # How it fits in the system
//! The `rgesture` crate builds the drag-reorder and swipe-dismiss controllers
//! on top of these types. `rgesture-harness` implements the host traits with
//! a simulated recycling list for tests.

pub mod animation;
pub mod event;
pub mod frame;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod velocity;

pub use event::{PointerEvent, PointerId, PointerKind};
pub use geometry::{Axis, Point, Rect, UnknownToken};
pub use host::{GestureHost, ListHost, OverlayLayer, RowId, RowTransform, SurfaceId};
pub use velocity::{VelocityEstimator, VelocityTracker};
pub use web_time::Instant;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
