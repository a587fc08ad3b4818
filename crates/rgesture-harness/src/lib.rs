#![forbid(unsafe_code)]

//! Deterministic test host for gesture controllers.
//!
//! - [`SimulatedList`]: a recycling list implementing
//!   [`ListHost`](rgesture_core::ListHost) and
//!   [`OverlayLayer`](rgesture_core::OverlayLayer), with a log of the calls
//!   that matter for ordering assertions.
//! - [`TestClock`] and [`PointerScript`]: injected time and pointer paths.
//!
//! Nothing here sleeps or reads the wall clock after construction; tests pump
//! frames explicitly.

pub mod clock;
pub mod list;

pub use clock::{FRAME, PointerScript, TestClock};
pub use list::{HostCall, SimRow, SimulatedList, Surface, SurfaceKind};
