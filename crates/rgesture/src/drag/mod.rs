#![forbid(unsafe_code)]

//! Long-press drag-to-reorder.
//!
//! A long press on a draggable row lifts a snapshot of it into an overlay
//! that follows the pointer along the list axis. Crossing a neighbor's far
//! edge swaps the two items; boundary rows (see [`BoundaryPolicy`]) are
//! never crossed; reaching a viewport edge scrolls the list. Releasing
//! settles the overlay into the row's final slot.

mod auto_scroll;
mod behavior;
mod controller;
mod policy;

pub use auto_scroll::{AutoScrollLoop, ScrollTick};
pub use behavior::{DragBehavior, HorizontalBehavior, ScrollDirection, VerticalBehavior, for_axis};
pub use controller::{DragPhase, DragReorderBuilder, DragReorderController};
pub use policy::{AllowAll, BoundaryMarkers, BoundaryPolicy, Dividers, ResolvedMarkers};
