#![forbid(unsafe_code)]

//! Swipe-to-dismiss.
//!
//! Rows slide out along the configured axis and fade as they go. A release
//! past half the row's extent, or a fast enough fling, removes the item.

mod controller;
mod direction;
mod policy;

pub use controller::{SwipeDismissBuilder, SwipeDismissController, SwipePhase};
pub use direction::{DismissDirection, FlingLimits, Release, Side, decide};
pub use policy::{DismissDirectionPolicy, Overrides, Uniform};
