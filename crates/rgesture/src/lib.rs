#![forbid(unsafe_code)]

//! Touch gestures for scrolling lists: long-press drag-to-reorder and
//! swipe-to-dismiss.
//!
//! # Role in rgesture
//! This crate holds the two gesture controllers and the seams around them:
//! configuration, item-store mutation traits, direction and boundary
//! policies, and lifecycle listeners. Geometry, pointer events, animation,
//! and the host traits live in `rgesture-core`.
//!
//! # Driving a controller
//!
//! The host owns the list and its overlay layer (anything implementing
//! [`GestureHost`](rgesture_core::GestureHost)). It forwards each pointer
//! event to [`GestureController::handle_event`] before handling it itself,
//! and calls [`GestureController::on_frame`] once per display frame while
//! the controller asks for frames. A drag's long press fires from the first
//! frame after [`GestureController::next_deadline`]; hosts with their own
//! long-press detector may call [`DragReorderController::on_long_press`]
//! instead.
//!
//! ```
//! use rgesture::{ItemList, SwipeDismissController};
//! use rgesture::swipe::DismissDirection;
//!
//! let swipe = SwipeDismissController::builder()
//!     .direction(DismissDirection::Right)
//!     .store(ItemList::from(vec!["a", "b", "c"]))
//!     .build()
//!     .expect("valid config");
//! assert!(swipe.is_idle());
//! ```
//!
//! # Feature flags
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `tracing` | Emit `tracing` events for state transitions. |
//! | `tracing-json` | `rgesture_core::logging::init_json` for hosts. |
//! | `serde` | `Serialize`/`Deserialize` for configs and direction tokens. |

pub mod config;
pub mod drag;
pub mod error;
pub mod gesture;
pub mod listener;
pub mod mutation;
pub mod swipe;

pub use config::{DragConfig, SwipeConfig};
pub use drag::{DragPhase, DragReorderBuilder, DragReorderController};
pub use error::{ConfigError, Result};
pub use gesture::GestureController;
pub use listener::{GestureKind, GestureListener, GestureOutcome, NoopListener, RecordingListener};
pub use mutation::{ItemList, RemoveItems, SwapItems};
pub use swipe::{SwipeDismissBuilder, SwipeDismissController, SwipePhase};
