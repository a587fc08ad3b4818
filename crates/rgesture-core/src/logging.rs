#![forbid(unsafe_code)]

//! Logging shim.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! event and span macros. Without it, no-op macros of the same names are
//! exported at the crate root so call sites compile unchanged:
//!
//! ```ignore
//! use rgesture_core::{debug, trace};
//!
//! debug!(index = 3, "drag.armed");
//! ```
//!
//! Gesture code only emits events; installing a subscriber is the host's
//! business. [`init_json`] is offered for hosts that want the JSON format.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a global JSON subscriber filtered by `RUST_LOG`.
///
/// Returns an error if a global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
}

#[cfg(not(feature = "tracing"))]
mod noop {
    #[macro_export]
    #[doc(hidden)]
    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! info {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! warn {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! error {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! trace_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! info_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! warn_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! error_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Stand-in returned by the span macros when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `tracing::Span::entered`.
    #[inline]
    #[must_use]
    pub fn entered(self) -> Self {
        self
    }
}
