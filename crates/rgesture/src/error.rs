#![forbid(unsafe_code)]

//! Setup-time errors.
//!
//! Gesture-time anomalies (a row recycled away mid-drag, a lookup miss during
//! a scroll tick) never surface as errors: controllers degrade to a no-op for
//! that tick, or to a cancel/snap-back. Only building a controller can fail.

use std::fmt;

use rgesture_core::UnknownToken;

// ── Configuration Errors ────────────────────────────────────────────────

/// A controller could not be built from the supplied configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// No item store able to apply the gesture's mutation was supplied.
    MissingMutator { gesture: &'static str },
    /// An axis token did not parse.
    UnknownAxis(String),
    /// A dismiss-direction token did not parse.
    UnknownDirection(String),
    /// A numeric setting is out of range.
    InvalidThreshold { name: &'static str, value: f32 },
}

/// Result type for controller builders.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMutator { gesture } => {
                write!(f, "{gesture} controller needs an item store to mutate")
            }
            Self::UnknownAxis(token) => write!(f, "unknown axis {token:?}"),
            Self::UnknownDirection(token) => write!(f, "unknown dismiss direction {token:?}"),
            Self::InvalidThreshold { name, value } => {
                write!(f, "invalid value {value} for {name}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<UnknownToken> for ConfigError {
    fn from(err: UnknownToken) -> Self {
        match err.expected {
            "axis" => Self::UnknownAxis(err.token),
            _ => Self::UnknownDirection(err.token),
        }
    }
}

/// Reject negative or non-finite values.
pub(crate) fn check_non_negative(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}
