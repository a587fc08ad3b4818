#![forbid(unsafe_code)]

//! Allowed dismiss directions and the release decision.
//!
//! # Invariants
//!
//! 1. A swipe is recognized only when main-axis travel exceeds the slop and
//!    cross-axis travel stays under half of it.
//! 2. Dismiss triggers iff `|d| > extent/2`, or the fling is in
//!    `[min, max]`, dominates the cross axis, and `sign(v) == sign(d)`.
//! 3. Displacement is checked first; its sign wins over velocity's.

use std::fmt;
use std::str::FromStr;

use rgesture_core::{Axis, Point, UnknownToken};

/// Directions in which a row may be swiped away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DismissDirection {
    /// Swiping is disabled.
    None,
    Left,
    Right,
    /// Left or right.
    #[default]
    Horizontal,
    Top,
    Bottom,
    /// Up or down.
    Vertical,
}

/// Which end of the axis a dismissed row leaves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left or top.
    Start,
    /// Right or bottom.
    End,
}

impl Side {
    /// `-1.0` for [`Side::Start`], `1.0` for [`Side::End`].
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Start => -1.0,
            Self::End => 1.0,
        }
    }

    fn of(value: f32) -> Option<Self> {
        if value > 0.0 {
            Some(Self::End)
        } else if value < 0.0 {
            Some(Self::Start)
        } else {
            None
        }
    }
}

impl DismissDirection {
    /// Axis the row moves along, or `None` when swiping is disabled.
    #[must_use]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::None => None,
            Self::Left | Self::Right | Self::Horizontal => Some(Axis::Horizontal),
            Self::Top | Self::Bottom | Self::Vertical => Some(Axis::Vertical),
        }
    }

    /// The only side allowed by a single-sided direction.
    #[must_use]
    pub const fn single_side(self) -> Option<Side> {
        match self {
            Self::Left | Self::Top => Some(Side::Start),
            Self::Right | Self::Bottom => Some(Side::End),
            _ => None,
        }
    }

    /// Whether main-axis displacement `main` points somewhere allowed.
    /// Zero displacement is always allowed.
    #[must_use]
    pub fn allows(self, main: f32) -> bool {
        match (self, self.single_side()) {
            (Self::None, _) => false,
            (_, None) => true,
            (_, Some(side)) => Side::of(main).is_none_or(|s| s == side),
        }
    }

    /// Whether `delta` from the down position counts as a deliberate swipe.
    #[must_use]
    pub fn is_swiping(self, delta: Point, slop: f32) -> bool {
        let Some(axis) = self.axis() else {
            return false;
        };
        let main = axis.main(delta).abs();
        main > slop && axis.cross_of(delta).abs() < main / 2.0
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Right => "right",
            Self::Horizontal => "horizontal",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for DismissDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DismissDirection {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "horizontal" => Ok(Self::Horizontal),
            "top" | "up" => Ok(Self::Top),
            "bottom" | "down" => Ok(Self::Bottom),
            "vertical" => Ok(Self::Vertical),
            _ => Err(UnknownToken::new("dismiss direction", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// Release decision
// ---------------------------------------------------------------------------

/// Fling velocity bounds in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingLimits {
    pub min: f32,
    pub max: f32,
}

/// Motion at release, projected onto the dismiss axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Main-axis displacement from the down position.
    pub displacement: f32,
    /// Row extent along the main axis.
    pub extent: f32,
    /// Main-axis velocity.
    pub velocity: f32,
    /// Cross-axis velocity.
    pub cross_velocity: f32,
}

impl Release {
    /// Project raw displacement and velocity onto `axis`.
    #[must_use]
    pub fn along(axis: Axis, displacement: Point, velocity: Point, extent: f32) -> Self {
        Self {
            displacement: axis.main(displacement),
            extent,
            velocity: axis.main(velocity),
            cross_velocity: axis.cross_of(velocity),
        }
    }
}

/// Decide whether a released swipe dismisses, and through which side.
#[must_use]
pub fn decide(release: Release, limits: FlingLimits) -> Option<Side> {
    if release.displacement.abs() > release.extent / 2.0 {
        return Side::of(release.displacement);
    }
    let speed = release.velocity.abs();
    if limits.min <= speed && speed <= limits.max && release.cross_velocity.abs() < speed {
        let side = Side::of(release.velocity)?;
        if Side::of(release.displacement) == Some(side) {
            return Some(side);
        }
    }
    None
}
