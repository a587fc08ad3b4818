#![forbid(unsafe_code)]

//! Geometric primitives in host pixel space.
//!
//! Coordinates are `f32` with the origin at the top-left of the host surface.
//! Gesture math is written once against [`Axis`], which projects points and
//! rectangles onto the main (scrolling) axis or the cross axis.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;

/// A point or displacement in host pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length when the point is read as a displacement.
    #[inline]
    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
///
/// `width` and `height` are expected to be non-negative; the right and bottom
/// edges are exclusive for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle with the given origin and the size of `self`.
    #[inline]
    #[must_use]
    pub const fn with_origin(self, origin: Point) -> Self {
        Self::new(origin.x, origin.y, self.width, self.height)
    }

    /// Top-left corner.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if the rectangle has zero area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Same rectangle moved by `delta`.
    #[inline]
    #[must_use]
    pub fn translate(self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// Orientation of a list, and therefore of drag and dismiss motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    /// The other axis.
    #[inline]
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Component of `p` along this axis.
    #[inline]
    #[must_use]
    pub const fn main(self, p: Point) -> f32 {
        match self {
            Self::Horizontal => p.x,
            Self::Vertical => p.y,
        }
    }

    /// Component of `p` across this axis.
    #[inline]
    #[must_use]
    pub const fn cross_of(self, p: Point) -> f32 {
        self.cross().main(p)
    }

    /// Build a point from main and cross components.
    #[inline]
    #[must_use]
    pub const fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// Keep only the component of `p` along this axis.
    #[inline]
    #[must_use]
    pub const fn project(self, p: Point) -> Point {
        self.point(self.main(p), 0.0)
    }

    /// Leading edge of `r` along this axis.
    #[inline]
    #[must_use]
    pub const fn start(self, r: Rect) -> f32 {
        match self {
            Self::Horizontal => r.x,
            Self::Vertical => r.y,
        }
    }

    /// Trailing edge of `r` along this axis.
    #[inline]
    #[must_use]
    pub fn end(self, r: Rect) -> f32 {
        self.start(r) + self.extent(r)
    }

    /// Size of `r` along this axis.
    #[inline]
    #[must_use]
    pub const fn extent(self, r: Rect) -> f32 {
        match self {
            Self::Horizontal => r.width,
            Self::Vertical => r.height,
        }
    }

    /// Configuration token for this axis.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" | "x" => Ok(Self::Horizontal),
            "vertical" | "v" | "y" => Ok(Self::Vertical),
            _ => Err(UnknownToken::new("axis", s)),
        }
    }
}

/// A configuration token that does not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken {
    /// What kind of token was expected (e.g. `"axis"`).
    pub expected: &'static str,
    /// The rejected input.
    pub token: String,
}

impl UnknownToken {
    #[must_use]
    pub fn new(expected: &'static str, token: impl Into<String>) -> Self {
        Self {
            expected,
            token: token.into(),
        }
    }
}

impl fmt::Display for UnknownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} token {:?}", self.expected, self.token)
    }
}

impl std::error::Error for UnknownToken {}
