#![forbid(unsafe_code)]

//! Raw pointer input as forwarded by the host list.
//!
//! A gesture sees one pointer stream at a time:
//! `Down` → zero or more `Move` → `Up` or `Cancel`. Events carrying another
//! pointer id while a stream is tracked are ignored by the controllers.

use web_time::Instant;

use crate::geometry::Point;

/// Identifier of a pointer (finger, pen, mouse button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u32);

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// The platform took the stream away (e.g. a parent started scrolling).
    Cancel,
}

/// A single pointer sample in list coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pointer: PointerId,
    pub position: Point,
    pub time: Instant,
}

impl PointerEvent {
    /// Create an event for the primary pointer.
    #[must_use]
    pub fn new(kind: PointerKind, position: Point, time: Instant) -> Self {
        Self {
            kind,
            pointer: PointerId::default(),
            position,
            time,
        }
    }

    #[must_use]
    pub fn down(position: Point, time: Instant) -> Self {
        Self::new(PointerKind::Down, position, time)
    }

    #[must_use]
    pub fn moved(position: Point, time: Instant) -> Self {
        Self::new(PointerKind::Move, position, time)
    }

    #[must_use]
    pub fn up(position: Point, time: Instant) -> Self {
        Self::new(PointerKind::Up, position, time)
    }

    #[must_use]
    pub fn cancel(position: Point, time: Instant) -> Self {
        Self::new(PointerKind::Cancel, position, time)
    }

    /// Same event attributed to another pointer.
    #[must_use]
    pub fn with_pointer(mut self, pointer: PointerId) -> Self {
        self.pointer = pointer;
        self
    }
}
