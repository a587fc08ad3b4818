#![forbid(unsafe_code)]

//! Which rows may be picked up, and which may be hovered.
//!
//! A row that is not hoverable is a *boundary*: the dragged item can neither
//! land on it nor cross it. At pick-up the controller scans every position
//! once and keeps the nearest boundary on each side as [`BoundaryMarkers`].
//! Markers are indices, resolved to live rows only when needed, because any
//! row handle goes stale as soon as the list scrolls.
//!
//! # Invariants
//!
//! 1. `previous < tracked < next` for every defined marker, for the whole
//!    drag.
//! 2. [`BoundaryMarkers::permits`] is false for every boundary and for every
//!    index beyond one.

use std::collections::BTreeSet;

use rgesture_core::{ListHost, Rect};

/// Per-position drag predicates.
pub trait BoundaryPolicy {
    /// Whether the row at `index` can be picked up.
    fn is_draggable(&self, index: usize) -> bool;

    /// Whether the dragged row may pass over the row at `index`.
    fn is_hoverable(&self, index: usize) -> bool;
}

/// Every row can be dragged anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl BoundaryPolicy for AllowAll {
    fn is_draggable(&self, _index: usize) -> bool {
        true
    }

    fn is_hoverable(&self, _index: usize) -> bool {
        true
    }
}

/// Fixed divider rows: neither draggable nor hoverable.
///
/// ```
/// use rgesture::drag::{BoundaryPolicy, Dividers};
///
/// let dividers = Dividers::new([2, 28]);
/// assert!(!dividers.is_draggable(2));
/// assert!(dividers.is_hoverable(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dividers {
    indices: BTreeSet<usize>,
}

impl Dividers {
    #[must_use]
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

impl BoundaryPolicy for Dividers {
    fn is_draggable(&self, index: usize) -> bool {
        !self.contains(index)
    }

    fn is_hoverable(&self, index: usize) -> bool {
        !self.contains(index)
    }
}

// ---------------------------------------------------------------------------
// Markers
// ---------------------------------------------------------------------------

/// Nearest boundaries on either side of the picked-up index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryMarkers {
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

/// Live layout bounds of the markers, valid for the current tick only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedMarkers {
    pub previous: Option<Rect>,
    pub next: Option<Rect>,
}

impl BoundaryMarkers {
    /// Scan all `count` positions for the nearest non-hoverable neighbors of
    /// `index`.
    #[must_use]
    pub fn scan<P: BoundaryPolicy + ?Sized>(policy: &P, count: usize, index: usize) -> Self {
        let mut markers = Self::default();
        for i in 0..count {
            if i == index || policy.is_hoverable(i) {
                continue;
            }
            if i < index {
                markers.previous = Some(i);
            } else if markers.next.is_none() {
                markers.next = Some(i);
            }
        }
        markers
    }

    /// Whether the dragged item may occupy `index`.
    #[must_use]
    pub fn permits(&self, index: usize) -> bool {
        self.previous.is_none_or(|p| index > p) && self.next.is_none_or(|n| index < n)
    }

    /// Look up the rows currently displaying the markers.
    pub fn resolve<H: ListHost + ?Sized>(&self, host: &H) -> ResolvedMarkers {
        let bounds = |index: usize| host.row_for_index(index).and_then(|row| host.row_bounds(row));
        ResolvedMarkers {
            previous: self.previous.and_then(bounds),
            next: self.next.and_then(bounds),
        }
    }
}
