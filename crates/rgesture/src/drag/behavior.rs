#![forbid(unsafe_code)]

//! Axis-specific drag geometry.
//!
//! Every decision the drag controller makes about where the overlay is
//! relative to other rows goes through a [`DragBehavior`]. The horizontal
//! and vertical variants share one implementation written against [`Axis`];
//! a custom behavior can override any single rule.
//!
//! All rectangles are layout bounds in list coordinates. The overlay is kept
//! inside the viewport, so a boundary that is not laid out is never under
//! it. Edge comparisons are strict, so an overlay resting exactly on a
//! neighbor's edge does not swap, and one resting exactly on a boundary's
//! edge is not blocked.

use rgesture_core::{Axis, Point, Rect};

/// Direction of an auto-scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Toward index 0.
    ToStart,
    /// Toward the last index.
    ToEnd,
}

impl ScrollDirection {
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::ToStart => -1.0,
            Self::ToEnd => 1.0,
        }
    }
}

/// Drag rules for one list orientation.
pub trait DragBehavior {
    /// Main axis of the list.
    fn axis(&self) -> Axis;

    /// Where the overlay sits for a pointer displacement `delta` from the
    /// press. Only the main-axis component moves it.
    fn overlay_origin(&self, start: Point, delta: Point) -> Point {
        start + self.axis().project(delta)
    }

    /// Shift `overlay` along the axis so it lies inside `viewport`. An
    /// overlay longer than the viewport is aligned to its start.
    fn confine(&self, overlay: Rect, viewport: Rect) -> Rect {
        let axis = self.axis();
        let shift = if axis.start(overlay) < axis.start(viewport) {
            axis.start(viewport) - axis.start(overlay)
        } else if axis.end(overlay) > axis.end(viewport) {
            (axis.end(viewport) - axis.end(overlay)).max(axis.start(viewport) - axis.start(overlay))
        } else {
            0.0
        };
        overlay.translate(axis.point(shift, 0.0))
    }

    /// Overlay has passed the previous row's leading edge.
    fn should_swap_with_previous(&self, overlay: Rect, previous: Rect) -> bool {
        let axis = self.axis();
        axis.start(overlay) < axis.start(previous)
    }

    /// Overlay has passed the next row's trailing edge.
    fn should_swap_with_next(&self, overlay: Rect, next: Rect) -> bool {
        let axis = self.axis();
        axis.end(overlay) > axis.end(next)
    }

    /// Overlay at `overlay` would pass over the previous boundary row.
    fn will_hover_previous(&self, overlay: Rect, boundary: Rect) -> bool {
        self.should_swap_with_previous(overlay, boundary)
    }

    /// Overlay at `overlay` would pass over the next boundary row.
    fn will_hover_next(&self, overlay: Rect, boundary: Rect) -> bool {
        self.should_swap_with_next(overlay, boundary)
    }

    /// Auto-scroll direction while the overlay touches a viewport edge, or
    /// within `edge_zone` of it.
    fn scroll_direction(&self, overlay: Rect, viewport: Rect, edge_zone: f32) -> Option<ScrollDirection> {
        let axis = self.axis();
        if axis.start(overlay) <= axis.start(viewport) + edge_zone {
            Some(ScrollDirection::ToStart)
        } else if axis.end(overlay) >= axis.end(viewport) - edge_zone {
            Some(ScrollDirection::ToEnd)
        } else {
            None
        }
    }

    /// Content scroll for one auto-scroll tick.
    fn scroll_delta(&self, direction: ScrollDirection, step: f32) -> Point {
        self.axis().point(direction.sign() * step, 0.0)
    }

    /// Translation that makes a row laid out at `to` appear at `from`.
    fn slide_offset(&self, from: Rect, to: Rect) -> Point {
        let axis = self.axis();
        axis.point(axis.start(from) - axis.start(to), 0.0)
    }
}

/// Rules for lists that scroll left to right.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalBehavior;

impl DragBehavior for HorizontalBehavior {
    fn axis(&self) -> Axis {
        Axis::Horizontal
    }
}

/// Rules for lists that scroll top to bottom.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalBehavior;

impl DragBehavior for VerticalBehavior {
    fn axis(&self) -> Axis {
        Axis::Vertical
    }
}

/// Built-in behavior for `axis`.
#[must_use]
pub fn for_axis(axis: Axis) -> Box<dyn DragBehavior> {
    match axis {
        Axis::Horizontal => Box::new(HorizontalBehavior),
        Axis::Vertical => Box::new(VerticalBehavior),
    }
}
