#![forbid(unsafe_code)]

//! Interface between gesture controllers and the list that hosts them.
//!
//! The host owns the virtualized list: it knows which rows are laid out,
//! recycles them while scrolling, and draws floating surfaces above (or
//! below) the list. Controllers talk to it only through [`ListHost`] and
//! [`OverlayLayer`], passed by `&mut` into every event and frame callback.
//!
//! # Rows and recycling
//!
//! A [`RowId`] names a live row, not an item. After a scroll or a removal the
//! same id may display a different index, or none at all. Controllers
//! therefore re-resolve rows by index on every frame that needs them and
//! treat a failed lookup as "skip this tick".
//!
//! # Bounds
//!
//! [`ListHost::row_bounds`] reports the laid-out rectangle of a row in list
//! coordinates, ignoring any [`RowTransform`] a controller applied. Swap and
//! boundary math is done against layout, so an in-flight slide animation
//! never feeds back into the next decision.

use crate::geometry::{Point, Rect};

/// Handle to a live (possibly recycled) row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

/// Handle to a floating surface created through [`OverlayLayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

/// Transient visual transform a controller applies to a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowTransform {
    /// Offset from the row's laid-out position.
    pub translation: Point,
    /// Opacity in `[0.0, 1.0]`.
    pub alpha: f32,
}

impl RowTransform {
    /// No offset, fully opaque.
    pub const IDENTITY: Self = Self {
        translation: Point::ZERO,
        alpha: 1.0,
    };

    #[must_use]
    pub const fn new(translation: Point, alpha: f32) -> Self {
        Self { translation, alpha }
    }

    /// Pure translation, fully opaque.
    #[must_use]
    pub const fn translated(translation: Point) -> Self {
        Self::new(translation, 1.0)
    }

    /// Component-wise interpolation. `t >= 1.0` yields `to` exactly.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        if t >= 1.0 {
            return to;
        }
        Self {
            translation: self.translation + (to.translation - self.translation) * t,
            alpha: self.alpha + (to.alpha - self.alpha) * t,
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for RowTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The virtualized list widget, seen from a gesture controller.
pub trait ListHost {
    /// Visible area of the list, in list coordinates.
    fn viewport(&self) -> Rect;

    /// Number of items in the adapter.
    fn item_count(&self) -> usize;

    /// Row under `point`, if any.
    fn row_at(&self, point: Point) -> Option<RowId>;

    /// Row currently displaying `index`, if it is laid out.
    fn row_for_index(&self, index: usize) -> Option<RowId>;

    /// Index currently displayed by `row`.
    fn index_of(&self, row: RowId) -> Option<usize>;

    /// Laid-out bounds of `row` (transform not applied).
    fn row_bounds(&self, row: RowId) -> Option<Rect>;

    /// Show or hide a row without removing it from layout.
    fn set_row_visible(&mut self, row: RowId, visible: bool);

    /// Apply a transient transform to a row.
    fn set_row_transform(&mut self, row: RowId, transform: RowTransform);

    /// Current transform of a row.
    fn row_transform(&self, row: RowId) -> RowTransform;

    /// Deliver a synthetic cancel to the row's own touch handling so it drops
    /// pressed/ripple state.
    fn cancel_row_press(&mut self, row: RowId);

    /// Scroll the content by `delta`. Rows may be recycled before this returns.
    fn scroll_by(&mut self, delta: Point);

    /// The adapter content at `index` changed; rebind its row.
    fn notify_item_changed(&mut self, index: usize);

    /// The item at `index` was removed from the adapter.
    fn notify_item_removed(&mut self, index: usize);

    /// Ask for another frame callback. Idempotent within a frame.
    fn request_frame(&mut self);
}

/// Floating surfaces drawn outside the list's own layout.
pub trait OverlayLayer {
    /// Snapshot `row` into a surface above the list at `bounds`.
    fn create_snapshot(&mut self, row: RowId, bounds: Rect, alpha: f32) -> SurfaceId;

    /// Solid filler below the list at `bounds`.
    fn create_backdrop(&mut self, bounds: Rect) -> SurfaceId;

    /// Move a surface's top-left corner to `origin`.
    fn move_surface(&mut self, surface: SurfaceId, origin: Point);

    /// Destroy a surface. Unknown ids are ignored.
    fn remove_surface(&mut self, surface: SurfaceId);
}

/// Everything a controller needs from its host.
pub trait GestureHost: ListHost + OverlayLayer {}

impl<T: ListHost + OverlayLayer + ?Sized> GestureHost for T {}
