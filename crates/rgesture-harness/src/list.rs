#![forbid(unsafe_code)]

//! A deterministic recycling list.
//!
//! [`SimulatedList`] lays out fixed-extent rows along one axis, binds only
//! the rows that intersect the viewport, and recycles the rest into a pool
//! exactly like a real virtualized list: scrolling or removing an item can
//! hand a [`RowId`] that used to show index 7 over to index 12.
//!
//! Every host call a controller makes that matters for ordering assertions is
//! appended to a [`HostCall`] log.
//!
//! # Invariants
//!
//! 1. Every index in the laid-out range is bound to exactly one row.
//! 2. Rebinding a row keeps its visibility and transform, the way a real
//!    recycler hands back a view as the last gesture left it. Only the
//!    press-cancel counter starts over.
//! 3. Scroll offset stays within `[0, content_extent - viewport_extent]`.

use std::collections::BTreeMap;

use rgesture_core::trace;
use rgesture_core::{Axis, ListHost, OverlayLayer, Point, Rect, RowId, RowTransform, SurfaceId};

/// A host call recorded for ordering assertions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCall {
    ItemChanged(usize),
    ItemRemoved(usize),
    ScrollBy(Point),
    CancelPress(RowId),
    SnapshotCreated(SurfaceId),
    BackdropCreated(SurfaceId),
    SurfaceRemoved(SurfaceId),
}

/// State of one live or pooled row.
#[derive(Debug, Clone, PartialEq)]
pub struct SimRow {
    pub id: RowId,
    /// Bound adapter index, `None` while pooled.
    pub index: Option<usize>,
    pub visible: bool,
    pub transform: RowTransform,
    /// Synthetic cancels received since the row was last bound.
    pub press_cancels: u32,
}

/// What a surface is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Snapshot { source: RowId },
    Backdrop,
}

/// A floating surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub kind: SurfaceKind,
    pub bounds: Rect,
    pub alpha: f32,
}

/// Simulated virtualized list implementing the host traits.
#[derive(Debug, Clone)]
pub struct SimulatedList {
    axis: Axis,
    viewport: Rect,
    row_extent: f32,
    item_count: usize,
    scroll: f32,
    rows: Vec<SimRow>,
    next_row: u64,
    surfaces: BTreeMap<SurfaceId, Surface>,
    next_surface: u64,
    calls: Vec<HostCall>,
    frame_requests: usize,
}

impl SimulatedList {
    /// Vertical list of `item_count` rows, each `row_extent` tall, in a
    /// viewport of the given size.
    #[must_use]
    pub fn vertical(item_count: usize, row_extent: f32, width: f32, height: f32) -> Self {
        Self::new(Axis::Vertical, item_count, row_extent, Rect::new(0.0, 0.0, width, height))
    }

    /// Horizontal list of `item_count` columns, each `row_extent` wide.
    #[must_use]
    pub fn horizontal(item_count: usize, row_extent: f32, width: f32, height: f32) -> Self {
        Self::new(Axis::Horizontal, item_count, row_extent, Rect::new(0.0, 0.0, width, height))
    }

    /// Fully specified list.
    #[must_use]
    pub fn new(axis: Axis, item_count: usize, row_extent: f32, viewport: Rect) -> Self {
        let mut list = Self {
            axis,
            viewport,
            row_extent: row_extent.max(1.0),
            item_count,
            scroll: 0.0,
            rows: Vec::new(),
            next_row: 0,
            surfaces: BTreeMap::new(),
            next_surface: 0,
            calls: Vec::new(),
            frame_requests: 0,
        };
        list.relayout();
        list
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn row_extent(&self) -> f32 {
        self.row_extent
    }

    /// Current main-axis scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll
    }

    /// Largest scroll offset the content allows.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        let content = self.item_count as f32 * self.row_extent;
        (content - self.axis.extent(self.viewport)).max(0.0)
    }

    /// Jump to a scroll offset without logging a call.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll = offset.clamp(0.0, self.max_scroll());
        self.relayout();
    }

    /// Center of the row showing `index`, in list coordinates, whether or not
    /// the row is laid out.
    #[must_use]
    pub fn center_of(&self, index: usize) -> Point {
        let r = self.bounds_for_index(index);
        Point::new(r.x + r.width / 2.0, r.y + r.height / 2.0)
    }

    /// Laid-out bounds for `index` at the current scroll offset.
    #[must_use]
    pub fn bounds_for_index(&self, index: usize) -> Rect {
        let main = self.axis.start(self.viewport) + index as f32 * self.row_extent - self.scroll;
        let cross = self.axis.cross().start(self.viewport);
        let cross_extent = self.axis.cross().extent(self.viewport);
        let origin = self.axis.point(main, cross);
        let size = self.axis.point(self.row_extent, cross_extent);
        Rect::new(origin.x, origin.y, size.x, size.y)
    }

    /// Every row, live and pooled.
    #[must_use]
    pub fn rows(&self) -> &[SimRow] {
        &self.rows
    }

    /// The row record for `id`.
    #[must_use]
    pub fn row(&self, id: RowId) -> Option<&SimRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Bound rows that are currently hidden.
    #[must_use]
    pub fn hidden_indices(&self) -> Vec<usize> {
        let mut hidden: Vec<usize> = self
            .rows
            .iter()
            .filter(|r| !r.visible)
            .filter_map(|r| r.index)
            .collect();
        hidden.sort_unstable();
        hidden
    }

    /// Live surfaces.
    pub fn surfaces(&self) -> impl Iterator<Item = (SurfaceId, &Surface)> {
        self.surfaces.iter().map(|(id, s)| (*id, s))
    }

    #[must_use]
    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(&id)
    }

    #[must_use]
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Recorded host calls, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Drain the call log.
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of `request_frame` calls so far.
    #[must_use]
    pub fn frame_requests(&self) -> usize {
        self.frame_requests
    }

    /// Check that every laid-out index has exactly one visible row, apart
    /// from the indices listed in `hidden_ok`.
    pub fn check_visibility(&self, hidden_ok: &[usize]) -> Result<(), String> {
        let (first, end) = self.laid_out_range();
        for index in first..end {
            let bound: Vec<&SimRow> = self.rows.iter().filter(|r| r.index == Some(index)).collect();
            if bound.len() != 1 {
                return Err(format!("index {index} bound to {} rows", bound.len()));
            }
            if !bound[0].visible && !hidden_ok.contains(&index) {
                return Err(format!("index {index} is hidden"));
            }
        }
        Ok(())
    }

    /// Half-open range of indices that intersect the viewport.
    #[must_use]
    pub fn laid_out_range(&self) -> (usize, usize) {
        if self.item_count == 0 {
            return (0, 0);
        }
        let extent = self.axis.extent(self.viewport);
        let first = (self.scroll / self.row_extent).floor() as usize;
        let end = ((self.scroll + extent) / self.row_extent).ceil() as usize;
        (first.min(self.item_count), end.min(self.item_count))
    }

    fn relayout(&mut self) {
        self.scroll = self.scroll.clamp(0.0, self.max_scroll());
        let (first, end) = self.laid_out_range();

        for row in &mut self.rows {
            if let Some(index) = row.index
                && (index < first || index >= end)
            {
                trace!(row = row.id.0, index, "harness.recycle");
                row.index = None;
            }
        }

        for index in first..end {
            if self.rows.iter().any(|r| r.index == Some(index)) {
                continue;
            }
            let slot = match self.rows.iter().position(|r| r.index.is_none()) {
                Some(slot) => slot,
                None => {
                    self.rows.push(SimRow {
                        id: RowId(self.next_row),
                        index: None,
                        visible: true,
                        transform: RowTransform::IDENTITY,
                        press_cancels: 0,
                    });
                    self.next_row += 1;
                    self.rows.len() - 1
                }
            };
            let row = &mut self.rows[slot];
            row.index = Some(index);
            row.press_cancels = 0;
        }
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut SimRow> {
        self.rows.iter_mut().find(|r| r.id == id)
    }
}

impl ListHost for SimulatedList {
    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn item_count(&self) -> usize {
        self.item_count
    }

    fn row_at(&self, point: Point) -> Option<RowId> {
        if !self.viewport.contains(point) {
            return None;
        }
        let main = self.axis.main(point) - self.axis.start(self.viewport) + self.scroll;
        if main < 0.0 {
            return None;
        }
        self.row_for_index((main / self.row_extent).floor() as usize)
    }

    fn row_for_index(&self, index: usize) -> Option<RowId> {
        self.rows.iter().find(|r| r.index == Some(index)).map(|r| r.id)
    }

    fn index_of(&self, row: RowId) -> Option<usize> {
        self.row(row).and_then(|r| r.index)
    }

    fn row_bounds(&self, row: RowId) -> Option<Rect> {
        self.index_of(row).map(|index| self.bounds_for_index(index))
    }

    fn set_row_visible(&mut self, row: RowId, visible: bool) {
        if let Some(r) = self.row_mut(row) {
            r.visible = visible;
        }
    }

    fn set_row_transform(&mut self, row: RowId, transform: RowTransform) {
        if let Some(r) = self.row_mut(row) {
            r.transform = transform;
        }
    }

    fn row_transform(&self, row: RowId) -> RowTransform {
        self.row(row).map_or(RowTransform::IDENTITY, |r| r.transform)
    }

    fn cancel_row_press(&mut self, row: RowId) {
        if let Some(r) = self.row_mut(row) {
            r.press_cancels += 1;
        }
        self.calls.push(HostCall::CancelPress(row));
    }

    fn scroll_by(&mut self, delta: Point) {
        self.calls.push(HostCall::ScrollBy(delta));
        self.scroll += self.axis.main(delta);
        self.relayout();
    }

    fn notify_item_changed(&mut self, index: usize) {
        self.calls.push(HostCall::ItemChanged(index));
    }

    fn notify_item_removed(&mut self, index: usize) {
        self.calls.push(HostCall::ItemRemoved(index));
        if index >= self.item_count {
            return;
        }
        self.item_count -= 1;
        for row in &mut self.rows {
            match row.index {
                Some(i) if i == index => row.index = None,
                Some(i) if i > index => row.index = Some(i - 1),
                _ => {}
            }
        }
        self.relayout();
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }
}

impl OverlayLayer for SimulatedList {
    fn create_snapshot(&mut self, row: RowId, bounds: Rect, alpha: f32) -> SurfaceId {
        let id = SurfaceId(self.next_surface);
        self.next_surface += 1;
        self.surfaces.insert(
            id,
            Surface {
                kind: SurfaceKind::Snapshot { source: row },
                bounds,
                alpha,
            },
        );
        self.calls.push(HostCall::SnapshotCreated(id));
        id
    }

    fn create_backdrop(&mut self, bounds: Rect) -> SurfaceId {
        let id = SurfaceId(self.next_surface);
        self.next_surface += 1;
        self.surfaces.insert(
            id,
            Surface {
                kind: SurfaceKind::Backdrop,
                bounds,
                alpha: 1.0,
            },
        );
        self.calls.push(HostCall::BackdropCreated(id));
        id
    }

    fn move_surface(&mut self, surface: SurfaceId, origin: Point) {
        if let Some(s) = self.surfaces.get_mut(&surface) {
            s.bounds = s.bounds.with_origin(origin);
        }
    }

    fn remove_surface(&mut self, surface: SurfaceId) {
        if self.surfaces.remove(&surface).is_some() {
            self.calls.push(HostCall::SurfaceRemoved(surface));
        }
    }
}
