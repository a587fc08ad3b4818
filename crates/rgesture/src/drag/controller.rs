#![forbid(unsafe_code)]

//! Long-press drag-to-reorder.
//!
//! # Protocol
//!
//! ```text
//! Idle ──long press──▶ Armed ──move > slop──▶ Tracking ──up/cancel──▶ Settling ──▶ Idle
//!                                              │    ▲
//!                                              └────┘ move / auto-scroll tick
//! ```
//!
//! 1. `Down` records the press and schedules the long-press task. Moving past
//!    the slop, lifting, or cancelling before it fires forgets the press.
//! 2. The long press picks up the row under the press point if the policy
//!    allows it: the row is snapshotted into a floating overlay and hidden,
//!    and the nearest boundaries on both sides are recorded.
//! 3. While tracking, the overlay follows the pointer along the main axis,
//!    confined to the viewport. A move that would carry it over a boundary
//!    is swallowed. Otherwise the overlay moves, auto-scroll is started or
//!    stopped, and, unless auto-scroll is running, one adjacent swap is
//!    considered. A boundary that stops auto-scroll keeps it stopped until
//!    the overlay leaves the edge.
//! 4. On release the overlay slides onto the row now displaying the tracked
//!    index. When it arrives the row is shown and the overlay removed.
//!
//! # Invariants
//!
//! 1. At most one overlay exists, and exactly one row is hidden while it does:
//!    the row currently displaying the tracked index.
//! 2. The tracked index stays strictly between the boundary markers.
//! 3. A swap is committed to the store before the host is notified, and at
//!    most one swap happens per move or tick.
//! 4. The destination row is made visible before the overlay is removed.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | No row under the press point | Long press is a no-op |
//! | Row not draggable | Long press is a no-op |
//! | Neighbor not laid out | No swap this move/tick |
//! | Sliding row recycled | Its transform is reset and the slide dropped |
//! | Store rejects a swap | Swap skipped, nothing notified |
//! | Destination row missing on release | Overlay removed at once |

use rgesture_core::animation::{Timed, Tween};
use rgesture_core::frame::FrameQueue;
use rgesture_core::{
    GestureHost, Instant, ListHost, Point, PointerEvent, PointerId, PointerKind, Rect, RowId,
    RowTransform, SurfaceId, debug, trace,
};

use super::auto_scroll::{AutoScrollLoop, ScrollTick, hovers};
use super::behavior::{DragBehavior, for_axis};
use super::policy::{AllowAll, BoundaryMarkers, BoundaryPolicy};
use crate::config::DragConfig;
use crate::error::{ConfigError, Result};
use crate::gesture::GestureController;
use crate::listener::{GestureKind, GestureListener, GestureOutcome, NoopListener};
use crate::mutation::SwapItems;

/// Where a drag gesture is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    /// Picked up; pointer has not moved past the slop yet.
    Armed,
    Tracking,
    /// Released; the overlay is sliding into place.
    Settling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragTask {
    LongPress,
    AutoScroll,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    pointer: PointerId,
    down: Point,
}

#[derive(Debug, Clone, Copy)]
struct Settle {
    from: Point,
    to: Point,
    anim: Timed<Tween>,
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    pointer: PointerId,
    down: Point,
    /// Index picked up.
    from: usize,
    /// Index the dragged item currently occupies.
    tracked: usize,
    /// Row currently hidden on behalf of `tracked`.
    hidden: Option<RowId>,
    overlay: SurfaceId,
    /// Overlay bounds at pick-up.
    origin: Rect,
    /// Overlay bounds now.
    bounds: Rect,
    markers: BoundaryMarkers,
    settle: Option<Settle>,
}

/// A displaced row sliding into its new slot.
#[derive(Debug, Clone, Copy)]
struct Slide {
    row: RowId,
    index: usize,
    offset: Point,
    anim: Timed<Tween>,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`DragReorderController`].
pub struct DragReorderBuilder<M> {
    config: DragConfig,
    behavior: Option<Box<dyn DragBehavior>>,
    policy: Box<dyn BoundaryPolicy>,
    listener: Box<dyn GestureListener>,
    store: Option<M>,
}

impl<M> Default for DragReorderBuilder<M> {
    fn default() -> Self {
        Self {
            config: DragConfig::default(),
            behavior: None,
            policy: Box::new(AllowAll),
            listener: Box::new(NoopListener),
            store: None,
        }
    }
}

impl<M: SwapItems> DragReorderBuilder<M> {
    #[must_use]
    pub fn config(mut self, config: DragConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the axis-derived behavior.
    #[must_use]
    pub fn behavior(mut self, behavior: impl DragBehavior + 'static) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: impl BoundaryPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    #[must_use]
    pub fn listener(mut self, listener: impl GestureListener + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    /// Item store the swaps are applied to. Required.
    #[must_use]
    pub fn store(mut self, store: M) -> Self {
        self.store = Some(store);
        self
    }

    /// Validate the configuration and build the controller.
    pub fn build(self) -> Result<DragReorderController<M>> {
        self.config.validate()?;
        let store = self
            .store
            .ok_or(ConfigError::MissingMutator { gesture: "drag" })?;
        Ok(DragReorderController {
            behavior: self.behavior.unwrap_or_else(|| for_axis(self.config.axis)),
            auto_scroll: AutoScrollLoop::new(self.config.scroll_step),
            config: self.config,
            policy: self.policy,
            listener: self.listener,
            store,
            enabled: true,
            phase: DragPhase::Idle,
            press: None,
            drag: None,
            slides: Vec::new(),
            tasks: FrameQueue::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Drag-to-reorder controller owning its item store `M`.
pub struct DragReorderController<M> {
    config: DragConfig,
    behavior: Box<dyn DragBehavior>,
    policy: Box<dyn BoundaryPolicy>,
    listener: Box<dyn GestureListener>,
    store: M,
    enabled: bool,
    phase: DragPhase,
    press: Option<Press>,
    drag: Option<DragState>,
    slides: Vec<Slide>,
    auto_scroll: AutoScrollLoop,
    tasks: FrameQueue<DragTask>,
}

impl<M> std::fmt::Debug for DragReorderController<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragReorderController")
            .field("config", &self.config)
            .field("enabled", &self.enabled)
            .field("phase", &self.phase)
            .field("drag", &self.drag)
            .field("auto_scroll", &self.auto_scroll)
            .finish_non_exhaustive()
    }
}

impl<M: SwapItems> DragReorderController<M> {
    #[must_use]
    pub fn builder() -> DragReorderBuilder<M> {
        DragReorderBuilder::default()
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Index the dragged item occupies, while a drag is in flight.
    #[must_use]
    pub fn tracked_index(&self) -> Option<usize> {
        self.drag.map(|d| d.tracked)
    }

    /// Boundaries recorded at pick-up.
    #[must_use]
    pub fn boundary_markers(&self) -> Option<BoundaryMarkers> {
        self.drag.map(|d| d.markers)
    }

    /// The floating copy, while a drag is in flight.
    #[must_use]
    pub fn overlay(&self) -> Option<SurfaceId> {
        self.drag.map(|d| d.overlay)
    }

    #[must_use]
    pub fn is_auto_scrolling(&self) -> bool {
        self.auto_scroll.is_running()
    }

    /// Allow or block new gestures. A pending long press is dropped; an
    /// in-flight drag runs to completion.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled && self.press.is_some() {
            self.forget_press();
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// No drag in flight, no press pending, nothing animating.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == DragPhase::Idle && self.press.is_none() && !self.needs_frame()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.next_deadline()
    }

    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &M {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut M {
        &mut self.store
    }

    /// Pick up the row under the pending press.
    ///
    /// Called by the long-press task; hosts with their own long-press
    /// detector may call it directly after forwarding the `Down`. Returns
    /// whether a drag started.
    pub fn on_long_press<H: GestureHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.tasks.cancel(DragTask::LongPress);
        if self.phase != DragPhase::Idle || !self.enabled {
            return false;
        }
        let Some(press) = self.press.take() else {
            return false;
        };
        let Some(row) = host.row_at(press.down) else {
            trace!("drag.long_press.no_row");
            return false;
        };
        let (Some(index), Some(bounds)) = (host.index_of(row), host.row_bounds(row)) else {
            trace!("drag.long_press.unbound_row");
            return false;
        };
        if !self.policy.is_draggable(index) {
            debug!(index, "drag.long_press.not_draggable");
            return false;
        }

        self.auto_scroll.stop();
        let markers = BoundaryMarkers::scan(&*self.policy, host.item_count(), index);
        let overlay = host.create_snapshot(row, bounds, self.config.overlay_alpha);
        host.set_row_visible(row, false);
        self.drag = Some(DragState {
            pointer: press.pointer,
            down: press.down,
            from: index,
            tracked: index,
            hidden: Some(row),
            overlay,
            origin: bounds,
            bounds,
            markers,
            settle: None,
        });
        self.phase = DragPhase::Armed;
        debug!(
            index,
            previous = ?markers.previous,
            next = ?markers.next,
            "drag.armed"
        );
        self.listener.on_gesture_started(GestureKind::Drag, index);
        true
    }

    fn on_pointer_down<H: GestureHost + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        if self.phase != DragPhase::Idle {
            return self.is_dragging();
        }
        if !self.enabled {
            return false;
        }
        self.press = Some(Press {
            pointer: event.pointer,
            down: event.position,
        });
        self.tasks
            .post_delayed(DragTask::LongPress, event.time, self.config.long_press);
        host.request_frame();
        false
    }

    fn on_pointer_move<H: GestureHost + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        match self.phase {
            DragPhase::Idle => {
                if let Some(press) = self.press
                    && press.pointer == event.pointer
                    && (event.position - press.down).length() > self.config.touch_slop
                {
                    trace!("drag.press.moved_away");
                    self.forget_press();
                }
                false
            }
            DragPhase::Armed => {
                let Some(drag) = self.drag else {
                    return false;
                };
                if drag.pointer != event.pointer {
                    return true;
                }
                if (event.position - drag.down).length() > self.config.touch_slop {
                    self.phase = DragPhase::Tracking;
                    debug!(index = drag.tracked, "drag.tracking");
                    self.track(event, host);
                }
                true
            }
            DragPhase::Tracking => {
                if self.drag.is_some_and(|d| d.pointer == event.pointer) {
                    self.track(event, host);
                }
                true
            }
            DragPhase::Settling => false,
        }
    }

    fn on_pointer_up<H: GestureHost + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        match self.phase {
            DragPhase::Idle => {
                if self.press.is_some_and(|p| p.pointer == event.pointer) {
                    self.forget_press();
                }
                false
            }
            DragPhase::Armed | DragPhase::Tracking => {
                if self.drag.is_some_and(|d| d.pointer == event.pointer) {
                    self.release(event.time, host);
                }
                true
            }
            DragPhase::Settling => false,
        }
    }

    fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Armed | DragPhase::Tracking)
    }

    fn forget_press(&mut self) {
        self.press = None;
        self.tasks.cancel(DragTask::LongPress);
    }

    fn track<H: GestureHost + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let origin = self
            .behavior
            .overlay_origin(drag.origin.origin(), event.position - drag.down);
        let prospective = self
            .behavior
            .confine(drag.bounds.with_origin(origin), host.viewport());
        let origin = prospective.origin();
        if hovers(&*self.behavior, prospective, &drag.markers.resolve(&*host)) {
            trace!(y = origin.y, x = origin.x, "drag.move.blocked");
            return;
        }
        drag.bounds = prospective;
        host.move_surface(drag.overlay, origin);

        self.update_auto_scroll(event.time, host);
        if !self.auto_scroll.is_running() {
            self.check_swap(event.time, host);
        }
    }

    fn update_auto_scroll<H: GestureHost + ?Sized>(&mut self, now: Instant, host: &mut H) {
        let Some(drag) = self.drag else {
            return;
        };
        let wanted = self
            .behavior
            .scroll_direction(drag.bounds, host.viewport(), self.config.edge_zone);
        match wanted {
            Some(direction) => {
                if self.auto_scroll.start(direction) {
                    debug!(?direction, "drag.autoscroll.start");
                    self.tasks.post(DragTask::AutoScroll, now);
                    host.request_frame();
                }
            }
            None => {
                if self.auto_scroll.stop() {
                    debug!("drag.autoscroll.stop");
                    self.tasks.cancel(DragTask::AutoScroll);
                }
            }
        }
    }

    fn auto_scroll_tick<H: GestureHost + ?Sized>(&mut self, now: Instant, host: &mut H) {
        let Some(drag) = self.drag else {
            self.auto_scroll.stop();
            return;
        };
        if self.phase != DragPhase::Tracking {
            self.auto_scroll.stop();
            return;
        }
        let tick = self
            .auto_scroll
            .tick(host, &*self.behavior, drag.bounds, &drag.markers);
        self.sync_hidden_row(host);
        match tick {
            ScrollTick::Scrolled => {
                self.check_swap(now, host);
                self.tasks.post(DragTask::AutoScroll, now);
                host.request_frame();
            }
            ScrollTick::Blocked => {
                debug!(index = drag.tracked, "drag.autoscroll.blocked");
                self.check_swap(now, host);
            }
            ScrollTick::Idle => {}
        }
    }

    /// Swap with one adjacent row if the overlay has passed its edge.
    fn check_swap<H: GestureHost + ?Sized>(&mut self, now: Instant, host: &mut H) {
        let Some(drag) = self.drag else {
            return;
        };
        let tracked = drag.tracked;
        let bounds_of = |host: &H, index: usize| host.row_for_index(index).and_then(|r| host.row_bounds(r));

        if let Some(previous) = tracked.checked_sub(1)
            && drag.markers.permits(previous)
            && let Some(rect) = bounds_of(&*host, previous)
            && self.behavior.should_swap_with_previous(drag.bounds, rect)
        {
            self.swap(tracked, previous, now, host);
            return;
        }

        let next = tracked + 1;
        if next < host.item_count()
            && drag.markers.permits(next)
            && let Some(rect) = bounds_of(&*host, next)
            && self.behavior.should_swap_with_next(drag.bounds, rect)
        {
            self.swap(tracked, next, now, host);
        }
    }

    fn swap<H: GestureHost + ?Sized>(&mut self, from: usize, to: usize, now: Instant, host: &mut H) {
        if !self.store.swap_items(from, to) {
            trace!(from, to, "drag.swap.rejected");
            return;
        }
        host.notify_item_changed(to);
        if let Some(drag) = self.drag.as_mut() {
            drag.tracked = to;
        }
        debug!(from, to, "drag.swap");

        // The row at `to` is about to be hidden; drop any slide it had.
        if let Some(pos) = self.slides.iter().position(|s| s.index == to) {
            let slide = self.slides.swap_remove(pos);
            host.set_row_transform(slide.row, RowTransform::IDENTITY);
        }

        // The row at `from` now shows the neighbor: start it at the
        // neighbor's old slot and slide it home.
        let from_row = host.row_for_index(from);
        let from_bounds = from_row.and_then(|r| host.row_bounds(r));
        let to_bounds = host.row_for_index(to).and_then(|r| host.row_bounds(r));
        if let (Some(row), Some(home), Some(old)) = (from_row, from_bounds, to_bounds) {
            let offset = self.behavior.slide_offset(old, home);
            self.slides.retain(|s| {
                let replaced = s.index == from || s.row == row;
                if replaced && s.row != row {
                    host.set_row_transform(s.row, RowTransform::IDENTITY);
                }
                !replaced
            });
            host.set_row_transform(row, RowTransform::translated(offset));
            self.slides.push(Slide {
                row,
                index: from,
                offset,
                anim: Timed::new(Tween::new(self.config.swap_duration), now),
            });
            host.request_frame();
        }

        self.sync_hidden_row(host);
    }

    /// Keep exactly the row displaying the tracked index hidden.
    fn sync_hidden_row<H: ListHost + ?Sized>(&mut self, host: &mut H) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let wanted = host.row_for_index(drag.tracked);
        if let Some(old) = drag.hidden
            && Some(old) != wanted
        {
            host.set_row_visible(old, true);
        }
        if let Some(row) = wanted {
            host.set_row_visible(row, false);
        }
        drag.hidden = wanted;
    }

    fn release<H: GestureHost + ?Sized>(&mut self, now: Instant, host: &mut H) {
        if self.auto_scroll.stop() {
            self.tasks.cancel(DragTask::AutoScroll);
        }
        self.sync_hidden_row(host);
        self.phase = DragPhase::Settling;

        let Some(drag) = self.drag.as_mut() else {
            self.phase = DragPhase::Idle;
            return;
        };
        let target = host
            .row_for_index(drag.tracked)
            .and_then(|r| host.row_bounds(r));
        let Some(target) = target else {
            debug!(index = drag.tracked, "drag.drop.no_destination");
            self.finish_drop(host);
            return;
        };
        drag.settle = Some(Settle {
            from: drag.bounds.origin(),
            to: target.origin(),
            anim: Timed::new(Tween::new(self.config.drop_duration), now),
        });
        debug!(index = drag.tracked, "drag.settling");
        host.request_frame();
    }

    fn advance_settle<H: GestureHost + ?Sized>(&mut self, now: Instant, host: &mut H) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let Some(settle) = drag.settle.as_mut() else {
            return;
        };
        if let Some(target) = host
            .row_for_index(drag.tracked)
            .and_then(|r| host.row_bounds(r))
        {
            settle.to = target.origin();
        }
        settle.anim.advance_to(now);
        let t = settle.anim.value();
        let position = settle.from + (settle.to - settle.from) * t;
        drag.bounds = drag.bounds.with_origin(position);
        host.move_surface(drag.overlay, position);
        if settle.anim.is_complete() {
            self.finish_drop(host);
        }
    }

    fn finish_drop<H: GestureHost + ?Sized>(&mut self, host: &mut H) {
        let Some(drag) = self.drag.take() else {
            self.phase = DragPhase::Idle;
            return;
        };
        let destination = host.row_for_index(drag.tracked);
        if let Some(row) = destination {
            host.set_row_visible(row, true);
        }
        if let Some(hidden) = drag.hidden
            && Some(hidden) != destination
        {
            host.set_row_visible(hidden, true);
        }
        host.remove_surface(drag.overlay);
        self.phase = DragPhase::Idle;
        debug!(from = drag.from, to = drag.tracked, "drag.dropped");
        self.listener.on_gesture_ended(
            GestureKind::Drag,
            GestureOutcome::Dropped {
                from: drag.from,
                to: drag.tracked,
            },
        );
    }

    /// Step every slide. A row that no longer displays its slide's index
    /// was recycled; it gets its identity transform back at once.
    fn advance_slides<H: GestureHost + ?Sized>(&mut self, now: Instant, host: &mut H) {
        self.slides.retain_mut(|slide| {
            slide.anim.advance_to(now);
            if host.row_for_index(slide.index) != Some(slide.row) {
                trace!(index = slide.index, row = slide.row.0, "drag.slide.recycled");
                host.set_row_transform(slide.row, RowTransform::IDENTITY);
                return false;
            }
            if slide.anim.is_complete() {
                host.set_row_transform(slide.row, RowTransform::IDENTITY);
                return false;
            }
            let remaining = 1.0 - slide.anim.value();
            host.set_row_transform(slide.row, RowTransform::translated(slide.offset * remaining));
            true
        });
    }

    fn needs_frame(&self) -> bool {
        !self.tasks.is_empty()
            || !self.slides.is_empty()
            || self.drag.is_some_and(|d| d.settle.is_some())
    }
}

impl<H, M> GestureController<H> for DragReorderController<M>
where
    H: GestureHost + ?Sized,
    M: SwapItems,
{
    fn handle_event(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        match event.kind {
            PointerKind::Down => self.on_pointer_down(event, host),
            PointerKind::Move => self.on_pointer_move(event, host),
            PointerKind::Up | PointerKind::Cancel => self.on_pointer_up(event, host),
        }
    }

    fn on_frame(&mut self, now: Instant, host: &mut H) -> bool {
        for task in self.tasks.take_due(now) {
            match task {
                DragTask::LongPress => {
                    self.on_long_press(host);
                }
                DragTask::AutoScroll => self.auto_scroll_tick(now, host),
            }
        }
        self.advance_slides(now, host);
        self.advance_settle(now, host);

        let more = self.needs_frame();
        if more {
            host.request_frame();
        }
        more
    }

    fn set_enabled(&mut self, enabled: bool) {
        DragReorderController::set_enabled(self, enabled);
    }

    fn is_enabled(&self) -> bool {
        DragReorderController::is_enabled(self)
    }

    fn is_idle(&self) -> bool {
        DragReorderController::is_idle(self)
    }

    fn next_deadline(&self) -> Option<Instant> {
        DragReorderController::next_deadline(self)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::drag::Dividers;
    use rgesture_harness::{HostCall, SimulatedList, TestClock};

    const MS_16: Duration = Duration::from_millis(16);

    fn controller(items: usize) -> DragReorderController<Vec<usize>> {
        DragReorderController::builder()
            .store((0..items).collect())
            .build()
            .expect("valid config")
    }

    /// Five 50px rows in a 250px viewport: everything laid out.
    fn list() -> SimulatedList {
        SimulatedList::vertical(5, 50.0, 300.0, 250.0)
    }

    fn pump(
        ctl: &mut DragReorderController<Vec<usize>>,
        list: &mut SimulatedList,
        clock: &mut TestClock,
        frames: usize,
    ) {
        for _ in 0..frames {
            let now = clock.advance(MS_16);
            ctl.on_frame(now, list);
        }
    }

    fn pick_up(
        ctl: &mut DragReorderController<Vec<usize>>,
        list: &mut SimulatedList,
        clock: &mut TestClock,
        index: usize,
    ) -> Point {
        let at = list.center_of(index);
        assert!(!ctl.handle_event(&PointerEvent::down(at, clock.now()), list));
        let now = clock.advance_ms(500);
        ctl.on_frame(now, list);
        assert_eq!(ctl.phase(), DragPhase::Armed);
        at
    }

    #[test]
    fn missing_store_is_a_config_error() {
        let err = DragReorderController::<Vec<u8>>::builder().build().unwrap_err();
        assert_eq!(err, ConfigError::MissingMutator { gesture: "drag" });
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = DragReorderController::builder()
            .store(vec![1])
            .config(DragConfig::default().with_scroll_step(-1.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold { name: "scroll_step", .. }));
    }

    #[test]
    fn long_press_arms_and_hides_row() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(5);
        pick_up(&mut ctl, &mut list, &mut clock, 2);
        assert_eq!(ctl.tracked_index(), Some(2));
        assert_eq!(list.hidden_indices(), vec![2]);
        assert_eq!(list.surface_count(), 1);
        let overlay = ctl.overlay().and_then(|id| list.surface(id).copied());
        assert!(matches!(overlay, Some(s) if s.bounds == Rect::new(0.0, 100.0, 300.0, 50.0) && s.alpha == 0.8));
    }

    #[test]
    fn long_press_waits_for_its_deadline() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(5);
        ctl.handle_event(&PointerEvent::down(list.center_of(1), clock.now()), &mut list);
        let now = clock.advance_ms(499);
        assert!(ctl.on_frame(now, &mut list));
        assert_eq!(ctl.phase(), DragPhase::Idle);
        let now = clock.advance_ms(1);
        ctl.on_frame(now, &mut list);
        assert_eq!(ctl.phase(), DragPhase::Armed);
    }

    #[test]
    fn moving_before_long_press_aborts() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(5);
        let at = list.center_of(1);
        ctl.handle_event(&PointerEvent::down(at, clock.now()), &mut list);
        let now = clock.advance_ms(100);
        let moved = at + Point::new(0.0, 9.0);
        assert!(!ctl.handle_event(&PointerEvent::moved(moved, now), &mut list));
        pump(&mut ctl, &mut list, &mut clock, 40);
        assert_eq!(ctl.phase(), DragPhase::Idle);
        assert!(ctl.is_idle());
        assert_eq!(list.surface_count(), 0);
    }

    #[test]
    fn divider_cannot_be_picked_up() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = DragReorderController::builder()
            .store((0..5).collect::<Vec<_>>())
            .policy(Dividers::new([2]))
            .build()
            .expect("valid config");
        ctl.handle_event(&PointerEvent::down(list.center_of(2), clock.now()), &mut list);
        let now = clock.advance_ms(500);
        ctl.on_frame(now, &mut list);
        assert_eq!(ctl.phase(), DragPhase::Idle);
        assert!(list.hidden_indices().is_empty());
        assert_eq!(list.surface_count(), 0);
    }

    #[test]
    fn disabling_cancels_pending_press() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(5);
        ctl.handle_event(&PointerEvent::down(list.center_of(1), clock.now()), &mut list);
        ctl.set_enabled(false);
        pump(&mut ctl, &mut list, &mut clock, 40);
        assert_eq!(ctl.phase(), DragPhase::Idle);
        assert!(!ctl.handle_event(&PointerEvent::down(list.center_of(1), clock.now()), &mut list));
        assert!(ctl.next_deadline().is_none());
    }

    #[test]
    fn swap_with_next_then_drop() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(5);
        let at = pick_up(&mut ctl, &mut list, &mut clock, 2);
        list.take_calls();

        // Overlay 100..150 moves to 160..210, past row 3's bottom edge (200).
        let now = clock.advance(MS_16);
        assert!(ctl.handle_event(&PointerEvent::moved(at + Point::new(0.0, 60.0), now), &mut list));
        assert_eq!(ctl.store(), &vec![0, 1, 3, 2, 4]);
        assert_eq!(ctl.tracked_index(), Some(3));
        assert_eq!(list.calls(), &[HostCall::ItemChanged(3)]);
        assert_eq!(list.hidden_indices(), vec![3]);

        // The row now showing item 3 starts at the old slot and slides home.
        let row2 = list.row_for_index(2).expect("row 2 laid out");
        assert_eq!(list.row_transform(row2).translation, Point::new(0.0, 50.0));
        pump(&mut ctl, &mut list, &mut clock, 12);
        assert!(list.row_transform(row2).is_identity());

        let now = clock.advance(MS_16);
        ctl.handle_event(&PointerEvent::up(at + Point::new(0.0, 60.0), now), &mut list);
        assert_eq!(ctl.phase(), DragPhase::Settling);
        pump(&mut ctl, &mut list, &mut clock, 12);
        assert_eq!(ctl.phase(), DragPhase::Idle);
        assert!(list.hidden_indices().is_empty());
        assert_eq!(list.surface_count(), 0);
        assert!(ctl.is_idle());
    }

    #[test]
    fn one_swap_per_move() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(5);
        let at = pick_up(&mut ctl, &mut list, &mut clock, 0);
        // Far enough to pass rows 1 and 2 at once, but not the viewport edge.
        let now = clock.advance(MS_16);
        ctl.handle_event(&PointerEvent::moved(at + Point::new(0.0, 140.0), now), &mut list);
        assert_eq!(ctl.tracked_index(), Some(1));
        let now = clock.advance(MS_16);
        ctl.handle_event(&PointerEvent::moved(at + Point::new(0.0, 141.0), now), &mut list);
        assert_eq!(ctl.tracked_index(), Some(2));
        assert_eq!(ctl.store(), &vec![1, 2, 0, 3, 4]);
    }

    #[test]
    fn boundary_blocks_move() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = DragReorderController::builder()
            .store((0..5).collect::<Vec<_>>())
            .policy(Dividers::new([3]))
            .build()
            .expect("valid config");
        let at = pick_up(&mut ctl, &mut list, &mut clock, 1);
        assert_eq!(
            ctl.boundary_markers(),
            Some(BoundaryMarkers {
                previous: None,
                next: Some(3)
            })
        );
        let now = clock.advance(MS_16);
        ctl.handle_event(&PointerEvent::moved(at + Point::new(0.0, 60.0), now), &mut list);
        assert_eq!(ctl.tracked_index(), Some(2));
        let overlay = ctl.overlay().expect("overlay");
        let before = list.surface(overlay).map(|s| s.bounds);

        // Overlay would end at 201, past the divider's bottom edge (200).
        let now = clock.advance(MS_16);
        ctl.handle_event(&PointerEvent::moved(at + Point::new(0.0, 101.0), now), &mut list);
        assert_eq!(ctl.tracked_index(), Some(2));
        assert_eq!(list.surface(overlay).map(|s| s.bounds), before);
        assert_eq!(ctl.store(), &vec![0, 2, 1, 3, 4]);
    }

    #[test]
    fn jump_to_edge_beside_divider_still_swaps() {
        // Row 4 is a divider filling the bottom of the viewport (200..250).
        let mut list = SimulatedList::vertical(20, 50.0, 300.0, 250.0);
        let mut clock = TestClock::new();
        let mut ctl = DragReorderController::builder()
            .store((0..20).collect::<Vec<_>>())
            .policy(Dividers::new([4]))
            .build()
            .expect("valid config");
        let at = pick_up(&mut ctl, &mut list, &mut clock, 2);

        // Overlay jumps to 200..250: past row 3's bottom edge, resting on the
        // divider's, at the viewport end.
        let now = clock.advance(MS_16);
        ctl.handle_event(&PointerEvent::moved(at + Point::new(0.0, 100.0), now), &mut list);
        pump(&mut ctl, &mut list, &mut clock, 4);
        assert_eq!(ctl.tracked_index(), Some(3));
        assert_eq!(&ctl.store()[..5], &[0, 1, 3, 2, 4]);
        assert!(!ctl.is_auto_scrolling());
        assert_eq!(list.scroll_offset(), 0.0);

        // Pushing further keeps the overlay at the edge without restarting
        // the scroll or crossing the divider.
        for step in 2..6 {
            let now = clock.advance(MS_16);
            let moved = at + Point::new(0.0, 100.0 * step as f32);
            ctl.handle_event(&PointerEvent::moved(moved, now), &mut list);
            pump(&mut ctl, &mut list, &mut clock, 2);
        }
        assert_eq!(ctl.tracked_index(), Some(3));
        assert!(!ctl.is_auto_scrolling());
        assert_eq!(list.scroll_offset(), 0.0);
        let overlay = ctl.overlay().and_then(|id| list.surface(id).map(|s| s.bounds));
        assert_eq!(overlay, Some(Rect::new(0.0, 200.0, 300.0, 50.0)));

        let now = clock.advance(MS_16);
        ctl.handle_event(&PointerEvent::up(at + Point::new(0.0, 500.0), now), &mut list);
        pump(&mut ctl, &mut list, &mut clock, 20);
        assert_eq!(ctl.phase(), DragPhase::Idle);
        assert_eq!(&ctl.store()[..5], &[0, 1, 3, 2, 4]);
        assert!(list.check_visibility(&[]).is_ok());
    }

    /// Accepts the first swap and rejects the rest.
    #[derive(Debug)]
    struct FirstSwapOnly {
        items: Vec<usize>,
        swapped: bool,
    }

    impl SwapItems for FirstSwapOnly {
        fn swap_items(&mut self, a: usize, b: usize) -> bool {
            if self.swapped {
                return false;
            }
            self.swapped = self.items.swap_items(a, b);
            self.swapped
        }
    }

    #[test]
    fn sliding_row_recycled_mid_animation_loses_its_offset() {
        // Four rows laid out; auto-scroll carries row 1 out of layout long
        // before its slide could finish.
        let mut list = SimulatedList::vertical(30, 50.0, 300.0, 200.0);
        let mut clock = TestClock::new();
        let mut ctl = DragReorderController::builder()
            .config(DragConfig::default().with_swap_duration(Duration::from_secs(2)))
            .store(FirstSwapOnly {
                items: (0..30).collect(),
                swapped: false,
            })
            .build()
            .expect("valid config");

        let at = list.center_of(1);
        ctl.handle_event(&PointerEvent::down(at, clock.now()), &mut list);
        let now = clock.advance_ms(500);
        ctl.on_frame(now, &mut list);
        assert_eq!(ctl.phase(), DragPhase::Armed);

        let now = clock.advance(MS_16);
        ctl.handle_event(&PointerEvent::moved(at + Point::new(0.0, 110.0), now), &mut list);
        assert!(ctl.is_auto_scrolling());

        // First tick scrolls 16px and swaps 1 and 2; row 1 starts sliding.
        let now = clock.advance(MS_16);
        ctl.on_frame(now, &mut list);
        assert_eq!(ctl.tracked_index(), Some(2));
        let sliding = list.row_for_index(1).expect("row 1 laid out");
        assert!(!list.row_transform(sliding).is_identity());

        // Seven more ticks scroll past 100px, recycling row 1's view.
        for _ in 0..8 {
            let now = clock.advance(MS_16);
            ctl.on_frame(now, &mut list);
        }
        assert!(list.scroll_offset() >= 100.0);
        assert_ne!(list.index_of(sliding), Some(1));
        assert!(list.row_transform(sliding).is_identity());

        let now = clock.advance(MS_16);
        ctl.handle_event(&PointerEvent::up(at + Point::new(0.0, 110.0), now), &mut list);
        for _ in 0..20 {
            let now = clock.advance(MS_16);
            ctl.on_frame(now, &mut list);
        }
        assert_eq!(ctl.phase(), DragPhase::Idle);
        assert!(list.check_visibility(&[]).is_ok());
    }

    #[test]
    fn release_without_moving_drops_in_place() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(5);
        let at = pick_up(&mut ctl, &mut list, &mut clock, 4);
        ctl.handle_event(&PointerEvent::cancel(at, clock.now()), &mut list);
        pump(&mut ctl, &mut list, &mut clock, 12);
        assert_eq!(ctl.phase(), DragPhase::Idle);
        assert_eq!(ctl.store(), &vec![0, 1, 2, 3, 4]);
        assert!(list.check_visibility(&[]).is_ok());
        assert_eq!(list.surface_count(), 0);
    }

    #[test]
    fn other_pointers_are_ignored() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(5);
        let at = pick_up(&mut ctl, &mut list, &mut clock, 1);
        let stray = PointerEvent::moved(at + Point::new(0.0, 80.0), clock.now()).with_pointer(PointerId(7));
        assert!(ctl.handle_event(&stray, &mut list));
        assert_eq!(ctl.phase(), DragPhase::Armed);
        let second_down = PointerEvent::down(list.center_of(3), clock.now()).with_pointer(PointerId(7));
        assert!(ctl.handle_event(&second_down, &mut list));
        assert_eq!(ctl.tracked_index(), Some(1));
    }
}
