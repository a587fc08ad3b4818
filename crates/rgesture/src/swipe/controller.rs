#![forbid(unsafe_code)]

//! Swipe-to-dismiss.
//!
//! # Protocol
//!
//! ```text
//! Idle ──down on row──▶ Candidate ──past slop, axis dominant──▶ Swiping ──up──▶ Resolving ──▶ Idle
//!                          │                                      │
//!                          └── up / cancel / wrong side ──▶ Idle  └── cancel / wrong side ──▶ Resolving (snap back)
//! ```
//!
//! - A down on a row whose direction is `none` leaves the controller in an
//!   inert candidate state for the rest of that touch.
//! - Recognition sends the row a synthetic cancel so it drops any pressed
//!   state, and optionally places a backdrop under it.
//! - While swiping, the row follows the pointer (minus the slop) and fades
//!   out over half its extent.
//! - On release the dismiss decision runs. A dismissed row animates off
//!   screen and the item is removed `animation + grace` after release; a
//!   kept row animates back.
//!
//! # Invariants
//!
//! 1. The store removal happens before `notify_item_removed`, and the row's
//!    transform is reset after it.
//! 2. Motion toward a side a single-sided direction forbids never dismisses.
//! 3. No new swipe starts while one is resolving or a backdrop is pending.

use rgesture_core::animation::{Timed, Tween};
use rgesture_core::frame::FrameQueue;
use rgesture_core::{
    Axis, GestureHost, Instant, Point, PointerEvent, PointerId, PointerKind, RowTransform,
    SurfaceId, VelocityEstimator, VelocityTracker, debug, trace,
};

use super::direction::{DismissDirection, FlingLimits, Release, Side, decide};
use super::policy::{DismissDirectionPolicy, Uniform};
use crate::config::SwipeConfig;
use crate::error::{ConfigError, Result};
use crate::gesture::GestureController;
use crate::listener::{GestureKind, GestureListener, GestureOutcome, NoopListener};
use crate::mutation::RemoveItems;

/// Where a swipe gesture is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    /// Pointer is down on a row; no swipe recognized yet.
    Candidate,
    Swiping,
    /// Released; animating off screen or back.
    Resolving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwipeTask {
    Commit,
    RemoveBackdrop,
}

#[derive(Debug, Clone, Copy)]
struct Touch {
    pointer: PointerId,
    down: Point,
    index: usize,
    direction: DismissDirection,
    axis: Axis,
    extent: f32,
}

#[derive(Debug, Clone, Copy)]
enum Resolution {
    Dismiss {
        from: RowTransform,
        to: RowTransform,
        anim: Timed<Tween>,
    },
    Restore {
        from: RowTransform,
        anim: Timed<Tween>,
        outcome: GestureOutcome,
    },
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`SwipeDismissController`].
pub struct SwipeDismissBuilder<M> {
    config: SwipeConfig,
    policy: Option<Box<dyn DismissDirectionPolicy>>,
    estimator: Option<Box<dyn VelocityEstimator>>,
    listener: Box<dyn GestureListener>,
    store: Option<M>,
}

impl<M> Default for SwipeDismissBuilder<M> {
    fn default() -> Self {
        Self {
            config: SwipeConfig::default(),
            policy: None,
            estimator: None,
            listener: Box::new(NoopListener),
            store: None,
        }
    }
}

impl<M: RemoveItems> SwipeDismissBuilder<M> {
    #[must_use]
    pub fn config(mut self, config: SwipeConfig) -> Self {
        self.config = config;
        self
    }

    /// Shorthand for a config with another default direction.
    #[must_use]
    pub fn direction(mut self, direction: DismissDirection) -> Self {
        self.config.direction = direction;
        self
    }

    /// Per-position directions; replaces the config's default direction.
    #[must_use]
    pub fn policy(mut self, policy: impl DismissDirectionPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Replace the default least-squares velocity tracker.
    #[must_use]
    pub fn velocity_estimator(mut self, estimator: impl VelocityEstimator + 'static) -> Self {
        self.estimator = Some(Box::new(estimator));
        self
    }

    #[must_use]
    pub fn listener(mut self, listener: impl GestureListener + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    /// Item store dismissed items are removed from. Required.
    #[must_use]
    pub fn store(mut self, store: M) -> Self {
        self.store = Some(store);
        self
    }

    /// Validate the configuration and build the controller.
    pub fn build(self) -> Result<SwipeDismissController<M>> {
        self.config.validate()?;
        let store = self
            .store
            .ok_or(ConfigError::MissingMutator { gesture: "swipe" })?;
        let config = self.config;
        Ok(SwipeDismissController {
            policy: self
                .policy
                .unwrap_or_else(|| Box::new(Uniform(config.direction))),
            estimator: self
                .estimator
                .unwrap_or_else(|| Box::new(VelocityTracker::new(config.velocity_window))),
            config,
            listener: self.listener,
            store,
            enabled: true,
            phase: SwipePhase::Idle,
            touch: None,
            resolution: None,
            backdrop: None,
            tasks: FrameQueue::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Swipe-to-dismiss controller owning its item store `M`.
pub struct SwipeDismissController<M> {
    config: SwipeConfig,
    policy: Box<dyn DismissDirectionPolicy>,
    estimator: Box<dyn VelocityEstimator>,
    listener: Box<dyn GestureListener>,
    store: M,
    enabled: bool,
    phase: SwipePhase,
    touch: Option<Touch>,
    resolution: Option<Resolution>,
    backdrop: Option<SurfaceId>,
    tasks: FrameQueue<SwipeTask>,
}

impl<M> std::fmt::Debug for SwipeDismissController<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeDismissController")
            .field("config", &self.config)
            .field("enabled", &self.enabled)
            .field("phase", &self.phase)
            .field("touch", &self.touch)
            .field("backdrop", &self.backdrop)
            .finish_non_exhaustive()
    }
}

impl<M: RemoveItems> SwipeDismissController<M> {
    #[must_use]
    pub fn builder() -> SwipeDismissBuilder<M> {
        SwipeDismissBuilder::default()
    }

    #[must_use]
    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Index under the current touch.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.touch.map(|t| t.index)
    }

    /// The backdrop surface, while one exists.
    #[must_use]
    pub fn backdrop(&self) -> Option<SurfaceId> {
        self.backdrop
    }

    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &M {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut M {
        &mut self.store
    }

    /// Allow or block new swipes. A swipe in flight runs to completion.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// No touch, no animation, no pending commit or backdrop.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == SwipePhase::Idle && self.backdrop.is_none() && !self.needs_frame()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.next_deadline()
    }

    fn on_pointer_down<H: GestureHost + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        if !self.enabled || self.phase != SwipePhase::Idle || self.backdrop.is_some() {
            return false;
        }
        let Some(row) = host.row_at(event.position) else {
            return false;
        };
        let Some(index) = host.index_of(row) else {
            return false;
        };
        let direction = self.policy.direction_for(index);
        let axis = direction.axis().unwrap_or_default();
        let extent = host
            .row_bounds(row)
            .map(|b| axis.extent(b))
            .filter(|e| *e > 0.0)
            .unwrap_or(1.0);
        self.touch = Some(Touch {
            pointer: event.pointer,
            down: event.position,
            index,
            direction,
            axis,
            extent,
        });
        if direction != DismissDirection::None {
            self.estimator.clear();
            self.estimator.add_sample(event.time, event.position);
        }
        self.phase = SwipePhase::Candidate;
        trace!(index, %direction, "swipe.candidate");
        false
    }

    fn on_pointer_move<H: GestureHost + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        let Some(touch) = self.touch else {
            return false;
        };
        if touch.pointer != event.pointer {
            return self.phase == SwipePhase::Swiping;
        }
        match self.phase {
            SwipePhase::Candidate => {
                if touch.direction == DismissDirection::None {
                    return false;
                }
                self.estimator.add_sample(event.time, event.position);
                let delta = event.position - touch.down;
                if !touch.direction.allows(touch.axis.main(delta)) {
                    trace!(index = touch.index, "swipe.wrong_side");
                    self.reset();
                    return false;
                }
                if !touch.direction.is_swiping(delta, self.config.touch_slop) {
                    return false;
                }
                self.begin_swiping(&touch, host);
                self.apply_motion(&touch, delta, host);
                true
            }
            SwipePhase::Swiping => {
                self.estimator.add_sample(event.time, event.position);
                let delta = event.position - touch.down;
                if !touch.direction.allows(touch.axis.main(delta)) {
                    debug!(index = touch.index, "swipe.wrong_side.snap_back");
                    self.remove_backdrop(host);
                    self.snap_back(event.time, GestureOutcome::Cancelled, host);
                    return false;
                }
                self.apply_motion(&touch, delta, host);
                true
            }
            SwipePhase::Idle | SwipePhase::Resolving => false,
        }
    }

    fn on_pointer_up<H: GestureHost + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        let Some(touch) = self.touch else {
            return false;
        };
        if touch.pointer != event.pointer {
            return self.phase == SwipePhase::Swiping;
        }
        match (self.phase, event.kind) {
            (SwipePhase::Candidate, _) => {
                self.reset();
                false
            }
            (SwipePhase::Swiping, PointerKind::Cancel) => {
                debug!(index = touch.index, "swipe.cancelled");
                self.remove_backdrop(host);
                self.snap_back(event.time, GestureOutcome::Cancelled, host);
                true
            }
            (SwipePhase::Swiping, _) => {
                self.estimator.add_sample(event.time, event.position);
                self.release(&touch, event, host);
                true
            }
            _ => false,
        }
    }

    fn begin_swiping<H: GestureHost + ?Sized>(&mut self, touch: &Touch, host: &mut H) {
        self.phase = SwipePhase::Swiping;
        if let Some(row) = host.row_for_index(touch.index) {
            host.cancel_row_press(row);
            if self.config.backdrop
                && self.backdrop.is_none()
                && let Some(bounds) = host.row_bounds(row)
            {
                self.backdrop = Some(host.create_backdrop(bounds));
            }
        }
        debug!(index = touch.index, direction = %touch.direction, "swipe.started");
        self.listener
            .on_gesture_started(GestureKind::Swipe, touch.index);
    }

    fn apply_motion<H: GestureHost + ?Sized>(&mut self, touch: &Touch, delta: Point, host: &mut H) {
        let Some(row) = host.row_for_index(touch.index) else {
            return;
        };
        let main = touch.axis.main(delta);
        let slop = if main > 0.0 {
            self.config.touch_slop
        } else if main < 0.0 {
            -self.config.touch_slop
        } else {
            0.0
        };
        let alpha = (1.0 - 2.0 * main.abs() / touch.extent).clamp(0.0, 1.0);
        let transform = RowTransform::new(touch.axis.point(main - slop, 0.0), alpha);
        host.set_row_transform(row, transform);
    }

    fn release<H: GestureHost + ?Sized>(&mut self, touch: &Touch, event: &PointerEvent, host: &mut H) {
        let delta = event.position - touch.down;
        let velocity = self.estimator.velocity();
        let release = Release::along(touch.axis, delta, velocity, touch.extent);
        let limits = FlingLimits {
            min: self.config.min_fling,
            max: self.config.max_fling,
        };
        let side = decide(release, limits)
            .filter(|side| touch.direction.single_side().is_none_or(|s| s == *side));

        let Some(side) = side else {
            debug!(
                index = touch.index,
                displacement = release.displacement,
                velocity = release.velocity,
                "swipe.restore"
            );
            self.snap_back(event.time, GestureOutcome::Restored { index: touch.index }, host);
            return;
        };

        debug!(
            index = touch.index,
            ?side,
            displacement = release.displacement,
            velocity = release.velocity,
            "swipe.dismiss"
        );
        let from = self.current_transform(touch, &*host);
        let to = RowTransform::new(touch.axis.point(side_offset(side, touch.extent), 0.0), 0.0);
        self.resolution = Some(Resolution::Dismiss {
            from,
            to,
            anim: Timed::new(Tween::new(self.config.animation), event.time),
        });
        self.phase = SwipePhase::Resolving;
        self.tasks.post_delayed(
            SwipeTask::Commit,
            event.time,
            self.config.animation + self.config.commit_grace,
        );
        if self.backdrop.is_some() {
            self.tasks.post_delayed(
                SwipeTask::RemoveBackdrop,
                event.time,
                self.config.animation * 3 + self.config.commit_grace,
            );
        }
        host.request_frame();
    }

    fn snap_back<H: GestureHost + ?Sized>(&mut self, now: Instant, outcome: GestureOutcome, host: &mut H) {
        let Some(touch) = self.touch else {
            return;
        };
        self.resolution = Some(Resolution::Restore {
            from: self.current_transform(&touch, &*host),
            anim: Timed::new(Tween::new(self.config.animation), now),
            outcome,
        });
        self.phase = SwipePhase::Resolving;
        host.request_frame();
    }

    fn current_transform<H: GestureHost + ?Sized>(&self, touch: &Touch, host: &H) -> RowTransform {
        host.row_for_index(touch.index)
            .map_or(RowTransform::IDENTITY, |row| host.row_transform(row))
    }

    fn advance_resolution<H: GestureHost + ?Sized>(&mut self, now: Instant, host: &mut H) {
        let (Some(touch), Some(resolution)) = (self.touch, self.resolution.as_mut()) else {
            return;
        };
        let row = host.row_for_index(touch.index);
        match resolution {
            Resolution::Dismiss { from, to, anim } => {
                anim.advance_to(now);
                if let Some(row) = row {
                    host.set_row_transform(row, from.lerp(*to, anim.value()));
                }
            }
            Resolution::Restore { from, anim, outcome } => {
                anim.advance_to(now);
                if let Some(row) = row {
                    host.set_row_transform(row, from.lerp(RowTransform::IDENTITY, anim.value()));
                }
                if anim.is_complete() {
                    let outcome = *outcome;
                    self.remove_backdrop(host);
                    self.finish(outcome);
                }
            }
        }
    }

    fn commit<H: GestureHost + ?Sized>(&mut self, host: &mut H) {
        let Some(touch) = self.touch else {
            return;
        };
        let row = host.row_for_index(touch.index);
        let removed = self.store.remove_item(touch.index);
        if removed {
            host.notify_item_removed(touch.index);
        } else {
            trace!(index = touch.index, "swipe.remove.rejected");
        }
        if let Some(row) = row {
            host.set_row_transform(row, RowTransform::IDENTITY);
        }
        let outcome = if removed {
            GestureOutcome::Dismissed { index: touch.index }
        } else {
            GestureOutcome::Cancelled
        };
        self.finish(outcome);
    }

    fn remove_backdrop<H: GestureHost + ?Sized>(&mut self, host: &mut H) {
        self.tasks.cancel(SwipeTask::RemoveBackdrop);
        if let Some(backdrop) = self.backdrop.take() {
            host.remove_surface(backdrop);
        }
    }

    fn finish(&mut self, outcome: GestureOutcome) {
        self.reset();
        debug!(?outcome, "swipe.ended");
        self.listener.on_gesture_ended(GestureKind::Swipe, outcome);
    }

    fn reset(&mut self) {
        self.touch = None;
        self.resolution = None;
        self.phase = SwipePhase::Idle;
        self.estimator.clear();
    }

    fn needs_frame(&self) -> bool {
        !self.tasks.is_empty() || self.resolution.is_some()
    }
}

/// Off-screen translation for a dismiss through `side`.
fn side_offset(side: Side, extent: f32) -> f32 {
    side.sign() * extent
}

impl<H, M> GestureController<H> for SwipeDismissController<M>
where
    H: GestureHost + ?Sized,
    M: RemoveItems,
{
    fn handle_event(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        match event.kind {
            PointerKind::Down => self.on_pointer_down(event, host),
            PointerKind::Move => self.on_pointer_move(event, host),
            PointerKind::Up | PointerKind::Cancel => self.on_pointer_up(event, host),
        }
    }

    fn on_frame(&mut self, now: Instant, host: &mut H) -> bool {
        self.advance_resolution(now, host);
        for task in self.tasks.take_due(now) {
            match task {
                SwipeTask::Commit => self.commit(host),
                SwipeTask::RemoveBackdrop => self.remove_backdrop(host),
            }
        }
        let more = self.needs_frame();
        if more {
            host.request_frame();
        }
        more
    }

    fn set_enabled(&mut self, enabled: bool) {
        SwipeDismissController::set_enabled(self, enabled);
    }

    fn is_enabled(&self) -> bool {
        SwipeDismissController::is_enabled(self)
    }

    fn is_idle(&self) -> bool {
        SwipeDismissController::is_idle(self)
    }

    fn next_deadline(&self) -> Option<Instant> {
        SwipeDismissController::next_deadline(self)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::swipe::Overrides;
    use rgesture_core::ListHost;
    use rgesture_harness::{HostCall, PointerScript, SimulatedList, TestClock};

    const MS_16: Duration = Duration::from_millis(16);

    fn controller(direction: DismissDirection) -> SwipeDismissController<Vec<usize>> {
        SwipeDismissController::builder()
            .direction(direction)
            .store((0..5).collect())
            .build()
            .expect("valid config")
    }

    /// Five 60px rows, 200px wide.
    fn list() -> SimulatedList {
        SimulatedList::vertical(5, 60.0, 200.0, 300.0)
    }

    fn run(
        ctl: &mut SwipeDismissController<Vec<usize>>,
        list: &mut SimulatedList,
        events: &[PointerEvent],
    ) {
        for event in events {
            ctl.handle_event(event, list);
        }
    }

    fn pump(
        ctl: &mut SwipeDismissController<Vec<usize>>,
        list: &mut SimulatedList,
        clock: &mut TestClock,
        frames: usize,
    ) {
        for _ in 0..frames {
            let now = clock.advance(MS_16);
            ctl.on_frame(now, list);
        }
    }

    #[test]
    fn missing_store_is_a_config_error() {
        let err = SwipeDismissController::<Vec<u8>>::builder().build().unwrap_err();
        assert_eq!(err, ConfigError::MissingMutator { gesture: "swipe" });
    }

    #[test]
    fn slow_long_swipe_dismisses() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(DismissDirection::Horizontal);
        let start = list.center_of(1);
        let events = PointerScript::new(&mut clock)
            .down(start)
            .move_by(Point::new(120.0, 0.0), 30, 30)
            .hold_ms(200)
            .up()
            .build();
        run(&mut ctl, &mut list, &events);
        assert_eq!(ctl.phase(), SwipePhase::Resolving);
        assert_eq!(ctl.store(), &vec![0, 1, 2, 3, 4]);

        pump(&mut ctl, &mut list, &mut clock, 25);
        assert_eq!(ctl.phase(), SwipePhase::Idle);
        assert_eq!(ctl.store(), &vec![0, 2, 3, 4]);
        assert!(list.calls().contains(&HostCall::ItemRemoved(1)));
        assert!(list.rows().iter().all(|r| r.transform.is_identity()));
    }

    #[test]
    fn swiping_translates_and_fades() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(DismissDirection::Horizontal);
        let start = list.center_of(0);
        let row = list.row_for_index(0).expect("row 0 laid out");
        let events = PointerScript::new(&mut clock)
            .down(start)
            .move_by(Point::new(50.0, 0.0), 5, 16)
            .build();
        run(&mut ctl, &mut list, &events);
        assert_eq!(ctl.phase(), SwipePhase::Swiping);
        let t = list.row_transform(row);
        assert_eq!(t.translation, Point::new(42.0, 0.0));
        assert!((t.alpha - 0.5).abs() < 1e-6);
        assert_eq!(list.row(row).map(|r| r.press_cancels), Some(1));
    }

    #[test]
    fn short_slow_swipe_restores() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(DismissDirection::Horizontal);
        let start = list.center_of(2);
        let events = PointerScript::new(&mut clock)
            .down(start)
            .move_by(Point::new(40.0, 0.0), 20, 30)
            .hold_ms(200)
            .up()
            .build();
        run(&mut ctl, &mut list, &events);
        pump(&mut ctl, &mut list, &mut clock, 20);
        assert_eq!(ctl.phase(), SwipePhase::Idle);
        assert_eq!(ctl.store().len(), 5);
        assert!(list.rows().iter().all(|r| r.transform.is_identity()));
        assert!(!list.calls().iter().any(|c| matches!(c, HostCall::ItemRemoved(_))));
    }

    #[test]
    fn wrong_side_resets_before_recognition() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(DismissDirection::Right);
        let start = list.center_of(0);
        let events = PointerScript::new(&mut clock)
            .down(start)
            .move_by(Point::new(-30.0, 0.0), 3, 16)
            .up()
            .build();
        run(&mut ctl, &mut list, &events);
        assert_eq!(ctl.phase(), SwipePhase::Idle);
        assert!(list.calls().is_empty());
    }

    #[test]
    fn cross_axis_motion_is_not_a_swipe() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(DismissDirection::Horizontal);
        let start = list.center_of(1);
        let events = PointerScript::new(&mut clock)
            .down(start)
            .move_by(Point::new(20.0, 20.0), 4, 16)
            .build();
        run(&mut ctl, &mut list, &events);
        assert_eq!(ctl.phase(), SwipePhase::Candidate);
    }

    #[test]
    fn none_direction_is_inert() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = SwipeDismissController::builder()
            .policy(Overrides::new(DismissDirection::Horizontal).with(0, DismissDirection::None))
            .store((0..5).collect::<Vec<usize>>())
            .build()
            .expect("valid config");
        let events = PointerScript::new(&mut clock)
            .down(list.center_of(0))
            .move_by(Point::new(150.0, 0.0), 5, 16)
            .up()
            .build();
        run(&mut ctl, &mut list, &events);
        pump(&mut ctl, &mut list, &mut clock, 30);
        assert_eq!(ctl.store().len(), 5);
        assert!(list.calls().is_empty());
    }

    #[test]
    fn cancel_snaps_back() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = controller(DismissDirection::Horizontal);
        let events = PointerScript::new(&mut clock)
            .down(list.center_of(3))
            .move_by(Point::new(150.0, 0.0), 5, 16)
            .cancel()
            .build();
        run(&mut ctl, &mut list, &events);
        assert_eq!(ctl.phase(), SwipePhase::Resolving);
        pump(&mut ctl, &mut list, &mut clock, 20);
        assert!(ctl.is_idle());
        assert_eq!(ctl.store().len(), 5);
        assert!(list.rows().iter().all(|r| r.transform.is_identity()));
    }

    #[test]
    fn backdrop_lingers_and_blocks_new_swipes() {
        let mut list = list();
        let mut clock = TestClock::new();
        let mut ctl = SwipeDismissController::builder()
            .config(SwipeConfig::default().with_backdrop(true))
            .store((0..5).collect::<Vec<usize>>())
            .build()
            .expect("valid config");
        let events = PointerScript::new(&mut clock)
            .down(list.center_of(1))
            .move_by(Point::new(150.0, 0.0), 10, 16)
            .up()
            .build();
        run(&mut ctl, &mut list, &events);
        assert!(ctl.backdrop().is_some());

        // Commit at 300ms, backdrop removal at 700ms.
        pump(&mut ctl, &mut list, &mut clock, 20);
        assert_eq!(ctl.store().len(), 4);
        assert!(ctl.backdrop().is_some());
        assert!(!ctl.handle_event(&PointerEvent::down(list.center_of(2), clock.now()), &mut list));
        assert_eq!(ctl.phase(), SwipePhase::Idle);

        pump(&mut ctl, &mut list, &mut clock, 30);
        assert!(ctl.backdrop().is_none());
        assert_eq!(list.surface_count(), 0);
        assert!(ctl.is_idle());
    }
}
