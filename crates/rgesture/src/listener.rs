#![forbid(unsafe_code)]

//! Start/end notifications for the host.

/// Which gesture a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Swipe,
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A drag settled; the item picked up at `from` now lives at `to`.
    Dropped { from: usize, to: usize },
    /// The item at `index` was removed.
    Dismissed { index: usize },
    /// A released swipe snapped back.
    Restored { index: usize },
    /// The gesture was aborted and nothing changed.
    Cancelled,
}

/// Observer for gesture boundaries. Both methods default to doing nothing.
pub trait GestureListener {
    /// A drag picked up `index`, or a swipe on `index` was recognized.
    fn on_gesture_started(&mut self, _kind: GestureKind, _index: usize) {}

    /// The gesture reached its final state. Called after every host
    /// notification for the gesture has been sent.
    fn on_gesture_ended(&mut self, _kind: GestureKind, _outcome: GestureOutcome) {}
}

/// Listener that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl GestureListener for NoopListener {}

/// Records notifications in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingListener {
    pub started: Vec<(GestureKind, usize)>,
    pub ended: Vec<(GestureKind, GestureOutcome)>,
}

impl GestureListener for RecordingListener {
    fn on_gesture_started(&mut self, kind: GestureKind, index: usize) {
        self.started.push((kind, index));
    }

    fn on_gesture_ended(&mut self, kind: GestureKind, outcome: GestureOutcome) {
        self.ended.push((kind, outcome));
    }
}

impl<L: GestureListener + ?Sized> GestureListener for std::rc::Rc<std::cell::RefCell<L>> {
    fn on_gesture_started(&mut self, kind: GestureKind, index: usize) {
        self.borrow_mut().on_gesture_started(kind, index);
    }

    fn on_gesture_ended(&mut self, kind: GestureKind, outcome: GestureOutcome) {
        self.borrow_mut().on_gesture_ended(kind, outcome);
    }
}
