#![forbid(unsafe_code)]

//! Pointer velocity estimation.
//!
//! [`VelocityEstimator`] is the capability the swipe controller consumes at
//! release time. [`VelocityTracker`] is the default implementation: a bounded
//! ring of timestamped samples and a least-squares slope over a fixed window
//! that ends at the most recent sample.
//!
//! # Invariants
//!
//! 1. Fewer than two samples inside the window yields [`Point::ZERO`].
//! 2. Samples older than the window never influence the estimate.
//! 3. Samples with identical timestamps yield zero velocity rather than
//!    dividing by zero.

use std::collections::VecDeque;
use std::time::Duration;

use web_time::Instant;

use crate::geometry::Point;

/// Default estimation window.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

/// Maximum samples retained by [`VelocityTracker`].
const MAX_SAMPLES: usize = 20;

/// Source of pointer velocity, in pixels per second.
pub trait VelocityEstimator {
    /// Append a sample. Samples are expected in non-decreasing time order.
    fn add_sample(&mut self, time: Instant, position: Point);

    /// Velocity over the estimation window ending at the latest sample.
    fn velocity(&self) -> Point;

    /// Discard all samples.
    fn clear(&mut self);
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    time: Instant,
    position: Point,
}

/// Least-squares velocity estimator over a sliding time window.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
    window: Duration,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl VelocityTracker {
    /// Create a tracker with the given window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_SAMPLES),
            window,
        }
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }
}

impl VelocityEstimator for VelocityTracker {
    fn add_sample(&mut self, time: Instant, position: Point) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { time, position });
    }

    fn velocity(&self) -> Point {
        let Some(last) = self.samples.back() else {
            return Point::ZERO;
        };

        // Times are seconds relative to the newest sample (all <= 0).
        let mut ts = [0.0_f64; MAX_SAMPLES];
        let mut xs = [0.0_f64; MAX_SAMPLES];
        let mut ys = [0.0_f64; MAX_SAMPLES];
        let mut n = 0;
        for sample in self.samples.iter().rev() {
            let age = last.time.saturating_duration_since(sample.time);
            if age > self.window {
                break;
            }
            ts[n] = -age.as_secs_f64();
            xs[n] = f64::from(sample.position.x);
            ys[n] = f64::from(sample.position.y);
            n += 1;
        }
        if n < 2 {
            return Point::ZERO;
        }

        let count = n as f64;
        let t_mean = ts[..n].iter().sum::<f64>() / count;
        let x_mean = xs[..n].iter().sum::<f64>() / count;
        let y_mean = ys[..n].iter().sum::<f64>() / count;

        let mut stt = 0.0;
        let mut stx = 0.0;
        let mut sty = 0.0;
        for i in 0..n {
            let dt = ts[i] - t_mean;
            stt += dt * dt;
            stx += dt * (xs[i] - x_mean);
            sty += dt * (ys[i] - y_mean);
        }
        if stt <= f64::EPSILON {
            return Point::ZERO;
        }

        Point::new((stx / stt) as f32, (sty / stt) as f32)
    }

    fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(tracker: &mut VelocityTracker, t0: Instant, points: &[(u64, f32, f32)]) {
        for &(ms, x, y) in points {
            tracker.add_sample(t0 + Duration::from_millis(ms), Point::new(x, y));
        }
    }

    #[test]
    fn empty_tracker_is_still() {
        let tracker = VelocityTracker::default();
        assert_eq!(tracker.velocity(), Point::ZERO);
    }

    #[test]
    fn single_sample_is_still() {
        let mut tracker = VelocityTracker::default();
        feed(&mut tracker, Instant::now(), &[(0, 10.0, 10.0)]);
        assert_eq!(tracker.velocity(), Point::ZERO);
    }

    #[test]
    fn linear_motion_recovers_speed() {
        let mut tracker = VelocityTracker::default();
        // 1 px per ms along x, -0.5 px per ms along y.
        feed(
            &mut tracker,
            Instant::now(),
            &[(0, 0.0, 0.0), (10, 10.0, -5.0), (20, 20.0, -10.0), (30, 30.0, -15.0)],
        );
        let v = tracker.velocity();
        assert!((v.x - 1000.0).abs() < 1.0, "vx = {}", v.x);
        assert!((v.y + 500.0).abs() < 1.0, "vy = {}", v.y);
    }

    #[test]
    fn stale_samples_are_ignored() {
        let mut tracker = VelocityTracker::new(Duration::from_millis(50));
        // A fast stroke long ago, then a slow one.
        feed(
            &mut tracker,
            Instant::now(),
            &[(0, 0.0, 0.0), (10, 500.0, 0.0), (200, 500.0, 0.0), (220, 502.0, 0.0)],
        );
        let v = tracker.velocity();
        assert!((v.x - 100.0).abs() < 1.0, "vx = {}", v.x);
    }

    #[test]
    fn identical_timestamps_do_not_divide_by_zero() {
        let mut tracker = VelocityTracker::default();
        feed(&mut tracker, Instant::now(), &[(5, 0.0, 0.0), (5, 40.0, 0.0)]);
        assert_eq!(tracker.velocity(), Point::ZERO);
    }

    #[test]
    fn capacity_is_bounded() {
        let mut tracker = VelocityTracker::default();
        let t0 = Instant::now();
        for i in 0..100u64 {
            tracker.add_sample(t0 + Duration::from_millis(i), Point::new(i as f32, 0.0));
        }
        assert_eq!(tracker.len(), MAX_SAMPLES);
    }

    #[test]
    fn clear_discards_samples() {
        let mut tracker = VelocityTracker::default();
        feed(&mut tracker, Instant::now(), &[(0, 0.0, 0.0), (10, 10.0, 0.0)]);
        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.velocity(), Point::ZERO);
    }
}
