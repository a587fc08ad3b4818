//! Benchmark: per-event cost of the gesture hot paths.
//!
//! Run with: `cargo bench -p rgesture --bench decision_bench`
//!
//! Covers the dismiss decision, a velocity fit over a full sample window,
//! and a drag move that swaps rows in a simulated list.

use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use rgesture::DragReorderController;
use rgesture::GestureController;
use rgesture::swipe::{FlingLimits, Release, decide};
use rgesture_core::{Instant, Point, PointerEvent, VelocityEstimator, VelocityTracker};
use rgesture_harness::{SimulatedList, TestClock};

fn bench_decide(c: &mut Criterion) {
    let limits = FlingLimits {
        min: 200.0,
        max: 8000.0,
    };
    let releases: Vec<Release> = (0..256)
        .map(|i| {
            let f = i as f32;
            Release {
                displacement: (f - 128.0) * 1.5,
                extent: 200.0,
                velocity: (f * 37.0) % 9000.0 - 4500.0,
                cross_velocity: (f * 11.0) % 600.0,
            }
        })
        .collect();

    c.bench_function("swipe/decide_256", |b| {
        b.iter(|| {
            let mut dismissed = 0;
            for r in &releases {
                if decide(black_box(*r), limits).is_some() {
                    dismissed += 1;
                }
            }
            dismissed
        });
    });
}

fn bench_velocity(c: &mut Criterion) {
    let t0 = Instant::now();
    c.bench_function("velocity/fit_20_samples", |b| {
        b.iter(|| {
            let mut tracker = VelocityTracker::new(Duration::from_millis(100));
            for i in 0..20u64 {
                let x = i as f32 * 7.5;
                tracker.add_sample(t0 + Duration::from_millis(i * 5), Point::new(x, 0.0));
            }
            black_box(tracker.velocity())
        });
    });
}

fn bench_drag_moves(c: &mut Criterion) {
    c.bench_function("drag/sweep_40_moves", |b| {
        b.iter(|| {
            let mut list = SimulatedList::vertical(50, 50.0, 300.0, 2000.0);
            let mut clock = TestClock::new();
            let mut ctl = DragReorderController::builder()
                .store((0..50).collect::<Vec<u32>>())
                .build()
                .expect("valid config");
            let at = list.center_of(1);
            ctl.handle_event(&PointerEvent::down(at, clock.now()), &mut list);
            let now = clock.advance_ms(500);
            ctl.on_frame(now, &mut list);
            for step in 1..=40 {
                let now = clock.advance_ms(8);
                let p = at + Point::new(0.0, step as f32 * 25.0);
                ctl.handle_event(&PointerEvent::moved(p, now), &mut list);
            }
            black_box(ctl.tracked_index())
        });
    });
}

criterion_group!(benches, bench_decide, bench_velocity, bench_drag_moves);
criterion_main!(benches);
