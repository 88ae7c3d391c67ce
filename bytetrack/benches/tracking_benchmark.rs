//! Benchmarks for the tracking pipeline

use bytetrack::{Bbox, ByteTracker, Detection, TrackerConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn create_test_detections(n_detections: usize, n_frames: usize) -> Vec<Vec<Detection>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n_frames)
        .map(|frame| {
            (0..n_detections)
                .map(|i| {
                    let x = (frame * 10 + i * 60) as f32 + rng.gen_range(-2.0..2.0);
                    let y = (frame * 5 + i * 40) as f32 + rng.gen_range(-2.0..2.0);
                    Detection::new(Bbox::new(x, y, x + 50.0, y + 30.0), 0.9)
                })
                .collect()
        })
        .collect()
}

fn bench_tracker_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker_update_10_frames");
    for n_detections in [10usize, 50, 100] {
        let frames = create_test_detections(n_detections, 10);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_detections),
            &frames,
            |b, frames| {
                b.iter_batched(
                    || ByteTracker::new(TrackerConfig::default()),
                    |mut tracker| {
                        for detections in frames {
                            black_box(tracker.update(black_box(detections)));
                        }
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_association_heavy_overlap(c: &mut Criterion) {
    // Dense cluster of overlapping detections: worst case for the greedy
    // candidate sort
    let mut rng = StdRng::seed_from_u64(7);
    let detections: Vec<Detection> = (0..50)
        .map(|_| {
            let x = rng.gen_range(0.0..40.0);
            let y = rng.gen_range(0.0..40.0);
            Detection::new(Bbox::new(x, y, x + 60.0, y + 60.0), 0.9)
        })
        .collect();

    c.bench_function("dense_overlap_50_detections", |b| {
        b.iter_batched(
            || {
                let mut tracker = ByteTracker::new(TrackerConfig::default());
                tracker.update(&detections);
                tracker
            },
            |mut tracker| black_box(tracker.update(black_box(&detections))),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_tracker_update, bench_association_heavy_overlap);
criterion_main!(benches);
