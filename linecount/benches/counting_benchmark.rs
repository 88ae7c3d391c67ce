//! Benchmarks for the line-crossing counter

use bytetrack::{Bbox, TrackedBox};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linecount::{CountingLine, LineCounter, LineOrientation};
use std::hint::black_box;

fn create_track_frames(n_tracks: usize, n_frames: usize) -> Vec<Vec<TrackedBox>> {
    (0..n_frames)
        .map(|frame| {
            (0..n_tracks)
                .map(|i| {
                    // Every track ping-pongs across the line each frame
                    let base = if frame % 2 == 0 { 60.0 } else { 140.0 };
                    let x = base + (i * 3) as f32;
                    let y = (i * 30) as f32;
                    TrackedBox {
                        bbox: Bbox::new(x - 20.0, y, x + 20.0, y + 60.0),
                        track_id: i as u32,
                        score: 0.9,
                    }
                })
                .collect()
        })
        .collect()
}

fn bench_counter_update(c: &mut Criterion) {
    let line = CountingLine::new((100.0, 0.0), (100.0, 10_000.0), LineOrientation::Vertical);

    let mut group = c.benchmark_group("counter_update_30_frames");
    for n_tracks in [10usize, 100] {
        let frames = create_track_frames(n_tracks, 30);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_tracks),
            &frames,
            |b, frames| {
                b.iter_batched(
                    || LineCounter::new(line),
                    |mut counter| {
                        for (i, tracks) in frames.iter().enumerate() {
                            black_box(counter.update(black_box(tracks), i as f64 / 30.0));
                        }
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_counter_update);
criterion_main!(benches);
