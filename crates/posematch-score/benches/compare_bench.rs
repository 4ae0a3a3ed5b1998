//! Benchmarks for the video comparison engine.
//!
//! Run with: cargo bench --package posematch-score

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use posematch_core::{Frame, Landmark, Timestamp, Video};
use posematch_score::{compare_videos, ComparisonConfig};

/// Create a realistic capture: a full skeleton swaying slightly from frame
/// to frame, with mid-range visibility on the extremities.
fn create_video(frames: usize) -> Video {
    let frame_at = |t: usize| {
        let sway = (t as f64 * 0.1).sin() * 0.02;
        let landmarks = (0..33)
            .map(|i| {
                let spread = f64::from(i) * 0.015;
                let visibility = if i >= 25 { 0.7 } else { 0.95 };
                Landmark::with_visibility(
                    0.5 + sway + spread,
                    0.2 + spread,
                    sway * 0.5,
                    visibility,
                )
            })
            .collect();
        Frame::new(landmarks, Timestamp::from_millis(t as u64 * 33))
    };

    Video::new((0..frames).map(frame_at).collect())
}

fn bench_compare_videos(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_videos");
    let config = ComparisonConfig::default();

    for &frames in &[30usize, 120, 480] {
        let reference = create_video(frames);
        let comparison = create_video(frames + frames / 10);

        group.throughput(Throughput::Elements(frames as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(frames),
            &(reference, comparison),
            |b, (reference, comparison)| {
                b.iter(|| {
                    compare_videos(black_box(reference), black_box(comparison), black_box(&config))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compare_videos);
criterion_main!(benches);
