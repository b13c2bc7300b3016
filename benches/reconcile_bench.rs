//! Benchmark for the interval algebra and temporal clustering hot paths
//!
//! Run with: cargo bench --bench reconcile_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use video_reconcile_core::Interval;
use video_track_reconciliation::{
    cluster_by_name, intersection_length, merge_intervals, overlap_ratio, Mention,
};

/// Synthetic interval set: fixed-length windows with a deterministic mix of
/// overlapping and separated neighbors.
fn synthetic_intervals(count: usize) -> Vec<Interval> {
    (0..count)
        .map(|i| {
            let start = i as f64 * 0.7 + (i % 3) as f64 * 0.1;
            Interval::new(start, start + 1.0)
        })
        .collect()
}

fn synthetic_mentions(count: usize) -> Vec<Mention> {
    (0..count)
        .map(|i| Mention {
            object_name: format!("object {}", i % 8),
            start_time: i as f64 * 0.5,
            end_time: i as f64 * 0.5 + 0.8,
            reason: String::new(),
            scene_description: format!("scene {}", i % 16),
        })
        .collect()
}

fn bench_merge_intervals(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_intervals");

    for count in [16, 256, 4096] {
        let intervals = synthetic_intervals(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &intervals, |b, ivs| {
            b.iter(|| {
                let merged = merge_intervals(black_box(ivs), 0.3);
                black_box(merged);
            });
        });
    }

    group.finish();
}

fn bench_overlap_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_ratio");

    for count in [16, 256, 4096] {
        let a = merge_intervals(&synthetic_intervals(count), 0.0);
        let b = merge_intervals(&synthetic_intervals(count / 2), 0.0);
        group.bench_with_input(BenchmarkId::from_parameter(count), &(a, b), |bench, (a, b)| {
            bench.iter(|| {
                let ratio = overlap_ratio(black_box(a), black_box(b));
                black_box(ratio);
            });
        });
    }

    group.finish();
}

fn bench_intersection_length(c: &mut Criterion) {
    let a = merge_intervals(&synthetic_intervals(1024), 0.0);
    let b = merge_intervals(&synthetic_intervals(512), 0.0);

    c.bench_function("intersection_length_1024x512", |bench| {
        bench.iter(|| {
            let len = intersection_length(black_box(&a), black_box(&b));
            black_box(len);
        });
    });
}

fn bench_cluster_by_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_by_name");

    for count in [64, 1024] {
        let mentions = synthetic_mentions(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &mentions, |b, ms| {
            b.iter(|| {
                let clusters = cluster_by_name(black_box(ms), 0.3);
                black_box(clusters);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_merge_intervals,
    bench_overlap_ratio,
    bench_intersection_length,
    bench_cluster_by_name
);
criterion_main!(benches);
