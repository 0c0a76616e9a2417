//! Benchmarks for the smoothing and velocity-shaping hot path

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use facepointer::geometry::PointF;
use facepointer::smoothing::{hamming_kernel, SmoothedPointBuffer};
use facepointer::velocity::{PointerVelocityShaper, SpeedSettings};

/// Deterministic noisy landmark trajectory
fn test_points(count: usize) -> Vec<PointF> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 0.1;
            PointF::new(
                600.0 + 80.0 * t.sin() + 3.0 * (t * 13.0).sin(),
                400.0 + 60.0 * t.cos() + 3.0 * (t * 11.0).cos(),
            )
        })
        .collect()
}

fn benchmark_buffer_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoothed_point_buffer");
    let points = test_points(1000);

    for size in [1, 4, 6, 12, 24] {
        group.bench_with_input(BenchmarkId::new("add_and_smooth", size), &size, |b, &size| {
            b.iter(|| {
                let mut buffer = SmoothedPointBuffer::new(size);
                for &p in &points {
                    buffer.add_point(black_box(p));
                    black_box(buffer.smooth());
                }
            });
        });
    }
    group.finish();
}

fn benchmark_kernel_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_kernel");
    for size in [1, 6, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(hamming_kernel(black_box(size))));
        });
    }
    group.finish();
}

fn benchmark_velocity_shaping(c: &mut Criterion) {
    let points = test_points(1000);
    let plain = PointerVelocityShaper::new(SpeedSettings::uniform(1.0), false);
    let accelerated = PointerVelocityShaper::new(SpeedSettings::uniform(1.0), true);

    let mut group = c.benchmark_group("velocity_shaper");
    group.bench_function("plain", |b| {
        b.iter(|| {
            for pair in points.windows(2) {
                black_box(plain.shape(black_box(pair[0]), black_box(pair[1])));
            }
        });
    });
    group.bench_function("accelerated", |b| {
        b.iter(|| {
            for pair in points.windows(2) {
                black_box(accelerated.shape(black_box(pair[0]), black_box(pair[1])));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_buffer_sizes,
    benchmark_kernel_construction,
    benchmark_velocity_shaping
);
criterion_main!(benches);
