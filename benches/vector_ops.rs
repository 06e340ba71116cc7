//! Benchmarks for the core lane operations.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use chispa::{F32x3, F32x4, F64x2, I32x4, I64x2, U32x4};

fn bench_f32_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("f32x4");
    group.throughput(Throughput::Elements(4));

    let a = F32x4::new(1.0, 2.0, 3.0, 4.0);
    let b = F32x4::new(0.5, 1.5, 2.5, 3.5);

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(a) + black_box(b));
    });
    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(a) * black_box(b));
    });
    group.bench_function("div", |bench| {
        bench.iter(|| black_box(a) / black_box(b));
    });
    group.bench_function("sqrt", |bench| {
        bench.iter(|| black_box(a).sqrt());
    });
    group.finish();
}

fn bench_padded_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("f32x3");
    group.throughput(Throughput::Elements(3));

    let a = F32x3::new(1.0, 2.0, 3.0);
    let b = F32x3::new(0.5, 1.5, 2.5);

    // Measures the cost of substituting 1.0 into the padding divisor lane.
    group.bench_function("div", |bench| {
        bench.iter(|| black_box(a) / black_box(b));
    });
    group.finish();
}

fn bench_i32_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("i32x4");
    group.throughput(Throughput::Elements(4));

    let a = I32x4::new(1, -2, 3, -4);
    let b = I32x4::new(5, 6, -7, 8);

    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(a) * black_box(b));
    });
    group.bench_function("min", |bench| {
        bench.iter(|| black_box(a).min(black_box(b)));
    });
    group.bench_function("shr", |bench| {
        bench.iter(|| black_box(a) >> black_box(3));
    });
    group.bench_function("unsigned_abs", |bench| {
        bench.iter(|| black_box(a).unsigned_abs());
    });
    group.finish();
}

fn bench_u32_min_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("u32x4");
    group.throughput(Throughput::Elements(4));

    let a = U32x4::new(u32::MAX, 1, 1 << 31, 7);
    let b = U32x4::new(1, u32::MAX, (1 << 31) - 1, 7);

    group.bench_function("min", |bench| {
        bench.iter(|| black_box(a).min(black_box(b)));
    });
    group.finish();
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let f = F32x4::new(1.5, -2.5, 3.5, -4.5);
    group.bench_function("f32x4_to_i32x4", |bench| {
        bench.iter(|| black_box(f).to_i32x4());
    });

    let d = F64x2::new(1.5e9, -2.5e9);
    group.bench_function("f64x2_to_i64x2", |bench| {
        bench.iter(|| black_box(d).to_i64x2());
    });

    let i = I64x2::new(1 << 40, -(1 << 40));
    group.bench_function("i64x2_to_f64x2", |bench| {
        bench.iter(|| black_box(i).to_f64x2());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_f32_arithmetic,
    bench_padded_division,
    bench_i32_ops,
    bench_u32_min_max,
    bench_conversions
);
criterion_main!(benches);
