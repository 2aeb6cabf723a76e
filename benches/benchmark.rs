use criterion::{criterion_group, criterion_main, Criterion};
use error_trail::{CompositeError, FixedCapture, FrameVec, RenderPolicy, StackFrame};
use std::hint::black_box;

fn fixed_frames() -> FrameVec {
    (0..5)
        .map(|i| StackFrame::new(format!("app::layer{i}"), "app.rs", 40 + i))
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("new_with_real_capture", |b| {
        b.iter(|| CompositeError::new(black_box("benchmark error")))
    });

    let capture = FixedCapture::new(fixed_frames());
    group.bench_function("with_fixed_capture", |b| {
        b.iter(|| CompositeError::with_capture(black_box("benchmark error"), &capture))
    });

    group.finish();
}

fn bench_combination(c: &mut Criterion) {
    let capture = FixedCapture::new(fixed_frames());
    let base = CompositeError::with_capture("base", &capture);
    let other = CompositeError::with_capture("other", &capture);

    c.bench_function("combine_native", |b| {
        b.iter(|| black_box(&base).combine(black_box(other.clone())))
    });

    c.bench_function("combine_foreign", |b| {
        b.iter(|| {
            black_box(&base).combine_with(std::io::Error::other("benchmark error"), &capture)
        })
    });
}

fn bench_rendering(c: &mut Criterion) {
    let capture = FixedCapture::new(fixed_frames());
    let combined = CompositeError::with_capture("base", &capture)
        .combine(CompositeError::with_capture("first", &capture))
        .combine(CompositeError::with_capture("second", &capture));

    c.bench_function("render_bare", |b| {
        b.iter(|| black_box(&combined).render_with(RenderPolicy::OFF))
    });

    c.bench_function("render_traced", |b| {
        b.iter(|| {
            black_box(&combined).render_with(RenderPolicy {
                debug: false,
                trace: true,
            })
        })
    });
}

criterion_group!(benches, bench_construction, bench_combination, bench_rendering);
criterion_main!(benches);
