use criterion::{black_box, criterion_group, criterion_main, Criterion};
use couture::measurements::default_measurements;
use couture::pattern::corset::{CorsetControl, CorsetMeasurements, CorsetPattern};
use couture::pattern::{Pattern, Variant};
use couture::spline::cubic_spline_to_beziers;
use nalgebra::Vector2;
use once_cell::sync::Lazy;

/// The seven-point sleeve cap path for a T38 draft.
static CAP_POINTS: Lazy<Vec<Vector2<f64>>> = Lazy::new(|| {
    vec![
        Vector2::new(0.0, 14.333),
        Vector2::new(7.656, 9.414),
        Vector2::new(7.656, 4.778),
        Vector2::new(15.313, 0.0),
        Vector2::new(22.969, 7.167),
        Vector2::new(26.538, 11.676),
        Vector2::new(30.625, 14.333),
    ]
});

fn spline(c: &mut Criterion) {
    c.bench_function("cubic_spline_to_beziers/7", |b| {
        b.iter(|| cubic_spline_to_beziers(black_box(&CAP_POINTS)))
    });
}

fn corset(c: &mut Criterion) {
    let fm = default_measurements(38);

    c.bench_function("corset/build", |b| {
        b.iter(|| {
            CorsetPattern::new(
                CorsetMeasurements::from_full(black_box(&fm)),
                CorsetControl::default(),
            )
        })
    });

    let pattern = CorsetPattern::new(CorsetMeasurements::from_full(&fm), CorsetControl::default());
    c.bench_function("corset/render_svg", |b| {
        b.iter(|| pattern.render_svg(black_box(Variant::Construction)))
    });
}

criterion_group!(benches, spline, corset);
criterion_main!(benches);
