//! Criterion benchmarks for curve sampling, flight updates, and ribbon builds.
#![allow(missing_docs, unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flightpath::options::{Options, PathOptions};
use flightpath::path::{CurveType, PathCurve};
use flightpath::ribbon::RibbonMesh;
use flightpath::{Flight, FlightState, FrameInput};
use glam::Vec3;

fn reference_points() -> Vec<Vec3> {
    PathOptions::default()
        .control_points
        .iter()
        .copied()
        .map(Vec3::from)
        .collect()
}

fn curve_sampling_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");
    for curve_type in [
        CurveType::Centripetal,
        CurveType::Chordal,
        CurveType::CatmullRom { tension: 0.5 },
    ] {
        let curve = PathCurve::new(reference_points(), curve_type).unwrap();
        group.bench_function(format!("{curve_type:?}"), |b| {
            b.iter(|| black_box(curve.position(black_box(0.37))))
        });
    }
    group.finish();

    let curve = PathCurve::new(reference_points(), CurveType::Centripetal).unwrap();
    c.bench_function("arc_length_point_at", |b| {
        b.iter(|| black_box(curve.point_at(black_box(0.61))))
    });
}

fn flight_update_benchmark(c: &mut Criterion) {
    let flight = Flight::new(Options::default()).unwrap();
    let mut state = FlightState::default();
    let mut scroll = 0.0_f32;
    c.bench_function("flight_update", |b| {
        b.iter(|| {
            scroll = (scroll + 0.001) % 1.0;
            flight.update(&mut state, FrameInput::new(black_box(scroll), 1.0 / 60.0));
        })
    });
}

fn ribbon_build_benchmark(c: &mut Criterion) {
    let options = PathOptions::default();
    let curve = PathCurve::from_options(&options).unwrap();
    c.bench_function("ribbon_build_1000_segments", |b| {
        b.iter(|| black_box(RibbonMesh::build(&curve, &options)))
    });
}

criterion_group!(
    benches,
    curve_sampling_benchmark,
    flight_update_benchmark,
    ribbon_build_benchmark
);
criterion_main!(benches);
