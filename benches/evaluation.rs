//! Performance benchmarks for boundary-condition evaluation
//!
//! The evaluation contract is hot: an external nonlinear solver calls
//! `evaluate` once per quadrature point per Newton iteration, so a 1D
//! problem with a few hundred boundary points and a handful of iterations
//! per step already reaches 10⁵–10⁶ evaluations per simulated second.
//!
//! # What We're Measuring
//!
//! 1. **Constant values**: the floor — no binding work at all
//! 2. **Bound expressions**: adapter construction + closure dispatch
//! 3. **Concentration coupling**: name → species → snapshot resolution
//! 4. **Kinetic laws**: the Arrhenius exponential in Sieverts/reaction BCs
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench evaluation
//!
//! # batch path with the parallel feature
//! cargo bench --bench evaluation --features parallel
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;
use std::hint::black_box;

use hytran_rs::prelude::*;
use nalgebra::Point3;

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Pointwise evaluation cost of the main value shapes
fn benchmark_pointwise_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pointwise Evaluation");

    let hydrogen = Species::new("H");
    let fields = FieldSnapshot::empty().with_concentration(&hydrogen, 4.2e19);
    let point = EvalPoint::new(Point3::new(0.1, 0.0, 0.0), 12.0, 600.0, &fields);

    // constant flux: the floor
    let constant: BoundaryCondition = ParticleFluxBC::new(
        SurfaceSubdomain::surface(1),
        hydrogen.clone(),
        BoundaryValue::constant(1e15),
    )
    .unwrap()
    .into();

    group.bench_function("constant flux", |b| {
        b.iter(|| constant.evaluate(black_box(&point)).unwrap())
    });

    // space/time/temperature expression
    let expression: BoundaryCondition = FixedConcentrationBC::new(
        SurfaceSubdomain::surface(1),
        hydrogen.clone(),
        BoundaryValue::of_position_time_temperature(|x, t, temperature| {
            1e19 * (1.0 + x[0]) * (1.0 - (-t).exp()) * (temperature / 600.0)
        }),
    )
    .unwrap()
    .into();

    group.bench_function("bound expression", |b| {
        b.iter(|| expression.evaluate(black_box(&point)).unwrap())
    });

    // concentration-coupled flux: full binding path
    let arguments = ArgumentSet::empty()
        .with_temperature()
        .with_concentration("c");
    let mut map = HashMap::new();
    map.insert("c".to_string(), hydrogen.clone());
    let coupled: BoundaryCondition = ParticleFluxBC::with_species_dependent_value(
        SurfaceSubdomain::surface(1),
        hydrogen.clone(),
        BoundaryValue::bound(arguments, |args| {
            -1e-8 * args.temperature * args.concentrations[0]
        }),
        map,
    )
    .unwrap()
    .into();

    group.bench_function("concentration-coupled flux", |b| {
        b.iter(|| coupled.evaluate(black_box(&point)).unwrap())
    });

    // Sieverts: Arrhenius + square root
    let sieverts: BoundaryCondition = SievertsBC::new(
        SurfaceSubdomain::surface(1),
        hydrogen.clone(),
        3.0e21,
        0.2,
        BoundaryValue::of_time(|t| 1e5 * (1.0 - (-t).exp())),
    )
    .unwrap()
    .into();

    group.bench_function("Sieverts equilibrium", |b| {
        b.iter(|| sieverts.evaluate(black_box(&point)).unwrap())
    });

    // surface reaction: two Arrhenius laws + product
    let reaction: BoundaryCondition = SurfaceReactionBC::new(
        SurfaceSubdomain::surface(1),
        vec![hydrogen.clone()],
        3.2e-15,
        1.16,
        1e-5,
        0.1,
        1e5,
    )
    .unwrap()
    .into();

    group.bench_function("surface reaction", |b| {
        b.iter(|| reaction.evaluate(black_box(&point)).unwrap())
    });

    group.finish();
}

/// Batch evaluation over growing point sets
///
/// Mirrors one assembly pass over all boundary quadrature points. With the
/// `parallel` feature, sizes above the threshold exercise the Rayon path.
fn benchmark_batch_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Evaluation");

    let hydrogen = Species::new("H");
    let fields = FieldSnapshot::empty().with_concentration(&hydrogen, 4.2e19);

    let bc: BoundaryCondition = SievertsBC::new(
        SurfaceSubdomain::surface(1),
        hydrogen.clone(),
        3.0e21,
        0.2,
        BoundaryValue::of_time_temperature(|t, temperature| {
            1e5 * (1.0 - (-t).exp()) * (temperature / 600.0)
        }),
    )
    .unwrap()
    .into();

    let contributions = classify(&bc);

    for size in [100, 1000, 10000] {
        let points: Vec<EvalPoint> = (0..size)
            .map(|step| {
                EvalPoint::new(
                    Point3::new(step as f64 * 1e-3, 0.0, 0.0),
                    10.0,
                    550.0 + (step % 100) as f64,
                    &fields,
                )
            })
            .collect();

        group.throughput(criterion::Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| evaluate_batch(black_box(&contributions[0]), black_box(points)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pointwise_evaluation,
    benchmark_batch_evaluation,
);
criterion_main!(benches);
