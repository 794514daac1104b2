//! Integration tests: boundary conditions + assembly adapter
//!
//! These tests drive the crate the way an external assembler would: build a
//! scenario once, classify it, then evaluate contributions repeatedly with
//! changing field snapshots, as if inside a nonlinear solve loop.

use hytran_rs::prelude::*;
use nalgebra::Point3;
use std::collections::HashMap;

mod common;
use common::{point_at, standard_domain};

// =================================================================================================
// Scenario Construction
// =================================================================================================

#[test]
fn test_full_problem_setup() {
    let hydrogen = Species::new("H");

    let upstream = SievertsBC::new(
        SurfaceSubdomain::surface(1),
        hydrogen.clone(),
        3.0e21,
        0.2,
        BoundaryValue::of_time(|t| 1e5 * (1.0 - (-t).exp())),
    )
    .unwrap();

    let downstream = SurfaceReactionBC::new(
        SurfaceSubdomain::surface(2),
        vec![hydrogen.clone()],
        3.2e-15,
        1.16,
        0.0,
        0.0,
        0.0,
    )
    .unwrap();

    let wall_temperature = FixedTemperatureBC::new(
        SurfaceSubdomain::surface(1),
        BoundaryValue::constant(600.0),
    )
    .unwrap();

    let scenario = Scenario::new(
        standard_domain(),
        vec![upstream.into(), downstream.into(), wall_temperature.into()],
    )
    .unwrap();

    // three conditions, one field each
    assert_eq!(scenario.contributions().len(), 3);
    assert_eq!(scenario.essential_contributions().len(), 2);
}

#[test]
fn test_setup_fails_fast_on_unknown_species() {
    let bc = FixedConcentrationBC::new(
        SurfaceSubdomain::surface(1),
        Species::new("He"),
        BoundaryValue::constant(1.0),
    )
    .unwrap();

    let error = Scenario::new(standard_domain(), vec![bc.into()]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Binding);
}

#[test]
fn test_setup_fails_fast_on_incomplete_binding() {
    // flux value reads a concentration nobody mapped — caught at BC
    // construction, long before any evaluation
    let arguments = ArgumentSet::empty().with_concentration("c");
    let result = ParticleFluxBC::new(
        SurfaceSubdomain::surface(1),
        Species::new("H"),
        BoundaryValue::bound(arguments, |args| args.concentrations[0]),
    );

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Binding);
}

// =================================================================================================
// Evaluation inside a mock solve loop
// =================================================================================================

#[test]
fn test_reaction_flux_across_newton_iterations() {
    let hydrogen = Species::new("H");

    let reaction = SurfaceReactionBC::new(
        SurfaceSubdomain::surface(2),
        vec![hydrogen.clone()],
        1.0,
        0.1,
        1e-5,
        0.1,
        1e5,
    )
    .unwrap();

    let scenario = Scenario::new(standard_domain(), vec![reaction.into()]).unwrap();
    let contributions = scenario.contributions();
    assert_eq!(contributions.len(), 1);

    // mimic Newton iterations: same point, concentration updated each pass
    let mut previous_flux = f64::INFINITY;
    for iteration in 0..5 {
        let concentration = 2.0 / (iteration + 1) as f64;
        let fields = FieldSnapshot::empty().with_concentration(&hydrogen, concentration);
        let point = point_at(0.0, 500.0, &fields);

        let flux = contributions[0].evaluate(&point).unwrap();

        let k_d = 1e-5 * (-0.1 / (K_B * 500.0)).exp();
        let k_r = 1.0 * (-0.1 / (K_B * 500.0)).exp();
        assert!(common::relative_error(flux, k_d * 1e5 - k_r * concentration) < 1e-12);

        // recombination weakens as the surface empties, net flux grows
        assert!(flux > previous_flux || iteration == 0);
        previous_flux = flux;
    }
}

#[test]
fn test_concentration_coupled_flux_samples_other_species() {
    let hydrogen = Species::new("H");
    let deuterium = Species::new("D");

    // hydrogen flux driven by the local deuterium inventory
    let arguments = ArgumentSet::empty()
        .with_temperature()
        .with_concentration("cd");
    let mut map = HashMap::new();
    map.insert("cd".to_string(), deuterium.clone());

    let bc = ParticleFluxBC::with_species_dependent_value(
        SurfaceSubdomain::surface(1),
        hydrogen.clone(),
        BoundaryValue::bound(arguments, |args| {
            -1e-6 * args.temperature * args.concentrations[0]
        }),
        map,
    )
    .unwrap();

    let scenario = Scenario::new(standard_domain(), vec![bc.into()]).unwrap();
    let contributions = scenario.contributions();

    let fields = FieldSnapshot::empty()
        .with_concentration(&hydrogen, 7.0)
        .with_concentration(&deuterium, 3.0);
    let point = point_at(0.0, 500.0, &fields);

    // reads D (3.0), not H (7.0)
    let flux = contributions[0].evaluate(&point).unwrap();
    assert!(common::relative_error(flux, -1e-6 * 500.0 * 3.0) < 1e-12);

    // natural term enters the residual with a minus sign
    let integrand = contributions[0].residual_integrand(&point).unwrap();
    assert_eq!(integrand, -flux);
}

#[test]
fn test_round_trip_construct_classify_evaluate_twice() {
    let bc = FixedConcentrationBC::new(
        SurfaceSubdomain::surface(1),
        Species::new("H"),
        BoundaryValue::of_position_time_temperature(
            |x, t, temperature| 10.0 + x[0] * x[0] + t + temperature,
        ),
    )
    .unwrap();

    let scenario = Scenario::new(standard_domain(), vec![bc.into()]).unwrap();
    let contributions = scenario.contributions();

    let fields = FieldSnapshot::empty();
    let point = EvalPoint::new(Point3::new(1.0, 0.0, 0.0), 2.0, 300.0, &fields);

    let first = contributions[0].evaluate(&point).unwrap();
    let second = contributions[0].evaluate(&point).unwrap();

    assert_eq!(first, 313.0);
    assert_eq!(first, second);
}

// =================================================================================================
// Zero-flux Default
// =================================================================================================

#[test]
fn test_unconstrained_boundary_is_implicit_zero_flux() {
    // one essential BC for H on surface 1; nothing anywhere else
    let bc = FixedConcentrationBC::new(
        SurfaceSubdomain::surface(1),
        Species::new("H"),
        BoundaryValue::constant(1e20),
    )
    .unwrap();
    let scenario = Scenario::new(standard_domain(), vec![bc.into()]).unwrap();

    let hydrogen_field = TargetField::Species(Species::new("H"));
    let deuterium_field = TargetField::Species(Species::new("D"));

    // H on surface 2: unconstrained → implicit zero flux
    let on_free_surface =
        scenario.natural_contributions(SurfaceSubdomain::surface(2), &hydrogen_field);
    assert_eq!(on_free_surface.len(), 1);
    assert!(on_free_surface[0].is_implicit_zero());

    // D anywhere: unconstrained → implicit zero flux
    let deuterium_free =
        scenario.natural_contributions(SurfaceSubdomain::surface(1), &deuterium_field);
    assert!(deuterium_free[0].is_implicit_zero());

    // temperature everywhere: unconstrained → implicit zero flux
    let temperature_free =
        scenario.natural_contributions(SurfaceSubdomain::surface(2), &TargetField::Temperature);
    assert!(temperature_free[0].is_implicit_zero());

    // the implicit contribution evaluates to zero at any state
    let fields = FieldSnapshot::empty();
    let point = point_at(123.0, 777.0, &fields);
    assert_eq!(on_free_surface[0].evaluate(&point).unwrap(), 0.0);
    assert_eq!(on_free_surface[0].residual_integrand(&point).unwrap(), 0.0);
}

// =================================================================================================
// Domain Failures mid-loop
// =================================================================================================

#[test]
fn test_domain_error_propagates_to_assembler() {
    // pressure history dips negative: the assembler must see the failure
    // synchronously, not a clamped value
    let bc = SievertsBC::new(
        SurfaceSubdomain::surface(1),
        Species::new("H"),
        1e21,
        0.1,
        BoundaryValue::of_time(|t| 1e4 * (5.0 - t)),
    )
    .unwrap();

    let scenario = Scenario::new(standard_domain(), vec![bc.into()]).unwrap();
    let contributions = scenario.contributions();

    let fields = FieldSnapshot::empty();

    assert!(contributions[0].evaluate(&point_at(1.0, 600.0, &fields)).is_ok());

    let error = contributions[0]
        .evaluate(&point_at(6.0, 600.0, &fields))
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Domain);
}

#[test]
fn test_batch_evaluation_matches_loop() {
    let bc: BoundaryCondition = HeatFluxBC::new(
        SurfaceSubdomain::surface(1),
        BoundaryValue::of_temperature(|temperature| -2.0 * (temperature - 300.0)),
    )
    .unwrap()
    .into();

    let contributions = classify(&bc);
    let fields = FieldSnapshot::empty();

    let points: Vec<EvalPoint> = (0..50)
        .map(|step| EvalPoint::new(Point3::origin(), 0.0, 300.0 + step as f64, &fields))
        .collect();

    let batch = evaluate_batch(&contributions[0], &points).unwrap();

    for (step, value) in batch.iter().enumerate() {
        assert_eq!(*value, -2.0 * step as f64);
    }
}
