//! Common utilities for integration tests

use hytran_rs::prelude::*;
use nalgebra::Point3;

/// Standard two-surface domain with hydrogen and deuterium declared
pub fn standard_domain() -> DomainDescription {
    DomainDescription::new(
        vec![SurfaceSubdomain::surface(1), SurfaceSubdomain::surface(2)],
        vec![Species::new("H"), Species::new("D")],
    )
    .expect("standard domain must validate")
}

/// Evaluation point at the origin with the given time/temperature
pub fn point_at<'a>(time: f64, temperature: f64, fields: &'a FieldSnapshot) -> EvalPoint<'a> {
    EvalPoint::new(Point3::origin(), time, temperature, fields)
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
