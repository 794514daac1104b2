//! Solver-facing contributions
//!
//! The external assembler does not care which of the seven variants produced
//! a term — only *what kind* of term it is and *which field on which
//! subdomain* it touches. [`classify`] flattens a boundary condition into
//! that view: one [`Contribution`] per targeted field, each either an
//! essential constraint or a natural boundary integrand.

use crate::bc::{BoundaryCondition, ContributionKind};
use crate::domain::SurfaceSubdomain;
use crate::error::HytranResult;
use crate::physics::{EvalPoint, TargetField};

// =================================================================================================
// Contribution
// =================================================================================================

/// One solver-facing term produced by (at most) one boundary condition
///
/// # Kinds
///
/// - **Essential**: the solver must enforce `field(x) = evaluate(point)`
///   pointwise on the subdomain — a constraint, not a residual term.
/// - **Natural**: the solver must add
///   `∫ residual_integrand(point) · test_function` over the subdomain to the
///   targeted field's residual.
///
/// A contribution without a source condition is the implicit zero flux of an
/// unconstrained boundary region (symmetry/no-flux default): it evaluates to
/// zero everywhere and exists so that the assembler never needs an explicit
/// no-flux condition to be present.
#[derive(Debug, Clone)]
pub struct Contribution<'a> {
    kind: ContributionKind,
    field: TargetField,
    subdomain: SurfaceSubdomain,
    source: Option<&'a BoundaryCondition>,
}

impl<'a> Contribution<'a> {
    /// The implicit zero-flux contribution of an unconstrained region
    pub fn zero_flux(field: TargetField, subdomain: SurfaceSubdomain) -> Self {
        Self {
            kind: ContributionKind::Natural,
            field,
            subdomain,
            source: None,
        }
    }

    /// Essential constraint or natural flux term?
    pub fn kind(&self) -> ContributionKind {
        self.kind
    }

    /// Field this contribution targets
    pub fn field(&self) -> &TargetField {
        &self.field
    }

    /// Subdomain this contribution integrates/constrains over
    pub fn subdomain(&self) -> SurfaceSubdomain {
        self.subdomain
    }

    /// The originating boundary condition, if any
    pub fn source(&self) -> Option<&'a BoundaryCondition> {
        self.source
    }

    /// Check whether this is the implicit zero-flux default
    pub fn is_implicit_zero(&self) -> bool {
        self.source.is_none()
    }

    /// Physical value of the contribution at one point
    ///
    /// For essential contributions: the value the field is pinned to. For
    /// natural contributions: the boundary flux. The implicit zero-flux
    /// contribution always evaluates to 0.
    pub fn evaluate(&self, point: &EvalPoint) -> HytranResult<f64> {
        match self.source {
            Some(bc) => bc.evaluate(point),
            None => Ok(0.0),
        }
    }

    /// Signed weak-form integrand of a natural contribution
    ///
    /// An outward flux removes particles/heat from the domain, so the flux
    /// enters the residual with a minus sign:
    /// `residual += ∫ (−flux) · test_function`.
    ///
    /// # Panics
    ///
    /// Panics when called on an essential contribution — a constraint has no
    /// boundary integrand.
    pub fn residual_integrand(&self, point: &EvalPoint) -> HytranResult<f64> {
        match self.kind {
            ContributionKind::Natural => Ok(-self.evaluate(point)?),
            ContributionKind::Essential => {
                panic!("residual integrand requested for an essential constraint")
            }
        }
    }
}

// =================================================================================================
// Classification
// =================================================================================================

/// Flatten a boundary condition into solver-facing contributions
///
/// One contribution per targeted field: a single-field condition yields one
/// entry, a surface reaction yields one per reactant (each carrying the same
/// net flux). No variant ever produces both kinds at once.
///
/// # Example
///
/// ```rust
/// use hytran_rs::assembly::classify;
/// use hytran_rs::bc::{BoundaryCondition, BoundaryValue, ContributionKind, ParticleFluxBC};
/// use hytran_rs::domain::SurfaceSubdomain;
/// use hytran_rs::physics::Species;
///
/// let bc: BoundaryCondition = ParticleFluxBC::new(
///     SurfaceSubdomain::surface(1),
///     Species::new("H"),
///     BoundaryValue::constant(1e15),
/// ).unwrap().into();
///
/// let contributions = classify(&bc);
/// assert_eq!(contributions.len(), 1);
/// assert_eq!(contributions[0].kind(), ContributionKind::Natural);
/// ```
pub fn classify(bc: &BoundaryCondition) -> Vec<Contribution<'_>> {
    bc.targets()
        .into_iter()
        .map(|field| Contribution {
            kind: bc.kind(),
            field,
            subdomain: bc.subdomain(),
            source: Some(bc),
        })
        .collect()
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bc::{BoundaryValue, FixedConcentrationBC, SurfaceReactionBC};
    use crate::physics::{FieldSnapshot, Species};
    use nalgebra::Point3;

    #[test]
    fn test_classify_single_field() {
        let bc: BoundaryCondition = FixedConcentrationBC::new(
            SurfaceSubdomain::surface(1),
            Species::new("H"),
            BoundaryValue::constant(5.0),
        )
        .unwrap()
        .into();

        let contributions = classify(&bc);
        assert_eq!(contributions.len(), 1);
        assert_eq!(contributions[0].kind(), ContributionKind::Essential);
        assert_eq!(contributions[0].subdomain().id(), 1);
        assert!(!contributions[0].is_implicit_zero());
    }

    #[test]
    fn test_classify_reaction_fans_out() {
        let bc: BoundaryCondition = SurfaceReactionBC::new(
            SurfaceSubdomain::surface(2),
            vec![Species::new("H"), Species::new("D")],
            1.0,
            0.1,
            1e-5,
            0.1,
            1e5,
        )
        .unwrap()
        .into();

        let contributions = classify(&bc);
        assert_eq!(contributions.len(), 2);

        // every reactant receives the same net flux
        let mut fields = FieldSnapshot::empty();
        fields.set("H", 2.0);
        fields.set("D", 3.0);
        let point = EvalPoint::new(Point3::origin(), 0.0, 500.0, &fields);

        let first = contributions[0].evaluate(&point).unwrap();
        let second = contributions[1].evaluate(&point).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_flux_evaluates_to_zero() {
        let contribution = Contribution::zero_flux(
            TargetField::Species(Species::new("H")),
            SurfaceSubdomain::surface(3),
        );

        let fields = FieldSnapshot::empty();
        let point = EvalPoint::new(Point3::new(1.0, 2.0, 3.0), 42.0, 800.0, &fields);

        assert!(contribution.is_implicit_zero());
        assert_eq!(contribution.kind(), ContributionKind::Natural);
        assert_eq!(contribution.evaluate(&point).unwrap(), 0.0);
        assert_eq!(contribution.residual_integrand(&point).unwrap(), 0.0);
    }

    #[test]
    fn test_residual_integrand_sign() {
        let bc: BoundaryCondition = crate::bc::ParticleFluxBC::new(
            SurfaceSubdomain::surface(1),
            Species::new("H"),
            BoundaryValue::constant(2.0),
        )
        .unwrap()
        .into();

        let contributions = classify(&bc);
        let fields = FieldSnapshot::empty();
        let point = EvalPoint::new(Point3::origin(), 0.0, 300.0, &fields);

        assert_eq!(contributions[0].evaluate(&point).unwrap(), 2.0);
        assert_eq!(contributions[0].residual_integrand(&point).unwrap(), -2.0);
    }

    #[test]
    #[should_panic(expected = "residual integrand requested for an essential constraint")]
    fn test_residual_integrand_rejects_essential() {
        let bc: BoundaryCondition = FixedConcentrationBC::new(
            SurfaceSubdomain::surface(1),
            Species::new("H"),
            BoundaryValue::constant(5.0),
        )
        .unwrap()
        .into();

        let contributions = classify(&bc);
        let fields = FieldSnapshot::empty();
        let point = EvalPoint::new(Point3::origin(), 0.0, 300.0, &fields);

        let _ = contributions[0].residual_integrand(&point);
    }
}
