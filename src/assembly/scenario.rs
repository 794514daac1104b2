//! Simulation scenario definition
//!
//! A scenario combines a domain description with a set of boundary
//! conditions. It is the "WHAT to solve" of a transport problem — the
//! external solver brings the "HOW" (discretization, Newton iterations,
//! time stepping).
//!
//! Validation runs once, at construction: every condition must reference a
//! registered subdomain and declared species, and every value expression must
//! have a complete species binding. A mis-specified problem therefore fails
//! here, in setup, and never inside the solve loop.

use crate::assembly::contribution::{classify, Contribution};
use crate::bc::{BoundaryCondition, ContributionKind};
use crate::domain::{DomainDescription, SurfaceSubdomain};
use crate::error::HytranResult;
use crate::physics::TargetField;

// =================================================================================================
// Scenario
// =================================================================================================

/// A transport problem's boundary setup
///
/// # Example
///
/// ```rust
/// use hytran_rs::assembly::Scenario;
/// use hytran_rs::bc::{BoundaryValue, FixedConcentrationBC};
/// use hytran_rs::domain::{DomainDescription, SurfaceSubdomain};
/// use hytran_rs::physics::Species;
///
/// let domain = DomainDescription::new(
///     vec![SurfaceSubdomain::point(1), SurfaceSubdomain::point(2)],
///     vec![Species::new("H")],
/// ).unwrap();
///
/// let bc = FixedConcentrationBC::new(
///     SurfaceSubdomain::point(1),
///     Species::new("H"),
///     BoundaryValue::constant(1e20),
/// ).unwrap();
///
/// let scenario = Scenario::new(domain, vec![bc.into()]).unwrap();
/// assert_eq!(scenario.conditions().len(), 1);
/// ```
#[derive(Debug)]
pub struct Scenario {
    /// Boundary decomposition and declared species
    domain: DomainDescription,

    /// Boundary conditions of the problem
    conditions: Vec<BoundaryCondition>,
}

impl Scenario {
    /// Create a validated scenario
    ///
    /// Validates the domain description and every boundary condition against
    /// it, eagerly — a dangling subdomain id, an undeclared species, or an
    /// incomplete binding is reported here instead of mid-solve.
    pub fn new(
        domain: DomainDescription,
        conditions: Vec<BoundaryCondition>,
    ) -> HytranResult<Self> {
        domain.validate()?;
        for bc in &conditions {
            bc.validate_against(&domain)?;
        }

        log::debug!(
            "scenario validated: {} boundary conditions on {} subdomains, {} species",
            conditions.len(),
            domain.subdomain_count(),
            domain.species_count(),
        );

        Ok(Self { domain, conditions })
    }

    /// The domain description
    pub fn domain(&self) -> &DomainDescription {
        &self.domain
    }

    /// All boundary conditions
    pub fn conditions(&self) -> &[BoundaryCondition] {
        &self.conditions
    }

    /// Re-run the construction-time checks
    pub fn validate(&self) -> HytranResult<()> {
        self.domain.validate()?;
        for bc in &self.conditions {
            bc.validate_against(&self.domain)?;
        }
        Ok(())
    }

    // ===================================== Adapter queries =======================================

    /// All contributions of all conditions, classified
    pub fn contributions(&self) -> Vec<Contribution<'_>> {
        self.conditions.iter().flat_map(classify).collect()
    }

    /// The essential constraints of the problem
    ///
    /// Consumed once per assembly pass by the external solver to build its
    /// constraint set.
    pub fn essential_contributions(&self) -> Vec<Contribution<'_>> {
        self.contributions()
            .into_iter()
            .filter(|contribution| contribution.kind() == ContributionKind::Essential)
            .collect()
    }

    /// Natural contributions for one (subdomain, field) pair
    ///
    /// Returns every matching flux term — contributions from distinct
    /// conditions on the same region are additive. When the pair is
    /// completely unconstrained (no natural *and* no essential condition),
    /// the implicit zero-flux contribution is returned instead, so the
    /// assembler never requires an explicit no-flux condition. When an
    /// essential condition pins the field on this subdomain, the result is
    /// empty: there is no flux term to integrate on a constrained boundary.
    pub fn natural_contributions(
        &self,
        subdomain: SurfaceSubdomain,
        field: &TargetField,
    ) -> Vec<Contribution<'_>> {
        let matching = |contribution: &Contribution| {
            contribution.subdomain().id() == subdomain.id() && contribution.field() == field
        };

        let all = self.contributions();

        let natural: Vec<Contribution> = all
            .iter()
            .filter(|contribution| {
                contribution.kind() == ContributionKind::Natural && matching(contribution)
            })
            .cloned()
            .collect();

        if !natural.is_empty() {
            return natural;
        }

        let constrained = all.iter().any(|contribution| {
            contribution.kind() == ContributionKind::Essential && matching(contribution)
        });

        if constrained {
            Vec::new()
        } else {
            vec![Contribution::zero_flux(field.clone(), subdomain)]
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
