//! Boundary conditions for hydrogen transport and heat transfer
//!
//! All variants implement the same two capabilities — *classify* (how do I
//! contribute to the governing equations?) and *evaluate* (what is my value
//! at this point?) — and the [`BoundaryCondition`] enum closes the taxonomy
//! so the assembly adapter can dispatch over the tag.
//!
//! # Available Conditions
//!
//! ## Essential (constrain the field value)
//!
//! - [`FixedConcentrationBC`] — prescribe one species' concentration
//! - [`FixedTemperatureBC`] — prescribe the temperature
//! - [`SievertsBC`] — solubility equilibrium `c = S(T)·√P` (diatomic gas)
//! - [`HenrysBC`] — solubility equilibrium `c = K_H(T)·P`
//!
//! ## Natural (inject a boundary flux)
//!
//! - [`ParticleFluxBC`] — prescribed particle flux, optionally
//!   concentration-coupled
//! - [`HeatFluxBC`] — prescribed heat flux
//! - [`SurfaceReactionBC`] — dissociation/recombination kinetics,
//!   `k_d(T)·P − k_r(T)·∏c`
//!
//! # Evaluation contract
//!
//! Conditions are built once at problem setup and consulted at every
//! nonlinear iteration of every time step. Evaluation is pure and stateless:
//! it reads only the supplied [`EvalPoint`] and the condition's own bound
//! parameters, never blocks, and never retains anything between calls.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod dirichlet;
pub mod flux;
pub mod kinetics;
pub mod value;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use dirichlet::{FixedConcentrationBC, FixedTemperatureBC, HenrysBC, SievertsBC};
pub use flux::{HeatFluxBC, ParticleFluxBC, SurfaceReactionBC};
pub use kinetics::{ArrheniusLaw, K_B};
pub use value::{ArgumentSet, BoundArgs, BoundaryValue};

use crate::domain::{DomainDescription, SurfaceSubdomain};
use crate::error::{HytranError, HytranResult};
use crate::physics::{EvalPoint, Species, TargetField};

// =================================================================================================
// Contribution Kind
// =================================================================================================

/// How a boundary condition enters the governing equations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContributionKind {
    /// Constrains the field value pointwise (Dirichlet-type)
    Essential,

    /// Adds a flux term to the boundary integral (Robin/Neumann-type)
    Natural,
}

impl std::fmt::Display for ContributionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContributionKind::Essential => write!(f, "essential"),
            ContributionKind::Natural => write!(f, "natural"),
        }
    }
}

// =================================================================================================
// Boundary Condition (closed taxonomy)
// =================================================================================================

/// Any of the seven boundary-condition variants
///
/// # Example
///
/// ```rust
/// use hytran_rs::bc::{BoundaryCondition, BoundaryValue, ContributionKind, FixedConcentrationBC};
/// use hytran_rs::domain::SurfaceSubdomain;
/// use hytran_rs::physics::Species;
///
/// let bc: BoundaryCondition = FixedConcentrationBC::new(
///     SurfaceSubdomain::surface(1),
///     Species::new("H"),
///     BoundaryValue::constant(1e20),
/// ).unwrap().into();
///
/// assert_eq!(bc.kind(), ContributionKind::Essential);
/// assert_eq!(bc.subdomain().id(), 1);
/// ```
#[derive(Debug, Clone)]
pub enum BoundaryCondition {
    /// Essential constraint on one species' concentration
    FixedConcentration(FixedConcentrationBC),

    /// Boundary particle flux for one species
    ParticleFlux(ParticleFluxBC),

    /// Essential constraint on the temperature field
    FixedTemperature(FixedTemperatureBC),

    /// Boundary heat flux for the temperature equation
    HeatFlux(HeatFluxBC),

    /// Sieverts' law solubility equilibrium
    Sieverts(SievertsBC),

    /// Henry's law solubility equilibrium
    Henrys(HenrysBC),

    /// Surface dissociation/recombination kinetics
    SurfaceReaction(SurfaceReactionBC),
}

impl BoundaryCondition {
    /// How this condition contributes to the governing equations
    pub fn kind(&self) -> ContributionKind {
        match self {
            BoundaryCondition::FixedConcentration(_)
            | BoundaryCondition::FixedTemperature(_)
            | BoundaryCondition::Sieverts(_)
            | BoundaryCondition::Henrys(_) => ContributionKind::Essential,

            BoundaryCondition::ParticleFlux(_)
            | BoundaryCondition::HeatFlux(_)
            | BoundaryCondition::SurfaceReaction(_) => ContributionKind::Natural,
        }
    }

    /// Subdomain this condition applies on
    pub fn subdomain(&self) -> SurfaceSubdomain {
        match self {
            BoundaryCondition::FixedConcentration(bc) => bc.subdomain(),
            BoundaryCondition::ParticleFlux(bc) => bc.subdomain(),
            BoundaryCondition::FixedTemperature(bc) => bc.subdomain(),
            BoundaryCondition::HeatFlux(bc) => bc.subdomain(),
            BoundaryCondition::Sieverts(bc) => bc.subdomain(),
            BoundaryCondition::Henrys(bc) => bc.subdomain(),
            BoundaryCondition::SurfaceReaction(bc) => bc.subdomain(),
        }
    }

    /// Fields this condition acts on
    ///
    /// Every variant targets exactly one field except the surface reaction,
    /// which feeds the same net flux to each of its reactants.
    pub fn targets(&self) -> Vec<TargetField> {
        match self {
            BoundaryCondition::FixedConcentration(bc) => {
                vec![TargetField::Species(bc.species().clone())]
            }
            BoundaryCondition::ParticleFlux(bc) => {
                vec![TargetField::Species(bc.species().clone())]
            }
            BoundaryCondition::FixedTemperature(_) | BoundaryCondition::HeatFlux(_) => {
                vec![TargetField::Temperature]
            }
            BoundaryCondition::Sieverts(bc) => {
                vec![TargetField::Species(bc.species().clone())]
            }
            BoundaryCondition::Henrys(bc) => {
                vec![TargetField::Species(bc.species().clone())]
            }
            BoundaryCondition::SurfaceReaction(bc) => bc
                .reactants()
                .iter()
                .map(|species| TargetField::Species(species.clone()))
                .collect(),
        }
    }

    /// Name of the variant (used for display and logging)
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryCondition::FixedConcentration(_) => "fixed concentration",
            BoundaryCondition::ParticleFlux(_) => "particle flux",
            BoundaryCondition::FixedTemperature(_) => "fixed temperature",
            BoundaryCondition::HeatFlux(_) => "heat flux",
            BoundaryCondition::Sieverts(_) => "Sieverts' law",
            BoundaryCondition::Henrys(_) => "Henry's law",
            BoundaryCondition::SurfaceReaction(_) => "surface reaction",
        }
    }

    /// Evaluate the condition's value at one point
    ///
    /// For essential conditions this is the value the field is pinned to;
    /// for natural conditions it is the physical boundary flux.
    pub fn evaluate(&self, point: &EvalPoint) -> HytranResult<f64> {
        match self {
            BoundaryCondition::FixedConcentration(bc) => bc.evaluate(point),
            BoundaryCondition::ParticleFlux(bc) => bc.evaluate(point),
            BoundaryCondition::FixedTemperature(bc) => bc.evaluate(point),
            BoundaryCondition::HeatFlux(bc) => bc.evaluate(point),
            BoundaryCondition::Sieverts(bc) => bc.evaluate(point),
            BoundaryCondition::Henrys(bc) => bc.evaluate(point),
            BoundaryCondition::SurfaceReaction(bc) => bc.evaluate(point),
        }
    }

    /// Check this condition against the problem's domain description
    ///
    /// Verifies that the subdomain id is registered, that every targeted
    /// species is declared, and that every species referenced by a
    /// species-dependent map is declared. Called by
    /// [`Scenario::new`](crate::assembly::Scenario::new) so that a dangling
    /// reference fails fast, before a costly solve begins.
    pub fn validate_against(&self, domain: &DomainDescription) -> HytranResult<()> {
        let subdomain = self.subdomain();
        if domain.subdomain(subdomain.id()).is_none() {
            return Err(HytranError::UnknownSubdomain { id: subdomain.id() });
        }

        let check_species = |species: &Species| -> HytranResult<()> {
            if domain.species(species.name()).is_none() {
                return Err(HytranError::UnknownSpecies {
                    species: species.name().to_string(),
                });
            }
            Ok(())
        };

        for field in self.targets() {
            if let TargetField::Species(species) = &field {
                check_species(species)?;
            }
        }

        if let BoundaryCondition::ParticleFlux(bc) = self {
            for species in bc.species_dependent_value().values() {
                check_species(species)?;
            }
        }

        Ok(())
    }
}

// ==================== Conversions from the variant structs ====================

impl From<FixedConcentrationBC> for BoundaryCondition {
    fn from(bc: FixedConcentrationBC) -> Self {
        BoundaryCondition::FixedConcentration(bc)
    }
}

impl From<ParticleFluxBC> for BoundaryCondition {
    fn from(bc: ParticleFluxBC) -> Self {
        BoundaryCondition::ParticleFlux(bc)
    }
}

impl From<FixedTemperatureBC> for BoundaryCondition {
    fn from(bc: FixedTemperatureBC) -> Self {
        BoundaryCondition::FixedTemperature(bc)
    }
}

impl From<HeatFluxBC> for BoundaryCondition {
    fn from(bc: HeatFluxBC) -> Self {
        BoundaryCondition::HeatFlux(bc)
    }
}

impl From<SievertsBC> for BoundaryCondition {
    fn from(bc: SievertsBC) -> Self {
        BoundaryCondition::Sieverts(bc)
    }
}

impl From<HenrysBC> for BoundaryCondition {
    fn from(bc: HenrysBC) -> Self {
        BoundaryCondition::Henrys(bc)
    }
}

impl From<SurfaceReactionBC> for BoundaryCondition {
    fn from(bc: SurfaceReactionBC) -> Self {
        BoundaryCondition::SurfaceReaction(bc)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
