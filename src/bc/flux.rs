//! Natural (flux) boundary conditions
//!
//! The three variants in this file leave the field value free and instead
//! *inject a flux* through the boundary: the external solver adds the
//! evaluated term to the boundary integral of the targeted field's weak-form
//! residual.
//!
//! - [`ParticleFluxBC`] / [`HeatFluxBC`] prescribe the flux directly from a
//!   [`BoundaryValue`]. A particle flux may additionally depend on the
//!   current concentration of *other* species through a species-dependent
//!   map — this is what couples the boundary term into the nonlinear system.
//! - [`SurfaceReactionBC`] models a dissociation/recombination equilibrium
//!   between a gas phase and the dissolved reactants:
//!
//! ```text
//! flux = k_d(T) · P_gas − k_r(T) · ∏ c_reactant
//! ```
//!
//! with both rate constants thermally activated. The net flux applies
//! identically to every listed reactant — one shared reaction consumes or
//! produces them jointly.

use std::collections::HashMap;

use crate::bc::kinetics::ArrheniusLaw;
use crate::bc::value::BoundaryValue;
use crate::domain::SurfaceSubdomain;
use crate::error::{HytranError, HytranResult};
use crate::physics::{EvalPoint, Species};

// =================================================================================================
// Particle Flux
// =================================================================================================

/// Prescribed particle flux for one species
///
/// # Concentration coupling
///
/// When the flux value depends on concentrations, the species-dependent map
/// pairs each declared argument name with the [`Species`] whose current
/// field value must be sampled:
///
/// ```rust
/// use hytran_rs::bc::{ArgumentSet, BoundaryValue, ParticleFluxBC};
/// use hytran_rs::domain::SurfaceSubdomain;
/// use hytran_rs::physics::Species;
/// use std::collections::HashMap;
///
/// let arguments = ArgumentSet::empty()
///     .with_temperature()
///     .with_concentration("c");
///
/// let mut map = HashMap::new();
/// map.insert("c".to_string(), Species::new("H"));
///
/// let bc = ParticleFluxBC::with_species_dependent_value(
///     SurfaceSubdomain::surface(2),
///     Species::new("H"),
///     BoundaryValue::bound(arguments, |args| {
///         -1e-8 * args.temperature * args.concentrations[0]
///     }),
///     map,
/// ).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ParticleFluxBC {
    subdomain: SurfaceSubdomain,
    species: Species,
    value: BoundaryValue,
    species_dependent_value: HashMap<String, Species>,
}

impl ParticleFluxBC {
    /// Create a flux without concentration coupling
    pub fn new(
        subdomain: SurfaceSubdomain,
        species: Species,
        value: BoundaryValue,
    ) -> HytranResult<Self> {
        Self::with_species_dependent_value(subdomain, species, value, HashMap::new())
    }

    /// Create a flux whose value samples other species' concentrations
    ///
    /// Binding is checked eagerly: every declared concentration argument
    /// needs a map entry and every map key must be declared by the value.
    pub fn with_species_dependent_value(
        subdomain: SurfaceSubdomain,
        species: Species,
        value: BoundaryValue,
        species_dependent_value: HashMap<String, Species>,
    ) -> HytranResult<Self> {
        value.validate_bindings(Some(&species_dependent_value))?;
        Ok(Self { subdomain, species, value, species_dependent_value })
    }

    /// Subdomain this condition applies on
    pub fn subdomain(&self) -> SurfaceSubdomain {
        self.subdomain
    }

    /// Species receiving the flux
    pub fn species(&self) -> &Species {
        &self.species
    }

    /// The flux value
    pub fn value(&self) -> &BoundaryValue {
        &self.value
    }

    /// Argument-name → species bindings of the flux value
    pub fn species_dependent_value(&self) -> &HashMap<String, Species> {
        &self.species_dependent_value
    }

    /// Flux through the boundary at this point
    pub fn evaluate(&self, point: &EvalPoint) -> HytranResult<f64> {
        self.value.evaluate(point, Some(&self.species_dependent_value))
    }
}

// =================================================================================================
// Heat Flux
// =================================================================================================

/// Prescribed heat flux into the temperature equation
#[derive(Debug, Clone)]
pub struct HeatFluxBC {
    subdomain: SurfaceSubdomain,
    value: BoundaryValue,
}

impl HeatFluxBC {
    /// Create the condition
    ///
    /// The value may depend on position, time, and temperature (a
    /// temperature-dependent heat flux is a Robin condition). Concentration
    /// arguments are rejected — heat fluxes carry no species map.
    pub fn new(subdomain: SurfaceSubdomain, value: BoundaryValue) -> HytranResult<Self> {
        value.validate_bindings(None)?;
        Ok(Self { subdomain, value })
    }

    /// Subdomain this condition applies on
    pub fn subdomain(&self) -> SurfaceSubdomain {
        self.subdomain
    }

    /// The flux value
    pub fn value(&self) -> &BoundaryValue {
        &self.value
    }

    /// Heat flux through the boundary at this point
    pub fn evaluate(&self, point: &EvalPoint) -> HytranResult<f64> {
        self.value.evaluate(point, None)
    }
}

// =================================================================================================
// Surface Reaction
// =================================================================================================

/// Dissociation/recombination equilibrium at a surface
///
/// Models the kinetic exchange between a gas at fixed pressure and the
/// dissolved reactant species: dissociation pumps particles in at
/// `k_d(T) · P_gas`, recombination releases them at
/// `k_r(T) · ∏ c_reactant`. The same net flux feeds every reactant's
/// equation; the concentration product runs over all reactants.
#[derive(Debug, Clone)]
pub struct SurfaceReactionBC {
    subdomain: SurfaceSubdomain,
    reactants: Vec<Species>,
    gas_pressure: f64,
    recombination: ArrheniusLaw,
    dissociation: ArrheniusLaw,
}

impl SurfaceReactionBC {
    /// Create the condition
    ///
    /// # Arguments
    ///
    /// * `reactants` - Species consumed/produced by the shared reaction
    /// * `k_r0`, `e_kr` - Recombination constant parameters
    /// * `k_d0`, `e_kd` - Dissociation constant parameters
    /// * `gas_pressure` - Ambient gas pressure \[Pa\], fixed
    ///
    /// Returns [`HytranError::NoReactants`] for an empty reactant list and
    /// [`HytranError::InvalidParameter`] for a negative or non-finite gas
    /// pressure.
    pub fn new(
        subdomain: SurfaceSubdomain,
        reactants: Vec<Species>,
        k_r0: f64,
        e_kr: f64,
        k_d0: f64,
        e_kd: f64,
        gas_pressure: f64,
    ) -> HytranResult<Self> {
        if reactants.is_empty() {
            return Err(HytranError::NoReactants);
        }
        if !gas_pressure.is_finite() || gas_pressure < 0.0 {
            return Err(HytranError::InvalidParameter {
                name: "gas_pressure",
                reason: format!("must be finite and non-negative, got {}", gas_pressure),
            });
        }

        Ok(Self {
            subdomain,
            reactants,
            gas_pressure,
            recombination: ArrheniusLaw::new(k_r0, e_kr)?,
            dissociation: ArrheniusLaw::new(k_d0, e_kd)?,
        })
    }

    /// Subdomain this condition applies on
    pub fn subdomain(&self) -> SurfaceSubdomain {
        self.subdomain
    }

    /// Reactant species of the shared reaction
    pub fn reactants(&self) -> &[Species] {
        &self.reactants
    }

    /// Ambient gas pressure \[Pa\]
    pub fn gas_pressure(&self) -> f64 {
        self.gas_pressure
    }

    /// The recombination constant k_r(T)
    pub fn recombination(&self) -> &ArrheniusLaw {
        &self.recombination
    }

    /// The dissociation constant k_d(T)
    pub fn dissociation(&self) -> &ArrheniusLaw {
        &self.dissociation
    }

    /// Net flux at this point: `k_d(T)·P_gas − k_r(T)·∏ c`
    ///
    /// Reactant concentrations are sampled from the point's snapshot by
    /// species name; a missing value is a binding failure.
    pub fn evaluate(&self, point: &EvalPoint) -> HytranResult<f64> {
        let dissociation = self.dissociation.rate(point.temperature)?;
        let recombination = self.recombination.rate(point.temperature)?;

        let mut product = 1.0;
        for reactant in &self.reactants {
            let concentration = point
                .fields
                .concentration(reactant.name())
                .ok_or_else(|| HytranError::MissingConcentration {
                    species: reactant.name().to_string(),
                })?;
            product *= concentration;
        }

        Ok(dissociation * self.gas_pressure - recombination * product)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
