//! Essential boundary conditions
//!
//! The four variants in this file *constrain a field's value outright* on
//! their subdomain: the external solver enforces `field(x) = value(x, t, …)`
//! pointwise, as a constraint rather than a residual term.
//!
//! - [`FixedConcentrationBC`] / [`FixedTemperatureBC`] prescribe the value
//!   directly from a [`BoundaryValue`].
//! - [`SievertsBC`] / [`HenrysBC`] prescribe an equilibrium solubility
//!   concentration computed from an ambient partial pressure and a
//!   thermally-activated solubility coefficient:
//!
//! ```text
//! Sieverts:  c = S(T) · √P        (diatomic gas, dissociative absorption)
//! Henry:     c = K_H(T) · P       (molecular absorption)
//! ```
//!
//! The pressure is itself a [`BoundaryValue`] under the general binding
//! rules — usually a function of time, but nothing stops it from reading
//! position or temperature too.

use crate::bc::kinetics::ArrheniusLaw;
use crate::bc::value::BoundaryValue;
use crate::domain::SurfaceSubdomain;
use crate::error::{HytranError, HytranResult};
use crate::physics::{EvalPoint, Species};

// =================================================================================================
// Fixed Concentration
// =================================================================================================

/// Prescribes one species' concentration on a boundary subdomain
///
/// # Example
///
/// ```rust
/// use hytran_rs::bc::{BoundaryValue, FixedConcentrationBC};
/// use hytran_rs::domain::SurfaceSubdomain;
/// use hytran_rs::physics::Species;
///
/// let bc = FixedConcentrationBC::new(
///     SurfaceSubdomain::surface(1),
///     Species::new("H"),
///     BoundaryValue::of_time(|t| 1e19 * t),
/// ).unwrap();
///
/// assert_eq!(bc.species().name(), "H");
/// ```
#[derive(Debug, Clone)]
pub struct FixedConcentrationBC {
    subdomain: SurfaceSubdomain,
    species: Species,
    value: BoundaryValue,
}

impl FixedConcentrationBC {
    /// Create the condition
    ///
    /// The value may depend on position, time, and temperature. Fixed-value
    /// conditions take no species-dependent map, so a value declaring
    /// concentration arguments is rejected with a binding error.
    pub fn new(
        subdomain: SurfaceSubdomain,
        species: Species,
        value: BoundaryValue,
    ) -> HytranResult<Self> {
        value.validate_bindings(None)?;
        Ok(Self { subdomain, species, value })
    }

    /// Subdomain this condition applies on
    pub fn subdomain(&self) -> SurfaceSubdomain {
        self.subdomain
    }

    /// Species whose field is constrained
    pub fn species(&self) -> &Species {
        &self.species
    }

    /// The prescribed value
    pub fn value(&self) -> &BoundaryValue {
        &self.value
    }

    /// Concentration enforced at this point
    pub fn evaluate(&self, point: &EvalPoint) -> HytranResult<f64> {
        self.value.evaluate(point, None)
    }
}

// =================================================================================================
// Fixed Temperature
// =================================================================================================

/// Prescribes the temperature field on a boundary subdomain
#[derive(Debug, Clone)]
pub struct FixedTemperatureBC {
    subdomain: SurfaceSubdomain,
    value: BoundaryValue,
}

impl FixedTemperatureBC {
    /// Create the condition
    ///
    /// The value may depend on position and time. A temperature constraint
    /// reading the temperature field it prescribes would be circular, so a
    /// temperature-dependent value is rejected, as are concentration
    /// arguments.
    pub fn new(subdomain: SurfaceSubdomain, value: BoundaryValue) -> HytranResult<Self> {
        value.validate_bindings(None)?;
        if value.arguments().temperature {
            return Err(HytranError::UnknownArgument {
                argument: "temperature".to_string(),
            });
        }
        Ok(Self { subdomain, value })
    }

    /// Subdomain this condition applies on
    pub fn subdomain(&self) -> SurfaceSubdomain {
        self.subdomain
    }

    /// The prescribed value
    pub fn value(&self) -> &BoundaryValue {
        &self.value
    }

    /// Temperature enforced at this point \[K\]
    pub fn evaluate(&self, point: &EvalPoint) -> HytranResult<f64> {
        self.value.evaluate(point, None)
    }
}

// =================================================================================================
// Sieverts' Law
// =================================================================================================

/// Equilibrium concentration from Sieverts' law
///
/// For a diatomic gas dissolving atomically, the boundary concentration in
/// equilibrium with partial pressure P is `c = S(T) · √P`, with the
/// solubility `S(T) = S₀ · exp(-E_S / (k_B·T))`.
#[derive(Debug, Clone)]
pub struct SievertsBC {
    subdomain: SurfaceSubdomain,
    species: Species,
    solubility: ArrheniusLaw,
    pressure: BoundaryValue,
}

impl SievertsBC {
    /// Create the condition from solubility parameters and a pressure value
    ///
    /// # Arguments
    ///
    /// * `s_0` - Solubility pre-exponential S₀
    /// * `e_s` - Solubility activation energy E_S \[eV\]
    /// * `pressure` - Ambient partial pressure \[Pa\], a [`BoundaryValue`]
    ///   under the general binding rules
    pub fn new(
        subdomain: SurfaceSubdomain,
        species: Species,
        s_0: f64,
        e_s: f64,
        pressure: BoundaryValue,
    ) -> HytranResult<Self> {
        pressure.validate_bindings(None)?;
        Ok(Self {
            subdomain,
            species,
            solubility: ArrheniusLaw::new(s_0, e_s)?,
            pressure,
        })
    }

    /// Subdomain this condition applies on
    pub fn subdomain(&self) -> SurfaceSubdomain {
        self.subdomain
    }

    /// Species whose field is constrained
    pub fn species(&self) -> &Species {
        &self.species
    }

    /// The solubility law S(T)
    pub fn solubility(&self) -> &ArrheniusLaw {
        &self.solubility
    }

    /// The pressure value
    pub fn pressure(&self) -> &BoundaryValue {
        &self.pressure
    }

    /// Equilibrium concentration enforced at this point
    ///
    /// Returns [`HytranError::NegativePressure`] when the pressure evaluates
    /// negative — the square root is undefined and the solve must abort
    /// rather than clamp.
    pub fn evaluate(&self, point: &EvalPoint) -> HytranResult<f64> {
        let pressure = self.pressure.evaluate(point, None)?;
        if pressure < 0.0 {
            return Err(HytranError::NegativePressure { pressure });
        }

        let solubility = self.solubility.rate(point.temperature)?;
        Ok(solubility * pressure.sqrt())
    }
}

// =================================================================================================
// Henry's Law
// =================================================================================================

/// Equilibrium concentration from Henry's law
///
/// For molecular absorption the boundary concentration is linear in the
/// partial pressure: `c = K_H(T) · P` with
/// `K_H(T) = H₀ · exp(-E_H / (k_B·T))`.
#[derive(Debug, Clone)]
pub struct HenrysBC {
    subdomain: SurfaceSubdomain,
    species: Species,
    coefficient: ArrheniusLaw,
    pressure: BoundaryValue,
}

impl HenrysBC {
    /// Create the condition from coefficient parameters and a pressure value
    ///
    /// # Arguments
    ///
    /// * `h_0` - Coefficient pre-exponential H₀
    /// * `e_h` - Coefficient activation energy E_H \[eV\]
    /// * `pressure` - Ambient partial pressure \[Pa\]
    pub fn new(
        subdomain: SurfaceSubdomain,
        species: Species,
        h_0: f64,
        e_h: f64,
        pressure: BoundaryValue,
    ) -> HytranResult<Self> {
        pressure.validate_bindings(None)?;
        Ok(Self {
            subdomain,
            species,
            coefficient: ArrheniusLaw::new(h_0, e_h)?,
            pressure,
        })
    }

    /// Subdomain this condition applies on
    pub fn subdomain(&self) -> SurfaceSubdomain {
        self.subdomain
    }

    /// Species whose field is constrained
    pub fn species(&self) -> &Species {
        &self.species
    }

    /// The solubility coefficient K_H(T)
    pub fn coefficient(&self) -> &ArrheniusLaw {
        &self.coefficient
    }

    /// The pressure value
    pub fn pressure(&self) -> &BoundaryValue {
        &self.pressure
    }

    /// Equilibrium concentration enforced at this point
    pub fn evaluate(&self, point: &EvalPoint) -> HytranResult<f64> {
        let pressure = self.pressure.evaluate(point, None)?;
        let coefficient = self.coefficient.rate(point.temperature)?;
        Ok(coefficient * pressure)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
