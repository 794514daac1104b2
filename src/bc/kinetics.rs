//! Thermally-activated kinetic coefficients
//!
//! Solubilities and surface rate constants in hydrogen transport follow an
//! Arrhenius law: a pre-exponential factor damped by a Boltzmann term in the
//! activation energy. The same form serves Sieverts' and Henry's solubility
//! laws and the dissociation/recombination constants of surface reactions —
//! only the parameter values differ.
//!
//! ```text
//! coefficient(T) = A · exp(-Eₐ / (k_B · T))
//! ```
//!
//! Activation energies are in eV, so `k_B` is the Boltzmann constant in
//! eV/K. The law is undefined for T ≤ 0 and evaluation fails with a domain
//! error rather than silently clamping.

use crate::error::{HytranError, HytranResult};

/// Boltzmann constant \[eV/K\]
pub const K_B: f64 = 8.617333262e-5;

// =================================================================================================
// Arrhenius Law
// =================================================================================================

/// A thermally-activated coefficient
///
/// Pure function of temperature; holds no state between calls.
///
/// # Example
///
/// ```rust
/// use hytran_rs::bc::ArrheniusLaw;
///
/// // Sieverts solubility of hydrogen in a metal
/// let solubility = ArrheniusLaw::new(3.0e21, 0.2).unwrap();
///
/// let cold = solubility.rate(400.0).unwrap();
/// let hot = solubility.rate(800.0).unwrap();
/// assert!(hot > cold);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrheniusLaw {
    /// Pre-exponential factor A
    pre_exponential: f64,

    /// Activation energy Eₐ \[eV\]
    activation_energy: f64,
}

impl ArrheniusLaw {
    /// Create a law from its two parameters
    ///
    /// Returns [`HytranError::InvalidParameter`] when the pre-exponential is
    /// negative or either parameter is non-finite.
    pub fn new(pre_exponential: f64, activation_energy: f64) -> HytranResult<Self> {
        if !pre_exponential.is_finite() || pre_exponential < 0.0 {
            return Err(HytranError::InvalidParameter {
                name: "pre_exponential",
                reason: format!("must be finite and non-negative, got {}", pre_exponential),
            });
        }
        if !activation_energy.is_finite() {
            return Err(HytranError::InvalidParameter {
                name: "activation_energy",
                reason: format!("must be finite, got {}", activation_energy),
            });
        }

        Ok(Self { pre_exponential, activation_energy })
    }

    /// Pre-exponential factor A
    pub fn pre_exponential(&self) -> f64 {
        self.pre_exponential
    }

    /// Activation energy Eₐ \[eV\]
    pub fn activation_energy(&self) -> f64 {
        self.activation_energy
    }

    /// Evaluate the coefficient at a temperature \[K\]
    ///
    /// Returns [`HytranError::NonPositiveTemperature`] for T ≤ 0; the law is
    /// physically undefined there and the caller must abort the solve
    /// attempt rather than continue with a clamped value.
    pub fn rate(&self, temperature: f64) -> HytranResult<f64> {
        if !(temperature > 0.0) {
            return Err(HytranError::NonPositiveTemperature { temperature });
        }

        Ok(self.pre_exponential * (-self.activation_energy / (K_B * temperature)).exp())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
