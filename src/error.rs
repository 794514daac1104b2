//! Error types for boundary-condition construction and evaluation
//!
//! Three kinds of failure exist in this crate:
//!
//! - **Binding**: a value expression and its species bindings do not line up
//!   (an argument nobody can supply, a mapping nobody declared). Detected as
//!   early as possible — at boundary-condition construction or scenario
//!   validation — so a mis-bound problem never reaches the solver.
//! - **Domain**: a runtime evaluation left the physical domain (non-positive
//!   temperature in an Arrhenius law, negative pressure under a square root).
//!   Raised at evaluation time and propagated synchronously to the caller.
//! - **Configuration**: a boundary condition was built with missing or
//!   unphysical parameters.
//!
//! No error is retried or swallowed inside this crate; the external solver
//! decides whether to abort or re-attempt with different settings.

use thiserror::Error;

// =================================================================================================
// Error Kind
// =================================================================================================

/// Coarse classification of a [`HytranError`]
///
/// Useful for callers that only need to decide *when* a failure can occur
/// (setup vs. evaluation) rather than exactly what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Value-expression binding failure (detected at setup)
    Binding,

    /// Physically undefined evaluation (detected at runtime)
    Domain,

    /// Missing or unphysical boundary-condition parameter
    Configuration,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Binding => write!(f, "binding"),
            ErrorKind::Domain => write!(f, "domain"),
            ErrorKind::Configuration => write!(f, "configuration"),
        }
    }
}

// =================================================================================================
// Error Enum
// =================================================================================================

/// Errors raised by the boundary-condition subsystem
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HytranError {
    /// A value expression declares a formal argument the binder cannot supply
    #[error("value expression declares argument '{argument}' outside the allowed set")]
    UnknownArgument { argument: String },

    /// A declared concentration argument has no entry in the species-dependent map
    #[error("concentration argument '{argument}' has no species mapping")]
    UnmappedConcentration { argument: String },

    /// A species binding references a species the problem never declared
    #[error("species '{species}' is not declared in the problem")]
    UnknownSpecies { species: String },

    /// The field snapshot carries no value for a species a binding needs
    #[error("no concentration value supplied for species '{species}'")]
    MissingConcentration { species: String },

    /// Arrhenius laws are undefined for T ≤ 0
    #[error("temperature {temperature} K is outside the physical domain (T > 0 required)")]
    NonPositiveTemperature { temperature: f64 },

    /// Square root of a negative partial pressure (Sieverts' law)
    #[error("pressure evaluated to {pressure} Pa, negative pressure is not physical")]
    NegativePressure { pressure: f64 },

    /// Two surface subdomains share the same id
    #[error("duplicate surface subdomain id {id}")]
    DuplicateSubdomain { id: u32 },

    /// Two species share the same name
    #[error("duplicate species '{name}'")]
    DuplicateSpecies { name: String },

    /// A boundary condition references a subdomain outside the domain description
    #[error("surface subdomain id {id} is not part of the domain")]
    UnknownSubdomain { id: u32 },

    /// A numeric parameter is missing, non-finite, or unphysical
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A surface reaction was declared without reactant species
    #[error("surface reaction requires at least one reactant species")]
    NoReactants,
}

impl HytranError {
    /// Classify this error into one of the three failure kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            HytranError::UnknownArgument { .. }
            | HytranError::UnmappedConcentration { .. }
            | HytranError::UnknownSpecies { .. }
            | HytranError::MissingConcentration { .. } => ErrorKind::Binding,

            HytranError::NonPositiveTemperature { .. }
            | HytranError::NegativePressure { .. } => ErrorKind::Domain,

            HytranError::DuplicateSubdomain { .. }
            | HytranError::DuplicateSpecies { .. }
            | HytranError::UnknownSubdomain { .. }
            | HytranError::InvalidParameter { .. }
            | HytranError::NoReactants => ErrorKind::Configuration,
        }
    }
}

/// Crate-wide result alias
pub type HytranResult<T> = Result<T, HytranError>;

// =================================================================================================
// Tests
// =================================================================================================
