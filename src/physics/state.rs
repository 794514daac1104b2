//! Field snapshots and evaluation points
//!
//! Boundary conditions are evaluated inside an external nonlinear-solve loop,
//! potentially many times per time step. At every evaluation the solver
//! supplies the *current* field values explicitly — there is no global
//! registry of "the" solution anywhere in this crate. This keeps every
//! evaluation pure: same snapshot in, same value out, no matter how many
//! times the solver probes the same point while assembling a Jacobian.
//!
//! # Data flow
//!
//! ```text
//! external solver ──► FieldSnapshot (concentrations at one point)
//!                 ──► EvalPoint (position, time, temperature, snapshot)
//!                 ──► BoundaryCondition::evaluate(&EvalPoint)
//! ```

use nalgebra::Point3;
use std::collections::HashMap;

use crate::physics::Species;

// =================================================================================================
// Field Snapshot
// =================================================================================================

/// Concentration values sampled at one evaluation point
///
/// Keys are species names; values are the current solution of that species'
/// concentration field at the point being evaluated. The snapshot is built by
/// the external mesh/solver layer and borrowed by every evaluation — boundary
/// conditions never retain it.
///
/// # Example
///
/// ```rust
/// use hytran_rs::physics::{FieldSnapshot, Species};
///
/// let hydrogen = Species::new("H");
///
/// let fields = FieldSnapshot::empty()
///     .with_concentration(&hydrogen, 1.5e19);
///
/// assert_eq!(fields.concentration("H"), Some(1.5e19));
/// assert_eq!(fields.concentration("D"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSnapshot {
    concentrations: HashMap<String, f64>,
}

impl FieldSnapshot {
    /// Create an empty snapshot (no species sampled)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder-style: add one species' concentration value
    pub fn with_concentration(mut self, species: &Species, value: f64) -> Self {
        self.set(species.name(), value);
        self
    }

    /// Set a concentration value by species name
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.concentrations.insert(name.into(), value);
    }

    /// Get a concentration value by species name
    pub fn concentration(&self, name: &str) -> Option<f64> {
        self.concentrations.get(name).copied()
    }

    /// Number of sampled species
    pub fn len(&self) -> usize {
        self.concentrations.len()
    }

    /// Check whether no species has been sampled
    pub fn is_empty(&self) -> bool {
        self.concentrations.is_empty()
    }
}

// =================================================================================================
// Evaluation Point
// =================================================================================================

/// Everything a boundary condition may read at one evaluation
///
/// Bundles the spatial position, the simulation time, the local temperature
/// and the borrowed concentration snapshot. The value binder routes only the
/// subset an expression declared — undeclared inputs are never forwarded, so
/// changing them cannot change the result.
#[derive(Debug, Clone, Copy)]
pub struct EvalPoint<'a> {
    /// Spatial position of the evaluation point
    pub position: Point3<f64>,

    /// Current simulation time \[s\]
    pub time: f64,

    /// Local temperature \[K\]
    pub temperature: f64,

    /// Current concentration values at this point
    pub fields: &'a FieldSnapshot,
}

impl<'a> EvalPoint<'a> {
    /// Create an evaluation point
    pub fn new(
        position: Point3<f64>,
        time: f64,
        temperature: f64,
        fields: &'a FieldSnapshot,
    ) -> Self {
        Self { position, time, temperature, fields }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
