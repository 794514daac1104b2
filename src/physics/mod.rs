//! Species and field-state primitives
//!
//! This module provides the vocabulary the rest of the crate speaks:
//!
//! - **Species**: a named transported quantity (the key for concentration
//!   bindings and snapshot lookups)
//! - **TargetField**: which unknown field a boundary condition acts on
//!   (one species' concentration, or the temperature field)
//! - **FieldSnapshot / EvalPoint**: the explicitly-passed current field
//!   values and evaluation context
//!
//! # Architecture
//!
//! Field values always flow *into* an evaluation from the external solver —
//! never out of a shared registry. A boundary condition that is handed the
//! same [`EvalPoint`] twice returns the same value twice; this is what makes
//! re-evaluation inside Newton iterations and finite-difference Jacobian
//! probes safe.

// module declaration
pub mod species;
pub mod state;

// re-export commonly used types for convenience
pub use species::{Species, TargetField};
pub use state::{EvalPoint, FieldSnapshot};
