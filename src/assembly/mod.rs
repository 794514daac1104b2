//! Assembly adapter
//!
//! This module is the seam between the boundary-condition taxonomy and the
//! external finite-element assembler. The assembler never matches on the
//! seven variants; it consumes the two contribution kinds this module hands
//! out:
//!
//! - **Essential**: enforce `field(x) = value` pointwise on the subdomain —
//!   a constraint, not a residual term.
//! - **Natural**: add `∫ integrand · test_function` over the subdomain to
//!   the targeted field's residual.
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌──────────────────────┐   ┌──────────────────────┐
//! │ DomainDescription    │   │ BoundaryCondition(s) │
//! │ (subdomains+species) │   │ (7 variants)         │
//! └──────────┬───────────┘   └──────────┬───────────┘
//!            │                          │
//!            └──────────┬───────────────┘
//!                       │
//!              ┌────────▼────────┐
//!              │ Scenario        │ ← validated once, at setup
//!              │ (WHAT to solve) │
//!              └────────┬────────┘
//!                       │ classify
//!              ┌────────▼──────────────┐
//!              │ Contribution          │ ← Essential | Natural
//!              │ (per field, per BC)   │
//!              └────────┬──────────────┘
//!                       │ evaluate / residual_integrand
//!              ┌────────▼──────────────┐
//!              │ external solver       │ ← per point, per iteration
//!              └───────────────────────┘
//! ```
//!
//! # Evaluation inside the solve loop
//!
//! Contributions are evaluated once per quadrature point per nonlinear
//! iteration; the same point may be probed several times while the solver
//! assembles a Jacobian. Everything on this path is pure and `Send + Sync`,
//! so independent contributions can be evaluated concurrently. For large
//! point batches, [`evaluate_batch`] switches to Rayon when compiled with
//! the `parallel` feature.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod contribution;
mod scenario;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand work off to Rayon is an assembly concern, not a
// physics concern, so the knob lives here.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on
// every batch evaluation. Relaxed ordering is sufficient: the value is a
// performance hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of points above which [`evaluate_batch`] switches to
/// parallel iteration.
///
/// Below this point the overhead of Rayon's thread-pool dispatch outweighs
/// the per-point work of a typical boundary-value expression.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// [`evaluate_batch`] uses sequential iteration when the batch contains
/// fewer points than this value, and switches to Rayon when it contains
/// more — but only when the crate is compiled with the `parallel` feature.
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero-point threshold would force
/// parallel dispatch on every single-point batch, which is never the
/// intended behaviour.
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value (including
        // the original default) never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use contribution::{classify, Contribution};
pub use scenario::Scenario;

// =================================================================================================
// Batch Evaluation
// =================================================================================================

use crate::error::HytranResult;
use crate::physics::EvalPoint;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluate one contribution at many points
///
/// Equivalent to calling [`Contribution::evaluate`] point by point; large
/// batches (above [`parallel_threshold()`]) run on Rayon when the `parallel`
/// feature is enabled. The first error aborts the batch — the external
/// solver must see a failed evaluation, not a partially-filled buffer.
pub fn evaluate_batch(
    contribution: &Contribution,
    points: &[EvalPoint],
) -> HytranResult<Vec<f64>> {
    if points.len() > parallel_threshold() {
        #[cfg(feature = "parallel")]
        return points
            .par_iter()
            .map(|point| contribution.evaluate(point))
            .collect();
    }

    points.iter().map(|point| contribution.evaluate(point)).collect()
}

// =================================================================================================
// Tests
// =================================================================================================
