//! hytran-rs: Boundary conditions for hydrogen transport simulation
//!
//! A library for modeling boundary conditions of coupled hydrogen-transport
//! and heat-transfer PDE problems. It owns the part of such a simulation
//! that is easy to get subtly wrong: binding user-supplied value expressions
//! (constants, or functions of position, time, temperature, and other
//! species' concentrations) and evaluating thermally-activated kinetic laws
//! inside a nonlinear solve loop.
//!
//! # Architecture
//!
//! hytran-rs is built on two core principles:
//!
//! 1. **Separation of taxonomy and assembly**
//!    - Boundary conditions define values and fluxes (what holds on the boundary)
//!    - The assembly adapter classifies them into the two contribution kinds
//!      an external solver consumes (essential constraint vs. boundary integral)
//!
//! 2. **Pure, explicitly-bound evaluation**
//!    - Every value expression declares its inputs once, at construction
//!    - Current field values are passed into each evaluation as a snapshot —
//!      no global state, so re-evaluation inside Newton iterations is safe
//!
//! Mesh, discretization, solvers, and time stepping live outside this crate;
//! they consume [`assembly::Scenario`] through `classify`/`evaluate`.
//!
//! # Quick Start
//!
//! ```rust
//! use hytran_rs::prelude::*;
//! use nalgebra::Point3;
//!
//! # fn main() -> HytranResult<()> {
//! // 1. Describe the domain: two boundary surfaces, one species
//! let hydrogen = Species::new("H");
//! let domain = DomainDescription::new(
//!     vec![SurfaceSubdomain::surface(1), SurfaceSubdomain::surface(2)],
//!     vec![hydrogen.clone()],
//! )?;
//!
//! // 2. Boundary conditions: Sieverts equilibrium upstream, recombination downstream
//! let upstream = SievertsBC::new(
//!     SurfaceSubdomain::surface(1),
//!     hydrogen.clone(),
//!     3.0e21, 0.2,
//!     BoundaryValue::of_time(|t| 1e5 * (1.0 - (-t).exp())),
//! )?;
//! let downstream = SurfaceReactionBC::new(
//!     SurfaceSubdomain::surface(2),
//!     vec![hydrogen.clone()],
//!     3.2e-15, 1.16,   // k_r0, E_kr
//!     0.0, 0.0,        // k_d0, E_kd (no dissociation on the vacuum side)
//!     0.0,             // gas pressure
//! )?;
//!
//! // 3. Validate everything once, before the solve
//! let scenario = Scenario::new(domain, vec![upstream.into(), downstream.into()])?;
//!
//! // 4. The external solver evaluates per point, per iteration
//! let fields = FieldSnapshot::empty().with_concentration(&hydrogen, 4.2e19);
//! let point = EvalPoint::new(Point3::origin(), 10.0, 600.0, &fields);
//!
//! for contribution in scenario.contributions() {
//!     let value = contribution.evaluate(&point)?;
//!     assert!(value.is_finite());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: species identity and field snapshots
//! - [`domain`]: boundary subdomains and the domain description
//! - [`bc`]: the seven boundary-condition variants, value binder, kinetic laws
//! - [`assembly`]: classification into solver-facing contributions
//! - [`error`]: typed errors (binding / domain / configuration)

// Core modules
pub mod assembly;
pub mod bc;
pub mod domain;
pub mod error;
pub mod physics;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use hytran_rs::prelude::*;
    //! ```
    pub use crate::assembly::{classify, evaluate_batch, Contribution, Scenario};
    pub use crate::bc::{
        ArgumentSet,
        ArrheniusLaw,
        BoundArgs,
        BoundaryCondition,
        BoundaryValue,
        ContributionKind,
        FixedConcentrationBC,
        FixedTemperatureBC,
        HeatFluxBC,
        HenrysBC,
        ParticleFluxBC,
        SievertsBC,
        SurfaceReactionBC,
        K_B,
    };
    pub use crate::domain::{DomainDescription, GeometricExtent, SurfaceSubdomain};
    pub use crate::error::{ErrorKind, HytranError, HytranResult};
    pub use crate::physics::{EvalPoint, FieldSnapshot, Species, TargetField};
}
