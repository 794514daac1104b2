//! Boundary values and the argument binder
//!
//! Every boundary condition carries a user-supplied value: a plain constant,
//! or an expression of some subset of {position, time, temperature, named
//! concentrations}. The hard part is not storing the expression — it is
//! knowing *which* of those inputs it reads, so that the evaluation loop can
//! route exactly that subset at every quadrature point of every nonlinear
//! iteration.
//!
//! # Declared capability sets
//!
//! There is no runtime signature reflection in Rust, and none is needed: the
//! typed factory constructors below *are* the declaration. `of_time(|t| …)`
//! produces a value whose [`ArgumentSet`] says "time only"; the wrapper it
//! installs can physically read nothing else. For expressions that also
//! consume concentrations, [`BoundaryValue::bound`] takes an explicit
//! `ArgumentSet` and a closure over the fixed-shape [`BoundArgs`] adapter.
//!
//! The argument set is computed once, at construction — never per call.
//!
//! # Purity
//!
//! Evaluation is pure: the expression sees only its declared inputs, keeps no
//! state between calls, and returns the same value for the same inputs. The
//! external solver relies on this when it re-evaluates the same point while
//! probing convergence or assembling a Jacobian.
//!
//! # Example
//!
//! ```rust
//! use hytran_rs::bc::BoundaryValue;
//! use hytran_rs::physics::{EvalPoint, FieldSnapshot};
//! use nalgebra::Point3;
//!
//! // Ramp in time, independent of everything else
//! let value = BoundaryValue::of_time(|t| 100.0 * t);
//!
//! let fields = FieldSnapshot::empty();
//! let point = EvalPoint::new(Point3::origin(), 2.0, 600.0, &fields);
//!
//! assert_eq!(value.evaluate(&point, None).unwrap(), 200.0);
//! ```

use nalgebra::Point3;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{HytranError, HytranResult};
use crate::physics::{EvalPoint, Species};

// =================================================================================================
// Argument Set
// =================================================================================================

/// Declared inputs of a boundary-value expression
///
/// Computed once when the value is constructed and consulted by the binder
/// at every evaluation. `concentrations` lists the *argument names* of the
/// concentration inputs, in the order the expression expects them in
/// [`BoundArgs::concentrations`]; the pairing of argument name to actual
/// [`Species`] happens in the boundary condition's species-dependent map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentSet {
    /// Expression reads the spatial position
    pub position: bool,

    /// Expression reads the simulation time
    pub time: bool,

    /// Expression reads the local temperature
    pub temperature: bool,

    /// Named concentration arguments, in binding order
    pub concentrations: Vec<String>,
}

impl ArgumentSet {
    /// Empty set (a constant declares nothing)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder-style: declare the position argument
    pub fn with_position(mut self) -> Self {
        self.position = true;
        self
    }

    /// Builder-style: declare the time argument
    pub fn with_time(mut self) -> Self {
        self.time = true;
        self
    }

    /// Builder-style: declare the temperature argument
    pub fn with_temperature(mut self) -> Self {
        self.temperature = true;
        self
    }

    /// Builder-style: declare a named concentration argument
    pub fn with_concentration(mut self, name: impl Into<String>) -> Self {
        self.concentrations.push(name.into());
        self
    }

    /// Check whether any concentration argument is declared
    pub fn has_concentrations(&self) -> bool {
        !self.concentrations.is_empty()
    }

    /// Check whether a concentration argument name is declared
    pub fn declares_concentration(&self, name: &str) -> bool {
        self.concentrations.iter().any(|declared| declared == name)
    }
}

// =================================================================================================
// Bound Arguments (fixed-shape call adapter)
// =================================================================================================

/// The fixed-shape argument block handed to a bound expression
///
/// The binder fills only the slots the expression declared; undeclared slots
/// stay at neutral defaults (origin, zero) and are never populated from
/// caller data. An expression therefore cannot observe inputs it did not
/// declare — supplying different undeclared data must not, and cannot,
/// change its result.
#[derive(Debug, Clone, Copy)]
pub struct BoundArgs<'a> {
    /// Spatial position (declared expressions only)
    pub position: Point3<f64>,

    /// Simulation time \[s\] (declared expressions only)
    pub time: f64,

    /// Local temperature \[K\] (declared expressions only)
    pub temperature: f64,

    /// Concentration values in [`ArgumentSet::concentrations`] order
    pub concentrations: &'a [f64],
}

// =================================================================================================
// Boundary Value
// =================================================================================================

/// A user-supplied boundary value
///
/// # Types
///
/// - **Constant**: a plain number, returned unchanged for every input
/// - **Expression**: a pure function of its declared [`ArgumentSet`]
///
/// # Construction
///
/// Use the typed factories for the common shapes:
///
/// - [`constant`](Self::constant)
/// - [`of_time`](Self::of_time), [`of_position`](Self::of_position),
///   [`of_temperature`](Self::of_temperature)
/// - [`of_position_time`](Self::of_position_time),
///   [`of_time_temperature`](Self::of_time_temperature),
///   [`of_position_time_temperature`](Self::of_position_time_temperature)
/// - [`bound`](Self::bound) for everything else, including concentration
///   arguments
pub enum BoundaryValue {
    /// Fixed value, independent of all inputs
    Constant(f64),

    /// Expression over its declared argument set
    Expression {
        /// Declared inputs (computed at construction)
        arguments: ArgumentSet,

        /// The expression, behind the fixed-shape adapter
        call: Arc<dyn Fn(&BoundArgs) -> f64 + Send + Sync>,
    },
}

// ==================== Manual Clone Implementation ====================

impl Clone for BoundaryValue {
    fn clone(&self) -> Self {
        match self {
            Self::Constant(value) => Self::Constant(*value),
            Self::Expression { arguments, call } => Self::Expression {
                arguments: arguments.clone(),
                call: Arc::clone(call),
            },
        }
    }
}

// ==================== Manual Debug Implementation ====================

impl std::fmt::Debug for BoundaryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Expression { arguments, .. } => f
                .debug_struct("Expression")
                .field("arguments", arguments)
                .field("call", &"<user-defined>")
                .finish(),
        }
    }
}

// ==================== Implementation ====================

impl BoundaryValue {
    /// Create a constant value
    ///
    /// Constants bypass argument introspection entirely: they can never
    /// raise a binding error and ignore every input.
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Create a value depending on time only
    pub fn of_time<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::Expression {
            arguments: ArgumentSet::empty().with_time(),
            call: Arc::new(move |args: &BoundArgs| f(args.time)),
        }
    }

    /// Create a value depending on position only
    pub fn of_position<F>(f: F) -> Self
    where
        F: Fn(&Point3<f64>) -> f64 + Send + Sync + 'static,
    {
        Self::Expression {
            arguments: ArgumentSet::empty().with_position(),
            call: Arc::new(move |args: &BoundArgs| f(&args.position)),
        }
    }

    /// Create a value depending on temperature only
    pub fn of_temperature<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::Expression {
            arguments: ArgumentSet::empty().with_temperature(),
            call: Arc::new(move |args: &BoundArgs| f(args.temperature)),
        }
    }

    /// Create a value depending on position and time
    pub fn of_position_time<F>(f: F) -> Self
    where
        F: Fn(&Point3<f64>, f64) -> f64 + Send + Sync + 'static,
    {
        Self::Expression {
            arguments: ArgumentSet::empty().with_position().with_time(),
            call: Arc::new(move |args: &BoundArgs| f(&args.position, args.time)),
        }
    }

    /// Create a value depending on time and temperature
    pub fn of_time_temperature<F>(f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self::Expression {
            arguments: ArgumentSet::empty().with_time().with_temperature(),
            call: Arc::new(move |args: &BoundArgs| f(args.time, args.temperature)),
        }
    }

    /// Create a value depending on position, time, and temperature
    ///
    /// # Example
    ///
    /// ```rust
    /// use hytran_rs::bc::BoundaryValue;
    ///
    /// let value = BoundaryValue::of_position_time_temperature(
    ///     |x, t, temperature| 10.0 + x[0] * x[0] + t + temperature,
    /// );
    /// ```
    pub fn of_position_time_temperature<F>(f: F) -> Self
    where
        F: Fn(&Point3<f64>, f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self::Expression {
            arguments: ArgumentSet::empty()
                .with_position()
                .with_time()
                .with_temperature(),
            call: Arc::new(move |args: &BoundArgs| {
                f(&args.position, args.time, args.temperature)
            }),
        }
    }

    /// Create a value over an explicitly declared argument set
    ///
    /// This is the general form, and the only one that can declare
    /// concentration arguments. The closure receives the fixed-shape
    /// [`BoundArgs`] adapter with exactly the declared slots populated;
    /// `args.concentrations` follows the order of
    /// [`ArgumentSet::concentrations`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use hytran_rs::bc::{ArgumentSet, BoundaryValue};
    ///
    /// // flux proportional to the local hydrogen concentration
    /// let arguments = ArgumentSet::empty()
    ///     .with_temperature()
    ///     .with_concentration("c");
    ///
    /// let value = BoundaryValue::bound(arguments, |args| {
    ///     1e-4 * args.temperature * args.concentrations[0]
    /// });
    /// ```
    pub fn bound<F>(arguments: ArgumentSet, f: F) -> Self
    where
        F: Fn(&BoundArgs) -> f64 + Send + Sync + 'static,
    {
        Self::Expression {
            arguments,
            call: Arc::new(f),
        }
    }

    /// Check whether this value is a constant
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Declared argument set of this value
    ///
    /// Constants declare nothing.
    pub fn arguments(&self) -> ArgumentSet {
        match self {
            Self::Constant(_) => ArgumentSet::empty(),
            Self::Expression { arguments, .. } => arguments.clone(),
        }
    }

    /// Check the pairing between declared concentration arguments and a
    /// species-dependent map
    ///
    /// Both directions must line up:
    ///
    /// - every declared concentration argument needs a map entry
    ///   ([`HytranError::UnmappedConcentration`])
    /// - every map key must be a declared argument
    ///   ([`HytranError::UnknownArgument`])
    ///
    /// Constants always pass — they bypass introspection.
    pub fn validate_bindings(
        &self,
        species_map: Option<&HashMap<String, Species>>,
    ) -> HytranResult<()> {
        let arguments = match self {
            Self::Constant(_) => return Ok(()),
            Self::Expression { arguments, .. } => arguments,
        };

        for name in &arguments.concentrations {
            let mapped = species_map.map(|map| map.contains_key(name)).unwrap_or(false);
            if !mapped {
                return Err(HytranError::UnmappedConcentration {
                    argument: name.clone(),
                });
            }
        }

        if let Some(map) = species_map {
            for key in map.keys() {
                if !arguments.declares_concentration(key) {
                    return Err(HytranError::UnknownArgument {
                        argument: key.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Evaluate the value at one point
    ///
    /// Constants return unchanged regardless of inputs. Expressions receive
    /// exactly their declared argument subset: undeclared slots of the
    /// [`BoundArgs`] adapter are left at neutral defaults, and concentration
    /// arguments are resolved name → species (via `species_map`) → current
    /// value (via the point's snapshot), in declared order.
    ///
    /// Returns [`HytranError::UnmappedConcentration`] when a declared
    /// concentration argument has no map entry, and
    /// [`HytranError::MissingConcentration`] when the snapshot carries no
    /// value for a mapped species.
    pub fn evaluate(
        &self,
        point: &EvalPoint,
        species_map: Option<&HashMap<String, Species>>,
    ) -> HytranResult<f64> {
        let (arguments, call) = match self {
            Self::Constant(value) => return Ok(*value),
            Self::Expression { arguments, call } => (arguments, call),
        };

        // Resolve concentration arguments in declared order
        let mut concentrations = Vec::with_capacity(arguments.concentrations.len());
        for name in &arguments.concentrations {
            let species = species_map
                .and_then(|map| map.get(name))
                .ok_or_else(|| HytranError::UnmappedConcentration {
                    argument: name.clone(),
                })?;

            let value = point.fields.concentration(species.name()).ok_or_else(|| {
                HytranError::MissingConcentration {
                    species: species.name().to_string(),
                }
            })?;

            concentrations.push(value);
        }

        // Populate only the declared slots of the adapter
        let args = BoundArgs {
            position: if arguments.position { point.position } else { Point3::origin() },
            time: if arguments.time { point.time } else { 0.0 },
            temperature: if arguments.temperature { point.temperature } else { 0.0 },
            concentrations: &concentrations,
        };

        Ok(call(&args))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
