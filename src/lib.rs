#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Constrained multi-objective benchmark problems and population reporting.
//!
//! This crate provides the evaluation side of a constrained multi-objective
//! optimizer: a [`Problem`] trait, the LIR-CMOP benchmark problems, the
//! constraint-violation bookkeeping every constrained problem shares, and
//! plain-text I/O for populations and reference fronts. The optimizer that
//! drives the search lives elsewhere; it creates [`FloatSolution`]s,
//! evaluates them here and hands the final population to [`report`].
//!
//! # Getting Started
//!
//! ```
//! use cmop::prelude::*;
//!
//! let problem = Lircmop1::new(30).unwrap();
//! let mut rng = fastrand::Rng::with_seed(42);
//!
//! let mut population: Vec<FloatSolution> =
//!     (0..20).map(|_| problem.create_solution(&mut rng)).collect();
//! for solution in &mut population {
//!     problem.evaluate(solution).unwrap();
//! }
//!
//! let front = non_dominated_solutions(&population, problem.directions());
//! assert!(!front.is_empty());
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Problem`] | Declares dimensions, bounds and objective metadata; evaluates solutions. |
//! | [`FloatSolution`] | Fixed-length variables plus objectives, constraints and violation aggregates. |
//! | [`Bounds`] | Per-variable box limits owned by a problem and passed to solution factories. |
//! | [`Direction`] | Whether an objective is minimized or maximized. |
//!
//! # Constraint convention
//!
//! A constraint value `c` is satisfied when `c >= 0.0`. The overall
//! constraint-violation degree is the sum of the negative constraint values,
//! so it is `0.0` for feasible solutions and negative otherwise. See
//! [`constraint`].
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`FloatSolution`], [`Bounds`] and [`Direction`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) for file output and reference-front loading | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::warn!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_warn {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod bounds;
pub mod constraint;
mod error;
pub mod pareto;
mod problem;
pub mod problems;
pub mod report;
mod rng_util;
mod solution;
mod types;

pub use bounds::Bounds;
pub use error::{Error, Result};
pub use problem::Problem;
pub use problems::{Lircmop1, Lircmop2};
pub use solution::FloatSolution;
pub use types::Direction;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use cmop::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bounds::Bounds;
    pub use crate::constraint::{
        feasibility_ratio, is_feasible, number_of_violated_constraints,
        overall_constraint_violation_degree, set_overall_constraint_violation_degree,
    };
    pub use crate::error::{Error, Result};
    pub use crate::pareto::{
        constrained_dominates, dominates, inverted_generational_distance, non_dominated_solutions,
        non_dominated_sort, pareto_front_indices,
    };
    pub use crate::problem::Problem;
    pub use crate::problems::{Lircmop1, Lircmop2};
    pub use crate::report::{
        print_objectives_to_console, print_variables_to_console, read_reference_front,
        write_objectives, write_variables,
    };
    pub use crate::solution::FloatSolution;
    pub use crate::types::Direction;
}
