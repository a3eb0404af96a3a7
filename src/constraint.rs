//! Constraint handling shared by all constrained problems.
//!
//! A constraint value `c` is satisfied when `c >= 0.0` and violated when
//! `c < 0.0`. The **overall constraint-violation degree** of a solution is
//! the sum of its negative constraint values: it is `0.0` exactly when the
//! solution is feasible and grows more negative as violations get worse.
//!
//! ```
//! use cmop::constraint::{
//!     number_of_violated_constraints, overall_constraint_violation_degree,
//! };
//!
//! let constraints = [0.25, -0.5, -1.0];
//! assert_eq!(overall_constraint_violation_degree(&constraints), -1.5);
//! assert_eq!(number_of_violated_constraints(&constraints), 2);
//! ```

use crate::error::{Error, Result};
use crate::solution::FloatSolution;

/// Sums the negative entries of `constraints`.
#[must_use]
pub fn overall_constraint_violation_degree(constraints: &[f64]) -> f64 {
    constraints
        .iter()
        .filter(|&&c| c < 0.0)
        .fold(0.0, |degree, &c| degree + c)
}

/// Counts the negative entries of `constraints`.
#[must_use]
pub fn number_of_violated_constraints(constraints: &[f64]) -> usize {
    constraints.iter().filter(|&&c| c < 0.0).count()
}

/// Returns `true` if no constraint of `solution` is violated.
///
/// A solution with no constraints is feasible.
#[must_use]
pub fn is_feasible(solution: &FloatSolution) -> bool {
    solution.constraints().iter().all(|&c| c >= 0.0)
}

/// Recomputes the violation degree and the violated-constraint count from
/// the current constraint vector and stores both on `solution`.
pub fn set_overall_constraint_violation_degree(solution: &mut FloatSolution) {
    let degree = overall_constraint_violation_degree(solution.constraints());
    let violated = number_of_violated_constraints(solution.constraints());
    solution.set_violation(degree, violated);
}

/// Share of feasible solutions in `solutions`, in `[0.0, 1.0]`.
///
/// # Errors
///
/// Returns `EmptyPopulation` if `solutions` is empty.
#[allow(clippy::cast_precision_loss)]
pub fn feasibility_ratio(solutions: &[FloatSolution]) -> Result<f64> {
    if solutions.is_empty() {
        return Err(Error::EmptyPopulation);
    }
    let feasible = solutions.iter().filter(|s| is_feasible(s)).count();
    Ok(feasible as f64 / solutions.len() as f64)
}
