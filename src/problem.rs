//! The [`Problem`] trait defines the evaluation contract.
//!
//! A problem declares its dimensions, objective metadata and variable
//! [`Bounds`], and knows how to fill the objectives and constraints of a
//! [`FloatSolution`]:
//!
//! ```
//! use cmop::prelude::*;
//!
//! let problem = Lircmop1::new(4).unwrap();
//! let mut rng = fastrand::Rng::with_seed(7);
//!
//! let mut solution = problem.create_solution(&mut rng);
//! let evaluated = problem.evaluate(&mut solution).unwrap();
//! assert_eq!(evaluated.objectives().len(), 2);
//! assert_eq!(evaluated.constraints().len(), 2);
//! ```

use crate::bounds::Bounds;
use crate::error::{Error, Result};
use crate::solution::FloatSolution;
use crate::types::Direction;

/// A constrained multi-objective problem over real-valued variables.
///
/// Implementations are immutable after construction, so a single problem
/// can evaluate disjoint solutions from several threads.
pub trait Problem: Send + Sync {
    /// Human-readable problem name, e.g. `"LIR-CMOP1"`.
    fn name(&self) -> &str;

    fn number_of_variables(&self) -> usize;

    fn number_of_objectives(&self) -> usize;

    fn number_of_constraints(&self) -> usize;

    /// One direction per objective.
    fn directions(&self) -> &[Direction];

    /// One label per objective.
    fn labels(&self) -> &[&'static str];

    /// The box bounds of the decision variables.
    fn bounds(&self) -> &Bounds;

    /// Overwrite the objectives, constraints and violation aggregates of
    /// `solution` and return it for chaining.
    ///
    /// Variables are not checked against [`bounds`](Problem::bounds).
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if any vector of `solution` does not have
    /// the length this problem declares.
    fn evaluate<'a>(&self, solution: &'a mut FloatSolution) -> Result<&'a mut FloatSolution>;

    /// Create an unevaluated solution with variables drawn uniformly within
    /// the problem bounds.
    fn create_solution(&self, rng: &mut fastrand::Rng) -> FloatSolution {
        FloatSolution::with_variables(
            self.bounds().sample(rng),
            self.number_of_objectives(),
            self.number_of_constraints(),
        )
    }

    /// Verify that `solution` has the declared variable, objective and
    /// constraint counts.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` naming the first vector that disagrees.
    fn check_dimensions(&self, solution: &FloatSolution) -> Result<()> {
        let checks = [
            ("variables", self.number_of_variables(), solution.number_of_variables()),
            ("objectives", self.number_of_objectives(), solution.number_of_objectives()),
            ("constraints", self.number_of_constraints(), solution.number_of_constraints()),
        ];
        for (what, expected, got) in checks {
            if expected != got {
                return Err(Error::DimensionMismatch {
                    what,
                    expected,
                    got,
                });
            }
        }
        Ok(())
    }
}
