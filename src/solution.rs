//! Fixed-length real-valued candidate solutions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of variables given to reference-front points.
const REFERENCE_POINT_VARIABLES: usize = 2;

/// A candidate solution with real-valued decision variables.
///
/// The three vectors keep the length they were constructed with: mutation
/// goes through slices, so an evaluation can overwrite values but never
/// resize them. Constraint values follow the "negative means violated"
/// convention; the two aggregates are refreshed by
/// [`set_overall_constraint_violation_degree`](crate::constraint::set_overall_constraint_violation_degree).
///
/// ```
/// use cmop::FloatSolution;
///
/// let mut solution = FloatSolution::with_variables(vec![0.2, 0.4], 2, 1);
/// solution.variables_mut()[1] = 0.3;
/// assert_eq!(solution.variables(), &[0.2, 0.3]);
/// assert_eq!(solution.objectives(), &[0.0, 0.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloatSolution {
    variables: Vec<f64>,
    objectives: Vec<f64>,
    constraints: Vec<f64>,
    overall_constraint_violation_degree: f64,
    number_of_violated_constraints: usize,
}

impl FloatSolution {
    /// Creates a solution with zero-filled variables, objectives and constraints.
    #[must_use]
    pub fn new(
        number_of_variables: usize,
        number_of_objectives: usize,
        number_of_constraints: usize,
    ) -> Self {
        Self::with_variables(
            vec![0.0; number_of_variables],
            number_of_objectives,
            number_of_constraints,
        )
    }

    /// Creates a solution around the given variable vector.
    #[must_use]
    pub fn with_variables(
        variables: Vec<f64>,
        number_of_objectives: usize,
        number_of_constraints: usize,
    ) -> Self {
        Self {
            variables,
            objectives: vec![0.0; number_of_objectives],
            constraints: vec![0.0; number_of_constraints],
            overall_constraint_violation_degree: 0.0,
            number_of_violated_constraints: 0,
        }
    }

    /// Creates the point shape used for reference fronts: two unset (zero)
    /// variables, no constraints, and the given objective vector.
    #[must_use]
    pub fn reference_point(objectives: Vec<f64>) -> Self {
        Self {
            variables: vec![0.0; REFERENCE_POINT_VARIABLES],
            objectives,
            constraints: Vec::new(),
            overall_constraint_violation_degree: 0.0,
            number_of_violated_constraints: 0,
        }
    }

    /// Decision variables.
    #[must_use]
    pub fn variables(&self) -> &[f64] {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut [f64] {
        &mut self.variables
    }

    /// Objective values from the last evaluation.
    #[must_use]
    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    pub fn objectives_mut(&mut self) -> &mut [f64] {
        &mut self.objectives
    }

    /// Constraint values; negative entries are violated.
    #[must_use]
    pub fn constraints(&self) -> &[f64] {
        &self.constraints
    }

    pub fn constraints_mut(&mut self) -> &mut [f64] {
        &mut self.constraints
    }

    #[must_use]
    pub fn number_of_variables(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn number_of_objectives(&self) -> usize {
        self.objectives.len()
    }

    #[must_use]
    pub fn number_of_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Sum of the negative constraint values as of the last refresh (0.0 when
    /// feasible).
    #[must_use]
    pub fn overall_constraint_violation_degree(&self) -> f64 {
        self.overall_constraint_violation_degree
    }

    /// Count of negative constraint values as of the last refresh.
    #[must_use]
    pub fn number_of_violated_constraints(&self) -> usize {
        self.number_of_violated_constraints
    }

    pub(crate) fn set_violation(&mut self, degree: f64, violated: usize) {
        self.overall_constraint_violation_degree = degree;
        self.number_of_violated_constraints = violated;
    }
}
