//! LIR-CMOP problems with large infeasible regions.
//!
//! Defined in: Fan, Z., Li, W., Cai, X. et al. *An Improved
//! epsilon-constrained Method in MOEA/D for CMOPs with Large Infeasible
//! Regions*. Soft Computing (2019). <https://doi.org/10.1007/s00500-019-03794-x>
//!
//! Both problems share two auxiliary sums driven by `x[0]`:
//!
//! - `g1(x) = Σ (x[i] - sin(0.5·π·x[0]))²` over even `i >= 2`,
//! - `g2(x) = Σ (x[i] - sin(0.5·π·x[0]))²` over odd `i < n - 12`,
//!
//! and two constraints `(0.51 - g) * (g - 0.50)` which are non-negative only
//! while `g` stays inside the narrow band `[0.50, 0.51]`. With fewer than 14
//! variables the `g2` sum is empty.

use core::f64::consts::FRAC_PI_2;

use crate::bounds::Bounds;
use crate::constraint::set_overall_constraint_violation_degree;
use crate::error::{Error, Result};
use crate::problem::Problem;
use crate::solution::FloatSolution;
use crate::types::Direction;

/// Upper edge of the feasible band.
const BAND_HIGH: f64 = 0.51;
/// Lower edge of the feasible band.
const BAND_LOW: f64 = 0.50;
/// Trailing variables excluded from `g2`.
const G2_TAIL: usize = 12;

const NUMBER_OF_OBJECTIVES: usize = 2;
const NUMBER_OF_CONSTRAINTS: usize = 2;
const DEFAULT_NUMBER_OF_VARIABLES: usize = 2;
const DIRECTIONS: [Direction; NUMBER_OF_OBJECTIVES] = [Direction::Minimize, Direction::Minimize];
const LABELS: [&str; NUMBER_OF_OBJECTIVES] = ["f(x)", "f(y)"];

fn deviation(x: &[f64], i: usize) -> f64 {
    (x[i] - (FRAC_PI_2 * x[0]).sin()).powi(2)
}

fn g1(x: &[f64]) -> f64 {
    (2..x.len()).step_by(2).map(|i| deviation(x, i)).sum()
}

fn g2(x: &[f64]) -> f64 {
    (1..x.len().saturating_sub(G2_TAIL))
        .step_by(2)
        .map(|i| deviation(x, i))
        .sum()
}

/// Non-negative exactly when `g` lies in `[BAND_LOW, BAND_HIGH]`.
fn band_constraint(g: f64) -> f64 {
    (BAND_HIGH - g) * (g - BAND_LOW)
}

/// State and evaluation steps common to every LIR-CMOP variant.
#[derive(Clone, Debug)]
struct LircmopBase {
    bounds: Bounds,
}

impl LircmopBase {
    fn new(number_of_variables: usize) -> Result<Self> {
        Self::with_bounds(Bounds::unit(number_of_variables))
    }

    fn with_bounds(bounds: Bounds) -> Result<Self> {
        if bounds.is_empty() {
            return Err(Error::InvalidDimension {
                what: "number of variables",
                got: 0,
            });
        }
        Ok(Self { bounds })
    }

    fn evaluate<'a, P: Problem>(
        problem: &P,
        solution: &'a mut FloatSolution,
        second_objective: fn(f64) -> f64,
    ) -> Result<&'a mut FloatSolution> {
        problem.check_dimensions(solution)?;

        let x = solution.variables();
        let (g1, g2) = (g1(x), g2(x));
        let f1 = x[0] + g1;
        let f2 = second_objective(x[0]) + g2;

        solution.objectives_mut().copy_from_slice(&[f1, f2]);
        solution
            .constraints_mut()
            .copy_from_slice(&[band_constraint(g1), band_constraint(g2)]);
        set_overall_constraint_violation_degree(solution);

        Ok(solution)
    }
}

/// LIR-CMOP1: `f1 = x0 + g1`, `f2 = 1 - x0² + g2`.
///
/// ```
/// use cmop::prelude::*;
///
/// let problem = Lircmop1::default();
/// let x0 = 0.5;
/// let mut solution = FloatSolution::with_variables(
///     vec![x0, (0.5 * core::f64::consts::PI * x0).sin()],
///     2,
///     2,
/// );
/// problem.evaluate(&mut solution).unwrap();
/// assert_eq!(solution.objectives(), &[0.5, 0.75]);
/// ```
#[derive(Clone, Debug)]
pub struct Lircmop1 {
    base: LircmopBase,
}

impl Lircmop1 {
    /// Creates the problem with `number_of_variables` variables in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `number_of_variables` is zero.
    pub fn new(number_of_variables: usize) -> Result<Self> {
        Ok(Self {
            base: LircmopBase::new(number_of_variables)?,
        })
    }

    /// Creates the problem over custom bounds; the number of variables is
    /// the length of `bounds`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `bounds` is empty.
    pub fn with_bounds(bounds: Bounds) -> Result<Self> {
        Ok(Self {
            base: LircmopBase::with_bounds(bounds)?,
        })
    }
}

impl Default for Lircmop1 {
    fn default() -> Self {
        Self {
            base: LircmopBase {
                bounds: Bounds::unit(DEFAULT_NUMBER_OF_VARIABLES),
            },
        }
    }
}

impl Problem for Lircmop1 {
    fn name(&self) -> &str {
        "LIR-CMOP1"
    }

    fn number_of_variables(&self) -> usize {
        self.base.bounds.len()
    }

    fn number_of_objectives(&self) -> usize {
        NUMBER_OF_OBJECTIVES
    }

    fn number_of_constraints(&self) -> usize {
        NUMBER_OF_CONSTRAINTS
    }

    fn directions(&self) -> &[Direction] {
        &DIRECTIONS
    }

    fn labels(&self) -> &[&'static str] {
        &LABELS
    }

    fn bounds(&self) -> &Bounds {
        &self.base.bounds
    }

    fn evaluate<'a>(&self, solution: &'a mut FloatSolution) -> Result<&'a mut FloatSolution> {
        LircmopBase::evaluate(self, solution, |x0| 1.0 - x0 * x0)
    }
}

/// LIR-CMOP2: `f1 = x0 + g1`, `f2 = 1 - √x0 + g2`.
#[derive(Clone, Debug)]
pub struct Lircmop2 {
    base: LircmopBase,
}

impl Lircmop2 {
    /// Creates the problem with `number_of_variables` variables in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `number_of_variables` is zero.
    pub fn new(number_of_variables: usize) -> Result<Self> {
        Ok(Self {
            base: LircmopBase::new(number_of_variables)?,
        })
    }

    /// Creates the problem over custom bounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `bounds` is empty.
    pub fn with_bounds(bounds: Bounds) -> Result<Self> {
        Ok(Self {
            base: LircmopBase::with_bounds(bounds)?,
        })
    }
}

impl Problem for Lircmop2 {
    fn name(&self) -> &str {
        "LIR-CMOP2"
    }

    fn number_of_variables(&self) -> usize {
        self.base.bounds.len()
    }

    fn number_of_objectives(&self) -> usize {
        NUMBER_OF_OBJECTIVES
    }

    fn number_of_constraints(&self) -> usize {
        NUMBER_OF_CONSTRAINTS
    }

    fn directions(&self) -> &[Direction] {
        &DIRECTIONS
    }

    fn labels(&self) -> &[&'static str] {
        &LABELS
    }

    fn bounds(&self) -> &Bounds {
        &self.base.bounds
    }

    fn evaluate<'a>(&self, solution: &'a mut FloatSolution) -> Result<&'a mut FloatSolution> {
        LircmopBase::evaluate(self, solution, |x0| 1.0 - x0.sqrt())
    }
}
