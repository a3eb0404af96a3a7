//! Pareto dominance and front utilities for evaluated populations.
//!
//! | Function | Purpose |
//! |---|---|
//! | [`dominates`] | Plain Pareto dominance between two objective vectors |
//! | [`constrained_dominates`] | Feasibility-first dominance between two solutions |
//! | [`non_dominated_sort`] | Rank objective vectors into successive fronts |
//! | [`pareto_front_indices`] | Indices of the non-dominated vectors only |
//! | [`non_dominated_solutions`] | The first front of a population, feasibility first |
//! | [`inverted_generational_distance`] | Distance of a front from a reference front |
//!
//! # Example
//!
//! ```
//! use cmop::Direction;
//! use cmop::pareto::{non_dominated_sort, pareto_front_indices};
//!
//! let points = vec![
//!     vec![1.0, 5.0], // front 0
//!     vec![5.0, 1.0], // front 0
//!     vec![3.0, 3.0], // front 0
//!     vec![4.0, 4.0], // dominated by (3, 3)
//! ];
//! let dirs = [Direction::Minimize, Direction::Minimize];
//!
//! assert_eq!(non_dominated_sort(&points, &dirs).len(), 2);
//!
//! let mut front = pareto_front_indices(&points, &dirs);
//! front.sort_unstable();
//! assert_eq!(front, vec![0, 1, 2]);
//! ```

use crate::solution::FloatSolution;
use crate::types::Direction;

/// Returns `true` if objective vector `a` Pareto-dominates `b`.
///
/// `a` dominates `b` if it is at least as good in all objectives and
/// strictly better in at least one, respecting the given directions.
#[must_use]
pub fn dominates(a: &[f64], b: &[f64], directions: &[Direction]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), directions.len());

    let mut strictly_better = false;
    for ((&av, &bv), dir) in a.iter().zip(b.iter()).zip(directions.iter()) {
        let (better, worse) = match dir {
            Direction::Minimize => (av < bv, av > bv),
            Direction::Maximize => (av > bv, av < bv),
        };
        if worse {
            return false;
        }
        if better {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Feasibility-first dominance on the stored violation degrees.
///
/// Violation degrees are non-positive; zero means feasible.
fn degree_dominates(
    a_values: &[f64],
    b_values: &[f64],
    a_degree: f64,
    b_degree: f64,
    directions: &[Direction],
) -> bool {
    match (a_degree < 0.0, b_degree < 0.0) {
        (false, true) => true,
        (true, false) => false,
        (true, true) => a_degree > b_degree,
        (false, false) => dominates(a_values, b_values, directions),
    }
}

/// Constrained dominance between two evaluated solutions.
///
/// A feasible solution beats an infeasible one. Between two infeasible
/// solutions the one with the smaller total violation (the overall
/// constraint-violation degree closer to zero) wins. Between two feasible
/// solutions plain Pareto dominance on the objectives decides.
#[must_use]
pub fn constrained_dominates(
    a: &FloatSolution,
    b: &FloatSolution,
    directions: &[Direction],
) -> bool {
    degree_dominates(
        a.objectives(),
        b.objectives(),
        a.overall_constraint_violation_degree(),
        b.overall_constraint_violation_degree(),
        directions,
    )
}

/// Fast non-dominated sorting (Deb et al., 2002).
///
/// `degrees` is either empty (unconstrained) or holds one violation degree
/// per entry of `values`.
fn fast_non_dominated_sort(
    values: &[Vec<f64>],
    degrees: &[f64],
    directions: &[Direction],
) -> Vec<Vec<usize>> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    debug_assert!(degrees.is_empty() || degrees.len() == n);

    let dom = |i: usize, j: usize| {
        if degrees.is_empty() {
            dominates(&values[i], &values[j], directions)
        } else {
            degree_dominates(&values[i], &values[j], degrees[i], degrees[j], directions)
        }
    };

    // S_p: set of solutions dominated by p
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    // n_p: domination count for p
    let mut domination_count: Vec<usize> = vec![0; n];

    for i in 0..n {
        for j in (i + 1)..n {
            if dom(i, j) {
                dominated_by[i].push(j);
                domination_count[j] += 1;
            } else if dom(j, i) {
                dominated_by[j].push(i);
                domination_count[i] += 1;
            }
        }
    }

    let mut fronts: Vec<Vec<usize>> = Vec::new();
    let mut current_front: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    while !current_front.is_empty() {
        let mut next_front: Vec<usize> = Vec::new();
        for &p in &current_front {
            for &q in &dominated_by[p] {
                domination_count[q] -= 1;
                if domination_count[q] == 0 {
                    next_front.push(q);
                }
            }
        }
        fronts.push(current_front);
        current_front = next_front;
    }

    fronts
}

/// Partition objective vectors into successive non-dominated fronts.
///
/// `fronts[0]` holds the indices of the Pareto-optimal vectors, `fronts[1]`
/// those dominated only by front 0, and so on. Complexity is
/// O(M · N²) for M objectives and N vectors.
#[must_use]
pub fn non_dominated_sort(values: &[Vec<f64>], directions: &[Direction]) -> Vec<Vec<usize>> {
    fast_non_dominated_sort(values, &[], directions)
}

/// Indices of the non-dominated objective vectors.
#[must_use]
pub fn pareto_front_indices(values: &[Vec<f64>], directions: &[Direction]) -> Vec<usize> {
    non_dominated_sort(values, directions)
        .into_iter()
        .next()
        .unwrap_or_default()
}

/// Clone the first front of `solutions` under [`constrained_dominates`].
///
/// If any solution is feasible, the result contains only feasible,
/// mutually non-dominated solutions. Order follows the input order.
#[must_use]
pub fn non_dominated_solutions(
    solutions: &[FloatSolution],
    directions: &[Direction],
) -> Vec<FloatSolution> {
    let values: Vec<Vec<f64>> = solutions.iter().map(|s| s.objectives().to_vec()).collect();
    let degrees: Vec<f64> = solutions
        .iter()
        .map(FloatSolution::overall_constraint_violation_degree)
        .collect();

    let Some(mut first) = fast_non_dominated_sort(&values, &degrees, directions)
        .into_iter()
        .next()
    else {
        return Vec::new();
    };
    first.sort_unstable();
    first.into_iter().map(|i| solutions[i].clone()).collect()
}

/// Inverted generational distance of `front` with respect to `reference`.
///
/// The mean, over all reference points, of the Euclidean distance to the
/// closest point of `front`. Lower is better; `0.0` means every reference
/// point is matched exactly. Returns `f64::INFINITY` if `front` is empty
/// while `reference` is not, and `0.0` if `reference` is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn inverted_generational_distance(front: &[FloatSolution], reference: &[FloatSolution]) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }
    if front.is_empty() {
        return f64::INFINITY;
    }

    let total: f64 = reference
        .iter()
        .map(|r| {
            front
                .iter()
                .map(|s| euclidean(r.objectives(), s.objectives()))
                .fold(f64::INFINITY, f64::min)
        })
        .sum();
    total / reference.len() as f64
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
