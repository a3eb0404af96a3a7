//! Core types shared across problems and Pareto utilities.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction of an objective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Minimize the objective value.
    Minimize,
    /// Maximize the objective value.
    Maximize,
}
