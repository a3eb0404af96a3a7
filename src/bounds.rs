//! Per-variable box bounds owned by a problem.
//!
//! A [`Bounds`] value is created once by a problem and handed to whoever
//! needs it (solution factories, repair operators, reporters). There is no
//! shared or global bounds state.
//!
//! ```
//! use cmop::Bounds;
//!
//! let bounds = Bounds::uniform(3, 0.0, 1.0).unwrap();
//! assert_eq!(bounds.len(), 3);
//! assert!(bounds.contains(&[0.0, 0.5, 1.0]));
//! assert!(!bounds.contains(&[0.0, 1.5, 1.0]));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rng_util;

/// Lower and upper limits for every decision variable.
///
/// Deserialization runs the same validation as [`Bounds::new`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawBounds")
)]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawBounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBounds> for Bounds {
    type Error = Error;

    fn try_from(raw: RawBounds) -> Result<Self> {
        Self::new(raw.lower, raw.upper)
    }
}

impl Bounds {
    /// Creates bounds from explicit lower and upper sequences.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the sequences differ in length,
    /// `NonFiniteBound` if any value is NaN or infinite, and
    /// `InvalidBounds` if some lower bound exceeds its upper bound.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(Error::DimensionMismatch {
                what: "upper bounds",
                expected: lower.len(),
                got: upper.len(),
            });
        }
        for (index, (&low, &high)) in lower.iter().zip(&upper).enumerate() {
            if !low.is_finite() || !high.is_finite() {
                return Err(Error::NonFiniteBound { index });
            }
            if low > high {
                return Err(Error::InvalidBounds { index, low, high });
            }
        }
        Ok(Self { lower, upper })
    }

    /// Creates `n` identical `[low, high]` bounds.
    ///
    /// # Errors
    ///
    /// Same as [`Bounds::new`].
    pub fn uniform(n: usize, low: f64, high: f64) -> Result<Self> {
        Self::new(vec![low; n], vec![high; n])
    }

    /// Creates `n` unit-interval `[0, 1]` bounds.
    #[must_use]
    pub fn unit(n: usize) -> Self {
        Self {
            lower: vec![0.0; n],
            upper: vec![1.0; n],
        }
    }

    /// Number of bounded variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    /// Returns `true` if no variable is bounded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Lower bound of each variable.
    #[must_use]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper bound of each variable.
    #[must_use]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Returns `true` if `x` has one entry per variable and every entry lies
    /// in its closed interval.
    #[must_use]
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.len()
            && x
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(&v, (&low, &high))| low <= v && v <= high)
    }

    /// Draws a variable vector uniformly inside the bounds.
    #[must_use]
    pub fn sample(&self, rng: &mut fastrand::Rng) -> Vec<f64> {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(&low, &high)| rng_util::f64_range(rng, low, high))
            .collect()
    }
}
