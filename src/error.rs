/// Errors returned by problem construction, evaluation and population I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a lower bound is greater than its upper bound.
    #[error("invalid bounds for variable {index}: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The index of the offending variable.
        index: usize,
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when a bound is NaN or infinite.
    #[error("bound for variable {index} is not finite")]
    NonFiniteBound {
        /// The index of the offending variable.
        index: usize,
    },

    /// Returned when a problem is configured with an unusable dimension.
    #[error("invalid {what}: {got}")]
    InvalidDimension {
        /// Which dimension was rejected (e.g. `"number of variables"`).
        what: &'static str,
        /// The rejected value.
        got: usize,
    },

    /// Returned when a vector does not have the length the problem declares.
    #[error("{what} dimension mismatch: expected {expected} values, got {got}")]
    DimensionMismatch {
        /// Which vector mismatched (`"variables"`, `"objectives"`, ...).
        what: &'static str,
        /// The declared length.
        expected: usize,
        /// The actual length.
        got: usize,
    },

    /// Returned when a population statistic is requested for no solutions.
    #[error("population is empty")]
    EmptyPopulation,

    /// Returned when a token of a front file is not a floating-point number.
    #[error("line {line}: cannot parse '{token}' as a number")]
    ParseFloat {
        /// One-based line number in the file.
        line: usize,
        /// The token that failed to parse.
        token: String,
        /// The underlying parse error.
        #[source]
        source: core::num::ParseFloatError,
    },

    /// Returned when reading or writing a file fails.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
