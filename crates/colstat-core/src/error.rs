//! Error types for column statistics
//!
//! Provides a unified error type for all column-stats crates.

use thiserror::Error;

/// Core error type for statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// An operation was given an empty input sequence
    #[error("Empty input: {0} requires at least one value")]
    EmptyInput(&'static str),

    /// Not enough data points for the requested statistic
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Paired sequences of unequal length
    #[error("Dimension mismatch: left sequence has {left} values, right has {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Input whose degeneracy (e.g. zero variance) makes the statistic undefined
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A root-finder failed to converge within its iteration bound
    #[error("Convergence failure: {0}")]
    Convergence(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence(level: f64) -> Self {
        Self::InvalidParameter(format!(
            "Confidence level {level} must be in the open interval (0, 1)"
        ))
    }

    /// Create an error for a parameter that must be strictly positive
    pub fn non_positive(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be > 0, got {value}"))
    }

    /// Create an error for paired sequences of unequal length
    pub fn size_mismatch(left: usize, right: usize) -> Self {
        Self::DimensionMismatch { left, right }
    }

    /// Create an error for a series with no spread
    pub fn zero_variance(context: &str) -> Self {
        Self::DegenerateInput(format!("{context} has zero variance"))
    }
}
