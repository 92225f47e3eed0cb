//! Error types for stationarity analysis
//!
//! Provides a unified error type for all stationarity crates.

use thiserror::Error;

/// Core error type for stationarity operations
#[derive(Error, Debug)]
pub enum Error {
    /// Series shorter than the operation requires
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// NaN or infinite value at a position consumed by a test
    #[error("Non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a significance level outside (0, 1)
    pub fn invalid_significance(alpha: f64) -> Self {
        Self::InvalidParameter(format!("Significance level {alpha} must be in (0, 1)"))
    }

    /// Create an error for a singular or ill-conditioned regression
    pub fn singular(context: &str) -> Self {
        Self::Computation(format!("{context}: design matrix is singular"))
    }

    /// Check a length requirement
    pub fn require_len(actual: usize, expected: usize) -> Result<()> {
        if actual < expected {
            return Err(Self::InsufficientData { expected, actual });
        }
        Ok(())
    }

    /// Whether this error means the input was too short
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}
