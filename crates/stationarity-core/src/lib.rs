//! Core types and traits for stationarity testing
//!
//! This crate holds everything the test, transform and pipeline crates share:
//!
//! - [`Series`]: a validated sequence of finite observations
//! - [`TestResult`]: the immutable outcome of one test invocation
//! - [`StationarityTest`]: the trait every test implements
//! - [`Error`]: the error type used across the workspace
//! - [`math`]: least squares, information criteria and long-run variance
//!
//! # Example
//!
//! ```rust
//! use stationarity_core::{Error, Series};
//!
//! let series = Series::from_values(vec![3, 1, 4, 1, 5, 9, 2, 6]).unwrap();
//! assert_eq!(series.len(), 8);
//!
//! match Series::new(vec![1.0, f64::NAN]) {
//!     Err(Error::NonFiniteValue { index, .. }) => assert_eq!(index, 1),
//!     _ => unreachable!(),
//! }
//! ```

pub mod error;
pub mod math;
pub mod series;
pub mod traits;
pub mod types;

// Re-export core types
pub use error::{Error, Result};
pub use series::{Series, CONSTANT_TOLERANCE, MIN_SERIES_LENGTH};
pub use traits::{StationarityTest, StationarityTestProperties};
pub use types::{
    is_significant, CriticalValues, Deterministic, SignificanceLevel, TestKind, TestResult,
    P_VALUE_TOLERANCE,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{
        Deterministic, Result, Series, SignificanceLevel, StationarityTest,
        StationarityTestProperties, TestKind, TestResult,
    };
}
