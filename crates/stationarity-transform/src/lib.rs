//! Transformations that make a series stationary
//!
//! - [`difference`] / [`Differencer`]: ordinary and seasonal differencing,
//!   invertible through [`Differenced::invert`]
//! - [`detrend`]: removal of a constant, linear or quadratic trend
//! - [`filters`]: Hodrick-Prescott and Baxter-King trend/cycle filters
//!
//! # Example
//!
//! ```rust
//! use stationarity_core::Series;
//! use stationarity_transform::{difference, Differencer};
//!
//! let cubic = Series::new((0..10).map(|t| (t * t * t) as f64).collect()).unwrap();
//! let third = difference(&cubic, 3).unwrap();
//! assert!(third.iter().all(|&v| v == 6.0));
//!
//! let diffed = Differencer::new(1).apply(&cubic).unwrap();
//! assert_eq!(diffed.invert().unwrap(), cubic);
//! ```

pub mod detrend;
pub mod difference;
pub mod filters;

pub use detrend::{detrend, Detrended, Trend};
pub use difference::{difference, seasonal_difference, Differenced, Differencer};
pub use filters::{BaxterKing, HodrickPrescott, TrendCycle};
