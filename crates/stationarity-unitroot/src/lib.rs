//! Unit root and stationarity tests
//!
//! - [`AdfTest`]: Augmented Dickey-Fuller, null of a unit root, MacKinnon
//!   response-surface p-values
//! - [`KpssTest`]: KPSS, null of level or trend stationarity, tabulated
//!   p-values
//! - [`UnitRootTest`]: closed enumeration over both, for callers that pick
//!   a test at runtime
//!
//! # Example
//!
//! ```rust
//! use stationarity_core::{Series, StationarityTest};
//! use stationarity_unitroot::{AdfTest, KpssTest, LagSelection};
//!
//! // Logistic map in its chaotic regime: bounded, mean-reverting
//! let values: Vec<f64> = std::iter::successors(Some(0.3), |x| Some(3.9 * x * (1.0 - x)))
//!     .take(120)
//!     .collect();
//! let series = Series::new(values).unwrap();
//!
//! let adf = AdfTest::default().with_lag_selection(LagSelection::Bic).run(&series).unwrap();
//! let kpss = KpssTest::default().run(&series).unwrap();
//! assert!(adf.p_value() >= 0.0 && adf.p_value() <= 1.0);
//! assert!(kpss.p_value() >= 0.01 && kpss.p_value() <= 0.10);
//! ```

pub mod adf;
pub mod kind;
pub mod kpss;
pub mod lags;
pub mod mackinnon;

pub use adf::AdfTest;
pub use kind::UnitRootTest;
pub use kpss::{KpssRegression, KpssTest};
pub use lags::{KpssLags, LagSelection};
