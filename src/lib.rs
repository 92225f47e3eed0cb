//! Stationarity testing and detrending toolkit
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`stationarity_core`]: `Series`, `TestResult`, the error type and
//!   numeric helpers
//! - [`stationarity_unitroot`]: ADF and KPSS tests
//! - [`stationarity_transform`]: differencing, detrending, HP and BK filters
//! - [`stationarity_pipeline`]: verdict classification and
//!   iterate-until-stationary
//!
//! # Example
//!
//! ```rust
//! use stationarity::prelude::*;
//!
//! let series = Series::new(vec![4.0; 32]).unwrap();
//! let report = analyze(&series, &PipelineConfig::default()).unwrap();
//! assert_eq!(report.verdict(), StationarityVerdict::Stationary);
//! ```

pub use stationarity_core;
pub use stationarity_pipeline;
pub use stationarity_transform;
pub use stationarity_unitroot;

pub use stationarity_core::{Error, Result, Series, TestKind, TestResult};
pub use stationarity_pipeline::{
    analyze, classify, PipelineConfig, PipelineOutcome, StationarityPipeline, StationarityReport,
    StationarityVerdict, TerminalState,
};
pub use stationarity_transform::{detrend, difference, Differencer, Trend};
pub use stationarity_unitroot::{AdfTest, KpssTest, UnitRootTest};

/// Prelude module for convenient imports
pub mod prelude {
    pub use stationarity_core::prelude::*;
    pub use stationarity_pipeline::{
        analyze, classify, Classifier, PipelineConfig, PipelineOutcome, RecommendedTransform,
        StationarityPipeline, StationarityReport, StationarityVerdict, TerminalState,
    };
    pub use stationarity_transform::{detrend, difference, Differencer, Trend};
    pub use stationarity_unitroot::{AdfTest, KpssLags, KpssRegression, KpssTest, LagSelection, UnitRootTest};
}
