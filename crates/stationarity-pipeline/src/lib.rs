//! Stationarity verdicts and the iterate-until-stationary pipeline
//!
//! ADF (null: unit root) and KPSS (null: stationarity) are run side by side
//! and their rejections combined into a [`StationarityVerdict`]. The
//! [`StationarityPipeline`] differences the series until the verdict is
//! `Stationary` or the differencing budget in [`PipelineConfig`] is spent.
//!
//! # Example
//!
//! ```rust
//! use stationarity_core::Series;
//! use stationarity_pipeline::{PipelineConfig, StationarityPipeline, StationarityVerdict, TerminalState};
//!
//! let flat = Series::new(vec![2.5; 50]).unwrap();
//! let outcome = StationarityPipeline::new(PipelineConfig::default()).run(&flat).unwrap();
//!
//! assert_eq!(outcome.terminal(), TerminalState::Stationary { order: 0 });
//! assert_eq!(outcome.final_verdict(), StationarityVerdict::Stationary);
//! ```

pub mod classifier;
pub mod config;
pub mod pipeline;
pub mod verdict;
pub mod visualization;

pub use classifier::{classify, Classifier, DEFAULT_SIGNIFICANCE};
pub use config::{PipelineConfig, DEFAULT_MAX_DIFFERENCES};
pub use pipeline::{
    analyze, PipelineOutcome, PipelineStep, StationarityPipeline, StationarityReport, TerminalState,
};
pub use verdict::{RecommendedTransform, StationarityVerdict};
pub use visualization::{NullPipelineVisualizer, PipelineVisualizer};
