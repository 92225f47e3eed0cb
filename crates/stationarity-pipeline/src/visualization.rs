//! Visualization interface for the stationarity pipeline
//!
//! The pipeline calls these hooks as it runs so a plotting backend can
//! record the series at each differencing order and the tests run on it.
//! No backend ships with this crate.

use crate::pipeline::{PipelineOutcome, PipelineStep};
use stationarity_core::{Result, Series};

/// Receives pipeline stages as they happen
///
/// Errors returned by a visualizer never abort the pipeline.
///
/// # Example Implementation
///
/// ```rust
/// use std::sync::Mutex;
/// use stationarity_core::{Result, Series};
/// use stationarity_pipeline::{PipelineOutcome, PipelineStep, PipelineVisualizer};
///
/// #[derive(Default)]
/// struct VerdictLog(Mutex<Vec<String>>);
///
/// impl PipelineVisualizer for VerdictLog {
///     fn record_series(&self, _series: &Series, _order: usize) -> Result<()> {
///         Ok(())
///     }
///
///     fn record_step(&self, step: &PipelineStep) -> Result<()> {
///         self.0.lock().unwrap().push(step.verdict().to_string());
///         Ok(())
///     }
///
///     fn record_outcome(&self, _outcome: &PipelineOutcome) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait PipelineVisualizer: Send + Sync {
    /// Record the series tested at differencing `order` (0 is the input)
    fn record_series(&self, series: &Series, order: usize) -> Result<()>;

    /// Record the tests and verdict for one differencing order
    fn record_step(&self, step: &PipelineStep) -> Result<()>;

    /// Record the finished run
    fn record_outcome(&self, outcome: &PipelineOutcome) -> Result<()>;

    /// Check if this visualizer actually produces output
    ///
    /// The pipeline skips every hook when this returns false.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Visualizer that does nothing
///
/// This is the default visualizer; every hook compiles away.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPipelineVisualizer;

impl PipelineVisualizer for NullPipelineVisualizer {
    #[inline(always)]
    fn record_series(&self, _series: &Series, _order: usize) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_step(&self, _step: &PipelineStep) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_outcome(&self, _outcome: &PipelineOutcome) -> Result<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
