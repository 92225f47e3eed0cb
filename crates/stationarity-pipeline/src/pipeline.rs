//! Iterate-until-stationary pipeline
//!
//! ```text
//! series ─▶ {ADF, KPSS} ─▶ classify ─┬─ Stationary ─────────────▶ done
//!                ▲                    └─ otherwise ─▶ difference ─┘
//! ```
//!
//! Differencing stops once the configured budget is spent; the run then ends
//! `Exhausted` with the last verdict on record.

use crate::classifier::Classifier;
use crate::config::PipelineConfig;
use crate::verdict::{RecommendedTransform, StationarityVerdict};
use crate::visualization::{NullPipelineVisualizer, PipelineVisualizer};
use serde::{Deserialize, Serialize};
use stationarity_core::{Result, Series, StationarityTest, TestResult};
use stationarity_transform::{difference, Differencer};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Tests and verdict at one differencing order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStep {
    order: usize,
    adf: TestResult,
    kpss: TestResult,
    verdict: StationarityVerdict,
}

impl PipelineStep {
    /// Differencing rounds applied before these tests
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn adf(&self) -> &TestResult {
        &self.adf
    }

    pub fn kpss(&self) -> &TestResult {
        &self.kpss
    }

    pub fn verdict(&self) -> StationarityVerdict {
        self.verdict
    }
}

/// How a pipeline run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalState {
    /// Stationary after `order` rounds of differencing
    Stationary { order: usize },
    /// Not stationary after spending the budget of `order` rounds
    Exhausted { order: usize },
}

impl TerminalState {
    pub fn order(&self) -> usize {
        match self {
            TerminalState::Stationary { order } | TerminalState::Exhausted { order } => *order,
        }
    }

    pub fn is_stationary(&self) -> bool {
        matches!(self, TerminalState::Stationary { .. })
    }
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalState::Stationary { order } => write!(f, "stationary at differencing order {order}"),
            TerminalState::Exhausted { order } => {
                write!(f, "not stationary after {order} rounds of differencing")
            }
        }
    }
}

/// Complete record of a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    steps: Vec<PipelineStep>,
    terminal: TerminalState,
    series: Series,
}

impl PipelineOutcome {
    /// One step per differencing order, starting with the input
    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    pub fn terminal(&self) -> TerminalState {
        self.terminal
    }

    /// The series after the final round of differencing
    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn into_series(self) -> Series {
        self.series
    }

    pub fn final_step(&self) -> &PipelineStep {
        // A run always records at least the step for the input series
        &self.steps[self.steps.len() - 1]
    }

    pub fn final_verdict(&self) -> StationarityVerdict {
        self.final_step().verdict()
    }

    pub fn differencing_order(&self) -> usize {
        self.terminal.order()
    }

    pub fn is_stationary(&self) -> bool {
        self.terminal.is_stationary()
    }

    /// Differencer reproducing the final series from the input, if any
    /// differencing was applied
    pub fn differencer(&self) -> Option<Differencer> {
        match self.differencing_order() {
            0 => None,
            order => Some(Differencer::new(order)),
        }
    }
}

impl fmt::Display for PipelineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stationarity pipeline: {}", self.terminal)?;
        for step in &self.steps {
            writeln!(
                f,
                "  order {}: ADF p = {:.4}, KPSS p = {:.4} -> {}",
                step.order,
                step.adf.p_value(),
                step.kpss.p_value(),
                step.verdict
            )?;
        }
        Ok(())
    }
}

/// One-shot ADF + KPSS analysis of a single series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationarityReport {
    adf: TestResult,
    kpss: TestResult,
    verdict: StationarityVerdict,
    significance: f64,
}

impl StationarityReport {
    pub fn adf(&self) -> &TestResult {
        &self.adf
    }

    pub fn kpss(&self) -> &TestResult {
        &self.kpss
    }

    pub fn verdict(&self) -> StationarityVerdict {
        self.verdict
    }

    pub fn significance(&self) -> f64 {
        self.significance
    }

    pub fn recommended_transform(&self) -> RecommendedTransform {
        self.verdict.recommended_transform()
    }
}

impl fmt::Display for StationarityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.adf)?;
        write!(f, "{}", self.kpss)?;
        writeln!(f, "Verdict at {}: {}", self.significance, self.verdict)?;
        writeln!(f, "  {}", self.verdict.description())
    }
}

/// Runs ADF and KPSS, differencing until the series is stationary
///
/// # Type Parameters
///
/// - `V`: visualizer receiving each stage, [`NullPipelineVisualizer`] by default
pub struct StationarityPipeline<V: PipelineVisualizer = NullPipelineVisualizer> {
    config: PipelineConfig,
    visualizer: V,
}

impl StationarityPipeline<NullPipelineVisualizer> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            visualizer: NullPipelineVisualizer,
        }
    }
}

impl Default for StationarityPipeline<NullPipelineVisualizer> {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl<V: PipelineVisualizer> StationarityPipeline<V> {
    pub fn with_visualizer(config: PipelineConfig, visualizer: V) -> Self {
        Self { config, visualizer }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn visualizer(&self) -> &V {
        &self.visualizer
    }

    fn step(&self, classifier: &Classifier, series: &Series, order: usize) -> Result<PipelineStep> {
        let visualize = self.visualizer.is_enabled();
        if visualize {
            let _ = self.visualizer.record_series(series, order);
        }
        let adf = self.config.adf.run(series)?;
        let kpss = self.config.kpss.run(series)?;
        let verdict = classifier.classify(&adf, &kpss)?;
        debug!(
            "Order {}: ADF p = {:.4}, KPSS p = {:.4}, verdict {}",
            order,
            adf.p_value(),
            kpss.p_value(),
            verdict
        );

        let step = PipelineStep {
            order,
            adf,
            kpss,
            verdict,
        };
        if visualize {
            let _ = self.visualizer.record_step(&step);
        }
        Ok(step)
    }

    /// Test, classify and difference until stationary or out of budget
    #[instrument(skip(self, series), fields(n = series.len(), max_differences = self.config.max_differences))]
    pub fn run(&self, series: &Series) -> Result<PipelineOutcome> {
        let classifier = self.config.classifier()?;
        let mut current = series.clone();
        let mut steps = Vec::with_capacity(self.config.max_differences + 1);
        let mut order = 0;

        let terminal = loop {
            let step = self.step(&classifier, &current, order)?;
            let verdict = step.verdict();
            steps.push(step);

            if verdict.is_stationary() {
                info!("Series is stationary after {} rounds of differencing", order);
                break TerminalState::Stationary { order };
            }
            if order == self.config.max_differences {
                warn!(
                    "Series still {} after {} rounds of differencing",
                    verdict, order
                );
                break TerminalState::Exhausted { order };
            }

            current = difference(&current, 1)?;
            order += 1;
            debug!("Differenced to order {}, {} observations remain", order, current.len());
        };

        let outcome = PipelineOutcome {
            steps,
            terminal,
            series: current,
        };
        if self.visualizer.is_enabled() {
            let _ = self.visualizer.record_outcome(&outcome);
        }
        Ok(outcome)
    }

    /// Run both tests once and classify, without differencing
    #[instrument(skip(self, series), fields(n = series.len()))]
    pub fn analyze(&self, series: &Series) -> Result<StationarityReport> {
        let classifier = self.config.classifier()?;
        let step = self.step(&classifier, series, 0)?;
        Ok(StationarityReport {
            adf: step.adf,
            kpss: step.kpss,
            verdict: step.verdict,
            significance: classifier.significance(),
        })
    }
}

/// [`StationarityPipeline::analyze`] with an explicit configuration
pub fn analyze(series: &Series, config: &PipelineConfig) -> Result<StationarityReport> {
    StationarityPipeline::new(*config).analyze(series)
}
