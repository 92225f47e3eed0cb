//! Pipeline configuration

use crate::classifier::{Classifier, DEFAULT_SIGNIFICANCE};
use serde::{Deserialize, Serialize};
use stationarity_core::Result;
use stationarity_unitroot::{AdfTest, KpssTest};

/// Differencing rounds attempted before giving up
pub const DEFAULT_MAX_DIFFERENCES: usize = 2;

/// Everything a pipeline run needs, passed explicitly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Significance level shared by both tests
    pub significance: f64,
    /// Maximum number of differencing rounds
    pub max_differences: usize,
    pub adf: AdfTest,
    pub kpss: KpssTest,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
            max_differences: DEFAULT_MAX_DIFFERENCES,
            adf: AdfTest::default(),
            kpss: KpssTest::default(),
        }
    }
}

impl PipelineConfig {
    /// 1% significance: fewer rejections by either test
    pub fn strict() -> Self {
        Self {
            significance: 0.01,
            ..Default::default()
        }
    }

    /// 10% significance: more rejections by either test
    pub fn relaxed() -> Self {
        Self {
            significance: 0.10,
            ..Default::default()
        }
    }

    pub fn with_significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }

    pub fn with_max_differences(mut self, max_differences: usize) -> Self {
        self.max_differences = max_differences;
        self
    }

    pub fn with_adf(mut self, adf: AdfTest) -> Self {
        self.adf = adf;
        self
    }

    pub fn with_kpss(mut self, kpss: KpssTest) -> Self {
        self.kpss = kpss;
        self
    }

    /// Check the configuration and build its classifier
    pub fn classifier(&self) -> Result<Classifier> {
        Classifier::new(self.significance)
    }

    pub fn validate(&self) -> Result<()> {
        self.classifier().map(|_| ())
    }
}
