//! Kwiatkowski-Phillips-Schmidt-Shin stationarity test
//!
//! The null hypothesis is (level or trend) stationarity, so unlike ADF a
//! small p-value is evidence *against* stationarity.

use crate::lags::{hobijn_bandwidth, schwert_max_lag, KpssLags};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use stationarity_core::math::{bartlett_long_run_variance, interpolate, ols};
use stationarity_core::{
    CriticalValues, Deterministic, Error, Result, Series, SignificanceLevel, StationarityTest,
    StationarityTestProperties, TestKind, TestResult, MIN_SERIES_LENGTH,
};
use tracing::{debug, instrument};

const LEVELS: [SignificanceLevel; 4] = [
    SignificanceLevel::TenPercent,
    SignificanceLevel::FivePercent,
    SignificanceLevel::TwoAndHalfPercent,
    SignificanceLevel::OnePercent,
];
const P_VALUES: [f64; 4] = [0.10, 0.05, 0.025, 0.01];
const LEVEL_CRITICAL: [f64; 4] = [0.347, 0.463, 0.574, 0.739];
const TREND_CRITICAL: [f64; 4] = [0.119, 0.146, 0.176, 0.216];

/// Stationarity hypothesis tested by KPSS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KpssRegression {
    /// Stationary around a constant ("c")
    Level,
    /// Stationary around a linear trend ("ct")
    Trend,
}

impl Default for KpssRegression {
    fn default() -> Self {
        Self::Level
    }
}

impl KpssRegression {
    fn table(&self) -> &'static [f64; 4] {
        match self {
            KpssRegression::Level => &LEVEL_CRITICAL,
            KpssRegression::Trend => &TREND_CRITICAL,
        }
    }
}

impl From<KpssRegression> for Deterministic {
    fn from(regression: KpssRegression) -> Self {
        match regression {
            KpssRegression::Level => Deterministic::Constant,
            KpssRegression::Trend => Deterministic::ConstantTrend,
        }
    }
}

/// KPSS test configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KpssTest {
    pub regression: KpssRegression,
    pub lags: KpssLags,
}

impl KpssTest {
    pub fn new(regression: KpssRegression, lags: KpssLags) -> Self {
        Self { regression, lags }
    }

    pub fn with_regression(mut self, regression: KpssRegression) -> Self {
        self.regression = regression;
        self
    }

    pub fn with_lags(mut self, lags: KpssLags) -> Self {
        self.lags = lags;
        self
    }

    /// Critical values tabulated by Kwiatkowski et al. (1992)
    pub fn critical_values(&self) -> CriticalValues {
        LEVELS
            .iter()
            .copied()
            .zip(self.regression.table().iter().copied())
            .collect()
    }

    /// Interpolated p-value, clamped to the tabulated range [0.01, 0.10]
    pub fn p_value(&self, statistic: f64) -> f64 {
        let table = self.regression.table();
        if statistic < table[0] {
            debug!("KPSS statistic {:.4} below table range, p-value is larger than reported", statistic);
        } else if statistic > table[3] {
            debug!("KPSS statistic {:.4} above table range, p-value is smaller than reported", statistic);
        }
        interpolate(statistic, table, &P_VALUES)
    }

    fn residuals(&self, y: &[f64]) -> Result<Vec<f64>> {
        match self.regression {
            KpssRegression::Level => {
                let mean = y.iter().sum::<f64>() / y.len() as f64;
                Ok(y.iter().map(|v| v - mean).collect())
            }
            KpssRegression::Trend => {
                let design = DMatrix::from_fn(y.len(), 2, |i, j| if j == 0 { 1.0 } else { (i + 1) as f64 });
                Ok(ols(&design, y)?.into_residuals())
            }
        }
    }

    fn bandwidth(&self, residuals: &[f64]) -> Result<usize> {
        let n = residuals.len();
        let lags = match self.lags {
            KpssLags::Fixed(lags) if lags >= n => {
                return Err(Error::InvalidParameter(format!(
                    "KPSS bandwidth {lags} must be smaller than the series length {n}"
                )))
            }
            KpssLags::Fixed(lags) => lags,
            KpssLags::Legacy => schwert_max_lag(n),
            KpssLags::Auto => hobijn_bandwidth(residuals),
        };
        Ok(lags.min(n - 1))
    }
}

impl StationarityTestProperties for KpssTest {
    fn kind(&self) -> TestKind {
        TestKind::Kpss
    }

    fn minimum_sample_size(&self) -> usize {
        MIN_SERIES_LENGTH
    }
}

impl StationarityTest for KpssTest {
    #[instrument(skip(self, series), fields(n = series.len(), regression = ?self.regression))]
    fn run(&self, series: &Series) -> Result<TestResult> {
        series.require_len(self.minimum_sample_size())?;
        let n = series.len();
        let deterministic = Deterministic::from(self.regression);

        if series.is_constant() {
            debug!("KPSS: constant series, stationarity not rejected");
            return Ok(TestResult::new(
                TestKind::Kpss,
                deterministic,
                0.0,
                P_VALUES[0],
                self.critical_values(),
                0,
                n,
            ));
        }

        let residuals = self.residuals(series.values())?;
        let lags = self.bandwidth(&residuals)?;

        let mut partial_sum = 0.0;
        let mut eta = 0.0;
        for e in &residuals {
            partial_sum += e;
            eta += partial_sum * partial_sum;
        }
        let nf = n as f64;
        eta /= nf * nf;

        let long_run_variance = bartlett_long_run_variance(&residuals, lags);
        if long_run_variance <= 0.0 || !long_run_variance.is_finite() {
            return Err(Error::Computation(format!(
                "KPSS long-run variance {long_run_variance} is not positive"
            )));
        }

        let statistic = eta / long_run_variance;
        let p_value = self.p_value(statistic);
        debug!("KPSS: statistic = {:.4}, p = {:.4}, lags = {}", statistic, p_value, lags);

        Ok(TestResult::new(
            TestKind::Kpss,
            deterministic,
            statistic,
            p_value,
            self.critical_values(),
            lags,
            n,
        ))
    }
}
