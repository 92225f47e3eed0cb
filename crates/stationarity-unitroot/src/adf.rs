//! Augmented Dickey-Fuller unit root test
//!
//! Fits
//!
//! ```text
//! Δy_t = [deterministic] + γ·y_{t-1} + Σ_{i=1..p} φ_i·Δy_{t-i} + ε_t
//! ```
//!
//! and reports the t-ratio of γ. The null hypothesis is a unit root (γ = 0);
//! large negative statistics reject it in favour of stationarity.

use crate::lags::{adf_lag_cap, schwert_max_lag, LagSelection};
use crate::mackinnon;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use stationarity_core::math::{distributions::normal, ols, InformationCriterion, OlsFit};
use stationarity_core::{
    Deterministic, Error, Result, Series, StationarityTest, StationarityTestProperties, TestKind,
    TestResult, MIN_SERIES_LENGTH,
};
use tracing::{debug, instrument};

/// Augmented Dickey-Fuller test configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdfTest {
    /// Deterministic terms in the test regression
    pub deterministic: Deterministic,
    /// How the number of lagged differences is chosen
    pub lag_selection: LagSelection,
    /// Upper bound for automatic lag search; `None` uses the Schwert rule
    pub max_lags: Option<usize>,
}

impl Default for AdfTest {
    fn default() -> Self {
        Self {
            deterministic: Deterministic::Constant,
            lag_selection: LagSelection::Aic,
            max_lags: None,
        }
    }
}

impl AdfTest {
    pub fn new(deterministic: Deterministic, lag_selection: LagSelection) -> Self {
        Self {
            deterministic,
            lag_selection,
            max_lags: None,
        }
    }

    pub fn with_deterministic(mut self, deterministic: Deterministic) -> Self {
        self.deterministic = deterministic;
        self
    }

    pub fn with_lag_selection(mut self, lag_selection: LagSelection) -> Self {
        self.lag_selection = lag_selection;
        self
    }

    pub fn with_max_lags(mut self, max_lags: usize) -> Self {
        self.max_lags = Some(max_lags);
        self
    }

    /// Largest lag order searched (or used) for a series of length `n`
    fn max_lag_for(&self, n: usize) -> Result<usize> {
        let trend_terms = self.deterministic.term_count();
        let cap = adf_lag_cap(n, trend_terms).ok_or(Error::InsufficientData {
            expected: 2 * (trend_terms + 1),
            actual: n,
        })?;

        let requested = match self.lag_selection {
            LagSelection::Fixed(p) => Some(p),
            _ => self.max_lags,
        };

        match requested {
            Some(lag) if lag > cap => Err(Error::InvalidParameter(format!(
                "ADF lag order {lag} exceeds the maximum {cap} for {n} observations"
            ))),
            Some(lag) => Ok(lag),
            None => Ok(schwert_max_lag(n).min(cap)),
        }
    }

    /// Pick the lag order on a common sample trimmed by `max_lag`
    fn select_lag(&self, y: &[f64], dy: &[f64], max_lag: usize) -> Result<usize> {
        let criterion = match self.lag_selection {
            LagSelection::Fixed(p) => return Ok(p),
            LagSelection::Aic => InformationCriterion::Aic,
            LagSelection::Bic => InformationCriterion::Bic,
            LagSelection::TStat => return self.select_lag_by_t_stat(y, dy, max_lag),
        };

        let mut best: Option<(f64, usize)> = None;
        for lags in 0..=max_lag {
            let fit = self.fit(y, dy, lags, max_lag)?;
            let ic = fit.information_criterion(criterion);
            debug!("ADF lag {}: {} = {:.4}", lags, criterion_name(criterion), ic);
            // Strict comparison keeps the most parsimonious model on ties
            if best.map_or(true, |(best_ic, _)| ic < best_ic) {
                best = Some((ic, lags));
            }
        }
        Ok(best.map_or(0, |(_, lags)| lags))
    }

    /// General-to-specific search: drop the last lag until it is significant
    fn select_lag_by_t_stat(&self, y: &[f64], dy: &[f64], max_lag: usize) -> Result<usize> {
        let stop = normal::ppf(0.95);
        for lags in (1..=max_lag).rev() {
            let fit = self.fit(y, dy, lags, max_lag)?;
            let t_last = fit.t_value(lags).abs();
            debug!("ADF lag {}: |t| of last lag = {:.4}", lags, t_last);
            if t_last >= stop {
                return Ok(lags);
            }
        }
        Ok(0)
    }

    /// Fit the test regression with `lags` lagged differences, dropping the
    /// first `trim` rows of the differenced series
    ///
    /// Column 0 is the lagged level, columns `1..=lags` the lagged
    /// differences, deterministic terms last.
    fn fit(&self, y: &[f64], dy: &[f64], lags: usize, trim: usize) -> Result<OlsFit> {
        let rows = dy.len() - trim;
        let cols = 1 + lags + self.deterministic.term_count();
        let mut design = DMatrix::zeros(rows, cols);

        for row in 0..rows {
            let t = row + trim;
            design[(row, 0)] = y[t];
            for i in 1..=lags {
                design[(row, i)] = dy[t - i];
            }
            for (j, value) in self.deterministic.regressors(row + 1).enumerate() {
                design[(row, 1 + lags + j)] = value;
            }
        }

        ols(&design, &dy[trim..])
    }
}

fn criterion_name(criterion: InformationCriterion) -> &'static str {
    match criterion {
        InformationCriterion::Aic => "AIC",
        InformationCriterion::Bic => "BIC",
    }
}

impl StationarityTestProperties for AdfTest {
    fn kind(&self) -> TestKind {
        TestKind::Adf
    }

    fn minimum_sample_size(&self) -> usize {
        let fixed_lags = match self.lag_selection {
            LagSelection::Fixed(p) => p,
            _ => 0,
        };
        let regressors = fixed_lags + self.deterministic.term_count() + 1;
        MIN_SERIES_LENGTH.max(2 * regressors + 2)
    }
}

impl StationarityTest for AdfTest {
    #[instrument(skip(self, series), fields(n = series.len(), deterministic = %self.deterministic))]
    fn run(&self, series: &Series) -> Result<TestResult> {
        series.require_len(self.minimum_sample_size())?;
        let n = series.len();

        if series.is_constant() {
            debug!("ADF: constant series, unit root rejected without regression");
            return Ok(TestResult::new(
                TestKind::Adf,
                self.deterministic,
                f64::NEG_INFINITY,
                0.0,
                mackinnon::critical_values(self.deterministic, n - 1),
                0,
                n - 1,
            ));
        }

        let max_lag = self.max_lag_for(n)?;
        let y = series.values();
        let dy: Vec<f64> = y.windows(2).map(|w| w[1] - w[0]).collect();

        let lags = self.select_lag(y, &dy, max_lag)?;
        debug!(
            "ADF: {} selection picked {} of at most {} lags",
            self.lag_selection.name(),
            lags,
            max_lag
        );

        let fit = self.fit(y, &dy, lags, lags)?;
        let statistic = fit.t_value(0);
        if !statistic.is_finite() {
            return Err(Error::singular("ADF regression"));
        }

        let nobs = fit.nobs();
        let p_value = mackinnon::p_value(statistic, self.deterministic);
        debug!("ADF: statistic = {:.4}, p = {:.4}, nobs = {}", statistic, p_value, nobs);

        Ok(TestResult::new(
            TestKind::Adf,
            self.deterministic,
            statistic,
            p_value,
            mackinnon::critical_values(self.deterministic, nobs),
            lags,
            nobs,
        ))
    }
}
