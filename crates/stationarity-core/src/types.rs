//! Types shared by every stationarity test

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Slack applied when comparing a p-value against a significance level
///
/// p-values come from response surfaces and table interpolation, so a value
/// that should sit exactly on α can land a few ulps either side.
pub const P_VALUE_TOLERANCE: f64 = 1e-12;

/// Whether `p_value` is at or below `alpha`, within `P_VALUE_TOLERANCE`
#[inline]
pub fn is_significant(p_value: f64, alpha: f64) -> bool {
    p_value <= alpha + P_VALUE_TOLERANCE
}

/// The tests this workspace implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestKind {
    /// Augmented Dickey-Fuller
    Adf,
    /// Kwiatkowski-Phillips-Schmidt-Shin
    Kpss,
}

impl TestKind {
    pub fn name(&self) -> &'static str {
        match self {
            TestKind::Adf => "ADF",
            TestKind::Kpss => "KPSS",
        }
    }

    /// Null hypothesis of the test, in words
    pub fn null_hypothesis(&self) -> &'static str {
        match self {
            TestKind::Adf => "the series has a unit root",
            TestKind::Kpss => "the series is (trend-)stationary",
        }
    }

    /// Whether rejecting the null is evidence of stationarity
    pub fn rejection_implies_stationarity(&self) -> bool {
        matches!(self, TestKind::Adf)
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Deterministic terms included in a test regression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deterministic {
    /// No constant, no trend ("n")
    None,
    /// Constant only ("c")
    Constant,
    /// Constant and linear trend ("ct")
    ConstantTrend,
    /// Constant, linear and quadratic trend ("ctt")
    ConstantTrendSquared,
}

impl Deterministic {
    /// Number of deterministic regressors
    pub fn term_count(&self) -> usize {
        match self {
            Deterministic::None => 0,
            Deterministic::Constant => 1,
            Deterministic::ConstantTrend => 2,
            Deterministic::ConstantTrendSquared => 3,
        }
    }

    /// Conventional short code
    pub fn code(&self) -> &'static str {
        match self {
            Deterministic::None => "n",
            Deterministic::Constant => "c",
            Deterministic::ConstantTrend => "ct",
            Deterministic::ConstantTrendSquared => "ctt",
        }
    }

    /// Value of each deterministic regressor at 1-based time `t`
    pub fn regressors(&self, t: usize) -> impl Iterator<Item = f64> {
        let t = t as f64;
        [1.0, t, t * t].into_iter().take(self.term_count())
    }
}

impl Default for Deterministic {
    fn default() -> Self {
        Self::Constant
    }
}

impl fmt::Display for Deterministic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Significance levels at which critical values are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SignificanceLevel {
    OnePercent,
    TwoAndHalfPercent,
    FivePercent,
    TenPercent,
}

impl SignificanceLevel {
    pub fn alpha(&self) -> f64 {
        match self {
            SignificanceLevel::OnePercent => 0.01,
            SignificanceLevel::TwoAndHalfPercent => 0.025,
            SignificanceLevel::FivePercent => 0.05,
            SignificanceLevel::TenPercent => 0.10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignificanceLevel::OnePercent => "1%",
            SignificanceLevel::TwoAndHalfPercent => "2.5%",
            SignificanceLevel::FivePercent => "5%",
            SignificanceLevel::TenPercent => "10%",
        }
    }
}

impl fmt::Display for SignificanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Critical values keyed by significance level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriticalValues(BTreeMap<SignificanceLevel, f64>);

impl CriticalValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, level: SignificanceLevel, value: f64) -> Self {
        self.0.insert(level, value);
        self
    }

    pub fn get(&self, level: SignificanceLevel) -> Option<f64> {
        self.0.get(&level).copied()
    }

    /// Look up by the label printed in reports ("1%", "5%", ...)
    pub fn get_by_label(&self, label: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(level, _)| level.label() == label)
            .map(|(_, &v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SignificanceLevel, f64)> + '_ {
        self.0.iter().map(|(&level, &v)| (level, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(SignificanceLevel, f64)> for CriticalValues {
    fn from_iter<I: IntoIterator<Item = (SignificanceLevel, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Outcome of a single test invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    kind: TestKind,
    deterministic: Deterministic,
    statistic: f64,
    p_value: f64,
    critical_values: CriticalValues,
    lags_used: usize,
    nobs: usize,
}

impl TestResult {
    /// Create a new test result
    ///
    /// The p-value is clamped into [0, 1].
    pub fn new(
        kind: TestKind,
        deterministic: Deterministic,
        statistic: f64,
        p_value: f64,
        critical_values: CriticalValues,
        lags_used: usize,
        nobs: usize,
    ) -> Self {
        Self {
            kind,
            deterministic,
            statistic,
            p_value: p_value.clamp(0.0, 1.0),
            critical_values,
            lags_used,
            nobs,
        }
    }

    pub fn kind(&self) -> TestKind {
        self.kind
    }

    pub fn deterministic(&self) -> Deterministic {
        self.deterministic
    }

    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    pub fn critical_values(&self) -> &CriticalValues {
        &self.critical_values
    }

    /// Lag order (ADF) or bandwidth (KPSS) used
    pub fn lags_used(&self) -> usize {
        self.lags_used
    }

    /// Observations in the final regression
    pub fn nobs(&self) -> usize {
        self.nobs
    }

    /// Whether the null hypothesis is rejected at `alpha`
    pub fn rejects_null(&self, alpha: f64) -> bool {
        is_significant(self.p_value, alpha)
    }

    /// Whether this result, taken alone, points to stationarity at `alpha`
    pub fn suggests_stationarity(&self, alpha: f64) -> bool {
        self.rejects_null(alpha) == self.kind.rejection_implies_stationarity()
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} test ({}):", self.kind, self.deterministic)?;
        writeln!(f, "  Statistic: {:.4}", self.statistic)?;
        writeln!(f, "  p-value: {:.4}", self.p_value)?;
        writeln!(f, "  Lags used: {}", self.lags_used)?;
        writeln!(f, "  Observations: {}", self.nobs)?;
        writeln!(f, "  Critical values:")?;
        for (level, value) in self.critical_values.iter() {
            writeln!(f, "    {}: {:.4}", level, value)?;
        }
        Ok(())
    }
}
