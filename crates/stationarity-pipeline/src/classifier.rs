//! Combine an ADF and a KPSS result into a verdict

use crate::verdict::StationarityVerdict;
use stationarity_core::{Error, Result, TestKind, TestResult};

/// Significance level used when none is given
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

/// Classifier at a fixed significance level
///
/// Classification is a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classifier {
    significance: f64,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
        }
    }
}

impl Classifier {
    /// Fails with `InvalidParameter` unless `0 < significance < 1`
    pub fn new(significance: f64) -> Result<Self> {
        if !(significance > 0.0 && significance < 1.0) {
            return Err(Error::invalid_significance(significance));
        }
        Ok(Self { significance })
    }

    pub fn significance(&self) -> f64 {
        self.significance
    }

    /// Apply the verdict table to an ADF and a KPSS result
    pub fn classify(&self, adf: &TestResult, kpss: &TestResult) -> Result<StationarityVerdict> {
        expect_kind(adf, TestKind::Adf)?;
        expect_kind(kpss, TestKind::Kpss)?;
        Ok(StationarityVerdict::from_rejections(
            adf.rejects_null(self.significance),
            kpss.rejects_null(self.significance),
        ))
    }
}

fn expect_kind(result: &TestResult, expected: TestKind) -> Result<()> {
    if result.kind() != expected {
        return Err(Error::InvalidParameter(format!(
            "expected a {expected} result, got {}",
            result.kind()
        )));
    }
    Ok(())
}

/// Classify at `significance` without keeping a [`Classifier`] around
pub fn classify(adf: &TestResult, kpss: &TestResult, significance: f64) -> Result<StationarityVerdict> {
    Classifier::new(significance)?.classify(adf, kpss)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stationarity_core::{CriticalValues, Deterministic};

    fn result(kind: TestKind, p_value: f64) -> TestResult {
        TestResult::new(kind, Deterministic::Constant, 0.0, p_value, CriticalValues::new(), 0, 100)
    }

    #[test]
    fn test_verdict_table() {
        let cases = [
            (0.30, 0.10, StationarityVerdict::TrendStationary),
            (0.01, 0.10, StationarityVerdict::Stationary),
            (0.30, 0.01, StationarityVerdict::NonStationary),
            (0.01, 0.01, StationarityVerdict::DifferenceStationary),
        ];
        for (adf_p, kpss_p, expected) in cases {
            let verdict = classify(&result(TestKind::Adf, adf_p), &result(TestKind::Kpss, kpss_p), 0.05).unwrap();
            assert_eq!(verdict, expected, "adf p = {adf_p}, kpss p = {kpss_p}");
        }
    }

    #[test]
    fn test_boundary_counts_as_rejection() {
        let adf = result(TestKind::Adf, 0.05);
        let kpss = result(TestKind::Kpss, 0.05);
        assert_eq!(
            classify(&adf, &kpss, 0.05).unwrap(),
            StationarityVerdict::DifferenceStationary
        );
    }

    #[test]
    fn test_invalid_significance() {
        for alpha in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            assert!(matches!(Classifier::new(alpha), Err(Error::InvalidParameter(_))), "{alpha}");
        }
    }

    #[test]
    fn test_swapped_results_rejected() {
        let adf = result(TestKind::Adf, 0.01);
        let kpss = result(TestKind::Kpss, 0.10);
        let classifier = Classifier::default();
        assert!(classifier.classify(&adf, &kpss).is_ok());
        assert!(matches!(classifier.classify(&kpss, &adf), Err(Error::InvalidParameter(_))));
    }
}
