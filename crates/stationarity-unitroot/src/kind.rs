//! Closed set of unit root / stationarity tests

use crate::adf::AdfTest;
use crate::kpss::KpssTest;
use serde::{Deserialize, Serialize};
use stationarity_core::{Result, Series, StationarityTest, StationarityTestProperties, TestKind, TestResult};
use std::fmt;

/// Any configured test, selected by variant rather than by name
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UnitRootTest {
    Adf(AdfTest),
    Kpss(KpssTest),
}

impl UnitRootTest {
    /// The default configuration of the test of the given kind
    pub fn default_for(kind: TestKind) -> Self {
        match kind {
            TestKind::Adf => Self::Adf(AdfTest::default()),
            TestKind::Kpss => Self::Kpss(KpssTest::default()),
        }
    }
}

impl From<AdfTest> for UnitRootTest {
    fn from(test: AdfTest) -> Self {
        Self::Adf(test)
    }
}

impl From<KpssTest> for UnitRootTest {
    fn from(test: KpssTest) -> Self {
        Self::Kpss(test)
    }
}

impl StationarityTestProperties for UnitRootTest {
    fn kind(&self) -> TestKind {
        match self {
            UnitRootTest::Adf(test) => test.kind(),
            UnitRootTest::Kpss(test) => test.kind(),
        }
    }

    fn minimum_sample_size(&self) -> usize {
        match self {
            UnitRootTest::Adf(test) => test.minimum_sample_size(),
            UnitRootTest::Kpss(test) => test.minimum_sample_size(),
        }
    }
}

impl StationarityTest for UnitRootTest {
    fn run(&self, series: &Series) -> Result<TestResult> {
        match self {
            UnitRootTest::Adf(test) => test.run(series),
            UnitRootTest::Kpss(test) => test.run(series),
        }
    }
}

impl fmt::Display for UnitRootTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitRootTest::Adf(test) => write!(
                f,
                "ADF ({}, {} lag selection)",
                test.deterministic,
                test.lag_selection.name()
            ),
            UnitRootTest::Kpss(test) => write!(f, "KPSS ({:?}, {:?} bandwidth)", test.regression, test.lags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lags::LagSelection;

    #[test]
    fn test_dispatch_by_variant() {
        let tests = [UnitRootTest::default_for(TestKind::Adf), UnitRootTest::default_for(TestKind::Kpss)];
        let series = Series::new(vec![2.0; 40]).unwrap();

        for test in &tests {
            let result = test.run(&series).unwrap();
            assert_eq!(result.kind(), test.kind());
            assert!(result.suggests_stationarity(0.05));
        }
    }

    #[test]
    fn test_from_configured_test() {
        let adf = AdfTest::default().with_lag_selection(LagSelection::Fixed(5));
        let test = UnitRootTest::from(adf);
        assert_eq!(test.kind(), TestKind::Adf);
        assert_eq!(test.minimum_sample_size(), adf.minimum_sample_size());
        assert_eq!(test.to_string(), "ADF (c, fixed lag selection)");
    }
}
