//! Core traits for stationarity tests
//!
//! Tests are plain configuration values; running one never mutates it, so the
//! same test can be applied to many series.

use crate::error::Result;
use crate::series::Series;
use crate::types::{TestKind, TestResult};

/// Properties of a test that don't depend on the data
pub trait StationarityTestProperties {
    /// Which test this is
    fn kind(&self) -> TestKind;

    /// Get the minimum series length the configured test accepts
    fn minimum_sample_size(&self) -> usize;

    /// Check if the test can handle a series of the given length
    fn can_handle_size(&self, size: usize) -> bool {
        size >= self.minimum_sample_size()
    }
}

/// A hypothesis test for (non-)stationarity of a single series
pub trait StationarityTest: StationarityTestProperties {
    /// Run the test
    ///
    /// Fails with `InsufficientData` when the series is shorter than
    /// [`StationarityTestProperties::minimum_sample_size`].
    fn run(&self, series: &Series) -> Result<TestResult>;

    /// Run the test on several series with the same configuration
    fn run_batch(&self, series: &[&Series]) -> Result<Vec<TestResult>> {
        series.iter().map(|s| self.run(s)).collect()
    }
}
