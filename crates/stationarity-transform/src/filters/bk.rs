//! Baxter-King band-pass filter
//!
//! A symmetric moving average of length `2K + 1` approximating the ideal
//! filter that keeps cycles with periods between `low` and `high`. The
//! weights are shifted to sum to zero, so constants and linear trends are
//! removed. The first and last `K` observations are lost.

use serde::{Deserialize, Serialize};
use stationarity_core::{Error, Result, Series};
use std::f64::consts::PI;
use tracing::debug;

/// Baxter-King filter configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaxterKing {
    /// Shortest period passed, in observations
    pub low: f64,
    /// Longest period passed, in observations
    pub high: f64,
    /// Lead/lag length of the moving average
    pub k: usize,
}

impl Default for BaxterKing {
    /// Business-cycle band for quarterly data: 6 to 32 quarters, K = 12
    fn default() -> Self {
        Self {
            low: 6.0,
            high: 32.0,
            k: 12,
        }
    }
}

impl BaxterKing {
    pub fn new(low: f64, high: f64, k: usize) -> Self {
        Self { low, high, k }
    }

    fn validate(&self) -> Result<()> {
        if !(self.low >= 2.0 && self.low < self.high && self.high.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "Baxter-King band needs 2 <= low < high, got low = {}, high = {}",
                self.low, self.high
            )));
        }
        if self.k == 0 {
            return Err(Error::InvalidParameter("Baxter-King K must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Moving-average weights for lags `-K..=K`
    pub fn weights(&self) -> Result<Vec<f64>> {
        self.validate()?;
        let k = self.k;
        let omega_1 = 2.0 * PI / self.high;
        let omega_2 = 2.0 * PI / self.low;

        let mut weights = vec![0.0; 2 * k + 1];
        weights[k] = (omega_2 - omega_1) / PI;
        for j in 1..=k {
            let jf = j as f64;
            let w = ((omega_2 * jf).sin() - (omega_1 * jf).sin()) / (PI * jf);
            weights[k + j] = w;
            weights[k - j] = w;
        }

        let mean = weights.iter().sum::<f64>() / weights.len() as f64;
        for w in &mut weights {
            *w -= mean;
        }
        Ok(weights)
    }

    /// Cyclical component for observations `K..n-K`
    pub fn filter(&self, series: &Series) -> Result<Series> {
        let weights = self.weights()?;
        series.require_len(weights.len())?;

        let cycle: Vec<f64> = series
            .windows(weights.len())
            .map(|window| window.iter().zip(&weights).map(|(x, w)| x * w).sum())
            .collect();
        debug!(
            "Baxter-King filter: {} observations in, {} out (K = {})",
            series.len(),
            cycle.len(),
            self.k
        );
        series.derive(cycle)
    }
}
