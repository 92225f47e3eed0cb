//! Hodrick-Prescott trend filter
//!
//! The trend τ minimises
//!
//! ```text
//! Σ (y_t - τ_t)² + λ Σ (τ_{t+1} - 2τ_t + τ_{t-1})²
//! ```
//!
//! which is the linear system `(I + λ K'K) τ = y` with `K` the second
//! difference operator. The system matrix is symmetric pentadiagonal, so it
//! is factored with a banded Cholesky decomposition in O(n).

use super::TrendCycle;
use serde::{Deserialize, Serialize};
use stationarity_core::{Error, Result, Series};
use tracing::{debug, instrument};

/// Smoothing parameter conventionally used for quarterly data
pub const QUARTERLY_LAMBDA: f64 = 1600.0;

/// Hodrick-Prescott filter configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HodrickPrescott {
    /// Penalty on the trend's second differences
    pub lambda: f64,
}

impl Default for HodrickPrescott {
    fn default() -> Self {
        Self {
            lambda: QUARTERLY_LAMBDA,
        }
    }
}

impl HodrickPrescott {
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }

    /// Ravn-Uhlig scaling of the quarterly λ to `periods_per_year`
    /// observations per year (annual: 6.25, monthly: 129600)
    pub fn for_frequency(periods_per_year: u32) -> Self {
        Self::new(QUARTERLY_LAMBDA * (periods_per_year as f64 / 4.0).powi(4))
    }

    /// Split `series` into trend and cycle
    #[instrument(skip(self, series), fields(n = series.len(), lambda = self.lambda))]
    pub fn filter(&self, series: &Series) -> Result<TrendCycle> {
        if !self.lambda.is_finite() || self.lambda < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "HP smoothing parameter must be finite and non-negative, got {}",
                self.lambda
            )));
        }
        series.require_len(3)?;

        let trend = self.solve(series.values())?;
        let cycle: Vec<f64> = series.values().iter().zip(&trend).map(|(y, t)| y - t).collect();
        debug!("HP filter: separated trend from {} observations", trend.len());

        Ok(TrendCycle::new(series.derive(trend)?, series.derive(cycle)?))
    }

    fn solve(&self, y: &[f64]) -> Result<Vec<f64>> {
        let n = y.len();
        let lambda = self.lambda;

        // Bands of I + λ K'K: diagonal, first and second sub-diagonals
        let mut diag = vec![1.0; n];
        let mut sub1 = vec![0.0; n];
        let mut sub2 = vec![0.0; n];
        const STENCIL: [f64; 3] = [1.0, -2.0, 1.0];
        for row in 0..n - 2 {
            for a in 0..3 {
                diag[row + a] += lambda * STENCIL[a] * STENCIL[a];
                for b in 0..a {
                    let weight = lambda * STENCIL[a] * STENCIL[b];
                    match a - b {
                        1 => sub1[row + a] += weight,
                        _ => sub2[row + a] += weight,
                    }
                }
            }
        }

        // Banded Cholesky: A = L L' with L lower triangular, bandwidth 2
        let mut l0 = vec![0.0; n];
        let mut l1 = vec![0.0; n];
        let mut l2 = vec![0.0; n];
        for i in 0..n {
            if i >= 2 {
                l2[i] = sub2[i] / l0[i - 2];
            }
            if i >= 1 {
                l1[i] = (sub1[i] - l2[i] * l1[i - 1]) / l0[i - 1];
            }
            let pivot = diag[i] - l1[i] * l1[i] - l2[i] * l2[i];
            if pivot.is_nan() || pivot <= 0.0 {
                return Err(Error::Computation(format!(
                    "HP system is not positive definite at row {i}"
                )));
            }
            l0[i] = pivot.sqrt();
        }

        // Forward substitution L z = y
        let mut z = vec![0.0; n];
        for i in 0..n {
            let mut acc = y[i];
            if i >= 1 {
                acc -= l1[i] * z[i - 1];
            }
            if i >= 2 {
                acc -= l2[i] * z[i - 2];
            }
            z[i] = acc / l0[i];
        }

        // Back substitution L' τ = z
        let mut trend = vec![0.0; n];
        for i in (0..n).rev() {
            let mut acc = z[i];
            if i + 1 < n {
                acc -= l1[i + 1] * trend[i + 1];
            }
            if i + 2 < n {
                acc -= l2[i + 2] * trend[i + 2];
            }
            trend[i] = acc / l0[i];
        }
        Ok(trend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn wiggly(n: usize) -> Series {
        Series::new((0..n).map(|t| 0.1 * t as f64 + (t as f64 * 1.3).sin()).collect()).unwrap()
    }

    #[test]
    fn test_lambda_zero_returns_input() {
        let y = wiggly(40);
        let result = HodrickPrescott::new(0.0).filter(&y).unwrap();
        for (&t, &v) in result.trend().iter().zip(y.iter()) {
            assert_relative_eq!(t, v, epsilon = 1e-12);
        }
        assert!(result.cycle().iter().all(|c| c.abs() < 1e-12));
    }

    #[test]
    fn test_linear_trend_passes_through() {
        let line = Series::new((0..50).map(|t| 3.0 + 0.7 * t as f64).collect()).unwrap();
        let result = HodrickPrescott::default().filter(&line).unwrap();
        for (&t, &v) in result.trend().iter().zip(line.iter()) {
            assert_relative_eq!(t, v, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cycle_sums_to_zero() {
        let result = HodrickPrescott::default().filter(&wiggly(120)).unwrap();
        let sum: f64 = result.cycle().iter().sum();
        assert_relative_eq!(sum, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_large_lambda_approaches_linear_fit() {
        let y = wiggly(100);
        let result = HodrickPrescott::new(1e9).filter(&y).unwrap();
        let second_differences = result.trend().windows(3).map(|w| (w[2] - 2.0 * w[1] + w[0]).abs());
        assert!(second_differences.fold(0.0, f64::max) < 1e-4);
    }

    #[test]
    fn test_invalid_parameters() {
        let y = wiggly(20);
        assert!(matches!(HodrickPrescott::new(-1.0).filter(&y), Err(Error::InvalidParameter(_))));
        assert!(matches!(HodrickPrescott::new(f64::NAN).filter(&y), Err(Error::InvalidParameter(_))));
        let short = Series::new(vec![1.0, 2.0]).unwrap();
        assert!(HodrickPrescott::default().filter(&short).unwrap_err().is_insufficient_data());
    }

    #[test]
    fn test_frequency_scaling() {
        assert_relative_eq!(HodrickPrescott::for_frequency(4).lambda, 1600.0);
        assert_relative_eq!(HodrickPrescott::for_frequency(1).lambda, 6.25);
        assert_relative_eq!(HodrickPrescott::for_frequency(12).lambda, 129600.0);
    }
}
