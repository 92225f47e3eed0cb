//! Polynomial detrending by least squares

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use stationarity_core::math::ols;
use stationarity_core::{Error, Result, Series};
use tracing::debug;

/// Polynomial trend removed from a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    /// Remove the mean
    Constant,
    /// Remove an OLS line
    Linear,
    /// Remove an OLS parabola
    Quadratic,
}

impl Default for Trend {
    fn default() -> Self {
        Self::Linear
    }
}

impl Trend {
    pub fn degree(&self) -> usize {
        match self {
            Trend::Constant => 0,
            Trend::Linear => 1,
            Trend::Quadratic => 2,
        }
    }
}

/// Result of detrending: fitted trend plus residual series
#[derive(Debug, Clone, PartialEq)]
pub struct Detrended {
    residual: Series,
    fitted: Vec<f64>,
    coefficients: Vec<f64>,
}

impl Detrended {
    /// The series with the trend removed
    pub fn residual(&self) -> &Series {
        &self.residual
    }

    pub fn into_residual(self) -> Series {
        self.residual
    }

    /// Trend value at each observation
    pub fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    /// Polynomial coefficients in ascending powers of the 0-based time index
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

/// Remove a polynomial trend from `series`
///
/// Needs at least `degree + 2` observations so the fit keeps a residual
/// degree of freedom.
pub fn detrend(series: &Series, trend: Trend) -> Result<Detrended> {
    let n = series.len();
    let terms = trend.degree() + 1;
    Error::require_len(n, terms + 1)?;

    // Fit on t / (n - 1) in [0, 1] to keep the normal equations well scaled
    let scale = (n - 1) as f64;
    let design = DMatrix::from_fn(n, terms, |i, j| (i as f64 / scale).powi(j as i32));
    let fit = ols(&design, series.values())?;

    let coefficients: Vec<f64> = fit
        .coefficients()
        .iter()
        .enumerate()
        .map(|(j, c)| c / scale.powi(j as i32))
        .collect();
    let residual = fit.residuals().to_vec();
    let fitted: Vec<f64> = series.values().iter().zip(&residual).map(|(y, e)| y - e).collect();
    debug!("Removed {:?} trend with coefficients {:?}", trend, coefficients);

    Ok(Detrended {
        residual: series.derive(residual)?,
        fitted,
        coefficients,
    })
}
