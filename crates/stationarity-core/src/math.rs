//! Mathematical utilities for stationarity testing
//!
//! Least squares, information criteria, long-run variance and the handful of
//! distribution functions the tests need.

use crate::error::{Error, Result};
use nalgebra::{DMatrix, DVector};
use tracing::debug;

/// Distribution-related mathematical functions
pub mod distributions {
    /// Standard normal distribution utilities
    pub mod normal {
        use statrs::function::erf::{erfc, erfc_inv};
        use std::f64::consts::SQRT_2;

        /// Cumulative distribution function of N(0, 1)
        pub fn cdf(x: f64) -> f64 {
            0.5 * erfc(-x / SQRT_2)
        }

        /// Quantile function of N(0, 1)
        pub fn ppf(p: f64) -> f64 {
            if p <= 0.0 {
                return f64::NEG_INFINITY;
            }
            if p >= 1.0 {
                return f64::INFINITY;
            }
            -SQRT_2 * erfc_inv(2.0 * p)
        }

    }
}

/// Evaluate `c[0] + c[1]·x + c[2]·x² + ...`
pub fn polyval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Piecewise-linear interpolation, clamped to the end points
///
/// `xs` must be increasing and the same length as `ys`.
pub fn interpolate(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    debug_assert!(!xs.is_empty());

    if x <= xs[0] {
        return ys[0];
    }
    let last = xs.len() - 1;
    if x >= xs[last] {
        return ys[last];
    }
    let upper = xs.partition_point(|&v| v <= x);
    let (x0, x1) = (xs[upper - 1], xs[upper]);
    let (y0, y1) = (ys[upper - 1], ys[upper]);
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Information criterion used to rank nested regressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InformationCriterion {
    Aic,
    Bic,
}

/// Ordinary least squares fit
#[derive(Debug, Clone)]
pub struct OlsFit {
    coefficients: Vec<f64>,
    std_errors: Vec<f64>,
    residuals: Vec<f64>,
    rss: f64,
}

impl OlsFit {
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn std_errors(&self) -> &[f64] {
        &self.std_errors
    }

    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    pub fn into_residuals(self) -> Vec<f64> {
        self.residuals
    }

    /// Residual sum of squares
    pub fn rss(&self) -> f64 {
        self.rss
    }

    pub fn nobs(&self) -> usize {
        self.residuals.len()
    }

    /// Number of regressors
    pub fn k(&self) -> usize {
        self.coefficients.len()
    }

    /// t-ratio of coefficient `index`
    pub fn t_value(&self, index: usize) -> f64 {
        self.coefficients[index] / self.std_errors[index]
    }

    /// Gaussian log-likelihood
    pub fn log_likelihood(&self) -> f64 {
        let n = self.nobs() as f64;
        -0.5 * n * ((2.0 * std::f64::consts::PI).ln() + (self.rss / n).ln() + 1.0)
    }

    pub fn information_criterion(&self, criterion: InformationCriterion) -> f64 {
        let k = self.k() as f64;
        let llf = self.log_likelihood();
        match criterion {
            InformationCriterion::Aic => -2.0 * llf + 2.0 * k,
            InformationCriterion::Bic => -2.0 * llf + (self.nobs() as f64).ln() * k,
        }
    }
}

/// Fit `y = X β + ε` by least squares
///
/// Solves the normal equations with a Cholesky factorization, falling back to
/// an SVD pseudo-inverse for ill-conditioned designs.
pub fn ols(design: &DMatrix<f64>, y: &[f64]) -> Result<OlsFit> {
    let (n, k) = design.shape();
    if n != y.len() {
        return Err(Error::InvalidParameter(format!(
            "design has {n} rows but response has {} values",
            y.len()
        )));
    }
    if k == 0 {
        return Err(Error::InvalidParameter("design matrix has no columns".to_string()));
    }
    Error::require_len(n, k + 1)?;

    let y_vec = DVector::from_column_slice(y);
    let xt = design.transpose();
    let xtx = &xt * design;
    let xty = &xt * &y_vec;

    let xtx_inv = match xtx.clone().cholesky() {
        Some(chol) => chol.inverse(),
        None => {
            debug!("Normal equations not positive definite ({n} x {k}), using SVD pseudo-inverse");
            xtx.svd(true, true)
                .pseudo_inverse(1e-12)
                .map_err(|_| Error::singular("least squares"))?
        }
    };

    let beta = &xtx_inv * xty;
    if beta.iter().any(|b| !b.is_finite()) {
        return Err(Error::singular("least squares"));
    }

    let residuals: Vec<f64> = (&y_vec - design * &beta).iter().copied().collect();
    let rss: f64 = residuals.iter().map(|e| e * e).sum();
    let sigma2 = rss / (n - k) as f64;
    let std_errors = (0..k)
        .map(|i| (sigma2 * xtx_inv[(i, i)]).max(0.0).sqrt())
        .collect();

    Ok(OlsFit {
        coefficients: beta.iter().copied().collect(),
        std_errors,
        residuals,
        rss,
    })
}

/// Sum of `e[t]·e[t-lag]` over the overlapping range
pub fn lagged_cross_product(residuals: &[f64], lag: usize) -> f64 {
    if lag >= residuals.len() {
        return 0.0;
    }
    residuals[lag..]
        .iter()
        .zip(&residuals[..residuals.len() - lag])
        .map(|(a, b)| a * b)
        .sum()
}

/// Bartlett-kernel (Newey-West) long-run variance with divisor n
pub fn bartlett_long_run_variance(residuals: &[f64], lags: usize) -> f64 {
    let n = residuals.len();
    if n == 0 {
        return f64::NAN;
    }
    let mut s = lagged_cross_product(residuals, 0);
    for j in 1..=lags.min(n - 1) {
        let weight = 1.0 - j as f64 / (lags as f64 + 1.0);
        s += 2.0 * weight * lagged_cross_product(residuals, j);
    }
    s / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polyval() {
        assert_relative_eq!(polyval(&[1.0, 2.0, 3.0], 2.0), 17.0);
        assert_relative_eq!(polyval(&[5.0], 100.0), 5.0);
        assert_eq!(polyval(&[], 1.0), 0.0);
    }

    #[test]
    fn test_interpolate() {
        let xs = [0.347, 0.463, 0.574, 0.739];
        let ys = [0.10, 0.05, 0.025, 0.01];
        assert_relative_eq!(interpolate(0.463, &xs, &ys), 0.05);
        assert_relative_eq!(interpolate(0.405, &xs, &ys), 0.075, epsilon = 1e-12);
        assert_eq!(interpolate(0.1, &xs, &ys), 0.10);
        assert_eq!(interpolate(2.0, &xs, &ys), 0.01);
    }

    #[test]
    fn test_ols_recovers_line() {
        let n = 50;
        let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { i as f64 });
        let y: Vec<f64> = (0..n)
            .map(|i| 2.0 + 0.5 * i as f64 + if i % 2 == 0 { 0.1 } else { -0.1 })
            .collect();

        let fit = ols(&design, &y).unwrap();
        assert_relative_eq!(fit.coefficients()[0], 2.0, epsilon = 0.05);
        assert_relative_eq!(fit.coefficients()[1], 0.5, epsilon = 0.01);
        assert_eq!(fit.nobs(), n);
        assert_eq!(fit.k(), 2);
        assert!(fit.std_errors().iter().all(|&s| s > 0.0));
        assert!(fit.t_value(1) > 100.0);
    }

    #[test]
    fn test_ols_shape_errors() {
        let design = DMatrix::from_element(3, 2, 1.0);
        assert!(ols(&design, &[1.0, 2.0]).is_err());

        // Two observations cannot support two regressors plus a residual
        let design = DMatrix::from_fn(2, 2, |i, j| (i + j) as f64);
        assert!(ols(&design, &[1.0, 2.0]).unwrap_err().is_insufficient_data());
    }

    #[test]
    fn test_ols_rank_deficient_design_falls_back() {
        // An all-zero column defeats the Cholesky factorization
        let n = 20;
        let design = DMatrix::from_fn(n, 3, |i, j| match j {
            0 => 1.0,
            1 => 0.0,
            _ => i as f64 / n as f64,
        });
        let y: Vec<f64> = (0..n).map(|i| 1.0 + 2.0 * i as f64 / n as f64).collect();

        let fit = ols(&design, &y).unwrap();
        assert_relative_eq!(fit.coefficients()[0], 1.0, epsilon = 1e-8);
        assert!(fit.coefficients()[1].abs() < 1e-8);
        assert_relative_eq!(fit.coefficients()[2], 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_information_criteria_penalise_size() {
        let n = 40;
        let y: Vec<f64> = (0..n).map(|i| ((i * 7) % 5) as f64).collect();
        let small = ols(&DMatrix::from_element(n, 1, 1.0), &y).unwrap();
        let big = ols(
            &DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { ((i * 3) % 11) as f64 }),
            &y,
        )
        .unwrap();

        let aic_gap = big.information_criterion(InformationCriterion::Aic)
            - small.information_criterion(InformationCriterion::Aic);
        let bic_gap = big.information_criterion(InformationCriterion::Bic)
            - small.information_criterion(InformationCriterion::Bic);
        assert!(bic_gap > aic_gap);
    }

    #[test]
    fn test_bartlett_long_run_variance() {
        let e = [1.0, -1.0, 1.0, -1.0];
        assert_relative_eq!(bartlett_long_run_variance(&e, 0), 1.0);
        // Lag one: 4 + 2 * 0.5 * (-3) = 1, divided by 4
        assert_relative_eq!(bartlett_long_run_variance(&e, 1), 0.25);
        assert_relative_eq!(lagged_cross_product(&e, 2), 2.0);
        assert_eq!(lagged_cross_product(&e, 10), 0.0);
    }

    mod properties {
        use crate::math::{interpolate, ols};
        use nalgebra::DMatrix;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_interpolation_stays_in_table(x in -1.0f64..2.0) {
                let xs = [0.119, 0.146, 0.176, 0.216];
                let ys = [0.10, 0.05, 0.025, 0.01];
                let p = interpolate(x, &xs, &ys);
                prop_assert!((0.01..=0.10).contains(&p));
            }

            #[test]
            fn prop_ols_residuals_sum_to_zero_with_intercept(
                y in prop::collection::vec(-100.0f64..100.0, 8..40),
            ) {
                let n = y.len();
                let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { i as f64 });
                let fit = ols(&design, &y).unwrap();
                let total: f64 = fit.residuals().iter().sum();
                prop_assert!(total.abs() < 1e-8 * n as f64 * 100.0);
            }
        }
    }
}
