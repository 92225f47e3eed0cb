//! Lag-order and bandwidth selection rules

use serde::{Deserialize, Serialize};
use stationarity_core::math::lagged_cross_product;

/// How the ADF test picks the number of lagged differences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LagSelection {
    /// Use exactly this many lags
    Fixed(usize),
    /// Minimise the Akaike information criterion over `0..=max_lags`
    Aic,
    /// Minimise the Bayesian information criterion over `0..=max_lags`
    Bic,
    /// Drop lags from `max_lags` down until the last one is significant at 5%
    TStat,
}

impl Default for LagSelection {
    fn default() -> Self {
        Self::Aic
    }
}

impl LagSelection {
    pub fn name(&self) -> &'static str {
        match self {
            LagSelection::Fixed(_) => "fixed",
            LagSelection::Aic => "AIC",
            LagSelection::Bic => "BIC",
            LagSelection::TStat => "t-stat",
        }
    }
}

/// How the KPSS test picks the Bartlett bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KpssLags {
    /// Use exactly this bandwidth
    Fixed(usize),
    /// Schwert rule `ceil(12·(n/100)^¼)`
    Legacy,
    /// Hobijn, Franses and Ooms (2004) data-dependent bandwidth
    Auto,
}

impl Default for KpssLags {
    fn default() -> Self {
        Self::Auto
    }
}

/// Schwert (1989) rule of thumb `ceil(12·(n/100)^¼)`
pub fn schwert_max_lag(nobs: usize) -> usize {
    (12.0 * (nobs as f64 / 100.0).powf(0.25)).ceil() as usize
}

/// Largest ADF lag that leaves enough observations for the regression
///
/// Returns `None` when even zero lags is too many. The regression at the cap
/// keeps at least one residual degree of freedom.
pub fn adf_lag_cap(nobs: usize, trend_terms: usize) -> Option<usize> {
    let half = (nobs / 2).checked_sub(trend_terms + 1)?;
    let dof = nobs.checked_sub(trend_terms + 3)? / 2;
    Some(half.min(dof))
}

/// Hobijn-Franses-Ooms automatic bandwidth for the KPSS long-run variance
pub fn hobijn_bandwidth(residuals: &[f64]) -> usize {
    let n = residuals.len();
    if n == 0 {
        return 0;
    }
    let nf = n as f64;
    let cov_lags = nf.powf(2.0 / 9.0) as usize;

    let mut s0 = lagged_cross_product(residuals, 0) / nf;
    let mut s1 = 0.0;
    for i in 1..=cov_lags {
        let product = lagged_cross_product(residuals, i) / (nf / 2.0);
        s0 += product;
        s1 += i as f64 * product;
    }
    if s0 == 0.0 {
        return 0;
    }
    let s_hat = s1 / s0;
    let gamma_hat = 1.1447 * (s_hat * s_hat).powf(1.0 / 3.0);
    (gamma_hat * nf.powf(1.0 / 3.0)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schwert_max_lag() {
        assert_eq!(schwert_max_lag(100), 12);
        assert_eq!(schwert_max_lag(200), 15);
        assert_eq!(schwert_max_lag(20), 9);
    }

    #[test]
    fn test_adf_lag_cap() {
        assert_eq!(adf_lag_cap(100, 1), Some(48));
        assert_eq!(adf_lag_cap(4, 1), Some(0));
        assert_eq!(adf_lag_cap(3, 1), None);
        // Without deterministic terms the residual degrees of freedom bind
        assert_eq!(adf_lag_cap(20, 0), Some(8));
    }

    #[test]
    fn test_hobijn_bandwidth_grows_with_persistence() {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;
        use rand_distr::{Distribution, Normal};

        let n = 400;
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let noise = Normal::new(0.0, 1.0).unwrap();
        let white: Vec<f64> = (0..n).map(|_| noise.sample(&mut rng)).collect();
        // Slow square wave: strong positive autocorrelation
        let persistent: Vec<f64> = (0..n).map(|i| if (i / 20) % 2 == 0 { 1.0 } else { -1.0 }).collect();

        assert_eq!(hobijn_bandwidth(&persistent), 11);
        assert!(hobijn_bandwidth(&persistent) > hobijn_bandwidth(&white));
        assert_eq!(hobijn_bandwidth(&[0.0; 50]), 0);
        assert_eq!(hobijn_bandwidth(&[]), 0);
    }
}
