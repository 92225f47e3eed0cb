//! MacKinnon response surfaces for Dickey-Fuller statistics
//!
//! p-values follow MacKinnon (1994), "Approximate asymptotic distribution
//! functions for unit-root and cointegration tests": the statistic is mapped
//! through a polynomial and then the standard normal CDF, with separate
//! polynomials left and right of a switch point τ*. Critical values follow
//! MacKinnon (2010) finite-sample surfaces `c0 + c1/n + c2/n² + c3/n³`.
//!
//! Only the single-series (N = 1) rows are tabulated.

use stationarity_core::math::{distributions::normal, polyval};
use stationarity_core::{CriticalValues, Deterministic, SignificanceLevel};

/// Response-surface coefficients for one set of deterministic terms
struct Surface {
    /// Above this the p-value is 1
    tau_max: f64,
    /// Below this the p-value is 0
    tau_min: f64,
    /// Switch point between the small-p and large-p polynomials
    tau_star: f64,
    small_p: [f64; 3],
    large_p: [f64; 4],
    /// Critical value surfaces at 1%, 5% and 10%
    critical: [[f64; 4]; 3],
}

const NO_CONSTANT: Surface = Surface {
    tau_max: f64::INFINITY,
    tau_min: -19.04,
    tau_star: -1.04,
    small_p: [0.6344, 1.2378, 3.2496e-2],
    large_p: [0.4797, 9.3557e-1, -0.6999e-1, 3.3066e-2],
    critical: [
        [-2.56574, -2.2358, -3.627, 0.0],
        [-1.94100, -0.2686, -3.365, 31.223],
        [-1.61682, 0.2656, -2.714, 25.364],
    ],
};

const CONSTANT: Surface = Surface {
    tau_max: 2.74,
    tau_min: -18.83,
    tau_star: -1.61,
    small_p: [2.1659, 1.4412, 3.8269e-2],
    large_p: [1.7339, 9.3202e-1, -1.2745e-1, -1.0368e-2],
    critical: [
        [-3.43035, -6.5393, -16.786, -79.433],
        [-2.86154, -2.8903, -4.234, -40.040],
        [-2.56677, -1.5384, -2.809, 0.0],
    ],
};

const CONSTANT_TREND: Surface = Surface {
    tau_max: 0.7,
    tau_min: -16.18,
    tau_star: -2.89,
    small_p: [3.2512, 1.6047, 4.9588e-2],
    large_p: [2.5261, 6.1654e-1, -3.7956e-1, -6.0285e-2],
    critical: [
        [-3.95877, -9.0531, -28.428, -134.155],
        [-3.41049, -4.3904, -9.036, -45.374],
        [-3.12705, -2.5856, -3.925, -22.380],
    ],
};

const CONSTANT_TREND_SQUARED: Surface = Surface {
    tau_max: 0.54,
    tau_min: -17.17,
    tau_star: -3.21,
    small_p: [4.0003, 1.658, 4.8288e-2],
    large_p: [3.0778, 4.9529e-1, -4.1477e-1, -5.9359e-2],
    critical: [
        [-4.37113, -11.5882, -35.819, -334.047],
        [-3.83239, -5.9057, -12.490, -118.284],
        [-3.55326, -4.0023, -5.470, -48.689],
    ],
};

fn surface(deterministic: Deterministic) -> &'static Surface {
    match deterministic {
        Deterministic::None => &NO_CONSTANT,
        Deterministic::Constant => &CONSTANT,
        Deterministic::ConstantTrend => &CONSTANT_TREND,
        Deterministic::ConstantTrendSquared => &CONSTANT_TREND_SQUARED,
    }
}

/// Approximate p-value of a Dickey-Fuller τ statistic
pub fn p_value(statistic: f64, deterministic: Deterministic) -> f64 {
    let s = surface(deterministic);
    if statistic > s.tau_max {
        return 1.0;
    }
    if statistic < s.tau_min {
        return 0.0;
    }
    let z = if statistic <= s.tau_star {
        polyval(&s.small_p, statistic)
    } else {
        polyval(&s.large_p, statistic)
    };
    normal::cdf(z)
}

/// Finite-sample critical values at 1%, 5% and 10% for `nobs` observations
pub fn critical_values(deterministic: Deterministic, nobs: usize) -> CriticalValues {
    let s = surface(deterministic);
    let inv_n = 1.0 / nobs.max(1) as f64;
    [
        SignificanceLevel::OnePercent,
        SignificanceLevel::FivePercent,
        SignificanceLevel::TenPercent,
    ]
    .into_iter()
    .zip(s.critical.iter())
    .map(|(level, coefficients)| (level, polyval(coefficients, inv_n)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: [Deterministic; 4] = [
        Deterministic::None,
        Deterministic::Constant,
        Deterministic::ConstantTrend,
        Deterministic::ConstantTrendSquared,
    ];

    #[test]
    fn test_p_value_at_asymptotic_critical_values() {
        // Asymptotic 5% and 1% critical values map back to nominal levels
        let cases = [
            (Deterministic::None, -1.941, -2.566),
            (Deterministic::Constant, -2.862, -3.430),
            (Deterministic::ConstantTrend, -3.410, -3.959),
            (Deterministic::ConstantTrendSquared, -3.832, -4.371),
        ];
        for (det, five, one) in cases {
            assert_relative_eq!(p_value(five, det), 0.05, epsilon = 0.003);
            assert_relative_eq!(p_value(one, det), 0.01, epsilon = 0.002);
        }
    }

    #[test]
    fn test_p_value_is_monotone() {
        for det in ALL {
            let mut previous = 0.0;
            let mut tau = -20.0;
            while tau < 3.0 {
                let p = p_value(tau, det);
                assert!((0.0..=1.0).contains(&p));
                assert!(p >= previous - 1e-3, "{det}: p({tau}) = {p} < {previous}");
                previous = p;
                tau += 0.05;
            }
        }
    }

    #[test]
    fn test_p_value_bounds() {
        assert_eq!(p_value(-25.0, Deterministic::Constant), 0.0);
        assert_eq!(p_value(3.0, Deterministic::Constant), 1.0);
        assert_eq!(p_value(f64::NEG_INFINITY, Deterministic::ConstantTrend), 0.0);
        assert!(p_value(10.0, Deterministic::None) > 0.99);
    }

    #[test]
    fn test_critical_values_approach_asymptotic() {
        let cv = critical_values(Deterministic::Constant, 1_000_000);
        assert_relative_eq!(cv.get(SignificanceLevel::FivePercent).unwrap(), -2.86154, epsilon = 1e-4);

        let small = critical_values(Deterministic::Constant, 50);
        let one = small.get(SignificanceLevel::OnePercent).unwrap();
        let five = small.get(SignificanceLevel::FivePercent).unwrap();
        let ten = small.get(SignificanceLevel::TenPercent).unwrap();
        assert!(one < five && five < ten);
        // Finite-sample values are further out than asymptotic ones
        assert!(one < -3.43035);
        assert_eq!(small.get(SignificanceLevel::TwoAndHalfPercent), None);
    }
}
