//! Ordinary and seasonal differencing with exact inversion

use serde::{Deserialize, Serialize};
use stationarity_core::{Error, Result, Series};
use tracing::debug;

/// Apply `order` rounds of first differencing
///
/// The result has `n - order` observations. Differencing a polynomial of
/// degree `order` leaves a constant series.
pub fn difference(series: &Series, order: usize) -> Result<Series> {
    Differencer::new(order).apply(series).map(Differenced::into_series)
}

/// One round of lag-`period` differencing, `y_t - y_{t-period}`
pub fn seasonal_difference(series: &Series, period: usize) -> Result<Series> {
    Differencer::seasonal(period).apply(series).map(Differenced::into_series)
}

/// Repeated lag-`lag` differencing
///
/// Ordinary differencing is `lag = 1`; seasonal differencing uses the season
/// length as the lag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Differencer {
    pub order: usize,
    pub lag: usize,
}

impl Default for Differencer {
    fn default() -> Self {
        Self { order: 1, lag: 1 }
    }
}

impl Differencer {
    /// `order` rounds of first differencing
    pub fn new(order: usize) -> Self {
        Self { order, lag: 1 }
    }

    /// One round of seasonal differencing with the given period
    pub fn seasonal(period: usize) -> Self {
        Self { order: 1, lag: period }
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Observations consumed by the full set of rounds
    pub fn observations_lost(&self) -> usize {
        self.order * self.lag
    }

    fn validate(&self, len: usize) -> Result<()> {
        if self.order == 0 {
            return Err(Error::InvalidParameter("differencing order must be at least 1".to_string()));
        }
        if self.lag == 0 {
            return Err(Error::InvalidParameter("differencing lag must be at least 1".to_string()));
        }
        Error::require_len(len, self.observations_lost() + 1)
    }

    /// Difference the series, keeping what is needed to undo it
    pub fn apply(&self, series: &Series) -> Result<Differenced> {
        self.validate(series.len())?;

        let mut current = series.values().to_vec();
        let mut heads = Vec::with_capacity(self.order);
        for _ in 0..self.order {
            heads.push(current[..self.lag].to_vec());
            current = current
                .iter()
                .skip(self.lag)
                .zip(&current)
                .map(|(later, earlier)| later - earlier)
                .collect();
        }
        debug!(
            "Differenced {} observations, order {} lag {}: {} remain",
            series.len(),
            self.order,
            self.lag,
            current.len()
        );

        Ok(Differenced {
            series: series.derive(current)?,
            heads,
            lag: self.lag,
        })
    }
}

/// A differenced series together with the initial values of every round
#[derive(Debug, Clone, PartialEq)]
pub struct Differenced {
    series: Series,
    heads: Vec<Vec<f64>>,
    lag: usize,
}

impl Differenced {
    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn into_series(self) -> Series {
        self.series
    }

    /// Number of differencing rounds applied
    pub fn order(&self) -> usize {
        self.heads.len()
    }

    pub fn lag(&self) -> usize {
        self.lag
    }

    /// Reconstruct the original series by cumulative summation
    pub fn invert(&self) -> Result<Series> {
        self.integrate(self.series.values())
    }

    /// Undo the differencing on replacement values, e.g. a filtered or
    /// extended version of the differenced series
    ///
    /// The stored initial values anchor the reconstruction, so `values` may
    /// be longer than the differenced series.
    pub fn integrate(&self, values: &[f64]) -> Result<Series> {
        let mut current = values.to_vec();
        for head in self.heads.iter().rev() {
            let mut level = Vec::with_capacity(current.len() + head.len());
            level.extend_from_slice(head);
            for (i, d) in current.iter().enumerate() {
                let previous = level[i];
                level.push(previous + d);
            }
            current = level;
        }
        self.series.derive(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(values: &[f64]) -> Series {
        Series::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_first_difference() {
        let diffed = difference(&series(&[1.0, 4.0, 9.0, 16.0, 25.0]), 1).unwrap();
        assert_eq!(diffed.values(), &[3.0, 5.0, 7.0, 9.0]);

        let twice = difference(&series(&[1.0, 4.0, 9.0, 16.0, 25.0]), 2).unwrap();
        assert_eq!(twice.values(), &[2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_seasonal_difference() {
        let y = series(&[1.0, 2.0, 3.0, 4.0, 11.0, 12.0, 13.0, 14.0]);
        let diffed = seasonal_difference(&y, 4).unwrap();
        assert_eq!(diffed.values(), &[10.0, 10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_invalid_order_and_length() {
        let y = series(&[1.0, 2.0, 3.0]);
        assert!(matches!(difference(&y, 0), Err(Error::InvalidParameter(_))));
        assert!(matches!(seasonal_difference(&y, 0), Err(Error::InvalidParameter(_))));

        match difference(&y, 3) {
            Err(Error::InsufficientData { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("expected InsufficientData, got {other:?}"),
        }
        assert_eq!(difference(&y, 2).unwrap().len(), 1);
    }

    #[test]
    fn test_invert_round_trip() {
        let y = series(&[3.0, -1.0, 4.0, 1.0, -5.0, 9.0, 2.0, 6.0]);
        for differencer in [Differencer::new(1), Differencer::new(3), Differencer::seasonal(3).with_order(2)] {
            let diffed = differencer.apply(&y).unwrap();
            assert_eq!(diffed.series().len(), y.len() - differencer.observations_lost());
            assert_eq!(diffed.invert().unwrap(), y);
        }
    }

    #[test]
    fn test_integrate_extension() {
        let y = series(&[1.0, 2.0, 4.0, 7.0]);
        let diffed = Differencer::new(1).apply(&y).unwrap();
        // Continue the last difference for two more steps
        let extended = diffed.integrate(&[1.0, 2.0, 3.0, 3.0, 3.0]).unwrap();
        assert_eq!(extended.values(), &[1.0, 2.0, 4.0, 7.0, 10.0, 13.0]);
    }

    #[test]
    fn test_name_preserved() {
        let y = series(&[1.5, 2.5, 2.0, 4.0]).with_name("realinv");
        let diffed = Differencer::default().apply(&y).unwrap();
        assert_eq!(diffed.series().name(), Some("realinv"));
        assert_relative_eq!(diffed.series()[2], 2.0);
    }
}
