//! Trend/cycle filters used in macroeconomic detrending

pub mod bk;
pub mod hp;

pub use bk::BaxterKing;
pub use hp::{HodrickPrescott, QUARTERLY_LAMBDA};

use stationarity_core::Series;

/// Additive decomposition `y = trend + cycle`
#[derive(Debug, Clone, PartialEq)]
pub struct TrendCycle {
    trend: Series,
    cycle: Series,
}

impl TrendCycle {
    pub fn new(trend: Series, cycle: Series) -> Self {
        Self { trend, cycle }
    }

    pub fn trend(&self) -> &Series {
        &self.trend
    }

    pub fn cycle(&self) -> &Series {
        &self.cycle
    }

    pub fn into_parts(self) -> (Series, Series) {
        (self.trend, self.cycle)
    }
}
