//! Joint ADF/KPSS verdicts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conclusion drawn from one ADF and one KPSS result
///
/// | ADF rejects unit root | KPSS rejects stationarity | verdict |
/// |---|---|---|
/// | no  | no  | `TrendStationary` |
/// | yes | no  | `Stationary` |
/// | no  | yes | `NonStationary` |
/// | yes | yes | `DifferenceStationary` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationarityVerdict {
    /// Both tests agree the series is stationary
    Stationary,
    /// Both tests agree the series has a unit root
    NonStationary,
    /// Neither test rejects: stationary once a deterministic trend is removed
    TrendStationary,
    /// Both tests reject: differencing is needed
    DifferenceStationary,
}

impl StationarityVerdict {
    /// Look up the verdict for a pair of rejection decisions
    pub const fn from_rejections(adf_rejects: bool, kpss_rejects: bool) -> Self {
        match (adf_rejects, kpss_rejects) {
            (false, false) => Self::TrendStationary,
            (true, false) => Self::Stationary,
            (false, true) => Self::NonStationary,
            (true, true) => Self::DifferenceStationary,
        }
    }

    pub fn is_stationary(&self) -> bool {
        matches!(self, Self::Stationary)
    }

    /// Transform suggested before modelling
    pub fn recommended_transform(&self) -> RecommendedTransform {
        match self {
            Self::Stationary => RecommendedTransform::None,
            Self::TrendStationary => RecommendedTransform::Detrend,
            Self::NonStationary | Self::DifferenceStationary => RecommendedTransform::Difference,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Stationary => "The series is stationary",
            Self::NonStationary => "The series is non-stationary",
            Self::TrendStationary => {
                "The series is trend stationary; remove the trend to make it strictly stationary"
            }
            Self::DifferenceStationary => {
                "The series is difference stationary; use differencing to make it stationary"
            }
        }
    }
}

impl fmt::Display for StationarityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stationary => "Stationary",
            Self::NonStationary => "NonStationary",
            Self::TrendStationary => "TrendStationary",
            Self::DifferenceStationary => "DifferenceStationary",
        };
        f.write_str(name)
    }
}

/// Transformation that addresses a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendedTransform {
    None,
    Detrend,
    Difference,
}

impl fmt::Display for RecommendedTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Detrend => "detrend",
            Self::Difference => "difference",
        };
        f.write_str(name)
    }
}
