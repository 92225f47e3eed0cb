//! Validated time series container

use crate::error::{Error, Result};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use tracing::debug;

/// Shortest series any test in this workspace accepts
pub const MIN_SERIES_LENGTH: usize = 10;

/// Relative tolerance under which a series is treated as constant
pub const CONSTANT_TOLERANCE: f64 = 1e-12;

/// An ordered sequence of finite observations indexed by time
///
/// Every value is checked on construction, so consumers never see NaN or
/// infinities. Length requirements differ per test and are checked there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct Series {
    values: Vec<f64>,
    name: Option<String>,
}

/// Unvalidated wire form of [`Series`]
#[derive(Deserialize)]
struct RawSeries {
    values: Vec<f64>,
    name: Option<String>,
}

impl TryFrom<RawSeries> for Series {
    type Error = Error;

    fn try_from(raw: RawSeries) -> Result<Self> {
        let mut series = Self::new(raw.values)?;
        series.name = raw.name;
        Ok(series)
    }
}

impl Series {
    /// Create a series, rejecting non-finite values
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            debug!("Rejecting series of {} values: {} at index {}", values.len(), value, index);
            return Err(Error::NonFiniteValue { index, value });
        }
        Ok(Self { values, name: None })
    }

    /// Create a series from any numeric values (integers, `f32`, ...)
    pub fn from_values<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: ToPrimitive,
    {
        let mut converted = Vec::new();
        for (index, v) in values.into_iter().enumerate() {
            let value = v.to_f64().ok_or_else(|| {
                Error::InvalidParameter(format!("value at index {index} is not representable as f64"))
            })?;
            converted.push(value);
        }
        Self::new(converted)
    }

    /// Attach a label, e.g. the column the values came from
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Fail with `InsufficientData` when shorter than `min_len`
    pub fn require_len(&self, min_len: usize) -> Result<()> {
        Error::require_len(self.values.len(), min_len)
    }

    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return f64::NAN;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Population variance (divisor n)
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / self.values.len() as f64
    }

    /// Whether every observation equals the mean up to `CONSTANT_TOLERANCE`
    pub fn is_constant(&self) -> bool {
        if self.values.is_empty() {
            return true;
        }
        let mean = self.mean();
        let scale = mean.abs().max(1.0);
        self.values
            .iter()
            .all(|x| (x - mean).abs() <= CONSTANT_TOLERANCE * scale)
    }

    /// Derive a series from new values, keeping the label
    ///
    /// Values produced by arithmetic on finite inputs can still overflow, so
    /// they are validated again.
    pub fn derive(&self, values: Vec<f64>) -> Result<Self> {
        let mut series = Self::new(values)?;
        series.name = self.name.clone();
        Ok(series)
    }
}

impl Deref for Series {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl AsRef<[f64]> for Series {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for Series {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Series {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Series '{}' (n = {})", name, self.values.len()),
            None => write!(f, "Series (n = {})", self.values.len()),
        }
    }
}
