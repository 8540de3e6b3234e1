use std::str::FromStr;

use crate::error::ConfigError;

/// Series total that fills the whole ring (and reads as 100%).
pub const UNITS_PER_CIRCLE: f32 = 2000.0;

const FULL_CIRCLE: f32 = 360.0;

/// Ordered values to chart. Order decides draw order and where each
/// segment starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSeries {
    values: Vec<f32>,
}

impl DataSeries {
    pub fn new(values: Vec<f32>) -> Self {
        DataSeries { values }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sum(&self) -> f32 {
        self.values.iter().sum()
    }

    pub fn sweep_angles(&self) -> Vec<f32> {
        self.iter().map(sweep_angle).collect()
    }

    /// `sum / 20`, i.e. the share of [`UNITS_PER_CIRCLE`] in percent.
    pub fn percent(&self) -> f32 {
        self.sum() / (UNITS_PER_CIRCLE / 100.0)
    }

    pub fn percent_text(&self) -> String {
        format!("{:.2}%", self.percent())
    }
}

impl FromIterator<f32> for DataSeries {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        DataSeries::new(iter.into_iter().collect())
    }
}

impl From<Vec<f32>> for DataSeries {
    fn from(values: Vec<f32>) -> Self {
        DataSeries::new(values)
    }
}

/// Parses `"500, 500,500"`. Blank input is an empty series.
impl FromStr for DataSeries {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<f32>()
                    .map_err(|_| ConfigError::InvalidValue(part.to_string()))
            })
            .collect()
    }
}

/// Sweep in degrees for a single value. Totals above or below
/// [`UNITS_PER_CIRCLE`] overrun or undershoot the circle; nothing is normalized.
pub fn sweep_angle(value: f32) -> f32 {
    value * FULL_CIRCLE / UNITS_PER_CIRCLE
}
