//! Pollutant sub-index values

use serde::{Deserialize, Serialize};

use crate::types::round_half_up;

/// Smallest bar height drawn on the pollutant chart
pub const MIN_CHART_VALUE: i64 = 1;

/// One value per tracked pollutant sub-index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PollutantValues {
    pub co: f64,
    pub ozone: f64,
    pub no2: f64,
    pub pm25: f64,
}

/// A chart-ready bar for one pollutant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartBar {
    pub name: String,
    pub value: i64,
}

impl PollutantValues {
    /// Overall AQI for a reading: the worst sub-index
    pub fn overall(&self) -> f64 {
        self.co.max(self.ozone).max(self.no2).max(self.pm25)
    }

    /// Pollutants paired with their chart labels
    pub fn labeled(&self) -> [(&'static str, f64); 4] {
        [
            ("CO", self.co),
            ("Ozone", self.ozone),
            ("NO2", self.no2),
            ("PM2.5", self.pm25),
        ]
    }

    /// Bars for the pollutant chart, rounded and floored at [`MIN_CHART_VALUE`]
    /// so that no bar collapses to zero height
    pub fn chart_bars(&self) -> Vec<ChartBar> {
        self.labeled()
            .into_iter()
            .map(|(name, value)| ChartBar {
                name: name.to_string(),
                value: round_half_up(value).max(MIN_CHART_VALUE),
            })
            .collect()
    }
}
