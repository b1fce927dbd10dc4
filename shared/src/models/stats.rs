//! Summary statistics over measurement records

use serde::{Deserialize, Serialize};

use crate::models::{classify_aqi, AirQualityRecord, AqiCategory, PollutantValues};
use crate::types::round_half_up;

/// Headline AQI statistics for a set of records
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AqiStats {
    pub average: i64,
    pub max: i64,
    pub min: i64,
    pub count: usize,
}

impl AqiStats {
    /// Compute statistics over raw AQI values. All fields are `0` for an
    /// empty input.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;

        for value in values {
            count += 1;
            sum += value;
            max = max.max(value);
            min = min.min(value);
        }

        if count == 0 {
            return Self::default();
        }

        Self {
            average: round_half_up(sum / count as f64),
            max: round_half_up(max),
            min: round_half_up(min),
            count,
        }
    }

    /// Band of the average AQI
    pub fn category(&self) -> AqiCategory {
        classify_aqi(self.average as f64)
    }
}

/// Aggregate the overall AQI column of `records`
pub fn aggregate(records: &[AirQualityRecord]) -> AqiStats {
    AqiStats::from_values(records.iter().map(AirQualityRecord::aqi))
}

/// Mean of each pollutant sub-index. Zero for every pollutant when `records`
/// is empty.
pub fn pollutant_averages(records: &[AirQualityRecord]) -> PollutantValues {
    if records.is_empty() {
        return PollutantValues::default();
    }

    let total = records
        .iter()
        .map(AirQualityRecord::sub_indices)
        .fold(PollutantValues::default(), |acc, v| PollutantValues {
            co: acc.co + v.co,
            ozone: acc.ozone + v.ozone,
            no2: acc.no2 + v.no2,
            pm25: acc.pm25 + v.pm25,
        });

    let n = records.len() as f64;
    PollutantValues {
        co: total.co / n,
        ozone: total.ozone / n,
        no2: total.no2 / n,
        pm25: total.pm25 / n,
    }
}

/// A colored map point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub aqi: f64,
    pub category: AqiCategory,
    pub color: String,
}

/// Markers for the first `limit` records, in input order
pub fn map_markers(records: &[AirQualityRecord], limit: usize) -> Vec<MapMarker> {
    records
        .iter()
        .take(limit)
        .map(|record| {
            let category = classify_aqi(record.aqi());
            MapMarker {
                lat: record.lat(),
                lng: record.lng(),
                aqi: record.aqi(),
                category,
                color: category.color().to_string(),
            }
        })
        .collect()
}
