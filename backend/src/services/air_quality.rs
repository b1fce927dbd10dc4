//! Air quality service for loading and summarizing measurements

use std::io::ErrorKind;
use std::path::PathBuf;

use rand::Rng;
use serde::Serialize;
use shared::{
    aggregate, map_markers, parse, pollutant_averages, validate_coordinates, AirQualityRecord,
    AqiCategory, AqiStats, ChartBar, GpsCoordinates, MapMarker, PollutantValues,
};

use crate::error::{AppError, AppResult};
use crate::external::AirPollutionClient;

/// Number of points plotted on the dashboard map
pub const MAP_MARKER_LIMIT: usize = 100;

/// Caller-facing message for unexpected read failures
const READ_FAILURE: &str = "Failed to read data";

/// Air quality service for the CSV dataset and real-time lookups
#[derive(Clone)]
pub struct AirQualityService {
    csv_path: PathBuf,
    air_pollution: Option<AirPollutionClient>,
}

/// Everything the dashboard renders from the dataset
#[derive(Debug, Clone, Serialize)]
pub struct AirQualitySummary {
    pub stats: AqiStats,
    pub category: AqiCategory,
    pub pollutant_averages: PollutantValues,
    pub chart: Vec<ChartBar>,
    pub markers: Vec<MapMarker>,
}

impl AirQualityService {
    /// Create a new AirQualityService instance
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            air_pollution: None,
        }
    }

    /// Create a new AirQualityService backed by a live air pollution API
    pub fn with_client(csv_path: impl Into<PathBuf>, client: Option<AirPollutionClient>) -> Self {
        Self {
            csv_path: csv_path.into(),
            air_pollution: client,
        }
    }

    /// Read and parse the whole CSV file. The file is re-read on every call.
    pub async fn load_records(&self) -> AppResult<Vec<AirQualityRecord>> {
        let text = match tokio::fs::read_to_string(&self.csv_path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::NotFound("CSV file not found".to_string()));
            }
            Err(e) => {
                tracing::error!("Error reading {}: {}", self.csv_path.display(), e);
                return Err(AppError::Internal(READ_FAILURE.to_string()));
            }
        };

        let records = parse(&text)?;

        tracing::debug!(
            "Loaded {} records from {}",
            records.len(),
            self.csv_path.display()
        );

        Ok(records)
    }

    /// Build a single record for a coordinate from the live API, or from a
    /// simulated reading when no API is configured or the lookup fails
    pub async fn realtime_record(&self, location: GpsCoordinates) -> AppResult<AirQualityRecord> {
        validate_coordinates(location.latitude, location.longitude)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let sub_indices = match &self.air_pollution {
            Some(client) => match client.get_current(location).await {
                Ok(reading) => {
                    tracing::debug!(
                        "Live reading at ({}, {}): provider level {}",
                        location.latitude,
                        location.longitude,
                        reading.provider_aqi
                    );
                    reading.sub_indices()
                }
                Err(e) => {
                    tracing::warn!("Live air pollution lookup failed, simulating: {}", e);
                    simulated_sub_indices()
                }
            },
            None => simulated_sub_indices(),
        };

        Ok(AirQualityRecord::from_reading(
            sub_indices.overall(),
            sub_indices,
            location,
        ))
    }

    /// Load the dataset and compute the dashboard summary
    pub async fn summary(&self) -> AppResult<AirQualitySummary> {
        let records = self.load_records().await?;
        Ok(summarize(&records, MAP_MARKER_LIMIT))
    }
}

/// Compute statistics, chart bars and map markers for a set of records
pub fn summarize(records: &[AirQualityRecord], marker_limit: usize) -> AirQualitySummary {
    let stats = aggregate(records);
    let averages = pollutant_averages(records);

    AirQualitySummary {
        stats,
        category: stats.category(),
        pollutant_averages: averages,
        chart: averages.chart_bars(),
        markers: map_markers(records, marker_limit),
    }
}

/// Plausible whole-number sub-indices for a location without live data
pub fn simulated_sub_indices() -> PollutantValues {
    let mut rng = rand::thread_rng();
    PollutantValues {
        co: rng.gen_range(0..=10) as f64,
        ozone: rng.gen_range(10..=100) as f64,
        no2: rng.gen_range(0..=50) as f64,
        pm25: rng.gen_range(10..=180) as f64,
    }
}
