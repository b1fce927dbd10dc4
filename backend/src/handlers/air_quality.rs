//! HTTP handlers for air quality data endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{parse_float_prefix, AirQualityRecord, GpsCoordinates};

use crate::error::AppResult;
use crate::services::air_quality::{AirQualityService, AirQualitySummary};
use crate::AppState;

/// Optional coordinate for a real-time lookup
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl LocationQuery {
    /// The requested coordinate, when both parameters are present and numeric
    pub fn location(&self) -> Option<GpsCoordinates> {
        let lat = self.lat.as_deref().and_then(parse_float_prefix)?;
        let lng = self.lng.as_deref().and_then(parse_float_prefix)?;
        Some(GpsCoordinates::new(lat, lng))
    }
}

fn service(state: &AppState) -> AirQualityService {
    AirQualityService::with_client(
        state.config.data.csv_path.clone(),
        state.air_pollution.clone(),
    )
}

/// Get the full dataset, or a single real-time record when `lat` and `lng`
/// are given
pub async fn get_air_quality_data(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<Vec<AirQualityRecord>>> {
    let service = service(&state);

    if let Some(location) = query.location() {
        let record = service.realtime_record(location).await?;
        return Ok(Json(vec![record]));
    }

    let records = service.load_records().await?;
    Ok(Json(records))
}

/// Get dashboard statistics, chart bars and map markers for the dataset
pub async fn get_air_quality_summary(
    State(state): State<AppState>,
) -> AppResult<Json<AirQualitySummary>> {
    let summary = service(&state).summary().await?;
    Ok(Json(summary))
}
