//! Validation utilities for measurements and prediction requests

use crate::models::{PredictionInputs, PredictionRequest};

/// Message returned when a prediction request is incomplete
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

// ============================================================================
// Coordinate Validations
// ============================================================================

/// Whether a parsed coordinate may be kept on a record.
///
/// Exactly `0` is rejected along with non-finite values, so points on the
/// equator or prime meridian are dropped from the dataset.
pub fn is_valid_coordinate(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

/// Validate a coordinate pair for a live lookup
pub fn validate_coordinates(lat: f64, lng: f64) -> Result<(), &'static str> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err("Latitude must be between -90 and 90");
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

// ============================================================================
// Prediction Validations
// ============================================================================

/// A measurement is usable when it is present, finite and non-zero
fn required_measurement(value: Option<f64>) -> Result<f64, &'static str> {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => Ok(v),
        _ => Err(MISSING_FIELDS_MESSAGE),
    }
}

/// Validate that every prediction field is supplied and non-zero
pub fn validate_prediction_request(
    request: &PredictionRequest,
) -> Result<PredictionInputs, &'static str> {
    Ok(PredictionInputs {
        co: required_measurement(request.co)?,
        ozone: required_measurement(request.ozone)?,
        no2: required_measurement(request.no2)?,
        pm25: required_measurement(request.pm25)?,
        lat: required_measurement(request.lat)?,
        lng: required_measurement(request.lng)?,
    })
}
