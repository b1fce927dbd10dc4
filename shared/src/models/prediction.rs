//! Prediction request and fallback models

use serde::{Deserialize, Serialize};

use crate::types::round_half_up;

/// Upper bound of the AQI display scale
pub const AQI_DISPLAY_MAX: i64 = 500;

/// Exclusive upper bound of the fallback jitter term
pub const FALLBACK_JITTER_MAX: f64 = 20.0;

/// Annotation attached to every fallback result
pub const FALLBACK_NOTE: &str = "Using fallback prediction (model server unavailable)";

/// Prediction request as received from the dashboard. Every field is
/// optional at this stage; see [`crate::validate_prediction_request`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    pub co: Option<f64>,
    pub ozone: Option<f64>,
    pub no2: Option<f64>,
    pub pm25: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Validated prediction inputs, forwarded as-is to the model server
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PredictionInputs {
    pub co: f64,
    pub ozone: f64,
    pub no2: f64,
    pub pm25: f64,
    pub lat: f64,
    pub lng: f64,
}

/// Locally computed result returned when the model server cannot answer.
///
/// Mirrors the model server's response shape, with both model slots holding
/// the fallback value and a `note` marking the origin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FallbackPrediction {
    pub prediction: i64,
    pub rf_prediction: i64,
    pub adaboost_prediction: i64,
    pub inputs: PredictionInputs,
    pub note: String,
}

impl FallbackPrediction {
    pub fn new(inputs: PredictionInputs, prediction: i64) -> Self {
        Self {
            prediction,
            rf_prediction: prediction,
            adaboost_prediction: prediction,
            inputs,
            note: FALLBACK_NOTE.to_string(),
        }
    }
}

/// Weighted-sum AQI estimate from the four pollutant sub-indices.
///
/// `(co*0.1 + ozone*0.3 + no2*0.2 + pm25*0.4) * 2 + jitter`, rounded and
/// clamped to `[0, 500]`. Callers draw `jitter` uniformly from
/// `[0, FALLBACK_JITTER_MAX)`.
pub fn fallback_prediction(co: f64, ozone: f64, no2: f64, pm25: f64, jitter: f64) -> i64 {
    let weighted = co * 0.1 + ozone * 0.3 + no2 * 0.2 + pm25 * 0.4;
    round_half_up(weighted * 2.0 + jitter).clamp(0, AQI_DISPLAY_MAX)
}
