//! HTTP handlers for AQI prediction

use axum::{body::Bytes, extract::State, Json};
use shared::{validate_prediction_request, PredictionRequest};

use crate::error::{AppError, AppResult};
use crate::services::prediction::{PredictionOutcome, PredictionService};
use crate::AppState;

/// Predict AQI from pollutant sub-indices and a location.
///
/// The body is parsed leniently (no content-type requirement). A body that is
/// not a JSON object of numbers is rejected with 400, as is one missing any
/// field.
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<PredictionOutcome>> {
    let request: PredictionRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Rejected prediction body: {}", e);
        AppError::InvalidInput("Invalid request body".to_string())
    })?;

    let inputs = validate_prediction_request(&request)
        .map_err(|msg| AppError::InvalidInput(msg.to_string()))?;

    let service = PredictionService::new(state.model_client.clone());
    let outcome = service.predict(inputs).await;

    if outcome.is_fallback() {
        tracing::info!("Served fallback prediction");
    }

    Ok(Json(outcome))
}
