//! Prediction service: model server first, local formula as fallback

use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use shared::{fallback_prediction, FallbackPrediction, PredictionInputs, FALLBACK_JITTER_MAX};

use crate::external::ModelServerClient;

/// Prediction service wrapping the model server client
#[derive(Clone)]
pub struct PredictionService {
    model_client: ModelServerClient,
}

/// Where a prediction came from. Serializes as the bare payload, so the model
/// server's response is relayed verbatim.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum PredictionOutcome {
    Model(Value),
    Fallback(FallbackPrediction),
}

impl PredictionOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, PredictionOutcome::Fallback(_))
    }
}

impl PredictionService {
    pub fn new(model_client: ModelServerClient) -> Self {
        Self { model_client }
    }

    /// Ask the model server for a prediction. Any failure is recovered with
    /// the local formula; the caller always gets a result.
    pub async fn predict(&self, inputs: PredictionInputs) -> PredictionOutcome {
        match self.model_client.predict(&inputs).await {
            Ok(result) => PredictionOutcome::Model(result),
            Err(e) => {
                tracing::warn!("Model server error, using fallback prediction: {}", e);
                let prediction = fallback_predict(inputs.co, inputs.ozone, inputs.no2, inputs.pm25);
                PredictionOutcome::Fallback(FallbackPrediction::new(inputs, prediction))
            }
        }
    }
}

/// Fallback AQI estimate with uniform jitter in `[0, 20)`. Not deterministic.
pub fn fallback_predict(co: f64, ozone: f64, no2: f64, pm25: f64) -> i64 {
    let jitter = rand::thread_rng().gen_range(0.0..FALLBACK_JITTER_MAX);
    fallback_prediction(co, ozone, no2, pm25, jitter)
}
