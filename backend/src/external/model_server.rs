//! Model Server Client
//!
//! Client for the Python prediction service (random forest + AdaBoost
//! ensemble) that listens on a local port.

use reqwest::Client;
use serde_json::Value;
use shared::PredictionInputs;

use crate::error::{AppError, AppResult};

/// Client for the prediction model server
#[derive(Clone)]
pub struct ModelServerClient {
    endpoint: String,
    http_client: Client,
}

impl ModelServerClient {
    /// Create a new model server client. No request timeout is set; a hung
    /// model server holds the request until the connection drops.
    pub fn new(endpoint: impl Into<String>) -> AppResult<Self> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request a prediction. The response body is returned untouched so it can
    /// be relayed to the dashboard verbatim, keys in the model server's order.
    ///
    /// Fails on transport errors, non-success statuses, bodies that are not a
    /// JSON object, bodies without a `prediction` field, and bodies carrying a
    /// truthy `error` field.
    pub async fn predict(&self, inputs: &PredictionInputs) -> AppResult<Value> {
        let url = format!("{}/predict", self.endpoint);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(inputs)
            .send()
            .await
            .map_err(|e| AppError::ModelServer(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::ModelServer(format!(
                "Model server responded with status: {}",
                status
            )));
        }

        let result: Value = response
            .json()
            .await
            .map_err(|e| AppError::ModelServer(format!("Failed to parse response: {}", e)))?;

        check_prediction_body(&result)?;

        Ok(result)
    }

    /// Probe the model server's health endpoint
    pub async fn is_reachable(&self) -> bool {
        let url = format!("{}/health", self.endpoint);
        match self.http_client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Model server health probe failed: {}", e);
                false
            }
        }
    }
}

/// Reject model responses that report an error or carry no prediction
fn check_prediction_body(body: &Value) -> AppResult<()> {
    let object = body
        .as_object()
        .ok_or_else(|| AppError::ModelServer("Response is not a JSON object".to_string()))?;

    if let Some(error) = object.get("error").filter(|e| is_truthy(e)) {
        return Err(AppError::ModelServer(format!("Model server reported: {}", error)));
    }

    if !object.contains_key("prediction") {
        return Err(AppError::ModelServer(
            "Response has no prediction field".to_string(),
        ));
    }

    Ok(())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
