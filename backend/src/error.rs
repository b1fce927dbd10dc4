//! Error handling for the air quality dashboard server
//!
//! Every error is rendered as `{"error": "<message>"}`. Internal failures are
//! logged in full and reported to the caller with a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::ParseError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // External service errors
    #[error("Model server error: {0}")]
    ModelServer(String),

    #[error("Air pollution API error: {0}")]
    AirPollutionApi(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::EmptyOrInvalidInput => {
                AppError::InvalidInput("CSV file is empty or invalid".to_string())
            }
        }
    }
}

impl AppError {
    /// Status code and caller-facing message
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ModelServer(_) => (
                StatusCode::BAD_GATEWAY,
                "Model server is unavailable".to_string(),
            ),
            AppError::AirPollutionApi(_) => (
                StatusCode::BAD_GATEWAY,
                "Air pollution service is unavailable".to_string(),
            ),
            AppError::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server is misconfigured".to_string(),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound("CSV file not found".into());
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "CSV file not found");
    }

    #[test]
    fn test_empty_csv_maps_to_400() {
        let err: AppError = ParseError::EmptyOrInvalidInput.into();
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "CSV file is empty or invalid");
    }

    #[test]
    fn test_internal_details_not_leaked() {
        let err = AppError::InternalError(anyhow::anyhow!("disk on fire at /var/data"));
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!message.contains("/var/data"));
    }
}
