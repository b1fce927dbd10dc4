//! Route definitions for the air quality dashboard

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/air-quality-data", get(handlers::get_air_quality_data))
        .route("/air-quality-summary", get(handlers::get_air_quality_summary))
        .route("/predict", post(handlers::predict))
}
