//! Air Quality Dashboard - Backend Server
//!
//! Serves the AQI dataset parsed from CSV, dashboard summaries, and AQI
//! predictions proxied to the model server with a local fallback.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use error::AppResult;
use external::{AirPollutionClient, ModelServerClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub model_client: ModelServerClient,
    pub air_pollution: Option<AirPollutionClient>,
}

impl AppState {
    /// Build clients from configuration
    pub fn new(config: Config) -> AppResult<Self> {
        let model_client = ModelServerClient::new(config.model.endpoint.clone())?;

        let air_pollution = config
            .air_pollution
            .api_key
            .as_ref()
            .filter(|key| !key.is_empty())
            .map(|key| {
                AirPollutionClient::new(key.clone(), config.air_pollution.api_endpoint.clone())
            });

        if air_pollution.is_none() {
            tracing::info!("No air pollution API key configured, real-time readings are simulated");
        }

        Ok(Self {
            config: Arc::new(config),
            model_client,
            air_pollution,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Air Quality Dashboard API v1.0"
}
