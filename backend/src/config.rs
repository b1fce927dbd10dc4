//! Configuration management for the air quality dashboard server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AQI__ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Dataset location
    pub data: DataConfig,

    /// Prediction model server
    pub model: ModelConfig,

    /// Live air pollution API
    pub air_pollution: AirPollutionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Path to the AQI CSV file, read on every request
    pub csv_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Base URL of the model server; `/predict` and `/health` are appended
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AirPollutionConfig {
    /// OpenWeatherMap data API base URL
    pub api_endpoint: String,

    /// OpenWeatherMap API key. Real-time readings are simulated when unset.
    pub api_key: Option<String>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("AQI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("data.csv_path", "AQI-and-Lat-Long-of-Countries.csv")?
            .set_default("model.endpoint", "http://localhost:5000")?
            .set_default(
                "air_pollution.api_endpoint",
                "http://api.openweathermap.org/data/2.5",
            )?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AQI__ prefix)
            .add_source(
                Environment::with_prefix("AQI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Configuration for tests and local tooling, without touching the
    /// environment
    pub fn with_paths(csv_path: impl Into<String>, model_endpoint: impl Into<String>) -> Self {
        Self {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            data: DataConfig {
                csv_path: csv_path.into(),
            },
            model: ModelConfig {
                endpoint: model_endpoint.into(),
            },
            air_pollution: AirPollutionConfig {
                api_endpoint: "http://api.openweathermap.org/data/2.5".to_string(),
                api_key: None,
            },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
