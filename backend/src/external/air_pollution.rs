//! Air pollution API client for real-time readings
//!
//! Integrates with the OpenWeatherMap Air Pollution API for current pollutant
//! concentrations at a coordinate.

use reqwest::Client;
use serde::Deserialize;
use shared::{GpsCoordinates, PollutantValues};

use crate::error::{AppError, AppResult};

/// Sub-indices are capped at the top of the AQI display scale
const SUB_INDEX_CAP: f64 = 500.0;

/// Air pollution API client
#[derive(Clone)]
pub struct AirPollutionClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Raw pollutant concentrations at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct AirPollutionReading {
    pub co: f64,
    pub no2: f64,
    pub o3: f64,
    pub pm2_5: f64,
    /// Provider's own 1-5 air quality level
    pub provider_aqi: u8,
}

/// OpenWeatherMap API response for current air pollution
#[derive(Debug, Deserialize)]
struct OWMPollutionResponse {
    list: Vec<OWMPollutionItem>,
}

#[derive(Debug, Deserialize)]
struct OWMPollutionItem {
    main: OWMPollutionMain,
    components: OWMComponents,
}

#[derive(Debug, Deserialize)]
struct OWMPollutionMain {
    aqi: u8,
}

#[derive(Debug, Deserialize)]
struct OWMComponents {
    #[serde(default)]
    co: f64,
    #[serde(default)]
    no2: f64,
    #[serde(default)]
    o3: f64,
    #[serde(default)]
    pm2_5: f64,
}

impl AirPollutionClient {
    /// Create a new AirPollutionClient against a base URL such as
    /// `http://api.openweathermap.org/data/2.5`
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch current pollutant concentrations by GPS coordinates
    pub async fn get_current(&self, location: GpsCoordinates) -> AppResult<AirPollutionReading> {
        let url = format!("{}/air_pollution", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| AppError::AirPollutionApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::AirPollutionApi(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let data: OWMPollutionResponse = response
            .json()
            .await
            .map_err(|e| AppError::AirPollutionApi(format!("Failed to parse response: {}", e)))?;

        convert_response(data)
    }
}

fn convert_response(data: OWMPollutionResponse) -> AppResult<AirPollutionReading> {
    let item = data
        .list
        .into_iter()
        .next()
        .ok_or_else(|| AppError::AirPollutionApi("Response contained no readings".to_string()))?;

    Ok(AirPollutionReading {
        co: item.components.co,
        no2: item.components.no2,
        o3: item.components.o3,
        pm2_5: item.components.pm2_5,
        provider_aqi: item.main.aqi,
    })
}

impl AirPollutionReading {
    /// Approximate sub-indices from raw concentrations.
    ///
    /// Linear scale factors rather than the EPA breakpoint tables, each capped
    /// at 500.
    pub fn sub_indices(&self) -> PollutantValues {
        PollutantValues {
            co: (self.co * 10.0).min(SUB_INDEX_CAP),
            ozone: (self.o3 * 2.0).min(SUB_INDEX_CAP),
            no2: (self.no2 * 5.0).min(SUB_INDEX_CAP),
            pm25: (self.pm2_5 * 2.0).min(SUB_INDEX_CAP),
        }
    }
}
