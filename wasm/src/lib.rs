//! WebAssembly module for the Air Quality Dashboard
//!
//! Provides client-side computation for:
//! - AQI category classification and colors
//! - Dashboard statistics and chart data
//! - CSV ingestion for locally opened files
//! - Offline fallback prediction

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::parser::*;
pub use shared::types::*;
pub use shared::validation::*;

fn parse_records(records_json: &str) -> Result<Vec<AirQualityRecord>, JsValue> {
    serde_json::from_str(records_json).map_err(|e| {
        let message = format!("Invalid records JSON: {}", e);
        web_sys::console::warn_1(&JsValue::from_str(&message));
        JsValue::from_str(&message)
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Classify an AQI value into its category label
#[wasm_bindgen]
pub fn classify_aqi_label(aqi: f64) -> String {
    classify_aqi(aqi).to_string()
}

/// Display color for an AQI value
#[wasm_bindgen]
pub fn aqi_color(aqi: f64) -> String {
    classify_aqi(aqi).color().to_string()
}

/// Average, max, min and count of the overall AQI column
#[wasm_bindgen]
pub fn aggregate_stats(records_json: &str) -> Result<String, JsValue> {
    let records = parse_records(records_json)?;
    to_json(&aggregate(&records))
}

/// Four pollutant bars (CO, Ozone, NO2, PM2.5) with a floor of 1
#[wasm_bindgen]
pub fn pollutant_chart_data(records_json: &str) -> Result<String, JsValue> {
    let records = parse_records(records_json)?;
    to_json(&pollutant_averages(&records).chart_bars())
}

/// Map markers for the first `limit` records
#[wasm_bindgen]
pub fn map_markers_json(records_json: &str, limit: usize) -> Result<String, JsValue> {
    let records = parse_records(records_json)?;
    to_json(&map_markers(&records, limit))
}

/// Parse CSV text into the JSON array the backend serves
#[wasm_bindgen]
pub fn parse_csv(text: &str) -> Result<String, JsValue> {
    let records = parse(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&records)
}

/// Fallback prediction with jitter drawn from `Math.random`
#[wasm_bindgen]
pub fn fallback_predict(co: f64, ozone: f64, no2: f64, pm25: f64) -> i64 {
    let jitter = js_sys::Math::random() * FALLBACK_JITTER_MAX;
    fallback_prediction(co, ozone, no2, pm25, jitter)
}

/// Check a prediction form before submitting it
#[wasm_bindgen]
pub fn prediction_inputs_complete(
    co: f64,
    ozone: f64,
    no2: f64,
    pm25: f64,
    lat: f64,
    lng: f64,
) -> bool {
    let request = PredictionRequest {
        co: Some(co),
        ozone: Some(ozone),
        no2: Some(no2),
        pm25: Some(pm25),
        lat: Some(lat),
        lng: Some(lng),
    };
    validate_prediction_request(&request).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORDS: &str = r#"[
        {"AQI Value": 51.0, "CO AQI Value": 1.0, "Ozone AQI Value": 36.0, "NO2 AQI Value": 0.0, "PM2.5 AQI Value": 51.0, "lat": 44.7444, "lng": 44.2031},
        {"AQI Value": 41.0, "CO AQI Value": 1.0, "Ozone AQI Value": 5.0, "NO2 AQI Value": 1.0, "PM2.5 AQI Value": 41.0, "lat": -5.29, "lng": -44.49}
    ]"#;

    #[test]
    fn test_classify_aqi_label() {
        assert_eq!(classify_aqi_label(0.0), "Good");
        assert_eq!(classify_aqi_label(75.0), "Moderate");
        assert_eq!(classify_aqi_label(150.0), "Unhealthy for Sensitive Groups");
        assert_eq!(classify_aqi_label(500.0), "Hazardous");
    }

    #[test]
    fn test_aqi_color() {
        assert_eq!(aqi_color(12.0), "#00e400");
        assert_eq!(aqi_color(250.0), "#8f3f97");
    }

    #[test]
    fn test_aggregate_stats() {
        let json = aggregate_stats(RECORDS).unwrap();
        let stats: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(stats["average"], 46);
        assert_eq!(stats["max"], 51);
        assert_eq!(stats["min"], 41);
        assert_eq!(stats["count"], 2);
    }

    #[test]
    fn test_pollutant_chart_floor() {
        let json = pollutant_chart_data(RECORDS).unwrap();
        let bars: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(bars[0]["name"], "CO");
        // NO2 mean is 0.5, rounds to 1
        assert_eq!(bars[2]["value"], 1);
        assert_eq!(bars[3]["value"], 46);
    }

    #[test]
    fn test_parse_csv_drops_zero_coordinates() {
        let json = parse_csv("a,lat,lng\n1,0,-74\n2,40,-74").unwrap();
        let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 1);
        assert_eq!(rows[0]["a"], 2.0);
    }

    #[test]
    fn test_prediction_inputs_complete() {
        assert!(prediction_inputs_complete(1.0, 30.0, 5.0, 25.0, 40.7, -74.0));
        assert!(!prediction_inputs_complete(0.0, 30.0, 5.0, 25.0, 40.7, -74.0));
    }
}
