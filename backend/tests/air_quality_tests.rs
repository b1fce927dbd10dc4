//! Air quality endpoint tests
//!
//! Exercises the ingestion and summary endpoints through the full router:
//! - Dataset served as JSON keyed by CSV headers
//! - Real-time single-record lookups
//! - Error mapping for missing and empty files

use std::io::Write;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::NamedTempFile;
use tower::ServiceExt;

use aqi_server::{create_app, AppState, Config};

const SAMPLE_CSV: &str = "\
\"AQI Value\",\"CO AQI Value\",\"Ozone AQI Value\",\"NO2 AQI Value\",\"PM2.5 AQI Value\",\"lat\",\"lng\"
51,1,36,0,51,44.7444,44.2031
41,1,5,1,41,-5.29,-44.49
66,1,39,2,66,37.1667,15.1833
34,1,34,0,20,0,-74.0
20,N/A,20,0,20,53.2,0
";

/// Unroutable model endpoint so prediction paths never hit the network
const NO_MODEL_SERVER: &str = "http://127.0.0.1:1";

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn app_for(csv_path: &str) -> Router {
    let config = Config::with_paths(csv_path, NO_MODEL_SERVER);
    create_app(AppState::new(config).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ============================================================================
// Dataset ingestion
// ============================================================================

#[tokio::test]
async fn serves_parsed_rows_keyed_by_header() {
    let file = csv_file(SAMPLE_CSV);
    let app = app_for(file.path().to_str().unwrap());
    let (status, body) = get_json(app, "/api/air-quality-data").await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();

    // Rows with a zero latitude or longitude are dropped
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["AQI Value"], 51.0);
    assert_eq!(rows[0]["PM2.5 AQI Value"], 51.0);
    assert_eq!(rows[1]["lat"], -5.29);
    assert_eq!(rows[2]["lng"], 15.1833);
}

#[tokio::test]
async fn preserves_row_order() {
    let file = csv_file(SAMPLE_CSV);
    let (_, body) = get_json(app_for(file.path().to_str().unwrap()), "/api/air-quality-data").await;

    let aqi: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["AQI Value"].as_f64().unwrap())
        .collect();
    assert_eq!(aqi, vec![51.0, 41.0, 66.0]);
}

#[tokio::test]
async fn missing_file_returns_404_with_error() {
    let (status, body) = get_json(
        app_for("/definitely/not/here/aqi.csv"),
        "/api/air-quality-data",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error = body["error"].as_str().unwrap();
    assert!(!error.is_empty());
}

#[tokio::test]
async fn header_only_file_returns_400() {
    let file = csv_file("\"AQI Value\",\"lat\",\"lng\"\n\n");
    let app = app_for(file.path().to_str().unwrap());
    let (status, body) = get_json(app, "/api/air-quality-data").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "CSV file is empty or invalid");
}

#[tokio::test]
async fn carriage_return_only_file_returns_400() {
    let file = csv_file("\"AQI Value\",\"lat\",\"lng\"\r51,44.7,44.2\r41,-5.3,-44.5");
    let app = app_for(file.path().to_str().unwrap());
    let (status, body) = get_json(app, "/api/air-quality-data").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "CSV file is empty or invalid");
}

#[tokio::test]
async fn non_utf8_file_returns_500() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0x6c, 0x61, 0x74, 0x0a, 0xff, 0xfe, 0xfd]).unwrap();

    let app = app_for(file.path().to_str().unwrap());
    let (status, body) = get_json(app, "/api/air-quality-data").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to read data");
}

// ============================================================================
// Real-time lookups
// ============================================================================

#[tokio::test]
async fn coordinates_return_single_realtime_record() {
    // The file is never read for a coordinate lookup
    let (status, body) = get_json(
        app_for("/definitely/not/here/aqi.csv"),
        "/api/air-quality-data?lat=40.7128&lng=-74.006",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["lat"], 40.7128);
    assert_eq!(rows[0]["lng"], -74.006);
    for key in [
        "AQI Value",
        "CO AQI Value",
        "Ozone AQI Value",
        "NO2 AQI Value",
        "PM2.5 AQI Value",
    ] {
        assert!(rows[0][key].is_number(), "missing {}", key);
    }
}

#[tokio::test]
async fn single_coordinate_falls_back_to_dataset() {
    let file = csv_file(SAMPLE_CSV);
    let (status, body) = get_json(
        app_for(file.path().to_str().unwrap()),
        "/api/air-quality-data?lat=40.7128",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn out_of_range_coordinates_rejected() {
    let (status, body) = get_json(
        app_for("/definitely/not/here/aqi.csv"),
        "/api/air-quality-data?lat=95&lng=10",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Latitude"));
}

// ============================================================================
// Dashboard summary
// ============================================================================

#[tokio::test]
async fn summary_reports_stats_chart_and_markers() {
    let file = csv_file(SAMPLE_CSV);
    let (status, body) = get_json(
        app_for(file.path().to_str().unwrap()),
        "/api/air-quality-summary",
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    // Mean of 51, 41, 66 is 52.67
    assert_eq!(body["stats"]["average"], 53);
    assert_eq!(body["stats"]["max"], 66);
    assert_eq!(body["stats"]["min"], 41);
    assert_eq!(body["stats"]["count"], 3);
    assert_eq!(body["category"], "moderate");

    let chart = body["chart"].as_array().unwrap();
    assert_eq!(chart.len(), 4);
    assert_eq!(chart[0]["name"], "CO");
    assert_eq!(chart[0]["value"], 1);
    // NO2 mean is 1.0
    assert_eq!(chart[2]["value"], 1);

    let markers = body["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 3);
    assert_eq!(markers[1]["color"], "#00e400");
    assert_eq!(markers[2]["category"], "moderate");
}

#[tokio::test]
async fn summary_missing_file_returns_404() {
    let (status, _) = get_json(
        app_for("/definitely/not/here/aqi.csv"),
        "/api/air-quality-summary",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
