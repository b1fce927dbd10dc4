//! HTTP handlers

pub mod air_quality;
pub mod health;
pub mod prediction;

pub use air_quality::{get_air_quality_data, get_air_quality_summary};
pub use health::health_check;
pub use prediction::predict;
