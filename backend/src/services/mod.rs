//! Business logic services for the air quality dashboard

pub mod air_quality;
pub mod prediction;

pub use air_quality::AirQualityService;
pub use prediction::PredictionService;
