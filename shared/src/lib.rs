//! Shared types and logic for the air quality dashboard
//!
//! This crate holds the pure parts of the system (CSV ingestion, AQI
//! classification, aggregation and the fallback prediction formula) so that
//! the backend and the browser (via WASM) compute identical results.

pub mod models;
pub mod parser;
pub mod types;
pub mod validation;

pub use models::*;
pub use parser::*;
pub use types::*;
pub use validation::*;
