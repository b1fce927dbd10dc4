//! Domain models for the air quality dashboard

mod category;
mod pollutant;
mod prediction;
mod record;
mod stats;

pub use category::*;
pub use pollutant::*;
pub use prediction::*;
pub use record::*;
pub use stats::*;
