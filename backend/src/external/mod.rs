//! External API integrations

pub mod air_pollution;
pub mod model_server;

pub use air_pollution::AirPollutionClient;
pub use model_server::ModelServerClient;
