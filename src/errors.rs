use thiserror::Error;

use crate::control::flight_phase::FlightPhase;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Cannot start a new run while the vehicle is in {0}")]
    RunInProgress(FlightPhase),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
