pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use config::SimulationConfig;
pub use constants::*;
pub use control::environment::{air_density, Atmosphere, AtmosphereConfig};
pub use control::flight_phase::FlightPhase;
pub use control::rocket::{FlightSnapshot, Rocket};
pub use control::structure::{PhaseConfiguration, VehicleConfig};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::heating::ReentryHeating;
pub use telemetry_system::statistics::{FlightStatistics, MaxDynamicPressure};
pub use telemetry_system::telemetry::{Telemetry, TelemetrySample};
pub use telemetry_system::trajectory::TrajectoryTrail;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
