pub mod environment;
pub mod flight_phase;
pub mod rocket;
pub mod structure;
pub mod vehicle_state;
