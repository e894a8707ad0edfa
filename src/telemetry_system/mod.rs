pub mod heating;
pub mod statistics;
pub mod telemetry;
pub mod trajectory;
