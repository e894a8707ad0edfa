use super::flight_phase::FlightPhase;
use super::structure::{PhaseConfiguration, VehicleConfig};
use crate::trajectory_system::kinematics::Kinematics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    pub kinematics: Kinematics,
    pub phase: FlightPhase,
    pub time_in_phase: f64,
    pub total_time: f64,
    pub thrust: f64,
    pub configuration: PhaseConfiguration,
}

impl VehicleState {
    pub fn ready(vehicle: &VehicleConfig) -> Self {
        VehicleState {
            kinematics: Kinematics::at_origin(),
            phase: FlightPhase::Ready,
            time_in_phase: 0.0,
            total_time: 0.0,
            thrust: 0.0,
            configuration: vehicle.launch_configuration(),
        }
    }

    pub fn mass(&self) -> f64 {
        self.configuration.mass
    }

    pub fn advance_clock(&mut self, delta_time: f64) {
        self.total_time += delta_time;
        self.time_in_phase += delta_time;
    }

    // The only place the configuration changes.
    pub fn enter_phase(&mut self, next: FlightPhase, vehicle: &VehicleConfig) {
        self.phase = next;
        self.time_in_phase = 0.0;
        if let Some(configuration) = vehicle.configuration_for(next) {
            self.configuration = configuration;
        }
        if next != FlightPhase::Launch {
            self.thrust = 0.0;
        }
    }
}
