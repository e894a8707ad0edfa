use crate::constants::{MIN_SPEED_FOR_DRAG, MIN_TERMINAL_VELOCITY_DENOMINATOR};
use crate::control::flight_phase::FlightPhase;
use crate::control::structure::{PhaseConfiguration, VehicleConfig};
use crate::utils::vector2d::Vector2D;

// No lift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub gravity: f64,
    pub launch_tilt: f64,
}

impl Aerodynamics {
    pub fn new(gravity: f64, launch_tilt: f64) -> Self {
        Aerodynamics {
            gravity,
            launch_tilt,
        }
    }

    pub fn from_vehicle(vehicle: &VehicleConfig) -> Self {
        Aerodynamics::new(vehicle.gravity, vehicle.launch_tilt())
    }

    pub fn calculate_gravity(&self, mass: f64) -> Vector2D {
        Vector2D::new(0.0, -mass * self.gravity)
    }

    // Tilted off vertical towards +x.
    pub fn calculate_thrust(&self, thrust: f64) -> Vector2D {
        Vector2D::new(
            thrust * self.launch_tilt.sin(),
            thrust * self.launch_tilt.cos(),
        )
    }

    pub fn calculate_net_force(
        &self,
        phase: FlightPhase,
        velocity: Vector2D,
        thrust: f64,
        air_density: f64,
        configuration: &PhaseConfiguration,
    ) -> Vector2D {
        let mut force = self.calculate_gravity(configuration.mass);

        if phase == FlightPhase::Launch {
            force += self.calculate_thrust(thrust);
        }

        force + calculate_drag(velocity, air_density, configuration)
    }

    pub fn calculate_acceleration(
        &self,
        phase: FlightPhase,
        velocity: Vector2D,
        thrust: f64,
        air_density: f64,
        configuration: &PhaseConfiguration,
    ) -> Vector2D {
        if configuration.mass <= 0.0 {
            return Vector2D::ZERO;
        }

        self.calculate_net_force(phase, velocity, thrust, air_density, configuration)
            / configuration.mass
    }

    pub fn calculate_g_force(&self, acceleration: Vector2D) -> f64 {
        let felt = Vector2D::new(acceleration.x, acceleration.y + self.gravity);
        felt.magnitude() / self.gravity
    }

    pub fn calculate_terminal_velocity(
        &self,
        air_density: f64,
        configuration: &PhaseConfiguration,
    ) -> f64 {
        let denominator =
            air_density * configuration.drag_coefficient * configuration.reference_area;

        if denominator > MIN_TERMINAL_VELOCITY_DENOMINATOR {
            (2.0 * configuration.mass * self.gravity / denominator)
                .sqrt()
                .max(0.0)
        } else {
            0.0
        }
    }
}

pub fn calculate_dynamic_pressure(air_density: f64, velocity: Vector2D) -> f64 {
    let speed = velocity.magnitude();
    0.5 * air_density * speed * speed
}

pub fn calculate_drag(
    velocity: Vector2D,
    air_density: f64,
    configuration: &PhaseConfiguration,
) -> Vector2D {
    match velocity.direction(MIN_SPEED_FOR_DRAG) {
        Some(unit) => {
            let drag_magnitude = calculate_dynamic_pressure(air_density, velocity)
                * configuration.drag_coefficient
                * configuration.reference_area;
            -unit * drag_magnitude
        }
        None => Vector2D::ZERO,
    }
}
