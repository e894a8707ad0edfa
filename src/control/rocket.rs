use tracing::{debug, info, warn};

use super::environment::Atmosphere;
use super::flight_phase::FlightPhase;
use super::vehicle_state::VehicleState;
use crate::config::SimulationConfig;
use crate::errors::SimulationError;
use crate::telemetry_system::statistics::FlightStatistics;
use crate::trajectory_system::aerodynamics::{calculate_dynamic_pressure, Aerodynamics};
use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone)]
pub struct Rocket {
    config: SimulationConfig,
    atmosphere: Atmosphere,
    aerodynamics: Aerodynamics,
    state: VehicleState,
    statistics: FlightStatistics,
    air_density: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSnapshot {
    pub phase: FlightPhase,
    pub time_in_phase: f64,
    pub total_time: f64,
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
    pub mass: f64,
    pub thrust: f64,
    pub drag_coefficient: f64,
    pub reference_area: f64,
    pub air_density: f64,
    pub statistics: FlightStatistics,
}

impl Rocket {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let atmosphere = Atmosphere::new(&config.atmosphere);
        let aerodynamics = Aerodynamics::from_vehicle(&config.vehicle);
        let state = VehicleState::ready(&config.vehicle);
        let air_density = atmosphere.density(state.kinematics.get_altitude());

        Ok(Rocket {
            config,
            atmosphere,
            aerodynamics,
            state,
            statistics: FlightStatistics::default(),
            air_density,
        })
    }

    pub fn reset(&mut self) {
        self.state = VehicleState::ready(&self.config.vehicle);
        self.statistics = FlightStatistics::default();
        self.air_density = self
            .atmosphere
            .density(self.state.kinematics.get_altitude());
        info!("Simulation reset");
    }

    pub fn start(&mut self) -> Result<(), SimulationError> {
        if !self.state.phase.can_start() {
            return Err(SimulationError::RunInProgress(self.state.phase));
        }

        self.reset();
        self.state.enter_phase(FlightPhase::Launch, &self.config.vehicle);
        self.state.thrust = self.config.vehicle.launch_thrust;
        self.statistics = FlightStatistics::starting_at(&self.state.kinematics);

        info!(
            thrust = self.state.thrust,
            mass = self.state.mass(),
            "Launch"
        );
        Ok(())
    }

    pub fn step(&mut self, real_delta_time: f64) {
        if !real_delta_time.is_finite() || real_delta_time < 0.0 {
            warn!(real_delta_time, "Ignoring invalid time step");
            return;
        }

        if !self.state.phase.is_in_flight() || real_delta_time == 0.0 {
            self.update_g_force();
            return;
        }

        let delta_time = real_delta_time * self.config.time_acceleration;
        self.state.advance_clock(delta_time);

        let phase = self.state.phase;
        let velocity = self.state.kinematics.velocity;
        self.air_density = self
            .atmosphere
            .density(self.state.kinematics.get_altitude());

        if phase == FlightPhase::Launch {
            self.statistics
                .track_dynamic_pressure(calculate_dynamic_pressure(self.air_density, velocity));
        }

        debug_assert!(
            self.state.mass() > 0.0,
            "Mass must be positive in flight, got {} kg in {:?}",
            self.state.mass(),
            phase
        );

        let acceleration = self.aerodynamics.calculate_acceleration(
            phase,
            velocity,
            self.state.thrust,
            self.air_density,
            &self.state.configuration,
        );
        self.state.kinematics.integrate(acceleration, delta_time);

        self.check_apogee();

        if self.state.kinematics.get_altitude() < 0.0 && self.state.phase != FlightPhase::Landed {
            self.touch_down();
        }

        self.statistics
            .observe_trajectory(self.state.phase, &self.state.kinematics);

        self.evaluate_transitions();

        self.state.kinematics.clamp_to_ground();
        self.update_terminal_velocity();
        self.update_g_force();

        debug_assert!(
            self.state.kinematics.position.is_finite() && self.state.kinematics.velocity.is_finite(),
            "Kinematics diverged: {:?}",
            self.state.kinematics
        );
    }

    fn check_apogee(&mut self) {
        if self.state.phase != FlightPhase::AscentFreeFlight
            || self.state.kinematics.get_vertical_velocity() > 0.0
        {
            return;
        }

        self.transition_to(FlightPhase::DescentFreeFlight);

        let ceiling = self.config.vehicle.altitude_ceiling;
        if self.state.kinematics.get_altitude() > ceiling {
            debug!(
                altitude = self.state.kinematics.get_altitude(),
                ceiling, "Apogee clamped to altitude ceiling"
            );
            self.state.kinematics.position.y = ceiling;
            self.state.kinematics.velocity.y = 0.0;
        }
    }

    fn evaluate_transitions(&mut self) {
        let vehicle = &self.config.vehicle;
        let launch_duration = vehicle.launch_duration;
        let early_shutdown_guard = vehicle.early_shutdown_guard;
        let drogue_altitude = vehicle.drogue_deploy_altitude;
        let main_chute_altitude = vehicle.main_chute_deploy_altitude;

        let altitude = self.state.kinematics.get_altitude();
        let vertical_velocity = self.state.kinematics.get_vertical_velocity();
        let descending = vertical_velocity < 0.0;

        match self.state.phase {
            FlightPhase::Launch => {
                let burnout = self.state.time_in_phase >= launch_duration;
                let sinking = descending && self.state.time_in_phase > early_shutdown_guard;
                if burnout || sinking {
                    self.transition_to(FlightPhase::AscentFreeFlight);
                }
            }
            FlightPhase::DescentFreeFlight => {
                self.statistics.classify_heating(&self.state.kinematics);

                if altitude <= drogue_altitude && descending {
                    self.transition_to(FlightPhase::DrogueChute);
                }
                if altitude <= 0.0 && descending {
                    self.touch_down();
                }
            }
            FlightPhase::DrogueChute => {
                if altitude <= main_chute_altitude && descending {
                    self.transition_to(FlightPhase::MainChute);
                }
                if altitude <= 0.0 && descending {
                    self.touch_down();
                }
            }
            FlightPhase::MainChute => {
                if altitude <= 0.0 {
                    self.touch_down();
                }
            }
            // Apogee is handled right after integration.
            FlightPhase::AscentFreeFlight => {}
            FlightPhase::Ready | FlightPhase::Landed => {}
        }
    }

    fn touch_down(&mut self) {
        self.state.kinematics.come_to_rest();
        self.air_density = self
            .atmosphere
            .density(self.state.kinematics.get_altitude());
        self.transition_to(FlightPhase::Landed);
    }

    fn transition_to(&mut self, next: FlightPhase) {
        let from = self.state.phase;
        debug_assert!(
            from.can_transition_to(next),
            "Illegal phase transition {:?} -> {:?}",
            from,
            next
        );

        self.state.enter_phase(next, &self.config.vehicle);
        self.statistics.on_transition(from, next);

        info!(
            from = %from,
            to = %next,
            total_time = self.state.total_time,
            altitude = self.state.kinematics.get_altitude(),
            speed = self.state.kinematics.get_velocity_magnitude(),
            "Phase transition"
        );
    }

    fn update_terminal_velocity(&mut self) {
        let estimate = if self.state.phase.under_parachute() {
            self.aerodynamics
                .calculate_terminal_velocity(self.air_density, &self.state.configuration)
        } else {
            0.0
        };
        self.statistics.set_terminal_velocity(estimate);
    }

    fn update_g_force(&mut self) {
        let g_force = self
            .aerodynamics
            .calculate_g_force(self.state.kinematics.acceleration);
        self.statistics.set_g_force(g_force);
    }

    pub fn snapshot(&self) -> FlightSnapshot {
        FlightSnapshot {
            phase: self.state.phase,
            time_in_phase: self.state.time_in_phase,
            total_time: self.state.total_time,
            position: self.state.kinematics.position,
            velocity: self.state.kinematics.velocity,
            acceleration: self.state.kinematics.acceleration,
            mass: self.state.mass(),
            thrust: self.state.thrust,
            drag_coefficient: self.state.configuration.drag_coefficient,
            reference_area: self.state.configuration.reference_area,
            air_density: self.air_density,
            statistics: self.statistics,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn statistics(&self) -> &FlightStatistics {
        &self.statistics
    }

    pub fn phase(&self) -> FlightPhase {
        self.state.phase
    }

    pub fn position(&self) -> Vector2D {
        self.state.kinematics.position
    }

    pub fn velocity(&self) -> Vector2D {
        self.state.kinematics.velocity
    }

    pub fn acceleration(&self) -> Vector2D {
        self.state.kinematics.acceleration
    }

    pub fn mass(&self) -> f64 {
        self.state.mass()
    }

    pub fn thrust(&self) -> f64 {
        self.state.thrust
    }

    pub fn drag_coefficient(&self) -> f64 {
        self.state.configuration.drag_coefficient
    }

    pub fn reference_area(&self) -> f64 {
        self.state.configuration.reference_area
    }

    pub fn air_density(&self) -> f64 {
        self.air_density
    }

    pub fn time_in_phase(&self) -> f64 {
        self.state.time_in_phase
    }

    pub fn total_time(&self) -> f64 {
        self.state.total_time
    }
}
