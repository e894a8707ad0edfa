use serde::Deserialize;

use super::flight_phase::FlightPhase;
use crate::constants::{
    ALTITUDE_CEILING, CAPSULE_DRAG_COEFFICIENT, CAPSULE_MASS, CAPSULE_REFERENCE_AREA,
    DROGUE_AREA_MULTIPLIER, DROGUE_DEPLOY_ALTITUDE, DROGUE_DRAG_COEFFICIENT,
    EARLY_SHUTDOWN_GUARD, GRAVITY, LAUNCH_DURATION, LAUNCH_THRUST, LAUNCH_TILT_DEGREES,
    MAIN_CHUTE_AREA_MULTIPLIER, MAIN_CHUTE_DEPLOY_ALTITUDE, MAIN_CHUTE_DRAG_COEFFICIENT,
    ROCKET_DRAG_COEFFICIENT, ROCKET_MASS, ROCKET_REFERENCE_AREA,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseConfiguration {
    pub drag_coefficient: f64,
    pub reference_area: f64,
    pub mass: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    pub gravity: f64,
    pub rocket_mass: f64,
    pub capsule_mass: f64,
    pub launch_thrust: f64,
    pub launch_tilt_degrees: f64,

    pub rocket_drag_coefficient: f64,
    pub capsule_drag_coefficient: f64,
    pub drogue_drag_coefficient: f64,
    pub main_chute_drag_coefficient: f64,
    pub rocket_reference_area: f64,
    pub capsule_reference_area: f64,
    pub drogue_area_multiplier: f64,
    pub main_chute_area_multiplier: f64,

    pub launch_duration: f64,
    pub early_shutdown_guard: f64,
    pub drogue_deploy_altitude: f64,
    pub main_chute_deploy_altitude: f64,
    pub altitude_ceiling: f64,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        VehicleConfig {
            gravity: GRAVITY,
            rocket_mass: ROCKET_MASS,
            capsule_mass: CAPSULE_MASS,
            launch_thrust: LAUNCH_THRUST,
            launch_tilt_degrees: LAUNCH_TILT_DEGREES,
            rocket_drag_coefficient: ROCKET_DRAG_COEFFICIENT,
            capsule_drag_coefficient: CAPSULE_DRAG_COEFFICIENT,
            drogue_drag_coefficient: DROGUE_DRAG_COEFFICIENT,
            main_chute_drag_coefficient: MAIN_CHUTE_DRAG_COEFFICIENT,
            rocket_reference_area: ROCKET_REFERENCE_AREA,
            capsule_reference_area: CAPSULE_REFERENCE_AREA,
            drogue_area_multiplier: DROGUE_AREA_MULTIPLIER,
            main_chute_area_multiplier: MAIN_CHUTE_AREA_MULTIPLIER,
            launch_duration: LAUNCH_DURATION,
            early_shutdown_guard: EARLY_SHUTDOWN_GUARD,
            drogue_deploy_altitude: DROGUE_DEPLOY_ALTITUDE,
            main_chute_deploy_altitude: MAIN_CHUTE_DEPLOY_ALTITUDE,
            altitude_ceiling: ALTITUDE_CEILING,
        }
    }
}

impl VehicleConfig {
    pub fn launch_tilt(&self) -> f64 {
        self.launch_tilt_degrees.to_radians()
    }

    pub fn launch_configuration(&self) -> PhaseConfiguration {
        PhaseConfiguration {
            drag_coefficient: self.rocket_drag_coefficient,
            reference_area: self.rocket_reference_area,
            mass: self.rocket_mass,
        }
    }

    pub fn capsule_configuration(&self) -> PhaseConfiguration {
        PhaseConfiguration {
            drag_coefficient: self.capsule_drag_coefficient,
            reference_area: self.capsule_reference_area,
            mass: self.capsule_mass,
        }
    }

    // Ready and Landed keep whatever was last active.
    pub fn configuration_for(&self, phase: FlightPhase) -> Option<PhaseConfiguration> {
        match phase {
            FlightPhase::Launch => Some(self.launch_configuration()),
            FlightPhase::AscentFreeFlight | FlightPhase::DescentFreeFlight => {
                Some(self.capsule_configuration())
            }
            FlightPhase::DrogueChute => Some(PhaseConfiguration {
                drag_coefficient: self.drogue_drag_coefficient,
                reference_area: self.capsule_reference_area * self.drogue_area_multiplier,
                mass: self.capsule_mass,
            }),
            FlightPhase::MainChute => Some(PhaseConfiguration {
                drag_coefficient: self.main_chute_drag_coefficient,
                reference_area: self.capsule_reference_area * self.main_chute_area_multiplier,
                mass: self.capsule_mass,
            }),
            FlightPhase::Ready | FlightPhase::Landed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_uses_full_rocket() {
        let config = VehicleConfig::default();
        let launch = config.configuration_for(FlightPhase::Launch).unwrap();
        assert_eq!(launch.drag_coefficient, 0.28);
        assert_eq!(launch.reference_area, 10.0);
        assert_eq!(launch.mass, 10_000.0);
    }

    #[test]
    fn test_free_flight_uses_capsule() {
        let config = VehicleConfig::default();
        for phase in [FlightPhase::AscentFreeFlight, FlightPhase::DescentFreeFlight] {
            let capsule = config.configuration_for(phase).unwrap();
            assert_eq!(capsule, config.capsule_configuration());
            assert_eq!(capsule.mass, 2_000.0);
        }
    }

    #[test]
    fn test_parachute_areas_scale_capsule_area() {
        let config = VehicleConfig::default();

        let drogue = config.configuration_for(FlightPhase::DrogueChute).unwrap();
        assert_eq!(drogue.drag_coefficient, 1.8);
        assert_eq!(drogue.reference_area, 35.0);
        assert_eq!(drogue.mass, 2_000.0);

        let main = config.configuration_for(FlightPhase::MainChute).unwrap();
        assert_eq!(main.drag_coefficient, 2.2);
        assert_eq!(main.reference_area, 210.0);
        assert_eq!(main.mass, 2_000.0);
    }

    #[test]
    fn test_resting_phases_have_no_configuration() {
        let config = VehicleConfig::default();
        assert!(config.configuration_for(FlightPhase::Ready).is_none());
        assert!(config.configuration_for(FlightPhase::Landed).is_none());
    }

    #[test]
    fn test_launch_tilt_in_radians() {
        let config = VehicleConfig::default();
        assert!((config.launch_tilt() - 0.5_f64.to_radians()).abs() < 1e-15);
    }
}
