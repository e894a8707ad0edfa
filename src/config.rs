use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::constants::TIME_ACCELERATION;
use crate::control::environment::AtmosphereConfig;
use crate::control::structure::VehicleConfig;
use crate::errors::SimulationError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub time_acceleration: f64,
    pub vehicle: VehicleConfig,
    pub atmosphere: AtmosphereConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            time_acceleration: TIME_ACCELERATION,
            vehicle: VehicleConfig::default(),
            atmosphere: AtmosphereConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, SimulationError> {
        let config: SimulationConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let vehicle = &self.vehicle;

        require_positive("time_acceleration", self.time_acceleration)?;
        require_positive("vehicle.gravity", vehicle.gravity)?;
        require_positive("vehicle.rocket_mass", vehicle.rocket_mass)?;
        require_positive("vehicle.capsule_mass", vehicle.capsule_mass)?;
        require_non_negative("vehicle.launch_thrust", vehicle.launch_thrust)?;
        require_non_negative("vehicle.launch_duration", vehicle.launch_duration)?;
        require_non_negative("vehicle.early_shutdown_guard", vehicle.early_shutdown_guard)?;

        for (name, value) in [
            ("vehicle.rocket_drag_coefficient", vehicle.rocket_drag_coefficient),
            ("vehicle.capsule_drag_coefficient", vehicle.capsule_drag_coefficient),
            ("vehicle.drogue_drag_coefficient", vehicle.drogue_drag_coefficient),
            ("vehicle.main_chute_drag_coefficient", vehicle.main_chute_drag_coefficient),
            ("vehicle.rocket_reference_area", vehicle.rocket_reference_area),
            ("vehicle.capsule_reference_area", vehicle.capsule_reference_area),
            ("vehicle.drogue_area_multiplier", vehicle.drogue_area_multiplier),
            ("vehicle.main_chute_area_multiplier", vehicle.main_chute_area_multiplier),
        ] {
            require_non_negative(name, value)?;
        }

        require_finite("vehicle.launch_tilt_degrees", vehicle.launch_tilt_degrees)?;
        require_finite("vehicle.drogue_deploy_altitude", vehicle.drogue_deploy_altitude)?;
        require_finite(
            "vehicle.main_chute_deploy_altitude",
            vehicle.main_chute_deploy_altitude,
        )?;
        require_positive("vehicle.altitude_ceiling", vehicle.altitude_ceiling)?;

        require_non_negative("atmosphere.sea_level_density", self.atmosphere.sea_level_density)?;
        require_positive("atmosphere.scale_height", self.atmosphere.scale_height)?;
        require_non_negative(
            "atmosphere.min_density_multiplier",
            self.atmosphere.min_density_multiplier,
        )?;
        require_finite(
            "atmosphere.min_density_reference_altitude",
            self.atmosphere.min_density_reference_altitude,
        )?;

        if vehicle.drogue_deploy_altitude <= 0.0 {
            warn!(
                altitude = vehicle.drogue_deploy_altitude,
                "Drogue deploy altitude is at or below ground; descent will land without parachutes"
            );
        }
        if vehicle.main_chute_deploy_altitude >= vehicle.drogue_deploy_altitude {
            warn!(
                main = vehicle.main_chute_deploy_altitude,
                drogue = vehicle.drogue_deploy_altitude,
                "Main chute deploys at or above the drogue altitude"
            );
        }
        if vehicle.launch_thrust <= vehicle.rocket_mass * vehicle.gravity {
            warn!(
                thrust = vehicle.launch_thrust,
                weight = vehicle.rocket_mass * vehicle.gravity,
                "Launch thrust does not exceed launch weight"
            );
        }

        Ok(())
    }
}

fn require_finite(name: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::ConfigurationError(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), SimulationError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::ConfigurationError(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}

fn require_non_negative(name: &str, value: f64) -> Result<(), SimulationError> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SimulationError::ConfigurationError(format!(
            "{} must not be negative, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            time_acceleration = 5.0

            [vehicle]
            capsule_mass = 2500.0
            drogue_deploy_altitude = 6000.0
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.time_acceleration, 5.0);
        assert_eq!(config.vehicle.capsule_mass, 2_500.0);
        assert_eq!(config.vehicle.drogue_deploy_altitude, 6_000.0);
        assert_eq!(config.vehicle.rocket_mass, 10_000.0);
        assert_eq!(config.atmosphere, AtmosphereConfig::default());
    }

    #[test]
    fn test_non_positive_mass_rejected() {
        let result = SimulationConfig::from_toml_str("[vehicle]\ncapsule_mass = 0.0\n");
        match result {
            Err(SimulationError::ConfigurationError(message)) => {
                assert!(message.contains("capsule_mass"), "unexpected message: {}", message)
            }
            other => panic!("Expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_drag_rejected() {
        let mut config = SimulationConfig::default();
        config.vehicle.drogue_drag_coefficient = -1.0;
        assert!(matches!(
            config.validate(),
            Err(SimulationError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_zero_scale_height_rejected() {
        let mut config = SimulationConfig::default();
        config.atmosphere.scale_height = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_time_acceleration_rejected() {
        let mut config = SimulationConfig::default();
        config.time_acceleration = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ground_level_drogue_is_allowed() {
        let mut config = SimulationConfig::default();
        config.vehicle.drogue_deploy_altitude = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = SimulationConfig::from_toml_str("time_acceleration = \"fast\"");
        assert!(matches!(result, Err(SimulationError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SimulationConfig::load("does/not/exist.toml");
        assert!(matches!(result, Err(SimulationError::Io(_))));
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        let config = SimulationConfig::from_toml_str(include_str!("../config/capsule.toml"))
            .expect("bundled config should parse");
        assert_eq!(config, SimulationConfig::default());
    }
}
