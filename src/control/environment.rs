use serde::Deserialize;

use crate::constants::{
    AIR_DENSITY_FLOOR, AIR_DENSITY_SEA_LEVEL, MIN_DENSITY_MULTIPLIER,
    MIN_DENSITY_REFERENCE_ALTITUDE, SCALE_HEIGHT,
};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AtmosphereConfig {
    pub sea_level_density: f64,
    pub scale_height: f64,
    pub min_density_reference_altitude: f64,
    pub min_density_multiplier: f64,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        AtmosphereConfig {
            sea_level_density: AIR_DENSITY_SEA_LEVEL,
            scale_height: SCALE_HEIGHT,
            min_density_reference_altitude: MIN_DENSITY_REFERENCE_ALTITUDE,
            min_density_multiplier: MIN_DENSITY_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    sea_level_density: f64,
    scale_height: f64,
    min_density: f64,
}

impl Atmosphere {
    pub fn new(config: &AtmosphereConfig) -> Self {
        let min_density = config.sea_level_density
            * (-config.min_density_reference_altitude / config.scale_height).exp()
            * config.min_density_multiplier;

        Atmosphere {
            sea_level_density: config.sea_level_density,
            scale_height: config.scale_height,
            min_density,
        }
    }

    // kg/m³
    pub fn density(&self, altitude: f64) -> f64 {
        let base = self.sea_level_density * (-altitude / self.scale_height).exp();
        base.max(self.min_density).max(AIR_DENSITY_FLOOR)
    }

    pub fn min_density(&self) -> f64 {
        self.min_density
    }
}

impl Default for Atmosphere {
    fn default() -> Self {
        Atmosphere::new(&AtmosphereConfig::default())
    }
}

pub fn air_density(altitude: f64) -> f64 {
    Atmosphere::default().density(altitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_sea_level_density() {
        assert_abs_diff_eq!(air_density(0.0), 1.225, epsilon = 1e-12);
    }

    #[test]
    fn test_one_scale_height() {
        let atmosphere = Atmosphere::default();
        assert_relative_eq!(
            atmosphere.density(8_000.0),
            1.225 * (-1.0_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_high_altitude_floor() {
        let atmosphere = Atmosphere::default();
        let expected_floor = 1.225 * (-150_000.0_f64 / 8_000.0).exp() * 0.0001;
        assert_relative_eq!(atmosphere.min_density(), expected_floor, epsilon = 1e-24);

        // Far above the reference altitude the floor takes over.
        assert_relative_eq!(atmosphere.density(400_000.0), expected_floor, epsilon = 1e-24);
        assert_relative_eq!(atmosphere.density(1e9), expected_floor, epsilon = 1e-24);
    }

    #[test]
    fn test_zero_density_input_hits_absolute_floor() {
        let config = AtmosphereConfig {
            sea_level_density: 0.0,
            ..AtmosphereConfig::default()
        };
        let atmosphere = Atmosphere::new(&config);

        let density = atmosphere.density(0.0);
        assert_eq!(density, 1e-15);
        assert!(!density.is_nan());
    }

    #[test]
    fn test_density_monotonically_non_increasing() {
        let atmosphere = Atmosphere::default();
        let mut previous = atmosphere.density(0.0);
        for step in 1..=500 {
            let altitude = step as f64 * 1_000.0;
            let density = atmosphere.density(altitude);
            assert!(
                density <= previous,
                "Density increased between {} m and {} m",
                altitude - 1_000.0,
                altitude
            );
            previous = density;
        }
    }
}
