use std::fmt;

use crate::constants::{
    REENTRY_ALTITUDE_HIGH, REENTRY_ALTITUDE_LOW, REENTRY_SPEED_HIGH, REENTRY_SPEED_LOW,
    REENTRY_SPEED_MODERATE_MARGIN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReentryHeating {
    #[default]
    NotApplicable,
    Low,
    Rising,
    Moderate,
    Intense,
    CoolingRapidly,
    Nominal,
}

impl ReentryHeating {
    pub fn classify(altitude: f64, speed: f64) -> Self {
        if altitude >= REENTRY_ALTITUDE_HIGH || speed <= REENTRY_SPEED_LOW {
            return ReentryHeating::Low;
        }

        if altitude < REENTRY_ALTITUDE_LOW && speed > REENTRY_SPEED_HIGH {
            ReentryHeating::Intense
        } else if altitude < REENTRY_ALTITUDE_LOW
            || speed > REENTRY_SPEED_LOW * REENTRY_SPEED_MODERATE_MARGIN
        {
            ReentryHeating::Moderate
        } else {
            ReentryHeating::Rising
        }
    }
}

impl fmt::Display for ReentryHeating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReentryHeating::NotApplicable => "N/A",
            ReentryHeating::Low => "Low/Normal",
            ReentryHeating::Rising => "Rising",
            ReentryHeating::Moderate => "Moderate heating",
            ReentryHeating::Intense => "Intense heating",
            ReentryHeating::CoolingRapidly => "Cooling rapidly",
            ReentryHeating::Nominal => "Normal",
        };
        f.write_str(label)
    }
}
