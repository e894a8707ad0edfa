use tracing::debug;

use super::heating::ReentryHeating;
use crate::control::flight_phase::FlightPhase;
use crate::trajectory_system::kinematics::Kinematics;

// Pa while tracking, kPa once reported at engine cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaxDynamicPressure {
    Tracking { pascals: f64 },
    Reported { kilopascals: f64 },
}

impl Default for MaxDynamicPressure {
    fn default() -> Self {
        MaxDynamicPressure::Tracking { pascals: 0.0 }
    }
}

impl MaxDynamicPressure {
    fn track(&mut self, dynamic_pressure: f64) {
        if let MaxDynamicPressure::Tracking { pascals } = self {
            if dynamic_pressure > *pascals {
                *pascals = dynamic_pressure;
            }
        }
    }

    fn report(&mut self) {
        if let MaxDynamicPressure::Tracking { pascals } = *self {
            *self = MaxDynamicPressure::Reported {
                kilopascals: pascals / 1000.0,
            };
        }
    }

    pub fn pascals(&self) -> f64 {
        match *self {
            MaxDynamicPressure::Tracking { pascals } => pascals,
            MaxDynamicPressure::Reported { kilopascals } => kilopascals * 1000.0,
        }
    }

    pub fn kilopascals(&self) -> f64 {
        self.pascals() / 1000.0
    }

    pub fn is_reported(&self) -> bool {
        matches!(self, MaxDynamicPressure::Reported { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightStatistics {
    max_dynamic_pressure: MaxDynamicPressure,
    max_altitude: f64,
    max_downrange: f64,
    g_force: f64,
    terminal_velocity: f64,
    reentry_heating: ReentryHeating,
}

impl Default for FlightStatistics {
    fn default() -> Self {
        FlightStatistics {
            max_dynamic_pressure: MaxDynamicPressure::default(),
            max_altitude: 0.0,
            max_downrange: 0.0,
            g_force: 1.0,
            terminal_velocity: 0.0,
            reentry_heating: ReentryHeating::NotApplicable,
        }
    }
}

impl FlightStatistics {
    pub fn starting_at(kinematics: &Kinematics) -> Self {
        FlightStatistics {
            max_altitude: kinematics.get_altitude(),
            max_downrange: kinematics.get_downrange(),
            ..FlightStatistics::default()
        }
    }

    pub fn max_dynamic_pressure(&self) -> MaxDynamicPressure {
        self.max_dynamic_pressure
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn max_downrange(&self) -> f64 {
        self.max_downrange
    }

    pub fn g_force(&self) -> f64 {
        self.g_force
    }

    pub fn terminal_velocity(&self) -> f64 {
        self.terminal_velocity
    }

    pub fn reentry_heating(&self) -> ReentryHeating {
        self.reentry_heating
    }

    pub(crate) fn track_dynamic_pressure(&mut self, dynamic_pressure: f64) {
        self.max_dynamic_pressure.track(dynamic_pressure);
    }

    // Downrange only counts once vertical apogee is behind.
    pub(crate) fn observe_trajectory(&mut self, phase: FlightPhase, kinematics: &Kinematics) {
        self.max_altitude = self.max_altitude.max(kinematics.get_altitude());

        if kinematics.get_vertical_velocity() <= 0.0 || phase.is_past_apogee() {
            self.max_downrange = self.max_downrange.max(kinematics.get_downrange());
        }
    }

    pub(crate) fn classify_heating(&mut self, kinematics: &Kinematics) {
        self.reentry_heating = ReentryHeating::classify(
            kinematics.get_altitude(),
            kinematics.get_velocity_magnitude(),
        );
    }

    pub(crate) fn set_terminal_velocity(&mut self, terminal_velocity: f64) {
        self.terminal_velocity = terminal_velocity.max(0.0);
    }

    pub(crate) fn set_g_force(&mut self, g_force: f64) {
        self.g_force = g_force;
    }

    pub(crate) fn on_transition(&mut self, from: FlightPhase, to: FlightPhase) {
        match (from, to) {
            (FlightPhase::Launch, FlightPhase::AscentFreeFlight) => {
                self.max_dynamic_pressure.report();
                debug!(
                    max_q_kpa = self.max_dynamic_pressure.kilopascals(),
                    "Max dynamic pressure reported"
                );
            }
            (_, FlightPhase::DrogueChute) => {
                self.reentry_heating = ReentryHeating::CoolingRapidly;
            }
            (_, FlightPhase::MainChute) => {
                self.reentry_heating = ReentryHeating::Nominal;
            }
            (_, FlightPhase::Landed) => {
                self.reentry_heating = ReentryHeating::Nominal;
                self.terminal_velocity = 0.0;
                self.g_force = 1.0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::vector2d::Vector2D;
    use approx::assert_relative_eq;

    fn kinematics(x: f64, y: f64, vx: f64, vy: f64) -> Kinematics {
        Kinematics {
            position: Vector2D::new(x, y),
            velocity: Vector2D::new(vx, vy),
            acceleration: Vector2D::ZERO,
        }
    }

    #[test]
    fn test_max_q_tracks_running_maximum() {
        let mut stats = FlightStatistics::default();
        stats.track_dynamic_pressure(12_000.0);
        stats.track_dynamic_pressure(30_000.0);
        stats.track_dynamic_pressure(18_000.0);

        assert_relative_eq!(stats.max_dynamic_pressure().pascals(), 30_000.0);
        assert!(!stats.max_dynamic_pressure().is_reported());
    }

    #[test]
    fn test_max_q_converted_once_and_frozen() {
        let mut stats = FlightStatistics::default();
        stats.track_dynamic_pressure(45_000.0);

        stats.on_transition(FlightPhase::Launch, FlightPhase::AscentFreeFlight);
        stats.on_transition(FlightPhase::Launch, FlightPhase::AscentFreeFlight);
        stats.track_dynamic_pressure(90_000.0);

        assert_eq!(
            stats.max_dynamic_pressure(),
            MaxDynamicPressure::Reported { kilopascals: 45.0 }
        );
        assert_relative_eq!(stats.max_dynamic_pressure().kilopascals(), 45.0);
    }

    #[test]
    fn test_downrange_ignored_while_climbing() {
        let mut stats = FlightStatistics::default();

        stats.observe_trajectory(FlightPhase::Launch, &kinematics(500.0, 20_000.0, 10.0, 900.0));
        assert_eq!(stats.max_downrange(), 0.0);
        assert_eq!(stats.max_altitude(), 20_000.0);

        stats.observe_trajectory(
            FlightPhase::AscentFreeFlight,
            &kinematics(-800.0, 60_000.0, -5.0, -0.5),
        );
        assert_eq!(stats.max_downrange(), 800.0);
    }

    #[test]
    fn test_maxima_never_decrease() {
        let mut stats = FlightStatistics::default();
        stats.observe_trajectory(
            FlightPhase::DescentFreeFlight,
            &kinematics(1_200.0, 90_000.0, 5.0, -100.0),
        );
        stats.observe_trajectory(
            FlightPhase::DrogueChute,
            &kinematics(900.0, 6_000.0, 1.0, -40.0),
        );

        assert_eq!(stats.max_altitude(), 90_000.0);
        assert_eq!(stats.max_downrange(), 1_200.0);
    }

    #[test]
    fn test_landing_resets_descent_estimates() {
        let mut stats = FlightStatistics::default();
        stats.set_terminal_velocity(12.0);
        stats.set_g_force(1.4);

        stats.on_transition(FlightPhase::MainChute, FlightPhase::Landed);

        assert_eq!(stats.terminal_velocity(), 0.0);
        assert_eq!(stats.g_force(), 1.0);
        assert_eq!(stats.reentry_heating(), ReentryHeating::Nominal);
    }

    #[test]
    fn test_heating_follows_parachute_sequence() {
        let mut stats = FlightStatistics::default();
        stats.classify_heating(&kinematics(0.0, 30_000.0, 0.0, -700.0));
        assert_eq!(stats.reentry_heating(), ReentryHeating::Moderate);

        stats.on_transition(FlightPhase::DescentFreeFlight, FlightPhase::DrogueChute);
        assert_eq!(stats.reentry_heating(), ReentryHeating::CoolingRapidly);

        stats.on_transition(FlightPhase::DrogueChute, FlightPhase::MainChute);
        assert_eq!(stats.reentry_heating(), ReentryHeating::Nominal);
    }

    #[test]
    fn test_terminal_velocity_never_negative() {
        let mut stats = FlightStatistics::default();
        stats.set_terminal_velocity(-3.0);
        assert_eq!(stats.terminal_velocity(), 0.0);
    }
}
