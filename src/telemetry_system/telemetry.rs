use super::trajectory::TrajectoryTrail;
use crate::constants::TELEMETRY_SAMPLE_INTERVAL;
use crate::control::flight_phase::FlightPhase;
use crate::control::rocket::Rocket;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySample {
    pub time: f64,
    pub phase: FlightPhase,
    pub altitude: f64,
    pub downrange: f64,
    pub speed: f64,
    pub g_force: f64,
}

#[derive(Debug, Clone)]
pub struct Telemetry {
    samples: Vec<TelemetrySample>,
    phase_log: Vec<(FlightPhase, f64)>,
    trail: TrajectoryTrail,
    sample_interval: f64,
    next_sample_time: f64,
    last_time: f64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Telemetry::new(TELEMETRY_SAMPLE_INTERVAL)
    }
}

impl Telemetry {
    pub fn new(sample_interval: f64) -> Self {
        Telemetry {
            samples: Vec::new(),
            phase_log: Vec::new(),
            trail: TrajectoryTrail::default(),
            sample_interval,
            next_sample_time: 0.0,
            last_time: 0.0,
        }
    }

    pub fn collect(&mut self, rocket: &Rocket) {
        let phase = rocket.phase();
        let total_time = rocket.total_time();
        let phase_start = total_time - rocket.time_in_phase();

        let phase_changed = self
            .phase_log
            .last()
            .map_or(true, |(last_phase, _)| *last_phase != phase);
        let clock_restarted = total_time < self.last_time;

        // A new run starts from the pad: drop everything from the last one.
        if clock_restarted || (phase_changed && phase == FlightPhase::Launch) {
            self.samples.clear();
            self.phase_log.clear();
            self.trail.restart_at(rocket.position());
            self.next_sample_time = 0.0;
            self.phase_log.push((phase, phase_start));
        } else {
            self.trail.record(rocket.position(), phase_changed);
            if phase_changed {
                self.phase_log.push((phase, phase_start));
            }
        }
        self.last_time = total_time;

        if phase_changed || clock_restarted || total_time >= self.next_sample_time {
            self.samples.push(TelemetrySample {
                time: total_time,
                phase,
                altitude: rocket.position().y,
                downrange: rocket.position().x.abs(),
                speed: rocket.velocity().magnitude(),
                g_force: rocket.statistics().g_force(),
            });
            if total_time >= self.next_sample_time {
                self.next_sample_time = total_time + self.sample_interval;
            }
        }
    }

    pub fn samples(&self) -> &[TelemetrySample] {
        &self.samples
    }

    pub fn phase_log(&self) -> &[(FlightPhase, f64)] {
        &self.phase_log
    }

    pub fn trail(&self) -> &TrajectoryTrail {
        &self.trail
    }

    pub fn summary(&self, rocket: &Rocket) -> String {
        let statistics = rocket.statistics();
        let max_q = statistics.max_dynamic_pressure();

        let mut lines = vec![
            "--- Flight Summary ---".to_string(),
            format!("Final phase: {}", rocket.phase()),
            format!("Flight time: {}", format_time(rocket.total_time())),
            format!("Max altitude: {}", format_altitude(statistics.max_altitude())),
            format!("Max downrange: {}", format_altitude(statistics.max_downrange())),
        ];
        if max_q.is_reported() {
            lines.push(format!("Max Q: {:.2} kPa", max_q.kilopascals()));
        } else {
            lines.push(format!("Max Q: {:.2} kPa (still tracking)", max_q.kilopascals()));
        }
        lines.push(format!("G-force: {:.2} g", statistics.g_force()));
        lines.push(format!("Reentry heating: {}", statistics.reentry_heating()));
        lines.push(format!("Samples recorded: {}", self.samples.len()));
        lines.push(format!("Trajectory points: {}", self.trail.len()));

        lines.push("\n--- Phase Transitions ---".to_string());
        for (phase, time) in &self.phase_log {
            lines.push(format!("{} reached at: {}", phase, format_time(*time)));
        }

        lines.join("\n")
    }
}

fn format_time(elapsed_time: f64) -> String {
    if elapsed_time >= 3600.0 {
        let hours = (elapsed_time / 3600.0).floor();
        let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
        let seconds = elapsed_time % 60.0;
        format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
    } else if elapsed_time >= 60.0 {
        let minutes = (elapsed_time / 60.0).floor();
        let seconds = elapsed_time % 60.0;
        format!("{:.0}m {:.2}s", minutes, seconds)
    } else {
        format!("{:.2}s", elapsed_time)
    }
}

fn format_altitude(altitude: f64) -> String {
    if altitude >= 1000.0 {
        format!("{:.2} km", altitude / 1000.0)
    } else {
        format!("{:.2} m", altitude)
    }
}
