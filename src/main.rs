use std::path::PathBuf;

use capsule_simulation::*;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Headless two-stage capsule flight simulation
#[derive(Parser, Debug)]
#[command(name = "capsule_sim")]
#[command(author, version, about = "Booster and capsule flight simulation", long_about = None)]
struct Cli {
    /// TOML file overriding the default vehicle and atmosphere constants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emulated display frame rate
    #[arg(long, default_value_t = FRAME_RATE)]
    frame_rate: f64,

    /// Fractional jitter applied to every frame period
    #[arg(long, default_value_t = FRAME_JITTER)]
    jitter: f64,

    /// Seed for the frame jitter, random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Wall-clock safety cap for one run
    #[arg(long, default_value_t = MAX_REAL_SECONDS)]
    max_real_seconds: f64,

    /// Simulated seconds between telemetry samples
    #[arg(long, default_value_t = TELEMETRY_SAMPLE_INTERVAL)]
    sample_interval: f64,

    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if !(cli.frame_rate.is_finite() && cli.frame_rate > 0.0) {
        return Err(SimulationError::ConfigurationError(format!(
            "frame rate must be positive, got {}",
            cli.frame_rate
        ))
        .into());
    }
    if !(0.0..1.0).contains(&cli.jitter) {
        return Err(SimulationError::ConfigurationError(format!(
            "jitter must be in [0, 1), got {}",
            cli.jitter
        ))
        .into());
    }

    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            SimulationConfig::load(path)?
        }
        None => SimulationConfig::default(),
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut rocket = Rocket::new(config)?;
    let mut telemetry = Telemetry::new(cli.sample_interval);

    rocket.start()?;
    telemetry.collect(&rocket);

    let frame_period = 1.0 / cli.frame_rate;
    let mut real_elapsed = 0.0;

    while rocket.phase() != FlightPhase::Landed {
        if real_elapsed >= cli.max_real_seconds {
            warn!(
                real_elapsed,
                phase = %rocket.phase(),
                "Safety cap reached before landing"
            );
            break;
        }

        let real_delta_time = frame_period * (1.0 + rng.gen_range(-cli.jitter..=cli.jitter));
        rocket.step(real_delta_time);
        telemetry.collect(&rocket);
        real_elapsed += real_delta_time;
    }

    println!("{}", telemetry.summary(&rocket));

    Ok(())
}
