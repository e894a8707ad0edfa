// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Vehicle Constants
pub const ROCKET_MASS: f64 = 10_000.0; // kg, booster + capsule
pub const CAPSULE_MASS: f64 = 2_000.0; // kg
pub const LAUNCH_THRUST: f64 = 550_000.0; // N
pub const LAUNCH_TILT_DEGREES: f64 = 0.5; // degrees off vertical

// Aerodynamic Constants
pub const ROCKET_DRAG_COEFFICIENT: f64 = 0.28;
pub const CAPSULE_DRAG_COEFFICIENT: f64 = 1.0;
pub const DROGUE_DRAG_COEFFICIENT: f64 = 1.8;
pub const MAIN_CHUTE_DRAG_COEFFICIENT: f64 = 2.2;
pub const ROCKET_REFERENCE_AREA: f64 = 10.0; // m²
pub const CAPSULE_REFERENCE_AREA: f64 = 7.0; // m²
pub const DROGUE_AREA_MULTIPLIER: f64 = 5.0;
pub const MAIN_CHUTE_AREA_MULTIPLIER: f64 = 30.0;

// Environmental Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const SCALE_HEIGHT: f64 = 8_000.0; // m
pub const MIN_DENSITY_REFERENCE_ALTITUDE: f64 = 150_000.0; // m
pub const MIN_DENSITY_MULTIPLIER: f64 = 0.0001;
pub const AIR_DENSITY_FLOOR: f64 = 1e-15; // kg/m³

// Flight Sequence
pub const LAUNCH_DURATION: f64 = 70.0; // simulated s until MECO/separation
pub const EARLY_SHUTDOWN_GUARD: f64 = 5.0; // s into launch before a sinking vehicle cuts thrust
pub const DROGUE_DEPLOY_ALTITUDE: f64 = 7_000.0; // m
pub const MAIN_CHUTE_DEPLOY_ALTITUDE: f64 = 1_500.0; // m
pub const ALTITUDE_CEILING: f64 = 100_000.0; // m, Kármán line

// Numeric Guards
pub const MIN_SPEED_FOR_DRAG: f64 = 1e-6; // m/s
pub const MIN_TERMINAL_VELOCITY_DENOMINATOR: f64 = 1e-6;

// Reentry Heating Thresholds
pub const REENTRY_SPEED_LOW: f64 = 150.0; // m/s
pub const REENTRY_SPEED_HIGH: f64 = 600.0; // m/s
pub const REENTRY_SPEED_MODERATE_MARGIN: f64 = 1.5;
pub const REENTRY_ALTITUDE_LOW: f64 = 20_000.0; // m
pub const REENTRY_ALTITUDE_HIGH: f64 = 80_000.0; // m

// Simulation Parameters
pub const TIME_ACCELERATION: f64 = 11.0; // simulated seconds per real second
pub const FRAME_RATE: f64 = 60.0; // Hz
pub const MAX_TRAJECTORY_POINTS: usize = 1_500;
pub const TRAJECTORY_POINT_SPACING: f64 = 5.0; // m
pub const TELEMETRY_SAMPLE_INTERVAL: f64 = 10.0; // simulated s
pub const FRAME_JITTER: f64 = 0.1; // fraction of the frame period
pub const MAX_REAL_SECONDS: f64 = 600.0; // s
