//! Simulation constants and tuning parameters.

/// Engine tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Physics ---

/// Energy of one megaton of TNT in joules.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Bulk density of iron-nickel bodies (kg/m³).
pub const DENSITY_IRON_NICKEL: f64 = 8000.0;

/// Bulk density of stony bodies (kg/m³).
pub const DENSITY_STONY: f64 = 3000.0;

/// Bulk density for every other composition (kg/m³).
pub const DENSITY_DEFAULT: f64 = 2000.0;

/// Crater scaling coefficient (km per Mt^exponent at 45°).
pub const CRATER_COEFFICIENT: f64 = 0.07;
pub const CRATER_EXPONENT: f64 = 0.294;
/// Reference angle for linear crater scaling (degrees).
pub const CRATER_REFERENCE_ANGLE_DEG: f64 = 45.0;

/// Shockwave scaling coefficient (km per Mt^exponent).
pub const SHOCKWAVE_COEFFICIENT: f64 = 16.5;
pub const SHOCKWAVE_EXPONENT: f64 = 0.4;

/// Fatalities per megaton before the location multiplier.
pub const FATALITIES_PER_MEGATON: f64 = 200.0;

pub const FATALITY_MULTIPLIER_OCEAN: f64 = 0.3;
pub const FATALITY_MULTIPLIER_BAY_OF_BENGAL: f64 = 2.0;
pub const FATALITY_MULTIPLIER_LAND: f64 = 1.5;

// --- Risk tiers (strict greater-than, megatons) ---

pub const RISK_MEDIUM_ABOVE_MT: f64 = 100.0;
pub const RISK_HIGH_ABOVE_MT: f64 = 1000.0;
pub const RISK_CRITICAL_ABOVE_MT: f64 = 10_000.0;

// --- Scenario defaults ---

/// Impact angle seeded when an asteroid is selected (degrees).
pub const DEFAULT_IMPACT_ANGLE_DEG: f64 = 45.0;

/// Lead time before impact offered to the operator by default (days).
pub const DEFAULT_LEAD_TIME_DAYS: u32 = 500;

/// Default kinetic impactor mass (kg).
pub const DEFAULT_IMPACTOR_MASS_KG: f64 = 1000.0;

// --- Mitigation rules ---

/// Kinetic impactor cannot be launched with less lead time than this (days).
pub const KINETIC_MIN_LEAD_DAYS: u32 = 5;

/// Objects wider than this need a heavy kinetic impactor (m).
pub const KINETIC_LARGE_OBJECT_DIAMETER_M: f64 = 1000.0;

/// Minimum impactor mass against large objects (kg).
pub const KINETIC_MIN_MASS_LARGE_OBJECT_KG: f64 = 5000.0;

/// Gravity tractor needs three years of station-keeping (days).
pub const TRACTOR_MIN_LEAD_DAYS: u32 = 365 * 3;

/// Nuclear disruption fragments anything narrower than this (m).
pub const NUCLEAR_MIN_DIAMETER_M: f64 = 500.0;

/// Lead time thresholds (days) and their success probabilities.
pub const LONG_LEAD_DAYS: u32 = 365;
pub const MEDIUM_LEAD_DAYS: u32 = 30;
pub const SUCCESS_CHANCE_LONG_LEAD: f64 = 0.8;
pub const SUCCESS_CHANCE_MEDIUM_LEAD: f64 = 0.6;
pub const SUCCESS_CHANCE_SHORT_LEAD: f64 = 0.2;

// --- Evacuation ---

/// Floor on the evacuation window (hours).
pub const MIN_EVACUATION_HOURS: u32 = 72;

/// Share of the remaining lead time usable for evacuation.
pub const EVACUATION_WINDOW_FRACTION: f64 = 0.5;

// --- Deliberation delays ---

/// Time for a deflection attempt to resolve (seconds).
pub const DEFLECTION_DELAY_SECS: f64 = 1.5;

/// Time for an evacuation to complete (seconds).
pub const EVACUATION_DELAY_SECS: f64 = 2.0;
