//! Engine configuration.
//!
//! Deliberation delays and the evacuation survival bands are tuning, not
//! physics, so they live here rather than in the constants.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use astranex_core::constants::*;
use astranex_defense::evacuation::{default_survival_bands, SurvivalBand};

use crate::error::ConfigError;

/// Configuration for a scenario engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same outcomes.
    pub seed: u64,
    /// Wall-clock pacing used by the driver (1.0 = normal).
    pub time_scale: f64,
    pub deflection_delay_secs: f64,
    pub evacuation_delay_secs: f64,
    /// Floor on the evacuation window (hours).
    pub min_evacuation_hours: u32,
    pub survival_bands: Vec<SurvivalBand>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            deflection_delay_secs: DEFLECTION_DELAY_SECS,
            evacuation_delay_secs: EVACUATION_DELAY_SECS,
            min_evacuation_hours: MIN_EVACUATION_HOURS,
            survival_bands: default_survival_bands(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, secs) in [
            ("deflection_delay_secs", self.deflection_delay_secs),
            ("evacuation_delay_secs", self.evacuation_delay_secs),
        ] {
            if !secs.is_finite() || secs < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be >= 0, got {secs}")));
            }
        }
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "time_scale must be >= 0, got {}",
                self.time_scale
            )));
        }
        if self.survival_bands.is_empty() {
            return Err(ConfigError::Invalid("survival_bands is empty".into()));
        }
        for band in &self.survival_bands {
            let in_unit = |f: f64| (0.0..=1.0).contains(&f);
            if !in_unit(band.min_fraction)
                || !in_unit(band.max_fraction)
                || band.min_fraction > band.max_fraction
            {
                return Err(ConfigError::Invalid(format!(
                    "survival band range {}..{} is not within 0..1",
                    band.min_fraction, band.max_fraction
                )));
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn deflection_delay_ticks(&self) -> u64 {
        astranex_core::types::secs_to_ticks(self.deflection_delay_secs)
    }

    pub fn evacuation_delay_ticks(&self) -> u64 {
        astranex_core::types::secs_to_ticks(self.evacuation_delay_secs)
    }
}
