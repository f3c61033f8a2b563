//! Scenario engine for AstraNex.
//!
//! Owns the current scenario, validates operator commands, runs the
//! calculator, evaluator and planner, and resolves deliberation delays on
//! a fixed tick. Headless and deterministic for a given seed.

pub mod config;
pub mod deferred;
pub mod engine;
pub mod error;
pub mod report;

pub use config::SimConfig;
pub use engine::ScenarioEngine;
pub use error::{CommandError, ConfigError};
pub use report::ThreatReport;
