//! Planetary defense for AstraNex.
//!
//! Mitigation evaluation (hard disqualification rules, then a
//! lead-time-dependent success roll), evacuation planning from per-region
//! zone templates, and the post-evacuation fatality reduction roll.
//! Randomness always comes from a caller-supplied `rand::Rng`.

pub mod evacuation;
pub mod mitigation;
pub mod templates;

pub use astranex_core as core;
