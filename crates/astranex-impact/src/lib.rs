//! Impact effects calculator for AstraNex.
//!
//! Pure functions mapping an asteroid and impact geometry to energy,
//! crater, shockwave, fatality and risk estimates. No state, no randomness.

pub mod effects;
pub mod metrics;

pub use astranex_core as core;
pub use effects::{compute, compute_effects};

#[cfg(test)]
mod tests;
