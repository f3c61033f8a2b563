//! Core types and definitions for the AstraNex impact simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! asteroid and scenario records, commands, snapshots, events, the
//! asteroid catalog and tuning constants. It has no runtime logic.

pub mod catalog;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
