//! AstraNex driver.
//!
//! Runs the scenario engine on its own thread at the tick rate and exposes
//! a command channel plus the latest snapshot to whatever sits in front.

pub mod game_loop;
pub mod state;
