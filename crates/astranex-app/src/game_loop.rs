//! Loop thread: runs the scenario engine at 30Hz and publishes snapshots.
//!
//! The engine is created inside the thread so it never has to cross it.
//! Commands arrive over an `mpsc` channel. Snapshots go to the caller's sink
//! and into shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use astranex_core::constants::TICK_RATE;
use astranex_core::state::ScenarioSnapshot;
use astranex_sim::{ScenarioEngine, SimConfig};

use crate::state::{AppState, LoopCommand, LoopError};

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Upper bound on pacing speed-up.
const MAX_TIME_SCALE: f64 = 4.0;

/// Start the loop thread and register its sender on `state`.
pub fn start(
    state: &AppState,
    config: SimConfig,
    on_snapshot: impl FnMut(&ScenarioSnapshot) + Send + 'static,
) -> Result<JoinHandle<()>, LoopError> {
    let (tx, handle) = spawn_game_loop(config, Arc::clone(&state.latest_snapshot), on_snapshot)?;
    if let Ok(mut slot) = state.command_tx.lock() {
        *slot = Some(tx);
    }
    Ok(handle)
}

/// Spawns the loop in a new thread. Returns the command sender and the
/// thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<ScenarioSnapshot>>>,
    mut on_snapshot: impl FnMut(&ScenarioSnapshot) + Send + 'static,
) -> Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>), LoopError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("astranex-scenario-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, &mut on_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// Tick period for a pacing factor. Zero or negative falls back to 1x.
fn tick_duration(time_scale: f64) -> Duration {
    if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale.min(MAX_TIME_SCALE))
    } else {
        TICK_DURATION
    }
}

/// Runs until Shutdown or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<ScenarioSnapshot>>,
    on_snapshot: &mut impl FnMut(&ScenarioSnapshot),
) {
    info!(seed = config.seed, time_scale = config.time_scale, "Scenario loop started");
    let mut engine = ScenarioEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Command(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(tick = engine.time().tick, "Scenario loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();
        if !snapshot.events.is_empty() {
            debug!(tick = snapshot.time.tick, events = snapshot.events.len(), "Tick events");
        }

        // 3. Publish
        on_snapshot(&snapshot);
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        let effective_tick_duration = tick_duration(engine.time_scale());
        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind; reset rather than spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astranex_core::commands::ScenarioCommand;
    use astranex_core::enums::ScenarioPhase;

    fn fast_config() -> SimConfig {
        SimConfig {
            time_scale: MAX_TIME_SCALE,
            deflection_delay_secs: 0.1,
            evacuation_delay_secs: 0.1,
            ..Default::default()
        }
    }

    fn wait_for(state: &AppState, phase: ScenarioPhase) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if state.snapshot().map(|s| s.phase) == Some(phase) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Command(ScenarioCommand::RunSimulation))
            .unwrap();
        tx.send(LoopCommand::Command(ScenarioCommand::Reset)).unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Command(ScenarioCommand::RunSimulation)
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Command(ScenarioCommand::Reset)
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 30Hz = 33.333ms per tick
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_tick_duration_clamps_scale() {
        assert_eq!(tick_duration(0.0), TICK_DURATION);
        assert_eq!(tick_duration(-3.0), TICK_DURATION);
        assert_eq!(tick_duration(100.0), TICK_DURATION.div_f64(MAX_TIME_SCALE));
        let half = tick_duration(2.0).as_nanos() as i128;
        assert!((half - (TICK_DURATION / 2).as_nanos() as i128).abs() <= 1);
    }

    #[test]
    fn test_loop_runs_scenario_and_stops() {
        let state = AppState::new();
        let (seen_tx, seen_rx) = mpsc::channel::<u64>();
        let handle = start(&state, fast_config(), move |snap| {
            let _ = seen_tx.send(snap.time.tick);
        })
        .unwrap();
        assert!(state.is_running());

        state
            .send(ScenarioCommand::SelectAsteroid {
                asteroid_id: "bennu".into(),
                location: None,
            })
            .unwrap();
        state.send(ScenarioCommand::RunSimulation).unwrap();
        assert!(wait_for(&state, ScenarioPhase::Impacted));

        state.send(ScenarioCommand::DeployMitigation).unwrap();
        let resolved = wait_for(&state, ScenarioPhase::Success)
            || wait_for(&state, ScenarioPhase::EvacuationPending);
        assert!(resolved);

        state.shutdown().unwrap();
        handle.join().unwrap();

        let ticks: Vec<u64> = seen_rx.try_iter().collect();
        assert!(!ticks.is_empty());
        assert!(ticks.windows(2).all(|w| w[1] == w[0] + 1));
    }
}
