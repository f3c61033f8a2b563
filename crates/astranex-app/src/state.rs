//! State shared between the front end and the loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use astranex_core::commands::ScenarioCommand;
use astranex_core::state::ScenarioSnapshot;

/// Messages sent to the loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// An operator command to forward to the scenario engine.
    Command(ScenarioCommand),
    /// Stop the loop thread.
    Shutdown,
}

#[derive(Debug, Error)]
pub enum LoopError {
    #[error("scenario loop is not running")]
    NotRunning,
    #[error("scenario loop has stopped")]
    Disconnected,
    #[error("failed to spawn scenario loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Handle to a running loop.
///
/// `mpsc::Sender` is Send but not Sync, so it sits behind a `Mutex`. The
/// latest snapshot is shared with the loop thread through an `Arc`.
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Written by the loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<ScenarioSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false)
    }

    pub fn send(&self, command: ScenarioCommand) -> Result<(), LoopError> {
        self.send_raw(LoopCommand::Command(command))
    }

    /// Ask the loop to stop and forget the sender.
    pub fn shutdown(&self) -> Result<(), LoopError> {
        let result = self.send_raw(LoopCommand::Shutdown);
        if let Ok(mut tx) = self.command_tx.lock() {
            *tx = None;
        }
        result
    }

    /// Clone of the most recent snapshot, if a tick has run.
    pub fn snapshot(&self) -> Option<ScenarioSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|snap| snap.clone())
    }

    fn send_raw(&self, message: LoopCommand) -> Result<(), LoopError> {
        let guard = self.command_tx.lock().map_err(|_| LoopError::Disconnected)?;
        let tx = guard.as_ref().ok_or(LoopError::NotRunning)?;
        tx.send(message).map_err(|_| LoopError::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(!state.is_running());
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_send_without_loop_fails() {
        let state = AppState::new();
        assert!(matches!(
            state.send(ScenarioCommand::RunSimulation),
            Err(LoopError::NotRunning)
        ));
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);
        drop(rx);
        assert!(matches!(
            state.send(ScenarioCommand::Reset),
            Err(LoopError::Disconnected)
        ));
    }

    #[test]
    fn test_shutdown_forgets_sender() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);

        state.shutdown().unwrap();
        assert!(matches!(rx.try_recv(), Ok(LoopCommand::Shutdown)));
        assert!(!state.is_running());
    }
}
