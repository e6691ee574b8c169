use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Observable countdown state. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TimerState {
    pub remaining_seconds: u32,
    pub running: bool,
    pub editing: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            remaining_seconds: 0,
            running: false,
            editing: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TimerPhase {
    Editing,
    Ready,    // Time set, never started
    Running,
    Paused,
    Finished, // Counted down to zero
}
