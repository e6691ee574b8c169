use score_core::{ScoreEvent, ScoreEventHandler};
use tracing::info;

/// Writes every score event to the log
pub struct TracingEventHandler;

impl ScoreEventHandler for TracingEventHandler {
    fn handle_event(&mut self, event: ScoreEvent) {
        match &event {
            ScoreEvent::PlayerAdded { player } => {
                info!(event = event.name(), player_id = player.id, "Player {} joined", player.name)
            }
            ScoreEvent::ScoreChanged {
                player_id,
                delta,
                score,
            } => info!(event = event.name(), player_id, delta, score, "Score changed"),
            ScoreEvent::PlayerRemoved { player } => {
                info!(event = event.name(), player_id = player.id, "Player {} left", player.name)
            }
            ScoreEvent::ScoresReset { player_count } => {
                info!(event = event.name(), player_count, "Scores reset")
            }
            ScoreEvent::GameSaved { record } => {
                info!(event = event.name(), timestamp = record.timestamp, "Game saved")
            }
            ScoreEvent::HistoryEntryDeleted { timestamp } => {
                info!(event = event.name(), timestamp, "History entry deleted")
            }
            ScoreEvent::DataCleared | ScoreEvent::TimerFinished => info!(event = event.name()),
        }
    }
}
