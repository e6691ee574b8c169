use score_core::{
    AppState, History, ScoreEvent, ScoreEventBus, ScoreEventHandler, TickOutcome, TimerEngine,
    TimerTick,
};
use score_persistence::ScoreRepository;
use score_types::{
    GameRecord, HistorySummary, Leader, Player, PlayerId, ScoreError, ScoringRule, StandingTag,
};
use thiserror::Error;
use tracing::{info, warn};

pub const CLEAR_ALL_PROMPT: &str =
    "Are you sure you want to clear all data? This cannot be undone.";

pub const SCORES_RESET_MESSAGE: &str = "Scores have been reset";
pub const GAME_SAVED_MESSAGE: &str = "Game saved successfully!";
pub const DATA_CLEARED_MESSAGE: &str = "All data has been cleared";

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Persistence(#[from] anyhow::Error),
}

/// Answer to the destructive-action prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

impl Confirmation {
    /// `y` or `yes` in any case confirms, anything else cancels
    pub fn from_answer(answer: Option<&str>) -> Self {
        match answer.map(|a| a.trim().to_ascii_lowercase()).as_deref() {
            Some("y") | Some("yes") => Confirmation::Confirmed,
            _ => Confirmation::Cancelled,
        }
    }
}

/// Composes roster, settings, history and timer, routes every mutation to
/// the store and derives what the presentation layer shows.
///
/// Each mutating call changes memory first and then writes the affected
/// record. A failed write is reported, but the in-memory change stays.
pub struct AppController {
    state: AppState,
    timer: TimerEngine,
    repository: ScoreRepository,
    event_bus: ScoreEventBus,
    message: Option<String>,
}

impl AppController {
    /// Restore whatever the repository holds. Unreadable records fall back
    /// to defaults.
    pub async fn load(repository: ScoreRepository, timer: TimerEngine) -> Self {
        let stored = repository.load_all().await;
        let state = AppState::restore(stored.current_game, stored.history, stored.settings);
        info!(
            "Loaded {} players and {} saved games",
            state.roster.len(),
            state.history.len()
        );

        Self {
            state,
            timer,
            repository,
            event_bus: ScoreEventBus::new(),
            message: None,
        }
    }

    pub fn add_event_handler(&mut self, handler: Box<dyn ScoreEventHandler + Send>) {
        self.event_bus.add_handler(handler);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn timer(&self) -> &TimerEngine {
        &self.timer
    }

    /// Transient status line for the user
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn players(&self) -> &[Player] {
        self.state.roster.players()
    }

    pub fn rounds(&self) -> &str {
        self.state.settings.rounds()
    }

    pub fn scoring_rule(&self) -> ScoringRule {
        self.state.settings.scoring_rule()
    }

    pub fn history(&self) -> &[GameRecord] {
        self.state.history.entries()
    }

    async fn persist_current_game(&self) -> Result<(), ControllerError> {
        self.repository
            .save_current_game(&self.state.current_game())
            .await?;
        Ok(())
    }

    async fn persist_history(&self) -> Result<(), ControllerError> {
        self.repository
            .save_history(self.state.history.entries())
            .await?;
        Ok(())
    }

    pub async fn add_player(&mut self, name: &str) -> Result<Player, ControllerError> {
        let player = match self.state.roster.add_player(name) {
            Ok(player) => player.clone(),
            Err(e) => {
                warn!("Rejected player '{}': {}", name, e);
                self.message = Some(e.to_string());
                return Err(e.into());
            }
        };
        self.message = None;

        self.event_bus.publish(ScoreEvent::PlayerAdded {
            player: player.clone(),
        });
        self.persist_current_game().await?;
        Ok(player)
    }

    /// Add `delta` to a player's score. Unknown ids and sums that would
    /// overflow are ignored.
    pub async fn update_score(
        &mut self,
        player_id: PlayerId,
        delta: i64,
    ) -> Result<Option<i64>, ControllerError> {
        let Some(score) = self.state.roster.update_score(player_id, delta) else {
            return Ok(None);
        };

        self.event_bus.publish(ScoreEvent::ScoreChanged {
            player_id,
            delta,
            score,
        });
        self.persist_current_game().await?;
        Ok(Some(score))
    }

    /// Apply a typed score such as `5+7-2` as the player's new absolute
    /// score. Malformed input is dropped silently.
    pub async fn set_manual_score(
        &mut self,
        player_id: PlayerId,
        input: &str,
    ) -> Result<Option<i64>, ControllerError> {
        let Some(delta) = self.state.roster.apply_manual_score(player_id, input) else {
            return Ok(None);
        };
        let score = self
            .state
            .roster
            .get(player_id)
            .map(|p| p.score)
            .unwrap_or_default();

        self.event_bus.publish(ScoreEvent::ScoreChanged {
            player_id,
            delta,
            score,
        });
        self.persist_current_game().await?;
        Ok(Some(score))
    }

    /// Remove a player. Removing the last one deletes the stored game.
    pub async fn remove_player(
        &mut self,
        player_id: PlayerId,
    ) -> Result<Option<Player>, ControllerError> {
        let Some(player) = self.state.roster.remove_player(player_id) else {
            return Ok(None);
        };

        self.event_bus.publish(ScoreEvent::PlayerRemoved {
            player: player.clone(),
        });
        self.persist_current_game().await?;
        Ok(Some(player))
    }

    pub async fn set_rounds(&mut self, value: &str) -> Result<(), ControllerError> {
        self.state.settings.set_rounds(value);
        self.persist_current_game().await
    }

    pub async fn set_scoring_rule(&mut self, rule: ScoringRule) -> Result<(), ControllerError> {
        self.state.settings.set_scoring_rule(rule);
        self.repository
            .save_settings(&self.state.settings.settings())
            .await?;
        Ok(())
    }

    pub async fn reset_scores(&mut self) -> Result<(), ControllerError> {
        self.state.reset_scores();
        self.message = Some(SCORES_RESET_MESSAGE.to_string());

        self.event_bus.publish(ScoreEvent::ScoresReset {
            player_count: self.state.roster.len(),
        });
        self.persist_current_game().await
    }

    /// Archive the current game at the front of the history.
    pub async fn save_game(&mut self) -> Result<GameRecord, ControllerError> {
        let record = self.state.save_game().clone();
        self.message = Some(GAME_SAVED_MESSAGE.to_string());
        info!("Saved game {} with {} players", record.timestamp, record.players.len());

        self.event_bus.publish(ScoreEvent::GameSaved {
            record: record.clone(),
        });
        self.persist_history().await?;
        Ok(record)
    }

    pub async fn delete_history_entry(
        &mut self,
        timestamp: i64,
    ) -> Result<Option<GameRecord>, ControllerError> {
        let Some(record) = self.state.history.delete_entry(timestamp) else {
            return Ok(None);
        };

        self.event_bus
            .publish(ScoreEvent::HistoryEntryDeleted { timestamp });
        self.persist_history().await?;
        Ok(Some(record))
    }

    /// Erase every stored record and return to defaults. Without
    /// confirmation nothing happens. Returns whether data was cleared.
    pub async fn clear_all_data(
        &mut self,
        confirmation: Confirmation,
    ) -> Result<bool, ControllerError> {
        if confirmation != Confirmation::Confirmed {
            info!("Clear all data cancelled");
            return Ok(false);
        }

        let erased = self.repository.clear_all().await;
        self.state.clear();
        self.message = Some(DATA_CLEARED_MESSAGE.to_string());
        self.event_bus.publish(ScoreEvent::DataCleared);
        info!("All data cleared");

        erased?;
        Ok(true)
    }

    pub fn set_timer(&mut self, minutes: &str) -> Result<u32, ControllerError> {
        Ok(self.timer.set_custom_time(minutes)?)
    }

    pub fn toggle_timer(&mut self) {
        self.timer.toggle_running();
    }

    pub fn edit_timer(&mut self) {
        self.timer.edit();
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    pub fn on_timer_tick(&mut self, tick: TimerTick) -> TickOutcome {
        let outcome = self.timer.on_tick(tick);
        if outcome == TickOutcome::Finished {
            self.event_bus.publish(ScoreEvent::TimerFinished);
        }
        outcome
    }

    pub fn timer_display(&self) -> String {
        self.timer.display()
    }

    pub fn leader(&self) -> Option<Leader> {
        self.state.leader()
    }

    /// Banner naming the leader, shown only when nobody shares the lead
    pub fn leader_banner(&self) -> Option<String> {
        self.leader()
            .filter(|leader| !leader.is_tie)
            .map(|leader| {
                format!(
                    "Current Leader: {} with {} points",
                    leader.winner.name, leader.winner.score
                )
            })
    }

    pub fn standings(&self) -> Vec<(&Player, Option<StandingTag>)> {
        self.state.roster.standings(self.scoring_rule())
    }

    pub fn winner_of(&self, entry: &GameRecord) -> String {
        History::winner_of(entry)
    }

    pub fn history_summaries(&self) -> Vec<HistorySummary> {
        self.state.history.summaries()
    }

    /// Look a player up by id, falling back to an exact name match
    pub fn resolve_player(&self, reference: &str) -> Option<PlayerId> {
        let roster = &self.state.roster;
        reference
            .parse::<PlayerId>()
            .ok()
            .and_then(|id| roster.get(id))
            .or_else(|| roster.find_by_name(reference))
            .map(|player| player.id)
    }
}
