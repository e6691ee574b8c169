use score_types::{CurrentGame, GameRecord, Leader, Settings};

use crate::{GameSettings, History, Roster};

/// Everything the score keeper holds in memory. Owned by the controller and
/// handed to each manager by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub roster: Roster,
    pub settings: GameSettings,
    pub history: History,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild state from whatever the store held. Missing slices fall back
    /// to defaults.
    pub fn restore(
        current_game: Option<CurrentGame>,
        history: Vec<GameRecord>,
        settings: Option<Settings>,
    ) -> Self {
        let (players, rounds) = match current_game {
            Some(game) => (game.players, game.rounds),
            None => (Vec::new(), String::new()),
        };
        let scoring_rule = settings.unwrap_or_default().scoring_rule;

        Self {
            roster: Roster::restore(players),
            settings: GameSettings::new(rounds, scoring_rule),
            history: History::restore(history),
        }
    }

    /// The current-game slice as it is persisted
    pub fn current_game(&self) -> CurrentGame {
        CurrentGame {
            players: self.roster.players().to_vec(),
            rounds: self.settings.rounds().to_string(),
        }
    }

    pub fn leader(&self) -> Option<Leader> {
        self.roster.leader(self.settings.scoring_rule())
    }

    pub fn reset_scores(&mut self) {
        self.roster.reset_scores();
    }

    /// Snapshot the game in progress into the history. The game itself
    /// carries on unchanged.
    pub fn save_game(&mut self) -> &GameRecord {
        self.history.record(
            self.roster.players(),
            self.settings.rounds(),
            self.settings.scoring_rule(),
        )
    }

    /// Back to an empty roster, no rounds, `highest` and no history
    pub fn clear(&mut self) {
        self.roster.clear();
        self.settings.reset();
        self.history.clear();
    }
}
