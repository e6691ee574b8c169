use score_types::{ScoringRule, Settings};

/// Per-game round count and the process-wide scoring direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSettings {
    rounds: String,
    scoring_rule: ScoringRule,
}

impl GameSettings {
    pub fn new(rounds: impl Into<String>, scoring_rule: ScoringRule) -> Self {
        Self {
            rounds: rounds.into(),
            scoring_rule,
        }
    }

    /// Free-form text; never validated as a number.
    pub fn rounds(&self) -> &str {
        &self.rounds
    }

    pub fn scoring_rule(&self) -> ScoringRule {
        self.scoring_rule
    }

    pub fn set_rounds(&mut self, value: impl Into<String>) {
        self.rounds = value.into();
    }

    pub fn set_scoring_rule(&mut self, rule: ScoringRule) {
        self.scoring_rule = rule;
    }

    /// The persisted settings slice
    pub fn settings(&self) -> Settings {
        Settings {
            scoring_rule: self.scoring_rule,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
