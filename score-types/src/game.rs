use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::player::Player;

/// Direction of comparison used to pick the leader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ScoringRule {
    #[default]
    Highest,
    Lowest,
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringRule::Highest => f.write_str("highest"),
            ScoringRule::Lowest => f.write_str("lowest"),
        }
    }
}

impl FromStr for ScoringRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "highest" => Ok(ScoringRule::Highest),
            "lowest" => Ok(ScoringRule::Lowest),
            other => Err(format!("Unknown scoring rule: {}", other)),
        }
    }
}

/// The in-progress game as it is persisted: roster plus the free-form rounds field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CurrentGame {
    pub players: Vec<Player>,
    pub rounds: String,
}

/// Immutable snapshot of a saved game. `timestamp` is the creation instant
/// in milliseconds and doubles as the entry's identity within the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GameRecord {
    pub players: Vec<Player>,
    pub rounds: String,
    pub scoring_rule: ScoringRule,
    #[ts(type = "number")]
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Settings {
    pub scoring_rule: ScoringRule,
}

/// Winner of the current standings. `is_tie` is set when the runner-up
/// shares the winning score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Leader {
    pub winner: Player,
    pub is_tie: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StandingTag {
    Leader, // Trophy
    Last,   // Bucket
}

/// Display row for one history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HistorySummary {
    #[ts(type = "number")]
    pub timestamp: i64,
    pub date: String,
    pub winner: String,
    pub rounds: String,
    pub player_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_rule_wire_format() {
        assert_eq!(serde_json::to_string(&ScoringRule::Highest).unwrap(), "\"highest\"");
        assert_eq!(serde_json::to_string(&ScoringRule::Lowest).unwrap(), "\"lowest\"");
        assert!(serde_json::from_str::<ScoringRule>("\"middle\"").is_err());
    }

    #[test]
    fn test_scoring_rule_from_str() {
        assert_eq!("lowest".parse::<ScoringRule>(), Ok(ScoringRule::Lowest));
        assert_eq!(ScoringRule::default(), ScoringRule::Highest);
        assert!("Highest".parse::<ScoringRule>().is_err());
    }

    #[test]
    fn test_game_record_reads_browser_format() {
        let json = r#"{
            "players": [{"id": 1718000000000, "name": "Alice", "score": 12}],
            "rounds": "5",
            "scoringRule": "lowest",
            "timestamp": 1718000000123
        }"#;

        let record: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.players[0].name, "Alice");
        assert_eq!(record.players[0].id, 1718000000000);
        assert_eq!(record.scoring_rule, ScoringRule::Lowest);
        assert_eq!(record.timestamp, 1718000000123);
    }

    #[test]
    fn test_settings_field_names() {
        let json = serde_json::to_string(&Settings { scoring_rule: ScoringRule::Lowest }).unwrap();
        assert_eq!(json, r#"{"scoringRule":"lowest"}"#);
    }
}
