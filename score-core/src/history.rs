use chrono::{DateTime, Local};
use score_types::{GameRecord, HistorySummary, Player, ScoringRule};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::{Standings, next_identity, now_millis};

/// Saved games, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<GameRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored entries. Entries reusing an earlier timestamp are
    /// dropped since the timestamp is the entry's identity.
    pub fn restore(entries: Vec<GameRecord>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|entry| {
                let unique = seen.insert(entry.timestamp);
                if !unique {
                    warn!("Dropping history entry with duplicate timestamp {}", entry.timestamp);
                }
                unique
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[GameRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, timestamp: i64) -> Option<&GameRecord> {
        self.entries.iter().find(|e| e.timestamp == timestamp)
    }

    /// Snapshot the given game and put it at the front of the history.
    pub fn record(&mut self, players: &[Player], rounds: &str, scoring_rule: ScoringRule) -> &GameRecord {
        let latest = self.entries.iter().map(|e| e.timestamp).max();
        let entry = GameRecord {
            players: players.to_vec(),
            rounds: rounds.to_string(),
            scoring_rule,
            timestamp: next_identity(now_millis(), latest),
        };
        debug!("Recorded game {} with {} players", entry.timestamp, entry.players.len());

        self.entries.insert(0, entry);
        &self.entries[0]
    }

    pub fn delete_entry(&mut self, timestamp: i64) -> Option<GameRecord> {
        let index = self.entries.iter().position(|e| e.timestamp == timestamp)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn winner_of(entry: &GameRecord) -> String {
        Standings::winner_label(&entry.players, entry.scoring_rule)
    }

    pub fn summaries(&self) -> Vec<HistorySummary> {
        self.entries
            .iter()
            .map(|entry| HistorySummary {
                timestamp: entry.timestamp,
                date: format_date(entry.timestamp),
                winner: Self::winner_of(entry),
                rounds: if entry.rounds.is_empty() {
                    "N/A".to_string()
                } else {
                    entry.rounds.clone()
                },
                player_count: entry.players.len(),
            })
            .collect()
    }
}

/// Local date and time for a millisecond timestamp
pub fn format_date(timestamp: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "Invalid Date".to_string(),
    }
}
