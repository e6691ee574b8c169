#![allow(dead_code)]

use score_core::{AppState, Roster};
use score_types::{GameRecord, Player, PlayerId, ScoringRule};

/// Creates a roster holding the given players, all at zero
pub fn create_roster(names: &[&str]) -> Roster {
    let mut roster = Roster::new();
    for name in names {
        roster.add_player(name).unwrap();
    }
    roster
}

/// Creates a roster where each player starts at the given score
pub fn create_roster_with_scores(players: &[(&str, i64)]) -> Roster {
    let mut roster = Roster::new();
    for (name, score) in players {
        let id = roster.add_player(name).unwrap().id;
        roster.update_score(id, *score);
    }
    roster
}

/// Creates app state with a scored roster and the given rule
pub fn create_state(players: &[(&str, i64)], rule: ScoringRule) -> AppState {
    let mut state = AppState::new();
    state.roster = create_roster_with_scores(players);
    state.settings.set_scoring_rule(rule);
    state
}

/// Helper to get a player's id by name
pub fn player_id(roster: &Roster, name: &str) -> PlayerId {
    roster
        .find_by_name(name)
        .unwrap_or_else(|| panic!("no player named {}", name))
        .id
}

/// Helper to get a player's score by name
pub fn score_of(roster: &Roster, name: &str) -> i64 {
    roster.find_by_name(name).unwrap().score
}

/// Creates a frozen history entry
pub fn create_record(timestamp: i64, players: &[(&str, i64)], rule: ScoringRule) -> GameRecord {
    GameRecord {
        players: players
            .iter()
            .enumerate()
            .map(|(i, (name, score))| Player {
                id: i as i64 + 1,
                name: name.to_string(),
                score: *score,
            })
            .collect(),
        rounds: String::new(),
        scoring_rule: rule,
        timestamp,
    }
}
