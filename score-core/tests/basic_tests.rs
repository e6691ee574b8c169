mod common;

use common::*;
use score_core::{AppState, History, Roster, TickOutcome, TimerEngine};
use score_types::{ScoreError, ScoringRule, StandingTag, TimerPhase};

#[test]
fn test_distinct_adds_grow_roster() {
    let names = ["Ann", "Ben", "Cat", "Dan", "Eve"];
    let mut roster = Roster::new();

    for (i, name) in names.iter().enumerate() {
        roster.add_player(name).unwrap();
        assert_eq!(roster.len(), i + 1);
    }

    let before = roster.clone();
    let result = roster.add_player("Cat");
    assert!(matches!(result, Err(ScoreError::DuplicateName { .. })));
    assert_eq!(roster, before);
}

#[test]
fn test_tied_leader_is_first_inserted() {
    let state = create_state(&[("A", 10), ("B", 10), ("C", 5)], ScoringRule::Highest);

    let leader = state.leader().unwrap();
    assert_eq!(leader.winner.name, "A");
    assert!(leader.is_tie);
}

#[test]
fn test_manual_entry_from_any_prior_score() {
    for prior in [-40, 0, 3, 10, 999] {
        let mut roster = create_roster_with_scores(&[("Alice", prior)]);
        let id = player_id(&roster, "Alice");

        roster.apply_manual_score(id, "5+7-2");
        assert_eq!(score_of(&roster, "Alice"), 10);

        roster.apply_manual_score(id, "abc");
        assert_eq!(score_of(&roster, "Alice"), 10);
    }
}

#[test]
fn test_standings_follow_scores() {
    let roster = create_roster_with_scores(&[("Alice", 2), ("Bob", 8), ("Carol", 5)]);

    let tags: Vec<_> = roster
        .standings(ScoringRule::Highest)
        .into_iter()
        .map(|(player, tag)| (player.name.clone(), tag))
        .collect();

    assert_eq!(
        tags,
        vec![
            ("Alice".to_string(), Some(StandingTag::Last)),
            ("Bob".to_string(), Some(StandingTag::Leader)),
            ("Carol".to_string(), None),
        ]
    );
}

#[test]
fn test_two_saves_then_delete() {
    let mut state = create_state(&[("Alice", 3)], ScoringRule::Highest);

    let first = state.save_game().timestamp;
    let second = state.save_game().timestamp;
    assert_ne!(first, second);
    assert_eq!(state.history.entries()[0].timestamp, second);

    state.history.delete_entry(second);
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history.entries()[0].timestamp, first);
}

#[test]
fn test_history_winner_uses_entry_rule() {
    let entry = create_record(1, &[("Alice", 3), ("Bob", 9)], ScoringRule::Lowest);
    assert_eq!(History::winner_of(&entry), "Alice (3 points)");
}

#[test]
fn test_timer_full_cycle() {
    let mut timer = TimerEngine::new();
    timer.set_custom_time("2").unwrap();
    assert_eq!(timer.remaining_seconds(), 120);

    timer.toggle_running();
    let outcomes: Vec<_> = (0..120).map(|_| timer.advance()).collect();
    assert_eq!(outcomes.last(), Some(&TickOutcome::Finished));
    assert_eq!(timer.remaining_seconds(), 0);
    assert!(!timer.is_running());
    assert_eq!(timer.display(), "0:00");

    timer.toggle_running();
    assert_eq!(timer.phase(), TimerPhase::Editing);
}

#[test]
fn test_clear_after_activity() {
    let mut state = create_state(&[("Alice", 3), ("Bob", 1)], ScoringRule::Lowest);
    state.settings.set_rounds("12");
    state.save_game();

    state.clear();
    assert_eq!(state, AppState::new());
}
