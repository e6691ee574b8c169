use score_types::{Leader, Player, PlayerId, ScoreError, ScoringRule, StandingTag};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::{ScoreExpression, Standings, next_identity, now_millis};

/// Players of the game in progress, in the order they joined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a roster from stored players, dropping entries that would
    /// break name or id uniqueness. The first occurrence wins.
    pub fn restore(players: Vec<Player>) -> Self {
        let mut seen_names = HashSet::new();
        let mut seen_ids = HashSet::new();
        let players = players
            .into_iter()
            .filter(|player| {
                if player.name.trim().is_empty() {
                    warn!("Dropping stored player {} with an empty name", player.id);
                    return false;
                }
                if seen_ids.contains(&player.id) {
                    warn!("Dropping stored player '{}' with duplicate id {}", player.name, player.id);
                    return false;
                }
                if !seen_names.insert(player.name.clone()) {
                    warn!("Dropping stored player {} with duplicate name '{}'", player.id, player.name);
                    return false;
                }
                seen_ids.insert(player.id);
                true
            })
            .collect();

        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn add_player(&mut self, name: &str) -> Result<&Player, ScoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScoreError::EmptyName);
        }

        // Exact, case-sensitive match
        if self.find_by_name(name).is_some() {
            return Err(ScoreError::DuplicateName {
                name: name.to_string(),
            });
        }

        let latest = self.players.iter().map(|p| p.id).max();
        let id = next_identity(now_millis(), latest);
        self.players.push(Player::new(id, name));
        debug!("Added player '{}' with id {}", name, id);

        Ok(&self.players[self.players.len() - 1])
    }

    /// Add `delta` to a player's score. Returns the new score, or `None` for
    /// an unknown id or a sum that does not fit; the score is then unchanged.
    pub fn update_score(&mut self, player_id: PlayerId, delta: i64) -> Option<i64> {
        let player = self.players.iter_mut().find(|p| p.id == player_id)?;
        player.score = player.score.checked_add(delta)?;
        Some(player.score)
    }

    /// Apply a manually entered score expression as an absolute target.
    /// Returns the delta that was applied; malformed input changes nothing.
    /// The target is discarded as well when the distance from the current
    /// score does not fit in an `i64`, which needs scores near opposite ends
    /// of the range.
    pub fn apply_manual_score(&mut self, player_id: PlayerId, input: &str) -> Option<i64> {
        let target = ScoreExpression::evaluate(input)?;
        let current = self.get(player_id)?.score;
        let delta = target.checked_sub(current)?;
        self.update_score(player_id, delta)?;
        Some(delta)
    }

    pub fn remove_player(&mut self, player_id: PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == player_id)?;
        Some(self.players.remove(index))
    }

    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    pub fn leader(&self, rule: ScoringRule) -> Option<Leader> {
        Standings::leader(&self.players, rule)
    }

    /// Players paired with their standing tag, in roster order
    pub fn standings(&self, rule: ScoringRule) -> Vec<(&Player, Option<StandingTag>)> {
        self.players
            .iter()
            .zip(Standings::tags(&self.players, rule))
            .collect()
    }
}
