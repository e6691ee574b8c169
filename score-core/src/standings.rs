use score_types::{Leader, Player, ScoringRule, StandingTag};

pub struct Standings;

impl Standings {
    /// Order players best-first under `rule`. The sort is stable, so players
    /// with equal scores keep their roster order.
    pub fn rank(players: &[Player], rule: ScoringRule) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = players.iter().collect();
        ranked.sort_by(|a, b| match rule {
            ScoringRule::Highest => b.score.cmp(&a.score),
            ScoringRule::Lowest => a.score.cmp(&b.score),
        });
        ranked
    }

    /// Current leader, or `None` for an empty list of players
    pub fn leader(players: &[Player], rule: ScoringRule) -> Option<Leader> {
        let ranked = Self::rank(players, rule);
        let winner = *ranked.first()?;
        let is_tie = ranked
            .get(1)
            .is_some_and(|runner_up| runner_up.score == winner.score);

        Some(Leader {
            winner: winner.clone(),
            is_tie,
        })
    }

    /// Tag per player, in roster order. A single player is neither leader nor last.
    pub fn tags(players: &[Player], rule: ScoringRule) -> Vec<Option<StandingTag>> {
        if players.len() < 2 {
            return vec![None; players.len()];
        }

        let ranked = Self::rank(players, rule);
        let first_id = ranked[0].id;
        let last_id = ranked[ranked.len() - 1].id;

        players
            .iter()
            .map(|player| {
                if player.id == first_id {
                    Some(StandingTag::Leader)
                } else if player.id == last_id {
                    Some(StandingTag::Last)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Display label for the winner of a finished game
    pub fn winner_label(players: &[Player], rule: ScoringRule) -> String {
        match Self::rank(players, rule).first() {
            Some(winner) => format!("{} ({} points)", winner.name, winner.score),
            None => "No players".to_string(),
        }
    }
}
