use serde::Serialize;
use score_types::{HistorySummary, Leader, Player, ScoringRule, StandingTag, TimerPhase, TimerState};

use crate::controller::AppController;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRow {
    #[serde(flatten)]
    pub player: Player,
    pub tag: Option<StandingTag>,
}

/// Everything a presentation layer needs to draw one frame
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub players: Vec<PlayerRow>,
    pub rounds: String,
    pub scoring_rule: ScoringRule,
    pub leader: Option<Leader>,
    pub leader_banner: Option<String>,
    pub message: Option<String>,
    pub timer: TimerState,
    pub timer_phase: TimerPhase,
    pub timer_display: String,
    pub history: Vec<HistorySummary>,
}

impl From<&AppController> for ViewState {
    fn from(controller: &AppController) -> Self {
        ViewState {
            players: controller
                .standings()
                .into_iter()
                .map(|(player, tag)| PlayerRow {
                    player: player.clone(),
                    tag,
                })
                .collect(),
            rounds: controller.rounds().to_string(),
            scoring_rule: controller.scoring_rule(),
            leader: controller.leader(),
            leader_banner: controller.leader_banner(),
            message: controller.message().map(str::to_string),
            timer: controller.timer().state(),
            timer_phase: controller.timer().phase(),
            timer_display: controller.timer_display(),
            history: controller.history_summaries(),
        }
    }
}
