use score_types::{HistorySummary, StandingTag, TimerPhase};

use crate::controller::AppController;
use crate::view::ViewState;

pub fn screen(controller: &AppController) -> String {
    let mut out = String::from("=== Score Tracker ===\n");

    if let Some(message) = controller.message() {
        out.push_str(&format!("* {}\n", message));
    }
    if let Some(banner) = controller.leader_banner() {
        out.push_str(&format!("{}\n", banner));
    }

    let rounds = if controller.rounds().is_empty() {
        "-"
    } else {
        controller.rounds()
    };
    out.push_str(&format!(
        "Rounds: {} | {} score wins\n",
        rounds,
        controller.scoring_rule()
    ));

    out.push_str(&scoreboard(controller));
    out.push_str(&timer_line(controller));
    out
}

pub fn scoreboard(controller: &AppController) -> String {
    let standings = controller.standings();
    if standings.is_empty() {
        return "No players yet. Use `add <name>`.\n".to_string();
    }

    let mut out = format!("{:<15} {:<20} {:>7}\n", "ID", "Player", "Score");
    for (player, tag) in standings {
        let tag = match tag {
            Some(StandingTag::Leader) => "  (leader)",
            Some(StandingTag::Last) => "  (last)",
            None => "",
        };
        out.push_str(&format!(
            "{:<15} {:<20} {:>7}{}\n",
            player.id, player.name, player.score, tag
        ));
    }
    out
}

pub fn timer_line(controller: &AppController) -> String {
    let timer = controller.timer();
    match timer.phase() {
        TimerPhase::Editing => "Timer: not set (`timer set <minutes>`)\n".to_string(),
        TimerPhase::Ready => format!("Timer: {} ready\n", timer.display()),
        TimerPhase::Running => format!("Timer: {} running\n", timer.display()),
        TimerPhase::Paused => format!("Timer: {} paused\n", timer.display()),
        TimerPhase::Finished => "Timer: 0:00 time's up\n".to_string(),
    }
}

pub fn history(rows: &[HistorySummary]) -> String {
    if rows.is_empty() {
        return "No saved games.".to_string();
    }

    let mut out = format!(
        "{:<15} {:<20} {:<25} {:<8} {:>7}\n",
        "Timestamp", "Date", "Winner", "Rounds", "Players"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<15} {:<20} {:<25} {:<8} {:>7}\n",
            row.timestamp, row.date, row.winner, row.rounds, row.player_count
        ));
    }
    out
}

pub fn json(controller: &AppController) -> String {
    serde_json::to_string_pretty(&ViewState::from(controller))
        .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}
