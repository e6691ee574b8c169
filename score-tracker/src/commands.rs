use score_types::ScoringRule;
use thiserror::Error;

use crate::controller::{AppController, ControllerError};
use crate::render;

pub const HELP: &str = "\
Commands:
  add <name>                 add a player
  inc <player> | dec <player>  change a score by one
  score <player> <delta>     add a (possibly negative) amount
  set <player> <expr>        set a score, e.g. `set Alice 5+7-2`
  remove <player>            remove a player
  rounds <value>             set the number of rounds
  rule highest|lowest        choose who wins
  reset                      reset all scores to zero
  save                       save the game to history
  clear                      erase all data
  history                    list saved games
  delete <timestamp>         delete a saved game
  timer set <minutes>        set the round timer
  timer toggle               start or pause the timer
  timer edit                 change the timer
  timer reset                clear the timer
  show                       redraw the scoreboard
  json                       print the current view as JSON
  help                       show this help
  quit                       exit
<player> is a player id or exact name.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Increment(String),
    Decrement(String),
    Score { player: String, delta: i64 },
    Set { player: String, expression: String },
    Remove(String),
    Rounds(String),
    Rule(ScoringRule),
    Reset,
    Save,
    Clear,
    History,
    Delete(i64),
    TimerSet(String),
    TimerToggle,
    TimerEdit,
    TimerReset,
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help` for a list)")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("No player matches '{0}'")]
    UnknownPlayer(String),
}

/// What the input loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Confirm,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "add" => Command::Add(required(rest, "add <name>")?),
            "inc" => Command::Increment(required(rest, "inc <player>")?),
            "dec" => Command::Decrement(required(rest, "dec <player>")?),
            "score" => {
                let usage = "score <player> <delta>";
                let (player, delta) = rest.split_once(char::is_whitespace).ok_or(CommandError::Usage(usage))?;
                let delta = delta.trim().parse().map_err(|_| CommandError::Usage(usage))?;
                Command::Score {
                    player: player.to_string(),
                    delta,
                }
            }
            "set" => {
                let (player, expression) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::Usage("set <player> <expr>"))?;
                Command::Set {
                    player: player.to_string(),
                    expression: expression.trim().to_string(),
                }
            }
            "remove" => Command::Remove(required(rest, "remove <player>")?),
            "rounds" => Command::Rounds(rest.to_string()),
            "rule" => Command::Rule(
                rest.parse()
                    .map_err(|_| CommandError::Usage("rule highest|lowest"))?,
            ),
            "reset" => Command::Reset,
            "save" => Command::Save,
            "clear" => Command::Clear,
            "history" => Command::History,
            "delete" => Command::Delete(
                rest.parse()
                    .map_err(|_| CommandError::Usage("delete <timestamp>"))?,
            ),
            "timer" => Self::parse_timer(rest)?,
            "show" => Command::Show,
            "json" => Command::Json,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }

    fn parse_timer(rest: &str) -> Result<Self, CommandError> {
        let usage = "timer set <minutes> | timer toggle | timer edit | timer reset";
        let (action, argument) = match rest.split_once(char::is_whitespace) {
            Some((action, argument)) => (action, argument.trim()),
            None => (rest, ""),
        };

        match action {
            "set" => Ok(Command::TimerSet(argument.to_string())),
            "toggle" | "start" | "pause" => Ok(Command::TimerToggle),
            "edit" => Ok(Command::TimerEdit),
            "reset" => Ok(Command::TimerReset),
            _ => Err(CommandError::Usage(usage)),
        }
    }

    /// Whether the command changes state and should be followed by a redraw
    pub fn redraws(&self) -> bool {
        !matches!(
            self,
            Command::History | Command::Json | Command::Help | Command::Quit | Command::Clear
        )
    }
}

fn required(rest: &str, usage: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(rest.to_string())
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Controller(#[from] ControllerError),
}

fn player_id(controller: &AppController, reference: &str) -> Result<i64, CommandError> {
    controller
        .resolve_player(reference)
        .ok_or_else(|| CommandError::UnknownPlayer(reference.to_string()))
}

/// Run one command against the controller. `clear` is not executed here:
/// it returns [`Flow::Confirm`] so the caller can ask before erasing.
pub async fn dispatch(
    controller: &mut AppController,
    command: Command,
) -> Result<Flow, DispatchError> {
    match command {
        Command::Add(name) => {
            controller.add_player(&name).await?;
        }
        Command::Increment(player) => {
            let id = player_id(controller, &player)?;
            controller.update_score(id, 1).await?;
        }
        Command::Decrement(player) => {
            let id = player_id(controller, &player)?;
            controller.update_score(id, -1).await?;
        }
        Command::Score { player, delta } => {
            let id = player_id(controller, &player)?;
            controller.update_score(id, delta).await?;
        }
        Command::Set { player, expression } => {
            let id = player_id(controller, &player)?;
            controller.set_manual_score(id, &expression).await?;
        }
        Command::Remove(player) => {
            let id = player_id(controller, &player)?;
            controller.remove_player(id).await?;
        }
        Command::Rounds(value) => controller.set_rounds(&value).await?,
        Command::Rule(rule) => controller.set_scoring_rule(rule).await?,
        Command::Reset => controller.reset_scores().await?,
        Command::Save => {
            controller.save_game().await?;
        }
        Command::Clear => return Ok(Flow::Confirm),
        Command::History => println!("{}", render::history(&controller.history_summaries())),
        Command::Delete(timestamp) => {
            controller.delete_history_entry(timestamp).await?;
        }
        Command::TimerSet(minutes) => {
            controller.set_timer(&minutes)?;
        }
        Command::TimerToggle => controller.toggle_timer(),
        Command::TimerEdit => controller.edit_timer(),
        Command::TimerReset => controller.reset_timer(),
        Command::Show => {}
        Command::Json => println!("{}", render::json(controller)),
        Command::Help => println!("{}", HELP),
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}
