//! Round countdown.
//!
//! The engine owns at most one tick source. When built with
//! [`TimerEngine::with_ticker`] every start spawns a tokio task that sends a
//! [`TimerTick`] per period, and every exit from the running state aborts it.
//! Each source is stamped with a generation, so ticks already queued by an
//! aborted source are recognised and ignored. A detached engine
//! ([`TimerEngine::new`]) never spawns anything and is driven with
//! [`TimerEngine::advance`].

use regex::Regex;
use score_types::{ScoreError, TimerPhase, TimerState};
use std::sync::LazyLock;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

static MINUTES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("minutes pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Ignored,
    Counted { remaining_seconds: u32 },
    Finished,
}

#[derive(Debug)]
struct Ticker {
    period: Duration,
    sender: mpsc::UnboundedSender<TimerTick>,
}

#[derive(Debug)]
pub struct TimerEngine {
    state: TimerState,
    started: bool,
    generation: u64,
    ticker: Option<Ticker>,
    task: Option<JoinHandle<()>>,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerEngine {
    /// Engine without a tick source
    pub fn new() -> Self {
        Self {
            state: TimerState::default(),
            started: false,
            generation: 0,
            ticker: None,
            task: None,
        }
    }

    /// Engine that schedules its own ticks every `period` while running.
    /// Must be started from within a tokio runtime.
    pub fn with_ticker(period: Duration) -> (Self, mpsc::UnboundedReceiver<TimerTick>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut engine = Self::new();
        engine.ticker = Some(Ticker { period, sender });
        (engine, receiver)
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn is_editing(&self) -> bool {
        self.state.editing
    }

    pub fn phase(&self) -> TimerPhase {
        if self.state.editing {
            TimerPhase::Editing
        } else if self.state.running {
            TimerPhase::Running
        } else if self.state.remaining_seconds == 0 {
            TimerPhase::Finished
        } else if self.started {
            TimerPhase::Paused
        } else {
            TimerPhase::Ready
        }
    }

    /// Whether a tick source is currently scheduled
    pub fn has_tick_source(&self) -> bool {
        self.task.is_some()
    }

    /// Set the countdown from user-entered minutes. Only a positive whole
    /// number is accepted. Returns the new remaining seconds.
    pub fn set_custom_time(&mut self, minutes: &str) -> Result<u32, ScoreError> {
        let invalid = || ScoreError::InvalidMinutes {
            input: minutes.to_string(),
        };

        if !MINUTES_PATTERN.is_match(minutes) {
            return Err(invalid());
        }
        let seconds = minutes
            .parse::<u32>()
            .ok()
            .filter(|m| *m > 0)
            .and_then(|m| m.checked_mul(60))
            .ok_or_else(invalid)?;

        self.stop_ticking();
        self.state = TimerState {
            remaining_seconds: seconds,
            running: false,
            editing: false,
        };
        self.started = false;
        debug!("Timer set to {} seconds", seconds);

        Ok(seconds)
    }

    /// Start or pause. With nothing left on the clock this goes back to
    /// editing instead of starting.
    pub fn toggle_running(&mut self) {
        if self.state.remaining_seconds == 0 {
            self.stop_ticking();
            self.state.running = false;
            self.state.editing = true;
            return;
        }

        if self.state.running {
            self.state.running = false;
            self.stop_ticking();
        } else {
            self.state.running = true;
            self.state.editing = false;
            self.started = true;
            self.start_ticking();
        }
    }

    /// Back to the time entry, pausing a running countdown first.
    pub fn edit(&mut self) {
        if self.state.running {
            self.state.running = false;
            self.stop_ticking();
        }
        self.state.editing = true;
    }

    pub fn reset(&mut self) {
        self.stop_ticking();
        self.state = TimerState::default();
        self.started = false;
    }

    /// Deliver a scheduled tick. Ticks from a cancelled source are ignored.
    pub fn on_tick(&mut self, tick: TimerTick) -> TickOutcome {
        if tick.generation != self.generation {
            return TickOutcome::Ignored;
        }
        self.advance()
    }

    /// Count down one second if running. Reaching zero stops the clock.
    pub fn advance(&mut self) -> TickOutcome {
        if !self.state.running || self.state.remaining_seconds == 0 {
            return TickOutcome::Ignored;
        }

        self.state.remaining_seconds -= 1;
        if self.state.remaining_seconds == 0 {
            self.state.running = false;
            self.stop_ticking();
            debug!("Timer finished");
            TickOutcome::Finished
        } else {
            TickOutcome::Counted {
                remaining_seconds: self.state.remaining_seconds,
            }
        }
    }

    pub fn display(&self) -> String {
        format_time(self.state.remaining_seconds)
    }

    fn start_ticking(&mut self) {
        self.stop_ticking();
        self.generation += 1;

        let Some(ticker) = &self.ticker else {
            return;
        };
        let sender = ticker.sender.clone();
        let period = ticker.period;
        let tick = TimerTick {
            generation: self.generation,
        };

        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                interval.tick().await;
                if sender.send(tick).is_err() {
                    break;
                }
            }
        }));
    }

    // Ticks already queued by the cancelled source carry the old generation
    fn stop_ticking(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.generation += 1;
        }
    }
}

impl Drop for TimerEngine {
    fn drop(&mut self) {
        self.stop_ticking();
    }
}

/// `m:ss`, e.g. 125 seconds is `2:05`
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
