use anyhow::{Context, Result, anyhow};
use std::env;
use std::time::Duration;
use tracing::Level;

pub const MEMORY_DATABASE_URL: &str = "memory";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub log_level: Level,
    pub timer_tick_millis: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://score_tracker.db?mode=rwc".to_string());

        let log_level = lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .parse::<Level>()
            .context("Invalid LOG_LEVEL")?;

        let timer_tick_millis = lookup("TIMER_TICK_MILLIS")
            .unwrap_or_else(|| "1000".to_string())
            .parse::<u64>()
            .context("Invalid TIMER_TICK_MILLIS")?;
        if timer_tick_millis == 0 {
            return Err(anyhow!("Invalid TIMER_TICK_MILLIS: must be positive"));
        }

        Ok(Self {
            database_url,
            log_level,
            timer_tick_millis,
        })
    }

    /// Whether state should only live for the lifetime of the process
    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_DATABASE_URL
    }

    pub fn timer_tick_period(&self) -> Duration {
        Duration::from_millis(self.timer_tick_millis)
    }
}
