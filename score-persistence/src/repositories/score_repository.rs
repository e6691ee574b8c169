use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::store::PersistenceStore;
use score_types::{CurrentGame, GameRecord, Settings};

pub const CURRENT_GAME_KEY: &str = "scoreTrackerGame";
pub const HISTORY_KEY: &str = "scoreTrackerHistory";
pub const SETTINGS_KEY: &str = "scoreTrackerSettings";

/// Everything found in the store at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredData {
    pub current_game: Option<CurrentGame>,
    pub history: Vec<GameRecord>,
    pub settings: Option<Settings>,
}

/// Typed access to the three independent records: current game, history
/// and settings. Reads never fail: an unreadable or malformed record is
/// treated as absent. Writes report their errors.
#[derive(Clone)]
pub struct ScoreRepository {
    store: Arc<dyn PersistenceStore>,
}

impl ScoreRepository {
    pub fn new(store: Arc<dyn PersistenceStore>) -> Self {
        Self { store }
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read '{}', using defaults: {:#}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring malformed '{}' record: {}", key, e);
                None
            }
        }
    }

    async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize '{}'", key))?;
        self.store.set(key, &json).await
    }

    pub async fn load_current_game(&self) -> Option<CurrentGame> {
        self.read::<CurrentGame>(CURRENT_GAME_KEY)
            .await
            .filter(|game| !game.players.is_empty())
    }

    /// Writes the roster and rounds together. An empty roster removes the
    /// record instead.
    pub async fn save_current_game(&self, game: &CurrentGame) -> Result<()> {
        if game.players.is_empty() {
            return self.clear_current_game().await;
        }
        debug!("Saving current game with {} players", game.players.len());
        self.write(CURRENT_GAME_KEY, game).await
    }

    pub async fn clear_current_game(&self) -> Result<()> {
        self.store.remove(CURRENT_GAME_KEY).await
    }

    pub async fn load_history(&self) -> Vec<GameRecord> {
        self.read(HISTORY_KEY).await.unwrap_or_default()
    }

    /// Writes the whole history, most recent first. An empty history removes
    /// the record instead.
    pub async fn save_history(&self, entries: &[GameRecord]) -> Result<()> {
        if entries.is_empty() {
            return self.store.remove(HISTORY_KEY).await;
        }
        debug!("Saving {} history entries", entries.len());
        self.write(HISTORY_KEY, entries).await
    }

    pub async fn load_settings(&self) -> Option<Settings> {
        self.read(SETTINGS_KEY).await
    }

    pub async fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.write(SETTINGS_KEY, settings).await
    }

    pub async fn load_all(&self) -> StoredData {
        StoredData {
            current_game: self.load_current_game().await,
            history: self.load_history().await,
            settings: self.load_settings().await,
        }
    }

    /// Erase all three records
    pub async fn clear_all(&self) -> Result<()> {
        self.store.remove(CURRENT_GAME_KEY).await?;
        self.store.remove(HISTORY_KEY).await?;
        self.store.remove(SETTINGS_KEY).await?;
        Ok(())
    }
}
