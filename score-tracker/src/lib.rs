use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use score_persistence::{
    connection::connect_and_migrate, MemoryStore, PersistenceStore, SqliteStore,
};

use crate::config::Config;

pub mod commands;
pub mod config;
pub mod controller;
pub mod events;
pub mod render;
pub mod view;

/// Open the durable store selected by the configuration
pub async fn open_store(config: &Config) -> Result<Arc<dyn PersistenceStore>> {
    if config.uses_memory_store() {
        info!("Using in-memory store; nothing will be kept after exit");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let db = connect_and_migrate(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database_url))?;
    Ok(Arc::new(SqliteStore::new(db)))
}
