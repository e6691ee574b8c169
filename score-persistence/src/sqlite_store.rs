use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};
use tracing::debug;

use crate::entities::{kv_entries, prelude::*};
use crate::store::PersistenceStore;

/// Key/value records kept in a SQLite table.
pub struct SqliteStore {
    db: DatabaseConnection,
}

impl SqliteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersistenceStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entry = KvEntries::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .with_context(|| format!("Failed to read '{}'", key))?;

        Ok(entry.map(|model| model.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let entry = kv_entries::ActiveModel {
            storage_key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(chrono::Utc::now().into()),
        };

        KvEntries::insert(entry)
            .on_conflict(
                OnConflict::column(kv_entries::Column::StorageKey)
                    .update_columns([kv_entries::Column::Value, kv_entries::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .with_context(|| format!("Failed to write '{}'", key))?;

        debug!("Wrote {} bytes to '{}'", value.len(), key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        KvEntries::delete_by_id(key.to_string())
            .exec(&self.db)
            .await
            .with_context(|| format!("Failed to remove '{}'", key))?;

        debug!("Removed '{}'", key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use migration::{Migrator, MigratorTrait};

    async fn setup_test_store() -> SqliteStore {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SqliteStore::new(db)
    }

    #[tokio::test]
    async fn test_missing_key() {
        let store = setup_test_store().await;
        assert_eq!(store.get("scoreTrackerGame").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_overwrite() {
        let store = setup_test_store().await;

        store.set("scoreTrackerSettings", r#"{"scoringRule":"highest"}"#).await.unwrap();
        store.set("scoreTrackerSettings", r#"{"scoringRule":"lowest"}"#).await.unwrap();

        let value = store.get("scoreTrackerSettings").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"{"scoringRule":"lowest"}"#));
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let store = setup_test_store().await;

        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        store.remove("a").await.unwrap();

        assert_eq!(store.get("a").await.unwrap(), None);
        assert_eq!(store.get("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_remove_missing_key() {
        let store = setup_test_store().await;
        assert!(store.remove("never-written").await.is_ok());
    }
}
