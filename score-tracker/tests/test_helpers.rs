#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use score_core::{ScoreEvent, ScoreEventHandler, TimerEngine};
use score_persistence::{MemoryStore, PersistenceStore, ScoreRepository};
use score_tracker::controller::AppController;
use std::sync::{Arc, Mutex};

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<ScoreEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<ScoreEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_event(&self) -> Option<ScoreEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&ScoreEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl ScoreEventHandler for EventCollector {
    fn handle_event(&mut self, event: ScoreEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Store that rejects every read and write
pub struct FailingStore;

#[async_trait]
impl PersistenceStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(anyhow!("disk unavailable"))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(anyhow!("disk unavailable"))
    }

    async fn remove(&self, _key: &str) -> Result<()> {
        Err(anyhow!("disk unavailable"))
    }
}

/// Controller over an inspectable in-memory store, with an event collector
/// attached
pub struct TestSetup {
    pub store: Arc<MemoryStore>,
    pub controller: AppController,
    pub events: EventCollector,
}

impl TestSetup {
    pub async fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), TimerEngine::new()).await
    }

    pub async fn with_timer(timer: TimerEngine) -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), timer).await
    }

    pub async fn with_store(store: Arc<MemoryStore>, timer: TimerEngine) -> Self {
        let mut controller = AppController::load(ScoreRepository::new(store.clone()), timer).await;
        let events = EventCollector::new();
        controller.add_event_handler(Box::new(events.clone()));

        Self {
            store,
            controller,
            events,
        }
    }

    /// A fresh controller over the same store, as after a restart
    pub async fn reload(&self) -> AppController {
        AppController::load(ScoreRepository::new(self.store.clone()), TimerEngine::new()).await
    }

    pub async fn stored(&self, key: &str) -> Option<String> {
        self.store.get(key).await.unwrap()
    }

    pub async fn stored_json(&self, key: &str) -> Option<serde_json::Value> {
        self.stored(key)
            .await
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    /// Adds players in order and returns their ids
    pub async fn add_players(&mut self, names: &[&str]) -> Vec<i64> {
        let mut ids = Vec::new();
        for name in names {
            ids.push(self.controller.add_player(name).await.unwrap().id);
        }
        ids
    }

    pub fn score_of(&self, name: &str) -> i64 {
        self.controller
            .players()
            .iter()
            .find(|p| p.name == name)
            .unwrap_or_else(|| panic!("no player named {}", name))
            .score
    }
}

/// Controller whose store fails every operation
pub async fn failing_controller() -> AppController {
    AppController::load(ScoreRepository::new(Arc::new(FailingStore)), TimerEngine::new()).await
}
