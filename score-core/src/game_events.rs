use score_types::{GameRecord, Player, PlayerId};

#[derive(Debug, Clone, PartialEq)]
pub enum ScoreEvent {
    PlayerAdded {
        player: Player,
    },
    ScoreChanged {
        player_id: PlayerId,
        delta: i64,
        score: i64,
    },
    PlayerRemoved {
        player: Player,
    },
    ScoresReset {
        player_count: usize,
    },
    GameSaved {
        record: GameRecord,
    },
    HistoryEntryDeleted {
        timestamp: i64,
    },
    DataCleared,
    TimerFinished,
}

impl ScoreEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ScoreEvent::PlayerAdded { .. } => "player_added",
            ScoreEvent::ScoreChanged { .. } => "score_changed",
            ScoreEvent::PlayerRemoved { .. } => "player_removed",
            ScoreEvent::ScoresReset { .. } => "scores_reset",
            ScoreEvent::GameSaved { .. } => "game_saved",
            ScoreEvent::HistoryEntryDeleted { .. } => "history_entry_deleted",
            ScoreEvent::DataCleared => "data_cleared",
            ScoreEvent::TimerFinished => "timer_finished",
        }
    }
}

/// Event handler trait for processing score events
pub trait ScoreEventHandler {
    fn handle_event(&mut self, event: ScoreEvent);
}

/// Simple event bus for distributing score events
pub struct ScoreEventBus {
    handlers: Vec<Box<dyn ScoreEventHandler + Send>>,
}

impl ScoreEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn ScoreEventHandler + Send>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: ScoreEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for ScoreEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct TestHandler {
        events: Arc<Mutex<Vec<ScoreEvent>>>,
    }

    impl ScoreEventHandler for TestHandler {
        fn handle_event(&mut self, event: ScoreEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_event_bus_delivers_to_every_handler() {
        let mut bus = ScoreEventBus::new();
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));

        bus.add_handler(Box::new(TestHandler { events: first.clone() }));
        bus.add_handler(Box::new(TestHandler { events: second.clone() }));
        assert_eq!(bus.handler_count(), 2);

        bus.publish(ScoreEvent::HistoryEntryDeleted { timestamp: 42 });
        bus.publish(ScoreEvent::DataCleared);

        for events in [first, second] {
            let events = events.lock().unwrap();
            assert_eq!(events.len(), 2);
            assert_eq!(events[0], ScoreEvent::HistoryEntryDeleted { timestamp: 42 });
            assert_eq!(events[1].name(), "data_cleared");
        }
    }
}
