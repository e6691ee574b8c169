use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Millisecond-precision identifier, shared by players and history entries.
pub type PlayerId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Player {
    #[ts(type = "number")]
    pub id: PlayerId,
    pub name: String,
    #[ts(type = "number")]
    pub score: i64,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
        }
    }
}
