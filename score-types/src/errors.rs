use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ScoreError {
    #[error("Player already exists!")]
    DuplicateName { name: String },
    #[error("Player name cannot be empty")]
    EmptyName,
    #[error("Invalid number of minutes: {input:?}")]
    InvalidMinutes { input: String },
}
