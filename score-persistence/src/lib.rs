pub mod connection;
pub mod entities;
pub mod repositories;
pub mod sqlite_store;
pub mod store;

pub use repositories::ScoreRepository;
pub use sqlite_store::SqliteStore;
pub use store::{MemoryStore, PersistenceStore};
