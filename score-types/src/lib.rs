pub mod game;
pub mod player;
pub mod timer;
pub mod errors;

// Re-export all types
pub use game::*;
pub use player::*;
pub use timer::*;
pub use errors::*;
