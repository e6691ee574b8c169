pub mod game_events;
pub mod history;
pub mod identity;
pub mod roster;
pub mod score_expression;
pub mod settings;
pub mod standings;
pub mod state;
pub mod timer;

// Re-export main components
pub use game_events::*;
pub use history::*;
pub use identity::*;
pub use roster::*;
pub use score_expression::*;
pub use settings::*;
pub use standings::*;
pub use state::*;
pub use timer::*;
