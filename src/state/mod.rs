pub mod app_state;
pub mod session_state;
pub mod story_state;

pub use app_state::{AppState, IncrementalUpdate, Section, UpdateType};
pub use session_state::SessionState;
pub use story_state::StoryState;
