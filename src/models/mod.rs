pub mod api;
pub mod story;
pub mod user;

pub use story::{NewStoryInput, Story, StoryList};
pub use user::User;
