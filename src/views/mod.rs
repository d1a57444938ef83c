pub mod app;
pub mod login;
pub mod nav;
pub mod notice;
pub mod story_item;
pub mod story_list;
pub mod submit_form;

pub use app::render_app;
pub use login::render_login;
pub use nav::render_nav;
pub use notice::render_notice;
pub use story_item::{render_story_item, StarVariant, StoryItem};
pub use story_list::{plan_section, populate_section, SectionPlan};
pub use submit_form::render_submit_form;
