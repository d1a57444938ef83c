// ============================================================================
// APP VIEW - Composición de toda la página
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::incremental::section_container_id;
use crate::dom::{append_child, ElementBuilder};
use crate::state::app_state::{AppState, Section};
use crate::views::login::render_login;
use crate::views::nav::render_nav;
use crate::views::notice::render_notice;
use crate::views::story_list::populate_section;
use crate::views::submit_form::render_submit_form;

/// Renderizar la aplicación completa a partir del estado.
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?.class("story-feed-app").build();

    let nav = render_nav(state)?;
    append_child(&root, &nav)?;

    let notice = render_notice(state)?;
    append_child(&root, &notice)?;

    if !state.session.is_logged_in() && *state.show_login_form.borrow() {
        let login = render_login(state)?;
        append_child(&root, &login)?;
    }

    if state.session.is_logged_in() {
        let submit_form = render_submit_form(state)?;
        append_child(&root, &submit_form)?;
    }

    if state.stories.is_loading() {
        let loading = ElementBuilder::new("div")?
            .id("stories-loading-msg")?
            .class("loading-msg")
            .text("Loading stories...")
            .build();
        append_child(&root, &loading)?;
    }

    // Las tres secciones; solo la actual está poblada y visible
    let current = state.current_section();
    for section in [Section::AllStories, Section::OwnStories, Section::Favorites] {
        let container = ElementBuilder::new("ol")?
            .id(section_container_id(section))?
            .class(if section == current {
                "stories-list"
            } else {
                "stories-list hidden"
            })
            .build();

        if section == current {
            populate_section(&container, state, section)?;
        }

        append_child(&root, &container)?;
    }

    Ok(root)
}
