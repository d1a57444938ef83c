// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo toca los elementos que cambiaron, sin re-renderizar toda la app:
// el icono de favorito, el aviso y el alta de una historia recién
// publicada.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::element::{get_element_by_id, hide, prepend_child, set_text_content, show};
use crate::models::Story;
use crate::state::app_state::{AppState, Section};
use crate::utils::constants::{NO_FAVORITES_TEXT, NO_OWN_STORIES_TEXT};

/// Id del contenedor de cada sección
pub fn section_container_id(section: Section) -> &'static str {
    match section {
        Section::AllStories => "all-stories-list",
        Section::OwnStories => "own-stories-list",
        Section::Favorites => "favorites-list",
    }
}

/// Cambiar el icono de favorito de una historia ya renderizada.
/// La clase se deriva del modelo de datos, nunca al revés.
pub fn update_star_incremental(story_id: &str, is_favorite: bool) -> Result<(), JsValue> {
    let item = match get_element_by_id(story_id) {
        Some(el) => el,
        // La historia puede no estar en la sección visible; no es un error
        None => return Ok(()),
    };

    if let Some(icon) = item.query_selector(".star i")? {
        let (add, remove) = if is_favorite {
            ("fa-solid", "fa-regular")
        } else {
            ("fa-regular", "fa-solid")
        };
        icon.class_list().remove_1(remove)?;
        icon.class_list().add_1(add)?;
    }

    Ok(())
}

/// Actualizar el aviso descartable sin re-render
pub fn update_notice(state: &AppState) -> Result<(), JsValue> {
    if let Some(banner) = get_element_by_id("app-notice") {
        match state.notice.borrow().as_deref() {
            Some(text) => {
                if let Ok(Some(msg)) = banner.query_selector(".notice-text") {
                    set_text_content(&msg, text);
                }
                show(&banner);
            }
            None => hide(&banner),
        }
    }
    Ok(())
}

/// Insertar la historia recién publicada al principio de la lista general.
/// El contenedor puede tener todavía el placeholder de vacío; se quita.
pub fn prepend_story_incremental(state: &AppState, story: &Story) -> Result<(), JsValue> {
    use crate::views::story_item::{render_story_item, StoryItem};

    let container = match get_element_by_id(section_container_id(Section::AllStories)) {
        Some(el) => el,
        None => return Ok(()),
    };

    if let Some(placeholder) = container.query_selector(".empty-placeholder")? {
        placeholder.remove();
    }

    let viewer = state.session.get_user();
    let plan = StoryItem::build(story, viewer.as_ref(), false);
    let item = render_story_item(&plan, state)?;
    prepend_child(&container, &item)
}

/// Quitar el mensaje de carga inicial
pub fn remove_loading_indicator() {
    if let Some(msg) = get_element_by_id("stories-loading-msg") {
        msg.remove();
    }
}

/// Textos de placeholder por sección (None = la sección no usa placeholder)
pub fn empty_placeholder_text(section: Section) -> Option<&'static str> {
    match section {
        Section::AllStories => None,
        Section::OwnStories => Some(NO_OWN_STORIES_TEXT),
        Section::Favorites => Some(NO_FAVORITES_TEXT),
    }
}
