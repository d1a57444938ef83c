// ============================================================================
// SUBMIT FORM VIEW - Formulario de publicación de historias
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlFormElement, HtmlInputElement};

use crate::dom::{append_child, get_element_by_id, hide, on_submit, ElementBuilder};
use crate::models::NewStoryInput;
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::viewmodels::StoryViewModel;

/// Renderizar el formulario de alta. Oculto hasta que el nav lo muestra.
pub fn render_submit_form(state: &AppState) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?
        .id("submit-form")?
        .class(if *state.show_submit_form.borrow() {
            "submit-form"
        } else {
            "submit-form hidden"
        })
        .build();

    let author_group = render_field("story-author", "author", "author name")?;
    let title_group = render_field("story-title", "title", "story title")?;
    let url_group = render_field("story-url", "url", "story url")?;

    append_child(&form, &author_group)?;
    append_child(&form, &title_group)?;
    append_child(&form, &url_group)?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-submit-story")
        .text("submit")
        .build();
    append_child(&form, &submit_btn)?;

    {
        let state = state.clone();
        on_submit(&form, move |e| {
            e.prevent_default();
            let state = state.clone();
            spawn_local(async move {
                submit_story_flow(&state).await;
            });
        })?;
    }

    Ok(form)
}

fn render_field(id: &str, label_text: &str, placeholder: &str) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", "text")?
        .attr("placeholder", placeholder)?
        .build();

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}

fn read_field(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Flujo de publicación: validar, mandar al backend, y solo con el Ok
/// insertar el markup al principio de la lista general y limpiar el form.
/// Con Err el formulario queda intacto para reintentar.
async fn submit_story_flow(state: &AppState) {
    // Guarda contra doble submit mientras hay una request en vuelo
    if *state.submitting.borrow() {
        return;
    }

    let user = match state.session.get_user() {
        Some(u) => u,
        None => {
            state.set_notice(Some(crate::error::AppError::Auth.notice_text()));
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Notice));
            return;
        }
    };

    let input = NewStoryInput {
        author: read_field("story-author"),
        title: read_field("story-title"),
        url: read_field("story-url"),
    };

    *state.submitting.borrow_mut() = true;
    let vm = StoryViewModel::new();
    let result = vm.submit_story(&user, &input).await;
    *state.submitting.borrow_mut() = false;

    match result {
        Ok(story) => {
            // La lista en memoria y las colecciones del usuario primero
            state.stories.prepend(story.clone());
            state.session.update_user(|u| u.add_own_story(story.clone()));

            // Splice optimista del markup, sin re-fetch
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::PrependStory {
                story_id: story.story_id.clone(),
            }));

            reset_and_hide_form(state);
        }
        Err(e) => {
            log::error!("❌ Error publicando historia: {}", e);
            state.set_notice(Some(e.notice_text()));
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Notice));
        }
    }
}

fn reset_and_hide_form(state: &AppState) {
    *state.show_submit_form.borrow_mut() = false;
    if let Some(form) = get_element_by_id("submit-form") {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
        hide(&form);
    }
}
