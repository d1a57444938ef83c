// ============================================================================
// STORY ITEM VIEW - Markup de una historia individual
// ============================================================================
// Separado en dos pasos: StoryItem::build es un plan puro (testeable sin
// DOM) y render_story_item lo aplica creando el <li> con sus listeners.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::{Story, User};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::viewmodels::StoryViewModel;

/// Variante visual del icono de favorito
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarVariant {
    Solid,
    Outline,
}

impl StarVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            StarVariant::Solid => "fa-solid",
            StarVariant::Outline => "fa-regular",
        }
    }
}

/// Plan de render de una historia: valor puro derivado de
/// (Story, contexto del viewer). Sin sesión no hay estrella.
#[derive(Clone, Debug, PartialEq)]
pub struct StoryItem {
    pub story_id: String,
    pub show_delete: bool,
    pub star: Option<StarVariant>,
    pub href: String,
    pub title: String,
    pub host_name: String,
    pub author: String,
    pub username: String,
}

impl StoryItem {
    /// Construir el plan. Nunca falla: viewer ausente solo omite la
    /// estrella, y una URL malformada degrada en host_name().
    pub fn build(story: &Story, viewer: Option<&User>, show_delete: bool) -> Self {
        let star = viewer.map(|user| {
            if user.is_favorite(&story.story_id) {
                StarVariant::Solid
            } else {
                StarVariant::Outline
            }
        });

        Self {
            story_id: story.story_id.clone(),
            show_delete,
            star,
            href: story.url.clone(),
            title: story.title.clone(),
            host_name: story.host_name(),
            author: story.author.clone(),
            username: story.username.clone(),
        }
    }
}

/// Aplicar el plan al DOM: <li id=story_id> con trash opcional, estrella
/// opcional, link, hostname, autor y username. Los handlers capturan el
/// story_id en el closure; no se recorre el árbol hacia arriba.
pub fn render_story_item(plan: &StoryItem, state: &AppState) -> Result<Element, JsValue> {
    let item = ElementBuilder::new("li")?.id(&plan.story_id)?.build();

    if plan.show_delete {
        let trash = render_trash_control(&plan.story_id, state)?;
        append_child(&item, &trash)?;
    }

    if let Some(variant) = plan.star {
        let star = render_star_control(&plan.story_id, variant, state)?;
        append_child(&item, &star)?;
    }

    let link = ElementBuilder::new("a")?
        .class("story-link")
        .attr("href", &plan.href)?
        .attr("target", "a_blank")?
        .text(&plan.title)
        .build();
    append_child(&item, &link)?;

    let hostname = ElementBuilder::new("small")?
        .class("story-hostname")
        .text(&format!("({})", plan.host_name))
        .build();
    append_child(&item, &hostname)?;

    let author = ElementBuilder::new("small")?
        .class("story-author")
        .text(&format!("by {}", plan.author))
        .build();
    append_child(&item, &author)?;

    let poster = ElementBuilder::new("small")?
        .class("story-user")
        .text(&format!("posted by {}", plan.username))
        .build();
    append_child(&item, &poster)?;

    Ok(item)
}

/// Icono de borrado para historias propias
fn render_trash_control(story_id: &str, state: &AppState) -> Result<Element, JsValue> {
    let span = ElementBuilder::new("span")?.class("trash-can").build();
    let icon = ElementBuilder::new("i")?.class("fa-solid fa-trash").build();
    append_child(&span, &icon)?;

    let state = state.clone();
    let story_id = story_id.to_string();
    on_click(&span, move |_e| {
        let state = state.clone();
        let story_id = story_id.clone();
        spawn_local(async move {
            delete_story_flow(&state, &story_id).await;
        });
    })?;

    Ok(span)
}

/// Icono de favorito. La clase inicial viene del plan (derivada del
/// modelo); el toggle decide por pertenencia en el modelo, no por la clase.
fn render_star_control(story_id: &str, variant: StarVariant, state: &AppState) -> Result<Element, JsValue> {
    let span = ElementBuilder::new("span")?.class("star").build();
    let icon = ElementBuilder::new("i")?
        .class(&format!("{} fa-star", variant.css_class()))
        .build();
    append_child(&span, &icon)?;

    let state = state.clone();
    let story_id = story_id.to_string();
    on_click(&span, move |e| {
        e.stop_propagation();
        let state = state.clone();
        let story_id = story_id.clone();
        spawn_local(async move {
            toggle_favorite_flow(&state, &story_id).await;
        });
    })?;

    Ok(span)
}

/// Borrar una historia propia: backend primero, colecciones después,
/// y re-render completo de la sección desde el estado mutado.
async fn delete_story_flow(state: &AppState, story_id: &str) {
    let user = match state.session.get_user() {
        Some(u) => u,
        None => {
            state.set_notice(Some(crate::error::AppError::Auth.notice_text()));
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Notice));
            return;
        }
    };

    let vm = StoryViewModel::new();
    match vm.delete_story(&user, story_id).await {
        Ok(()) => {
            state.stories.remove(story_id);
            state.session.update_user(|u| {
                u.remove_own_story(story_id);
                u.remove_favorite(story_id);
            });
            state.notify_change();
        }
        Err(e) => {
            log::error!("❌ Error borrando historia {}: {}", story_id, e);
            state.set_notice(Some(e.notice_text()));
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Notice));
        }
    }
}

/// Alternar favorito: la pertenencia en el modelo decide alta o baja;
/// membresía e icono se tocan solo cuando el backend confirma.
async fn toggle_favorite_flow(state: &AppState, story_id: &str) {
    let user = match state.session.get_user() {
        Some(u) => u,
        None => return,
    };

    let story = match state.stories.find(story_id) {
        Some(s) => s,
        None => {
            let err = crate::error::AppError::NotFound(story_id.to_string());
            log::warn!("⚠️ {}", err);
            state.set_notice(Some(err.notice_text()));
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Notice));
            return;
        }
    };

    let vm = StoryViewModel::new();
    match vm.toggle_favorite(&user, &story).await {
        Ok(is_favorite) => {
            state.session.update_user(|u| {
                if is_favorite {
                    u.add_favorite(story.clone());
                } else {
                    u.remove_favorite(&story.story_id);
                }
            });
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::StarToggle {
                story_id: story.story_id.clone(),
                is_favorite,
            }));
        }
        Err(e) => {
            log::error!("❌ Error alternando favorito {}: {}", story_id, e);
            state.set_notice(Some(e.notice_text()));
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Notice));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str) -> Story {
        Story {
            story_id: id.to_string(),
            title: "T".to_string(),
            author: "A".to_string(),
            url: "http://x.com".to_string(),
            username: "poster".to_string(),
        }
    }

    fn viewer_with_favorite(id: &str) -> User {
        User {
            username: "viewer".to_string(),
            name: "Viewer".to_string(),
            token: Some("tok".to_string()),
            own_stories: Vec::new(),
            favorites: vec![story(id)],
        }
    }

    #[test]
    fn delete_control_follows_the_flag() {
        let s = story("1");
        assert!(!StoryItem::build(&s, None, false).show_delete);
        assert!(StoryItem::build(&s, None, true).show_delete);
    }

    #[test]
    fn no_session_means_no_star() {
        let plan = StoryItem::build(&story("1"), None, false);
        assert_eq!(plan.star, None);
    }

    #[test]
    fn star_variant_tracks_favorite_membership() {
        let viewer = viewer_with_favorite("1");
        let fav = StoryItem::build(&story("1"), Some(&viewer), false);
        let not_fav = StoryItem::build(&story("2"), Some(&viewer), false);
        assert_eq!(fav.star, Some(StarVariant::Solid));
        assert_eq!(not_fav.star, Some(StarVariant::Outline));
    }

    #[test]
    fn plan_carries_story_fields() {
        let plan = StoryItem::build(&story("1"), None, false);
        assert_eq!(plan.story_id, "1");
        assert_eq!(plan.title, "T");
        assert_eq!(plan.host_name, "x.com");
        assert_eq!(plan.author, "A");
        assert_eq!(plan.username, "poster");
    }
}
