// ============================================================================
// STORY LIST VIEW - Las tres secciones del tablero
// ============================================================================
// Mismo patrón para las tres vistas: vaciar el contenedor, placeholder si
// la colección está vacía, si no un <li> por historia en orden, y mostrar.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::incremental::empty_placeholder_text;
use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::models::{Story, StoryList, User};
use crate::state::app_state::{AppState, Section};
use crate::views::story_item::{render_story_item, StoryItem};

/// Plan puro de una sección: qué items renderizar y con qué placeholder.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionPlan {
    pub items: Vec<StoryItem>,
    pub placeholder: Option<&'static str>,
}

/// Decidir el contenido de una sección a partir de las colecciones en
/// memoria. Puro: sin DOM, sin red.
pub fn plan_section(section: Section, list: &StoryList, viewer: Option<&User>) -> SectionPlan {
    let (stories, show_delete): (&[Story], bool) = match (section, viewer) {
        (Section::AllStories, _) => (&list.stories, false),
        (Section::OwnStories, Some(user)) => (&user.own_stories, true),
        (Section::Favorites, Some(user)) => (&user.favorites, false),
        // Secciones de usuario sin sesión: vacías
        (_, None) => (&[], false),
    };

    let items = stories
        .iter()
        .map(|story| StoryItem::build(story, viewer, show_delete))
        .collect::<Vec<_>>();

    let placeholder = if items.is_empty() {
        empty_placeholder_text(section)
    } else {
        None
    };

    SectionPlan { items, placeholder }
}

/// Aplicar el plan a un contenedor: vaciar, poblar, listo para mostrar.
pub fn populate_section(container: &Element, state: &AppState, section: Section) -> Result<(), JsValue> {
    set_inner_html(container, "");

    let list = state.stories.get_list();
    let viewer = state.session.get_user();
    let plan = plan_section(section, &list, viewer.as_ref());

    if let Some(text) = plan.placeholder {
        let placeholder = ElementBuilder::new("div")?
            .class("empty-placeholder")
            .text(text)
            .build();
        append_child(container, &placeholder)?;
        return Ok(());
    }

    for item_plan in &plan.items {
        let item = render_story_item(item_plan, state)?;
        append_child(container, &item)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{NO_FAVORITES_TEXT, NO_OWN_STORIES_TEXT};
    use crate::views::story_item::StarVariant;

    fn story(id: &str) -> Story {
        Story {
            story_id: id.to_string(),
            title: "T".to_string(),
            author: "A".to_string(),
            url: "http://x.com".to_string(),
            username: "poster".to_string(),
        }
    }

    fn viewer(own: Vec<Story>, favorites: Vec<Story>) -> User {
        User {
            username: "viewer".to_string(),
            name: "Viewer".to_string(),
            token: Some("tok".to_string()),
            own_stories: own,
            favorites,
        }
    }

    #[test]
    fn all_stories_never_shows_delete() {
        let list = StoryList::new(vec![story("1"), story("2")]);
        let user = viewer(vec![story("1")], vec![]);
        let plan = plan_section(Section::AllStories, &list, Some(&user));
        assert_eq!(plan.items.len(), 2);
        assert!(plan.items.iter().all(|i| !i.show_delete));
    }

    #[test]
    fn own_stories_always_show_delete() {
        let list = StoryList::default();
        let user = viewer(vec![story("1"), story("2")], vec![]);
        let plan = plan_section(Section::OwnStories, &list, Some(&user));
        assert_eq!(plan.items.len(), 2);
        assert!(plan.items.iter().all(|i| i.show_delete));
    }

    #[test]
    fn empty_own_stories_plans_exactly_the_placeholder() {
        let list = StoryList::default();
        let user = viewer(vec![], vec![]);
        let plan = plan_section(Section::OwnStories, &list, Some(&user));
        assert!(plan.items.is_empty());
        assert_eq!(plan.placeholder, Some(NO_OWN_STORIES_TEXT));
    }

    #[test]
    fn empty_favorites_plans_exactly_the_placeholder() {
        let list = StoryList::default();
        let user = viewer(vec![], vec![]);
        let plan = plan_section(Section::Favorites, &list, Some(&user));
        assert!(plan.items.is_empty());
        assert_eq!(plan.placeholder, Some(NO_FAVORITES_TEXT));
    }

    #[test]
    fn all_stories_has_no_empty_placeholder() {
        let plan = plan_section(Section::AllStories, &StoryList::default(), None);
        assert!(plan.items.is_empty());
        assert_eq!(plan.placeholder, None);
    }

    #[test]
    fn favorites_preserve_collection_order() {
        let list = StoryList::default();
        let user = viewer(vec![], vec![story("a"), story("b")]);
        let plan = plan_section(Section::Favorites, &list, Some(&user));
        let ids: Vec<_> = plan.items.iter().map(|i| i.story_id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        // Favoritos propios siempre renderizan estrella sólida
        assert!(plan.items.iter().all(|i| i.star == Some(StarVariant::Solid)));
    }

    #[test]
    fn deleting_from_collection_drops_exactly_that_item() {
        let mut user = viewer(vec![story("1"), story("2")], vec![]);
        user.remove_own_story("1");
        let plan = plan_section(Section::OwnStories, &StoryList::default(), Some(&user));
        let ids: Vec<_> = plan.items.iter().map(|i| i.story_id.as_str()).collect();
        assert_eq!(ids, ["2"]);
    }
}
