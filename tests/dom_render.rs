// Tests de render contra el DOM real (wasm-pack test --headless)

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use story_feed_pwa::dom::{create_element, update_star_incremental};
use story_feed_pwa::models::{Story, StoryList, User};
use story_feed_pwa::state::app_state::{AppState, Section};
use story_feed_pwa::views::{populate_section, render_story_item, StoryItem};

wasm_bindgen_test_configure!(run_in_browser);

fn story(id: &str) -> Story {
    Story {
        story_id: id.to_string(),
        title: format!("title-{}", id),
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

#[wasm_bindgen_test]
fn story_item_has_identifying_wrapper_and_fields() {
    let state = AppState::new();
    let plan = StoryItem::build(&story("abc"), None, false);
    let item = render_story_item(&plan, &state).unwrap();

    assert_eq!(item.tag_name().to_lowercase(), "li");
    assert_eq!(item.get_attribute("id").as_deref(), Some("abc"));

    let link = item.query_selector(".story-link").unwrap().unwrap();
    assert_eq!(link.text_content().as_deref(), Some("title-abc"));
    assert_eq!(link.get_attribute("href").as_deref(), Some("http://x.com"));

    let hostname = item.query_selector(".story-hostname").unwrap().unwrap();
    assert_eq!(hostname.text_content().as_deref(), Some("(x.com)"));

    // Sin sesión no hay estrella; sin flag no hay trash
    assert!(item.query_selector(".star").unwrap().is_none());
    assert!(item.query_selector(".trash-can").unwrap().is_none());
}

#[wasm_bindgen_test]
fn delete_flag_adds_trash_control() {
    let state = AppState::new();
    let plan = StoryItem::build(&story("abc"), None, true);
    let item = render_story_item(&plan, &state).unwrap();
    assert!(item.query_selector(".trash-can").unwrap().is_some());
}

#[wasm_bindgen_test]
fn star_class_derives_from_favorite_membership() {
    let state = AppState::new();
    let user = viewer(vec![], vec![story("fav")]);

    let solid_plan = StoryItem::build(&story("fav"), Some(&user), false);
    let solid = render_story_item(&solid_plan, &state).unwrap();
    let solid_icon = solid.query_selector(".star i").unwrap().unwrap();
    assert!(solid_icon.class_list().contains("fa-solid"));

    let outline_plan = StoryItem::build(&story("other"), Some(&user), false);
    let outline = render_story_item(&outline_plan, &state).unwrap();
    let outline_icon = outline.query_selector(".star i").unwrap().unwrap();
    assert!(outline_icon.class_list().contains("fa-regular"));
}

#[wasm_bindgen_test]
fn empty_own_stories_renders_exactly_one_placeholder() {
    let state = AppState::new();
    state.session.set_user(Some(viewer(vec![], vec![])));

    let container = create_element("ol").unwrap();
    populate_section(&container, &state, Section::OwnStories).unwrap();

    assert_eq!(container.child_element_count(), 1);
    let placeholder = container.query_selector(".empty-placeholder").unwrap().unwrap();
    assert_eq!(placeholder.text_content().as_deref(), Some("No Stories to Show!"));
    assert!(container.query_selector("li").unwrap().is_none());
}

#[wasm_bindgen_test]
fn empty_favorites_renders_exactly_one_placeholder() {
    let state = AppState::new();
    state.session.set_user(Some(viewer(vec![], vec![])));

    let container = create_element("ol").unwrap();
    populate_section(&container, &state, Section::Favorites).unwrap();

    assert_eq!(container.child_element_count(), 1);
    let placeholder = container.query_selector(".empty-placeholder").unwrap().unwrap();
    assert_eq!(placeholder.text_content().as_deref(), Some("No favorites!"));
}

#[wasm_bindgen_test]
fn all_stories_render_in_collection_order_without_delete() {
    let state = AppState::new();
    state.stories.set_list(StoryList::new(vec![story("1"), story("2"), story("3")]));

    let container = create_element("ol").unwrap();
    populate_section(&container, &state, Section::AllStories).unwrap();

    assert_eq!(container.child_element_count(), 3);
    let first = container.first_element_child().unwrap();
    assert_eq!(first.get_attribute("id").as_deref(), Some("1"));
    assert!(container.query_selector(".trash-can").unwrap().is_none());
}

#[wasm_bindgen_test]
fn toggling_star_twice_restores_the_icon_class() {
    let state = AppState::new();
    let user = viewer(vec![], vec![]);
    let plan = StoryItem::build(&story("toggle-me"), Some(&user), false);
    let item = render_story_item(&plan, &state).unwrap();

    // update_star_incremental busca por id, necesita el item en el documento
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    body.append_child(&item).unwrap();

    let icon = item.query_selector(".star i").unwrap().unwrap();
    assert!(icon.class_list().contains("fa-regular"));

    update_star_incremental("toggle-me", true).unwrap();
    assert!(icon.class_list().contains("fa-solid"));
    assert!(!icon.class_list().contains("fa-regular"));

    update_star_incremental("toggle-me", false).unwrap();
    assert!(icon.class_list().contains("fa-regular"));
    assert!(!icon.class_list().contains("fa-solid"));

    item.remove();
}

#[wasm_bindgen_test]
fn own_stories_render_with_delete_control() {
    let state = AppState::new();
    state.session.set_user(Some(viewer(vec![story("mine")], vec![])));

    let container = create_element("ol").unwrap();
    populate_section(&container, &state, Section::OwnStories).unwrap();

    assert_eq!(container.child_element_count(), 1);
    assert!(container.query_selector(".trash-can").unwrap().is_some());
}
