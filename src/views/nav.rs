// ============================================================================
// NAV VIEW - Barra de navegación
// ============================================================================
// Los clicks de nav re-renderizan desde las colecciones en memoria;
// nunca disparan un fetch.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::app_state::{AppState, Section};
use crate::viewmodels::SessionViewModel;

pub fn render_nav(state: &AppState) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("main-nav").build();

    let brand = nav_link("nav-all", "Story Feed")?;
    {
        let state = state.clone();
        on_click(&brand, move |_e| {
            state.set_section(Section::AllStories);
            state.notify_change();
        })?;
    }
    append_child(&nav, &brand)?;

    if state.session.is_logged_in() {
        let submit = nav_link("nav-submit", "submit")?;
        {
            let state = state.clone();
            on_click(&submit, move |_e| {
                let visible = *state.show_submit_form.borrow();
                *state.show_submit_form.borrow_mut() = !visible;
                state.notify_change();
            })?;
        }
        append_child(&nav, &submit)?;

        let own = nav_link("nav-my-stories", "my stories")?;
        {
            let state = state.clone();
            on_click(&own, move |_e| {
                state.set_section(Section::OwnStories);
                state.notify_change();
            })?;
        }
        append_child(&nav, &own)?;

        let favorites = nav_link("nav-favorites", "favorites")?;
        {
            let state = state.clone();
            on_click(&favorites, move |_e| {
                state.set_section(Section::Favorites);
                state.notify_change();
            })?;
        }
        append_child(&nav, &favorites)?;
    }

    // Lado derecho: login o logout según la sesión
    let user_area = ElementBuilder::new("div")?.class("nav-user-area").build();

    match state.session.get_user() {
        Some(user) => {
            let profile = ElementBuilder::new("span")?
                .class("nav-username")
                .text(&user.username)
                .build();
            append_child(&user_area, &profile)?;

            let logout = nav_link("nav-logout", "logout")?;
            {
                let state = state.clone();
                on_click(&logout, move |_e| {
                    let vm = SessionViewModel::new();
                    vm.logout();
                    state.session.set_user(None);
                    state.set_section(Section::AllStories);
                    *state.show_submit_form.borrow_mut() = false;
                    state.notify_change();
                })?;
            }
            append_child(&user_area, &logout)?;
        }
        None => {
            let login = nav_link("nav-login", "login/signup")?;
            {
                let state = state.clone();
                on_click(&login, move |_e| {
                    let visible = *state.show_login_form.borrow();
                    *state.show_login_form.borrow_mut() = !visible;
                    state.notify_change();
                })?;
            }
            append_child(&user_area, &login)?;
        }
    }

    append_child(&nav, &user_area)?;
    Ok(nav)
}

fn nav_link(id: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("a")?
        .id(id)?
        .class("nav-link")
        .attr("href", "#")?
        .text(text)
        .build())
}
