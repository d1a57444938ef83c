// ============================================================================
// LOGIN VIEW - Formularios de login y registro
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, get_element_by_id, on_submit, ElementBuilder};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::viewmodels::SessionViewModel;

/// Renderizar el área de cuentas: formulario de login y de registro.
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("section")?
        .class("account-forms")
        .build();

    // --- Login ---
    let login_form = ElementBuilder::new("form")?
        .id("login-form")?
        .class("login-form")
        .build();

    let login_title = ElementBuilder::new("h4")?.text("Login").build();
    append_child(&login_form, &login_title)?;

    append_child(&login_form, &field("login-username", "username", "text")?)?;
    append_child(&login_form, &field("login-password", "password", "password")?)?;

    let login_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .text("login")
        .build();
    append_child(&login_form, &login_btn)?;

    {
        let state = state.clone();
        on_submit(&login_form, move |e| {
            e.prevent_default();
            let state = state.clone();
            spawn_local(async move {
                login_flow(&state).await;
            });
        })?;
    }

    // --- Signup ---
    let signup_form = ElementBuilder::new("form")?
        .id("signup-form")?
        .class("signup-form")
        .build();

    let signup_title = ElementBuilder::new("h4")?.text("Create Account").build();
    append_child(&signup_form, &signup_title)?;

    append_child(&signup_form, &field("signup-name", "name", "text")?)?;
    append_child(&signup_form, &field("signup-username", "username", "text")?)?;
    append_child(&signup_form, &field("signup-password", "password", "password")?)?;

    let signup_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-signup")
        .text("create account")
        .build();
    append_child(&signup_form, &signup_btn)?;

    {
        let state = state.clone();
        on_submit(&signup_form, move |e| {
            e.prevent_default();
            let state = state.clone();
            spawn_local(async move {
                signup_flow(&state).await;
            });
        })?;
    }

    append_child(&container, &login_form)?;
    append_child(&container, &signup_form)?;
    Ok(container)
}

fn field(id: &str, label_text: &str, input_type: &str) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();
    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
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

async fn login_flow(state: &AppState) {
    if state.session.is_loading() {
        return;
    }
    state.session.set_loading(true);

    let vm = SessionViewModel::new();
    let result = vm.login(&read_field("login-username"), &read_field("login-password")).await;

    state.session.set_loading(false);

    match result {
        Ok(user) => {
            state.session.set_user(Some(user));
            *state.show_login_form.borrow_mut() = false;
            state.set_notice(None);
            state.notify_change();
        }
        Err(e) => {
            log::error!("❌ Error en login: {}", e);
            state.set_notice(Some(e.notice_text()));
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Notice));
        }
    }
}

async fn signup_flow(state: &AppState) {
    if state.session.is_loading() {
        return;
    }
    state.session.set_loading(true);

    let vm = SessionViewModel::new();
    let result = vm
        .signup(
            &read_field("signup-username"),
            &read_field("signup-password"),
            &read_field("signup-name"),
        )
        .await;

    state.session.set_loading(false);

    match result {
        Ok(user) => {
            state.session.set_user(Some(user));
            *state.show_login_form.borrow_mut() = false;
            state.set_notice(None);
            state.notify_change();
        }
        Err(e) => {
            log::error!("❌ Error en signup: {}", e);
            state.set_notice(Some(e.notice_text()));
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Notice));
        }
    }
}
