// ============================================================================
// NOTICE VIEW - Aviso inline descartable
// ============================================================================
// Los fallos de red/validación se muestran acá en vez de dejar la UI en
// un estado viejo sin explicación. Nada es fatal: se descarta y se
// reintenta la acción.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};

pub fn render_notice(state: &AppState) -> Result<Element, JsValue> {
    let notice = state.notice.borrow().clone();

    let banner = ElementBuilder::new("div")?
        .id("app-notice")?
        .class(if notice.is_some() {
            "app-notice"
        } else {
            "app-notice hidden"
        })
        .build();

    let text = ElementBuilder::new("span")?
        .class("notice-text")
        .text(notice.as_deref().unwrap_or(""))
        .build();
    append_child(&banner, &text)?;

    let dismiss = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("notice-dismiss")
        .text("\u{00d7}")
        .build();
    append_child(&banner, &dismiss)?;

    {
        let state = state.clone();
        on_click(&dismiss, move |_e| {
            state.set_notice(None);
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Notice));
        })?;
    }

    Ok(banner)
}
