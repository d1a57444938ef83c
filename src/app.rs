// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::AppConfig;
use crate::dom::incremental::{
    prepend_story_incremental, remove_loading_indicator, update_notice, update_star_incremental,
};
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::app_state::{AppState, IncrementalUpdate, Section};
use crate::viewmodels::{SessionViewModel, StoryViewModel};
use crate::views::render_app;

/// Aplicación principal: posee el estado de la sesión y el elemento raíz.
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new(config: AppConfig) -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        state.set_section(match config.ui_config.default_section.as_str() {
            "own" => Section::OwnStories,
            "favorites" => Section::Favorites,
            _ => Section::AllStories,
        });

        // Suscribirse a cambios de estado para re-renderizar automáticamente.
        // Timeout(0) batchea múltiples updates del mismo tick.
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Self::start_background_init(&state);

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    /// Arranque en background: restaurar sesión desde storage y hacer el
    /// fetch inicial de historias. Corre una sola vez al cargar la página.
    fn start_background_init(state: &AppState) {
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let session_vm = SessionViewModel::new();
            match session_vm.restore_session().await {
                Ok(Some(user)) => {
                    log::info!("✅ Sesión restaurada desde storage: {}", user.username);
                    state.session.set_user(Some(user));
                }
                Ok(None) => {}
                Err(e) => {
                    // Sin sesión se puede seguir navegando; solo queda logueado
                    log::warn!("⚠️ Sesión no restaurada: {}", e);
                }
            }

            let story_vm = StoryViewModel::new();
            match story_vm.load_stories().await {
                Ok(list) => {
                    log::info!("✅ {} historias cargadas", list.len());
                    state.stories.set_list(list);
                }
                Err(e) => {
                    log::error!("❌ Error cargando historias: {}", e);
                    state.set_notice(Some(e.notice_text()));
                }
            }

            state.stories.set_loading(false);
            remove_loading_indicator();
            state.notify_change();
        });
    }

    /// Renderizar aplicación completa
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            // Limpiar contenido anterior
            set_inner_html(root, "");

            let app_view = render_app(&self.state)?;
            append_child(root, &app_view)?;
        }
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Actualizar UI cuando cambia el estado (re-render completo)
    pub fn update(&mut self) -> Result<(), JsValue> {
        self.render()
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        match update {
            IncrementalUpdate::StarToggle { story_id, is_favorite } => {
                update_star_incremental(&story_id, is_favorite)
            }
            IncrementalUpdate::Notice => update_notice(&self.state),
            IncrementalUpdate::PrependStory { story_id } => {
                match self.state.stories.find(&story_id) {
                    Some(story) => prepend_story_incremental(&self.state, &story),
                    // Ya no está en la lista; nada que insertar
                    None => Ok(()),
                }
            }
        }
    }
}
