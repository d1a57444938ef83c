// ============================================================================
// STORY FEED APP - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica de negocio; cada operación async devuelve Result
// - Services: SOLO comunicación API + persistencia de credenciales
// - State: State Management con Rc<RefCell>, scoped a la sesión
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::AppConfig;
use crate::state::app_state::UpdateType;

// Slot global para mantener la instancia de App durante la sesión
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook primero para debugging útil
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if config.enable_logging {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 Story Feed App - Rust Puro + MVVM ({})", config.environment);

    // Crear y renderizar app
    let mut app = App::new(config)?;
    app.render()?;

    // Guardar app en el slot global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-renderizar la app (re-render completo)
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con un tipo específico de update
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let mut borrow = app_cell.borrow_mut();
        let app = match borrow.as_mut() {
            Some(app) => app,
            None => return,
        };

        let result = match update_type {
            UpdateType::FullRender => app.update(),
            UpdateType::Incremental(inc) => {
                log::debug!("🔄 Actualización incremental: {:?}", inc);
                match app.update_incremental(inc) {
                    Ok(()) => Ok(()),
                    Err(e) => {
                        // Si el update incremental no encuentra su target,
                        // caer al re-render completo
                        log::warn!("⚠️ Update incremental falló ({:?}), re-render completo", e);
                        app.update()
                    }
                }
            }
        };

        if let Err(e) = result {
            log::error!("❌ Error renderizando la app: {:?}", e);
        }
    });
}
