// ============================================================================
// ERROR TAXONOMY (spec §6)
// ============================================================================
// `AppError` es el tipo de error compartido por ViewModels y Services.
// Los handlers lo convierten en una notificación descartable vía
// `notice_text()`. La falibilidad a nivel DOM permanece como `JsValue`.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Fallo de red: request falló, respuesta no-2xx o error de parseo.
    #[error("Network error: {0}")]
    Network(String),

    /// Campo de formulario requerido vacío. El valor es el nombre del campo.
    #[error("Validation error: {0}")]
    Validation(&'static str),

    /// El id de la historia no existe al resolver el click.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Falta sesión para una operación que la requiere.
    #[error("Authentication required")]
    Auth,

    /// localStorage no disponible o corrupto.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Texto descartable y amigable para mostrar en la notificación.
    pub fn notice_text(&self) -> String {
        match self {
            AppError::Network(msg) => format!("Error de red: {}", msg),
            AppError::Validation(field) => {
                format!("El campo '{}' es obligatorio.", field)
            }
            AppError::NotFound(id) => {
                format!("No se encontró la historia '{}'.", id)
            }
            AppError::Auth => "Necesitas iniciar sesión para continuar.".to_string(),
            AppError::Storage(msg) => format!("Error de almacenamiento: {}", msg),
        }
    }
}
