// ============================================================================
// SESSION SERVICE - Persistencia de credenciales en localStorage
// ============================================================================
// Guarda token + username para restaurar la sesión al recargar la página.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::utils::constants::CREDENTIALS_STORAGE_KEY;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct StoredCredentials {
    pub token: String,
    pub username: String,
}

pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    /// Guardar credenciales tras un login/signup exitoso
    pub fn save_credentials(&self, token: &str, username: &str) -> Result<(), AppError> {
        let creds = StoredCredentials {
            token: token.to_string(),
            username: username.to_string(),
        };
        save_to_storage(CREDENTIALS_STORAGE_KEY, &creds)
    }

    /// Credenciales guardadas, si las hay
    pub fn load_credentials(&self) -> Option<StoredCredentials> {
        load_from_storage(CREDENTIALS_STORAGE_KEY)
    }

    /// Borrar credenciales en logout
    pub fn clear_credentials(&self) -> Result<(), AppError> {
        remove_from_storage(CREDENTIALS_STORAGE_KEY)
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
