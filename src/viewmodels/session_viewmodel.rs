// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Lógica de negocio de login/signup/restore/logout.
// Devuelve valores; las vistas actualizan el estado.
// ============================================================================

use crate::error::AppError;
use crate::models::User;
use crate::services::{ApiClient, SessionService};

pub struct SessionViewModel {
    api_client: ApiClient,
    session_service: SessionService,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
            session_service: SessionService::new(),
        }
    }

    /// Login y persistencia de credenciales
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        if username.trim().is_empty() {
            return Err(AppError::Validation("username"));
        }
        if password.is_empty() {
            return Err(AppError::Validation("password"));
        }

        let user = self.api_client.login(username, password).await?;
        log::info!("✅ Sesión iniciada: {}", user.username);

        if let Some(token) = user.token.as_deref() {
            if let Err(e) = self.session_service.save_credentials(token, &user.username) {
                // La sesión sigue siendo válida aunque no se pueda persistir
                log::error!("❌ Error guardando credenciales: {}", e);
            }
        }

        Ok(user)
    }

    /// Alta de usuario nuevo y persistencia de credenciales
    pub async fn signup(&self, username: &str, password: &str, name: &str) -> Result<User, AppError> {
        if username.trim().is_empty() {
            return Err(AppError::Validation("username"));
        }
        if password.is_empty() {
            return Err(AppError::Validation("password"));
        }
        if name.trim().is_empty() {
            return Err(AppError::Validation("name"));
        }

        let user = self.api_client.signup(username, password, name).await?;
        log::info!("✅ Usuario registrado: {}", user.username);

        if let Some(token) = user.token.as_deref() {
            if let Err(e) = self.session_service.save_credentials(token, &user.username) {
                log::error!("❌ Error guardando credenciales: {}", e);
            }
        }

        Ok(user)
    }

    /// Restaurar sesión desde credenciales guardadas.
    /// Ok(None) cuando no hay credenciales en storage.
    pub async fn restore_session(&self) -> Result<Option<User>, AppError> {
        let creds = match self.session_service.load_credentials() {
            Some(c) => c,
            None => return Ok(None),
        };

        log::info!("💾 Credenciales encontradas en storage, restaurando sesión de {}...", creds.username);

        match self.api_client.get_user(&creds.username, &creds.token).await {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                // Token vencido o backend caído: limpiar para no reintentar en loop
                log::warn!("⚠️ No se pudo restaurar la sesión: {}", e);
                let _ = self.session_service.clear_credentials();
                Err(e)
            }
        }
    }

    /// Cerrar sesión y limpiar storage
    pub fn logout(&self) {
        log::info!("👋 Logout iniciado");
        if let Err(e) = self.session_service.clear_credentials() {
            log::error!("❌ Error limpiando credenciales: {}", e);
        }
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}
