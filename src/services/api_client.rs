// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

use crate::error::AppError;
use crate::models::api::{
    AddStoryRequest, AuthResponse, Credentials, LoginRequest, SignupRequest, SignupUser,
    StoriesResponse, StoryResponse,
};
use crate::models::{NewStoryInput, Story, User};
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Listar todas las historias
    pub async fn get_stories(&self) -> Result<Vec<Story>, AppError> {
        let url = format!("{}/stories", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(AppError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .json::<StoriesResponse>()
            .await
            .map_err(|e| AppError::Network(format!("Parse error: {}", e)))?;

        log::info!("📰 {} historias recibidas del backend", body.stories.len());
        Ok(body.stories)
    }

    /// Publicar una historia nueva; el servidor asigna el story_id
    pub async fn add_story(&self, token: &str, input: &NewStoryInput) -> Result<Story, AppError> {
        let url = format!("{}/stories", self.base_url);
        let request = AddStoryRequest {
            token: token.to_string(),
            story: input.clone(),
        };

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| AppError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(AppError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .json::<StoryResponse>()
            .await
            .map_err(|e| AppError::Network(format!("Parse error: {}", e)))?;

        log::info!("✅ Historia publicada: {}", body.story.story_id);
        Ok(body.story)
    }

    /// Borrar una historia propia
    pub async fn remove_story(&self, token: &str, story_id: &str) -> Result<(), AppError> {
        let url = format!("{}/stories/{}?token={}", self.base_url, story_id, token);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(AppError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        log::info!("🗑️ Historia {} borrada en el backend", story_id);
        Ok(())
    }

    /// Login con credenciales
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let url = format!("{}/login", self.base_url);
        let request = LoginRequest {
            user: Credentials {
                username: username.to_string(),
                password: password.to_string(),
            },
        };

        log::info!("🔐 Iniciando sesión para usuario: {}", username);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| AppError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(AppError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .json::<AuthResponse>()
            .await
            .map_err(|e| AppError::Network(format!("Parse error: {}", e)))?;

        let token = body.token.clone();
        Ok(body.user.into_user(token))
    }

    /// Registrar un usuario nuevo
    pub async fn signup(&self, username: &str, password: &str, name: &str) -> Result<User, AppError> {
        let url = format!("{}/signup", self.base_url);
        let request = SignupRequest {
            user: SignupUser {
                username: username.to_string(),
                password: password.to_string(),
                name: name.to_string(),
            },
        };

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| AppError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(AppError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .json::<AuthResponse>()
            .await
            .map_err(|e| AppError::Network(format!("Parse error: {}", e)))?;

        let token = body.token.clone();
        Ok(body.user.into_user(token))
    }

    /// Recuperar el perfil completo con un token guardado (restore)
    pub async fn get_user(&self, username: &str, token: &str) -> Result<User, AppError> {
        let url = format!("{}/users/{}?token={}", self.base_url, username, token);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(AppError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .json::<AuthResponse>()
            .await
            .map_err(|e| AppError::Network(format!("Parse error: {}", e)))?;

        Ok(body.user.into_user(Some(token.to_string())))
    }

    /// Marcar una historia como favorita en el backend
    pub async fn add_favorite(&self, user: &User, story_id: &str) -> Result<(), AppError> {
        self.favorite_request("POST", user, story_id).await
    }

    /// Quitar una historia de favoritos en el backend
    pub async fn remove_favorite(&self, user: &User, story_id: &str) -> Result<(), AppError> {
        self.favorite_request("DELETE", user, story_id).await
    }

    async fn favorite_request(&self, method: &str, user: &User, story_id: &str) -> Result<(), AppError> {
        let token = user.token.as_deref().ok_or(AppError::Auth)?;
        let url = format!(
            "{}/users/{}/favorites/{}?token={}",
            self.base_url, user.username, story_id, token
        );

        let request = match method {
            "DELETE" => Request::delete(&url),
            _ => Request::post(&url),
        };

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(AppError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
