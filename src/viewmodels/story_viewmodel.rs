// ============================================================================
// STORY VIEWMODEL - LÓGICA DEL TABLERO DE HISTORIAS
// ============================================================================
// Carga, alta, baja y favoritos. Cada operación async devuelve Result;
// los handlers de las vistas deciden qué mutar según el resultado.
// ============================================================================

use crate::error::AppError;
use crate::models::{NewStoryInput, Story, StoryList, User};
use crate::services::ApiClient;

pub struct StoryViewModel {
    api_client: ApiClient,
}

impl StoryViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Fetch inicial de todas las historias
    pub async fn load_stories(&self) -> Result<StoryList, AppError> {
        log::info!("📰 Obteniendo historias del backend...");
        let stories = self.api_client.get_stories().await?;
        Ok(StoryList::new(stories))
    }

    /// Publicar una historia nueva. Valida campos antes de tocar la red.
    pub async fn submit_story(&self, user: &User, input: &NewStoryInput) -> Result<Story, AppError> {
        if input.title.trim().is_empty() {
            return Err(AppError::Validation("title"));
        }
        if input.author.trim().is_empty() {
            return Err(AppError::Validation("author"));
        }
        if input.url.trim().is_empty() {
            return Err(AppError::Validation("url"));
        }

        let token = user.token.as_deref().ok_or(AppError::Auth)?;
        self.api_client.add_story(token, input).await
    }

    /// Borrar una historia propia en el backend
    pub async fn delete_story(&self, user: &User, story_id: &str) -> Result<(), AppError> {
        let token = user.token.as_deref().ok_or(AppError::Auth)?;
        self.api_client.remove_story(token, story_id).await
    }

    /// Alternar favorito en el backend según la pertenencia ACTUAL en el
    /// modelo de datos. Devuelve el nuevo estado de favorito.
    /// El caller muta `favorites` y el icono solo si esto resuelve Ok.
    pub async fn toggle_favorite(&self, user: &User, story: &Story) -> Result<bool, AppError> {
        if user.is_favorite(&story.story_id) {
            self.api_client.remove_favorite(user, &story.story_id).await?;
            log::info!("☆ Favorito quitado: {}", story.story_id);
            Ok(false)
        } else {
            self.api_client.add_favorite(user, &story.story_id).await?;
            log::info!("⭐ Favorito agregado: {}", story.story_id);
            Ok(true)
        }
    }
}

impl Default for StoryViewModel {
    fn default() -> Self {
        Self::new()
    }
}
