// ============================================================================
// API DTOs - Envelopes del formato de wire del backend
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::story::{NewStoryInput, Story};
use crate::models::user::User;

/// GET /stories
#[derive(Deserialize, Debug)]
pub struct StoriesResponse {
    pub stories: Vec<Story>,
}

/// POST /stories
#[derive(Serialize, Debug)]
pub struct AddStoryRequest {
    pub token: String,
    pub story: NewStoryInput,
}

/// Envelope de una historia individual (alta y baja)
#[derive(Deserialize, Debug)]
pub struct StoryResponse {
    pub story: Story,
}

/// Credenciales para POST /login
#[derive(Serialize, Debug)]
pub struct LoginRequest {
    pub user: Credentials,
}

#[derive(Serialize, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Payload para POST /signup
#[derive(Serialize, Debug)]
pub struct SignupRequest {
    pub user: SignupUser,
}

#[derive(Serialize, Debug)]
pub struct SignupUser {
    pub username: String,
    pub password: String,
    pub name: String,
}

/// Respuesta de login/signup y de las mutaciones de favoritos
#[derive(Deserialize, Debug)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    pub user: ApiUser,
}

/// Usuario tal como viaja por el wire: las historias propias llegan
/// bajo el campo `stories`
#[derive(Deserialize, Debug)]
pub struct ApiUser {
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub stories: Vec<Story>,
    #[serde(default)]
    pub favorites: Vec<Story>,
}

impl ApiUser {
    /// Convertir al modelo de sesión, adjuntando el token
    pub fn into_user(self, token: Option<String>) -> User {
        User {
            username: self.username,
            name: self.name,
            token,
            own_stories: self.stories,
            favorites: self.favorites,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_user_maps_stories_to_own_stories() {
        let json = r#"{
            "username": "poster",
            "name": "Poster",
            "stories": [{"storyId":"1","title":"T","author":"A","url":"http://x.com","username":"poster"}],
            "favorites": []
        }"#;
        let api_user: ApiUser = serde_json::from_str(json).unwrap();
        let user = api_user.into_user(Some("tok".to_string()));
        assert_eq!(user.own_stories.len(), 1);
        assert_eq!(user.own_stories[0].story_id, "1");
        assert_eq!(user.token.as_deref(), Some("tok"));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let json = r#"{"username": "u", "name": "N"}"#;
        let api_user: ApiUser = serde_json::from_str(json).unwrap();
        assert!(api_user.stories.is_empty());
        assert!(api_user.favorites.is_empty());
    }
}
