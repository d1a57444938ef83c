use serde::{Deserialize, Serialize};

use crate::models::story::Story;

/// El usuario autenticado de la sesión. Se construye en login/restore,
/// se muta al favoritar y al publicar/borrar historias, y se descarta
/// en logout.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub username: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Historias publicadas por este usuario
    #[serde(default)]
    pub own_stories: Vec<Story>,
    /// Favoritos del usuario; sin duplicados por story_id
    #[serde(default)]
    pub favorites: Vec<Story>,
}

impl User {
    /// El modelo de datos, no la clase CSS del icono, decide si una
    /// historia ya es favorita.
    pub fn is_favorite(&self, story_id: &str) -> bool {
        self.favorites.iter().any(|s| s.story_id == story_id)
    }

    /// Agregar a favoritos. Idempotente: un id ya presente no se duplica.
    pub fn add_favorite(&mut self, story: Story) {
        if !self.is_favorite(&story.story_id) {
            self.favorites.push(story);
        }
    }

    /// Quitar de favoritos. Un id ausente es un no-op.
    pub fn remove_favorite(&mut self, story_id: &str) {
        self.favorites.retain(|s| s.story_id != story_id);
    }

    pub fn add_own_story(&mut self, story: Story) {
        if !self.own_stories.iter().any(|s| s.story_id == story.story_id) {
            self.own_stories.insert(0, story);
        }
    }

    pub fn remove_own_story(&mut self, story_id: &str) {
        self.own_stories.retain(|s| s.story_id != story_id);
    }

    pub fn owns(&self, story_id: &str) -> bool {
        self.own_stories.iter().any(|s| s.story_id == story_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str) -> Story {
        Story {
            story_id: id.to_string(),
            title: "T".to_string(),
            author: "A".to_string(),
            url: "http://x.com".to_string(),
            username: "poster".to_string(),
        }
    }

    fn user() -> User {
        User {
            username: "viewer".to_string(),
            name: "Viewer".to_string(),
            token: Some("tok".to_string()),
            own_stories: Vec::new(),
            favorites: Vec::new(),
        }
    }

    #[test]
    fn add_favorite_is_idempotent() {
        let mut u = user();
        u.add_favorite(story("1"));
        u.add_favorite(story("1"));
        assert_eq!(u.favorites.len(), 1);
        assert!(u.is_favorite("1"));
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let mut u = user();
        let before = u.favorites.clone();
        u.add_favorite(story("1"));
        u.remove_favorite("1");
        assert_eq!(u.favorites, before);
        assert!(!u.is_favorite("1"));
    }

    #[test]
    fn remove_absent_favorite_is_noop() {
        let mut u = user();
        u.add_favorite(story("1"));
        u.remove_favorite("2");
        assert_eq!(u.favorites.len(), 1);
    }

    #[test]
    fn own_stories_track_ownership() {
        let mut u = user();
        u.add_own_story(story("1"));
        assert!(u.owns("1"));
        u.remove_own_story("1");
        assert!(!u.owns("1"));
    }
}
