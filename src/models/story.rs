use serde::{Deserialize, Serialize};

use crate::utils::hostname;

/// Una historia publicada en el tablero. Inmutable una vez recibida del
/// backend; la identidad es `story_id`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Story {
    #[serde(rename = "storyId")]
    pub story_id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub username: String,
}

impl Story {
    /// Hostname de la URL, para mostrar junto al título.
    /// Nunca falla con URLs malformadas.
    pub fn host_name(&self) -> String {
        hostname::host_name(&self.url)
    }
}

/// Payload de una historia nueva antes de que el servidor asigne el id
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewStoryInput {
    pub title: String,
    pub author: String,
    pub url: String,
}

/// Colección ordenada de historias, la más reciente primero.
/// Invariante: sin `story_id` duplicados.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct StoryList {
    pub stories: Vec<Story>,
}

impl StoryList {
    pub fn new(stories: Vec<Story>) -> Self {
        let mut list = Self::default();
        for story in stories.into_iter().rev() {
            list.prepend(story);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Buscar una historia por id
    pub fn find(&self, story_id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.story_id == story_id)
    }

    /// Insertar al principio (orden más-reciente-primero tras un alta).
    /// Si el id ya existe, la inserción se descarta para mantener el
    /// invariante de no-duplicados.
    pub fn prepend(&mut self, story: Story) {
        if self.find(&story.story_id).is_some() {
            return;
        }
        self.stories.insert(0, story);
    }

    /// Quitar una historia por id. Un id ausente es un no-op y devuelve None.
    pub fn remove(&mut self, story_id: &str) -> Option<Story> {
        let idx = self.stories.iter().position(|s| s.story_id == story_id)?;
        Some(self.stories.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str) -> Story {
        Story {
            story_id: id.to_string(),
            title: format!("title-{}", id),
            author: "A".to_string(),
            url: "http://x.com".to_string(),
            username: "user".to_string(),
        }
    }

    #[test]
    fn prepend_keeps_most_recent_first() {
        let mut list = StoryList::default();
        list.prepend(story("1"));
        list.prepend(story("2"));
        assert_eq!(list.stories[0].story_id, "2");
        assert_eq!(list.stories[1].story_id, "1");
    }

    #[test]
    fn prepend_rejects_duplicate_ids() {
        let mut list = StoryList::new(vec![story("1"), story("2")]);
        list.prepend(story("1"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.stories[0].story_id, "1");
    }

    #[test]
    fn new_preserves_input_order() {
        let list = StoryList::new(vec![story("a"), story("b"), story("c")]);
        let ids: Vec<_> = list.stories.iter().map(|s| s.story_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut list = StoryList::new(vec![story("1")]);
        assert!(list.remove("nope").is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_returns_exactly_that_story() {
        let mut list = StoryList::new(vec![story("1"), story("2"), story("3")]);
        let removed = list.remove("2").unwrap();
        assert_eq!(removed.story_id, "2");
        assert!(list.find("2").is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn host_name_comes_from_url() {
        assert_eq!(story("1").host_name(), "x.com");
    }
}
