// ============================================================================
// STORY STATE - La lista de historias conocida por la sesión
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Story, StoryList};

#[derive(Clone, Default)]
pub struct StoryState {
    pub list: Rc<RefCell<StoryList>>,
    pub loading: Rc<RefCell<bool>>,
}

impl StoryState {
    pub fn new() -> Self {
        Self {
            list: Rc::new(RefCell::new(StoryList::default())),
            // Cargando hasta que termine el fetch inicial
            loading: Rc::new(RefCell::new(true)),
        }
    }

    pub fn set_list(&self, list: StoryList) {
        *self.list.borrow_mut() = list;
    }

    /// Copia de la lista actual
    pub fn get_list(&self) -> StoryList {
        self.list.borrow().clone()
    }

    pub fn find(&self, story_id: &str) -> Option<Story> {
        self.list.borrow().find(story_id).cloned()
    }

    pub fn prepend(&self, story: Story) {
        self.list.borrow_mut().prepend(story);
    }

    pub fn remove(&self, story_id: &str) -> Option<Story> {
        self.list.borrow_mut().remove(story_id)
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }
}
