// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{SessionState, StoryState};

/// Sección visible del tablero. Las tres vistas son mutuamente
/// excluyentes: mostrar una oculta las otras dos.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    AllStories,
    OwnStories,
    Favorites,
}

/// Tipo de actualización del DOM
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (login/logout, cambio de sección, borrados)
    FullRender,
}

/// Actualización incremental específica
#[derive(Clone, Debug)]
pub enum IncrementalUpdate {
    /// Cambiar el icono de favorito de una historia concreta
    StarToggle { story_id: String, is_favorite: bool },
    /// Mostrar/ocultar el aviso descartable
    Notice,
    /// Insertar la historia recién publicada al principio de la lista
    PrependStory { story_id: String },
}

/// Estado global de la aplicación. Sesión-scoped: lo posee el App, se
/// construye al arrancar y los handlers reciben clones (Rc compartidos).
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub stories: StoryState,

    // UI State
    pub section: Rc<RefCell<Section>>,
    pub show_submit_form: Rc<RefCell<bool>>,
    pub show_login_form: Rc<RefCell<bool>>,
    pub notice: Rc<RefCell<Option<String>>>,
    /// Guarda contra doble submit mientras hay una mutación en vuelo
    pub submitting: Rc<RefCell<bool>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            stories: StoryState::new(),
            section: Rc::new(RefCell::new(Section::AllStories)),
            show_submit_form: Rc::new(RefCell::new(false)),
            show_login_form: Rc::new(RefCell::new(false)),
            notice: Rc::new(RefCell::new(None)),
            submitting: Rc::new(RefCell::new(false)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_change(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    /// Cambiar la sección visible
    pub fn set_section(&self, section: Section) {
        *self.section.borrow_mut() = section;
    }

    pub fn current_section(&self) -> Section {
        *self.section.borrow()
    }

    /// Publicar un aviso descartable en la UI
    pub fn set_notice(&self, text: Option<String>) {
        *self.notice.borrow_mut() = text;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_defaults_to_all_stories() {
        let state = AppState::new();
        assert_eq!(state.current_section(), Section::AllStories);
    }

    #[test]
    fn subscribers_fire_on_notify() {
        let state = AppState::new();
        let fired = Rc::new(RefCell::new(0));
        let fired_clone = fired.clone();
        state.subscribe_to_changes(move || {
            *fired_clone.borrow_mut() += 1;
        });
        state.notify_change();
        state.notify_change();
        assert_eq!(*fired.borrow(), 2);
    }

    #[test]
    fn notice_can_be_set_and_dismissed() {
        let state = AppState::new();
        state.set_notice(Some("oops".to_string()));
        assert_eq!(state.notice.borrow().as_deref(), Some("oops"));
        state.set_notice(None);
        assert!(state.notice.borrow().is_none());
    }
}
