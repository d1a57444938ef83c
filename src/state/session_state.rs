// ============================================================================
// SESSION STATE - Estado del usuario autenticado
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::User;

/// Estado de sesión. Vive dentro del AppState del App, no como singleton
/// de proceso: se construye en login/restore y se descarta en logout.
#[derive(Clone, Default)]
pub struct SessionState {
    pub user: Rc<RefCell<Option<User>>>,
    pub loading: Rc<RefCell<bool>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establecer usuario de la sesión
    pub fn set_user(&self, user: Option<User>) {
        *self.user.borrow_mut() = user;
    }

    /// Copia del usuario actual
    pub fn get_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.borrow().is_some()
    }

    /// Mutar el usuario in situ (favoritos, historias propias)
    pub fn update_user<F>(&self, updater: F)
    where
        F: FnOnce(&mut User),
    {
        if let Some(user) = self.user.borrow_mut().as_mut() {
            updater(user);
        }
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }
}
