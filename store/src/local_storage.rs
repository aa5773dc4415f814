//! # Browser-local session storage
//!
//! [`LocalStorage`] is the [`SessionStore`] implementation used on the web
//! platform. It keeps the token and username in `window.localStorage` under
//! the fixed keys from [`crate::session`], which is what makes a session
//! survive a reload or a closed tab.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled degrades to
//! "no persisted session" rather than crashing; the server remains the
//! authority on whether the token is still good.

use crate::models::Session;
use crate::session::{SessionStore, TOKEN_KEY, USERNAME_KEY};

/// `window.localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorage {
    fn load(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let username = storage.get_item(USERNAME_KEY).ok().flatten()?;
        Some(Session { username, token })
    }

    fn save(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        let _ = storage.set_item(USERNAME_KEY, &session.username);
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
    }
}
