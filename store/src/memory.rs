use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::Session;
use crate::session::{SessionStore, TOKEN_KEY, USERNAME_KEY};

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Session> {
        let values = self.values.lock().unwrap();
        let token = values.get(TOKEN_KEY)?.clone();
        let username = values.get(USERNAME_KEY)?.clone();
        Some(Session { username, token })
    }

    fn save(&self, session: &Session) {
        let mut values = self.values.lock().unwrap();
        values.insert(TOKEN_KEY.to_string(), session.token.clone());
        values.insert(USERNAME_KEY.to_string(), session.username.clone());
    }

    fn clear(&self) {
        let mut values = self.values.lock().unwrap();
        values.remove(TOKEN_KEY);
        values.remove(USERNAME_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());

        store.save(&Session::new("alice", "T1"));
        let restored = store.load().unwrap();
        assert_eq!(restored.username, "alice");
        assert_eq!(restored.token, "T1");
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let store = MemoryStore::new();
        store.save(&Session::new("alice", "T1"));
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_overwrites_previous_session() {
        let store = MemoryStore::new();
        store.save(&Session::new("alice", "T1"));
        store.save(&Session::new("bob", "T2"));

        let restored = store.load().unwrap();
        assert_eq!(restored.username, "bob");
        assert_eq!(restored.token, "T2");
    }
}
