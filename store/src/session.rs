//! # Session persistence
//!
//! The session survives page reloads as two plain strings — the bearer token
//! and the username — stored under fixed keys in durable browser storage.
//! [`SessionStore`] abstracts over where those strings live so the same
//! restore/save/clear logic works against `window.localStorage` on the web
//! ([`crate::LocalStorage`]) and an in-memory map in tests and native builds
//! ([`crate::MemoryStore`]).
//!
//! The stored session is read once at startup; a missing or partial pair
//! means "no session" and the app renders the unauthenticated view.

use crate::models::Session;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the username.
pub const USERNAME_KEY: &str = "username";

/// Durable storage for the two session strings.
pub trait SessionStore {
    /// Restore a persisted session, if both keys are present.
    fn load(&self) -> Option<Session>;
    /// Persist the session under the fixed keys.
    fn save(&self, session: &Session);
    /// Remove both keys.
    fn clear(&self);
}
