//! # In-memory implementation of [`MoviesApi`]
//!
//! [`MemoryApi`] mirrors the backend's observable semantics without a network:
//! accounts are username/password pairs, login mints opaque bearer tokens,
//! and each user owns one ordered favorites list keyed by title. It backs the
//! test suite and serves as a native fallback behind the same trait as the
//! real backend.
//!
//! Semantics held to match the server:
//! - `register` rejects an existing username; it does not authenticate.
//! - `login` rejects unknown users and wrong passwords; each success mints a
//!   fresh token.
//! - `add` rejects a duplicate title (titles are the identifier, so duplicates
//!   are unsupported).
//! - `delete` and `update` of a title that is not present fail and leave the
//!   list unchanged.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use store::Movie;

use crate::client::{MoviesApi, TokenResponse};
use crate::error::ApiError;

#[derive(Debug, Default)]
struct Inner {
    /// username -> password
    users: HashMap<String, String>,
    /// token -> username
    tokens: HashMap<String, String>,
    /// username -> ordered favorites
    favorites: HashMap<String, Vec<Movie>>,
    next_token: u64,
}

/// In-memory MoviesApi for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-seeded with one account.
    pub fn with_user(username: &str, password: &str) -> Self {
        let api = Self::new();
        {
            let mut inner = api.inner.lock().unwrap();
            inner.users.insert(username.to_string(), password.to_string());
            inner.favorites.insert(username.to_string(), Vec::new());
        }
        api
    }

    fn username_for(inner: &Inner, token: &str) -> Option<String> {
        inner.tokens.get(token).cloned()
    }
}

impl MoviesApi for MemoryApi {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.users.get(username) {
            Some(stored) if stored == password => {}
            _ => return Err(ApiError::auth("Login failed")),
        }

        inner.next_token += 1;
        let token = format!("token-{}", inner.next_token);
        inner.tokens.insert(token.clone(), username.to_string());

        Ok(TokenResponse {
            access_token: token,
            token_type: "bearer".to_string(),
        })
    }

    async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.contains_key(username) {
            return Err(ApiError::auth("Register failed"));
        }
        inner.users.insert(username.to_string(), password.to_string());
        inner.favorites.insert(username.to_string(), Vec::new());
        Ok(())
    }

    async fn list_favorites(&self, token: &str) -> Result<Vec<Movie>, ApiError> {
        let inner = self.inner.lock().unwrap();
        let username = Self::username_for(&inner, token)
            .ok_or_else(|| ApiError::fetch("Failed to fetch favorites"))?;
        Ok(inner.favorites.get(&username).cloned().unwrap_or_default())
    }

    async fn add_favorite(&self, token: &str, movie: &Movie) -> Result<Movie, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        let username = Self::username_for(&inner, token)
            .ok_or_else(|| ApiError::write("Failed to add favorite"))?;

        let list = inner.favorites.entry(username).or_default();
        if list.iter().any(|m| m.title == movie.title) {
            return Err(ApiError::write("Failed to add favorite"));
        }
        list.push(movie.clone());
        Ok(movie.clone())
    }

    async fn delete_favorite(&self, token: &str, title: &str) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        let username = Self::username_for(&inner, token)
            .ok_or_else(|| ApiError::write("Failed to delete favorite"))?;

        let list = inner.favorites.entry(username).or_default();
        if !list.iter().any(|m| m.title == title) {
            return Err(ApiError::write("Failed to delete favorite"));
        }
        list.retain(|m| m.title != title);
        Ok(())
    }

    async fn update_favorite(
        &self,
        token: &str,
        old_title: &str,
        movie: &Movie,
    ) -> Result<Movie, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        let username = Self::username_for(&inner, token)
            .ok_or_else(|| ApiError::write("Failed to update favorite"))?;

        let list = inner.favorites.entry(username).or_default();
        if !list.iter().any(|m| m.title == old_title) {
            return Err(ApiError::write("Failed to update favorite"));
        }
        // A rename must not collide with another entry's title.
        if movie.title != old_title && list.iter().any(|m| m.title == movie.title) {
            return Err(ApiError::write("Failed to update favorite"));
        }
        for m in list.iter_mut() {
            if m.title == old_title {
                *m = movie.clone();
                break;
            }
        }
        Ok(movie.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            title: title.to_string(),
            year: 2010,
            genre: "Sci-Fi".to_string(),
            rating: 5,
            description: "Mind-bending".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_then_list_matches_server_state() {
        let api = MemoryApi::with_user("alice", "secret");
        let token = api.login("alice", "secret").await.unwrap().access_token;
        api.add_favorite(&token, &movie("Inception")).await.unwrap();

        // A fresh login sees exactly the list the server holds.
        let token2 = api.login("alice", "secret").await.unwrap().access_token;
        let listed = api.list_favorites(&token2).await.unwrap();
        assert_eq!(listed, vec![movie("Inception")]);
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let api = MemoryApi::with_user("alice", "secret");

        let err = api.login("alice", "wrong").await.unwrap_err();
        assert_eq!(err, ApiError::auth("Login failed"));

        let err = api.login("nobody", "secret").await.unwrap_err();
        assert_eq!(err, ApiError::auth("Login failed"));
    }

    #[tokio::test]
    async fn test_register_rejects_existing_username() {
        let api = MemoryApi::new();
        api.register("alice", "secret").await.unwrap();

        let err = api.register("alice", "other").await.unwrap_err();
        assert_eq!(err, ApiError::auth("Register failed"));
    }

    #[tokio::test]
    async fn test_register_does_not_authenticate() {
        let api = MemoryApi::new();
        api.register("alice", "secret").await.unwrap();

        // No token exists until login.
        let err = api.list_favorites("token-1").await.unwrap_err();
        assert_eq!(err, ApiError::fetch("Failed to fetch favorites"));

        api.login("alice", "secret").await.unwrap();
    }

    #[tokio::test]
    async fn test_add_appears_exactly_once() {
        let api = MemoryApi::with_user("alice", "secret");
        let token = api.login("alice", "secret").await.unwrap().access_token;

        let stored = api.add_favorite(&token, &movie("Inception")).await.unwrap();
        assert_eq!(stored, movie("Inception"));

        let listed = api.list_favorites(&token).await.unwrap();
        let count = listed.iter().filter(|m| m.title == "Inception").count();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_duplicate_title_rejected() {
        let api = MemoryApi::with_user("alice", "secret");
        let token = api.login("alice", "secret").await.unwrap().access_token;

        api.add_favorite(&token, &movie("Inception")).await.unwrap();
        let err = api.add_favorite(&token, &movie("Inception")).await.unwrap_err();
        assert_eq!(err, ApiError::write("Failed to add favorite"));

        assert_eq!(api.list_favorites(&token).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_the_named_title() {
        let api = MemoryApi::with_user("alice", "secret");
        let token = api.login("alice", "secret").await.unwrap().access_token;
        api.add_favorite(&token, &movie("Inception")).await.unwrap();
        api.add_favorite(&token, &movie("Heat")).await.unwrap();

        api.delete_favorite(&token, "Inception").await.unwrap();

        let listed = api.list_favorites(&token).await.unwrap();
        assert_eq!(listed, vec![movie("Heat")]);
    }

    #[tokio::test]
    async fn test_delete_missing_title_fails_and_leaves_list_unchanged() {
        let api = MemoryApi::with_user("alice", "secret");
        let token = api.login("alice", "secret").await.unwrap().access_token;
        api.add_favorite(&token, &movie("Heat")).await.unwrap();

        let err = api.delete_favorite(&token, "Inception").await.unwrap_err();
        assert_eq!(err, ApiError::write("Failed to delete favorite"));
        assert_eq!(api.list_favorites(&token).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_entry_at_old_title() {
        let api = MemoryApi::with_user("alice", "secret");
        let token = api.login("alice", "secret").await.unwrap().access_token;
        api.add_favorite(&token, &movie("Inception")).await.unwrap();

        let mut edited = movie("Inception");
        edited.rating = 4;
        edited.description = "Dreams within dreams".to_string();
        let updated = api
            .update_favorite(&token, "Inception", &edited)
            .await
            .unwrap();
        assert_eq!(updated, edited);

        let listed = api.list_favorites(&token).await.unwrap();
        assert_eq!(listed, vec![edited]);
    }

    #[tokio::test]
    async fn test_update_missing_title_fails() {
        let api = MemoryApi::with_user("alice", "secret");
        let token = api.login("alice", "secret").await.unwrap().access_token;

        let err = api
            .update_favorite(&token, "Inception", &movie("Inception"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::write("Failed to update favorite"));
    }

    #[tokio::test]
    async fn test_rename_onto_existing_title_fails() {
        let api = MemoryApi::with_user("alice", "secret");
        let token = api.login("alice", "secret").await.unwrap().access_token;
        api.add_favorite(&token, &movie("Inception")).await.unwrap();
        api.add_favorite(&token, &movie("Heat")).await.unwrap();

        let err = api
            .update_favorite(&token, "Heat", &movie("Inception"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::write("Failed to update favorite"));
    }

    #[tokio::test]
    async fn test_lists_are_per_user() {
        let api = MemoryApi::with_user("alice", "secret");
        api.register("bob", "hunter2").await.unwrap();

        let alice = api.login("alice", "secret").await.unwrap().access_token;
        let bob = api.login("bob", "hunter2").await.unwrap().access_token;

        api.add_favorite(&alice, &movie("Inception")).await.unwrap();

        assert_eq!(api.list_favorites(&alice).await.unwrap().len(), 1);
        assert!(api.list_favorites(&bob).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_full_scenario() {
        // login -> empty list -> add -> listed -> delete -> empty again.
        let api = MemoryApi::with_user("alice", "secret");
        let token = api.login("alice", "secret").await.unwrap().access_token;

        assert!(api.list_favorites(&token).await.unwrap().is_empty());

        let inception = movie("Inception");
        let stored = api.add_favorite(&token, &inception).await.unwrap();
        assert_eq!(stored, inception);
        assert_eq!(api.list_favorites(&token).await.unwrap(), vec![inception]);

        api.delete_favorite(&token, "Inception").await.unwrap();
        assert!(api.list_favorites(&token).await.unwrap().is_empty());
    }
}
