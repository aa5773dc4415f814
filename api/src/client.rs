//! # MoviesApi — the backend operation surface
//!
//! An async interface with the six calls the app makes, so the orchestration
//! layer works the same against the real HTTP backend ([`crate::HttpApi`])
//! and the in-memory double used in tests ([`crate::MemoryApi`]).
//!
//! | Operation | Auth | Returns |
//! |-----------|------|---------|
//! | [`login`](MoviesApi::login) | credentials | [`TokenResponse`] |
//! | [`register`](MoviesApi::register) | credentials | ack |
//! | [`list_favorites`](MoviesApi::list_favorites) | bearer | full ordered list |
//! | [`add_favorite`](MoviesApi::add_favorite) | bearer | the stored movie |
//! | [`delete_favorite`](MoviesApi::delete_favorite) | bearer | ack |
//! | [`update_favorite`](MoviesApi::update_favorite) | bearer | the updated movie |
//!
//! Failures carry a single generic message per call; see [`crate::ApiError`].

use serde::{Deserialize, Serialize};
use store::Movie;

use crate::error::ApiError;

/// Payload of a successful login. Extra fields the backend may send are
/// ignored; only the token matters to the client.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Async interface to the favorites backend.
pub trait MoviesApi {
    /// Exchange credentials for a bearer token.
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<TokenResponse, ApiError>>;

    /// Create an account. Does not authenticate by itself.
    fn register(
        &self,
        username: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// Fetch the full ordered favorites list.
    fn list_favorites(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Movie>, ApiError>>;

    /// Store a new favorite; returns the entry as the server stored it.
    fn add_favorite(
        &self,
        token: &str,
        movie: &Movie,
    ) -> impl std::future::Future<Output = Result<Movie, ApiError>>;

    /// Delete the favorite with the given title.
    fn delete_favorite(
        &self,
        token: &str,
        title: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// Replace the favorite at `old_title`; returns the updated entry.
    fn update_favorite(
        &self,
        token: &str,
        old_title: &str,
        movie: &Movie,
    ) -> impl std::future::Future<Output = Result<Movie, ApiError>>;
}
