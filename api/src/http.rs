//! # HTTP implementation of [`MoviesApi`]
//!
//! [`HttpApi`] issues the six calls against one fixed origin
//! ([`DEFAULT_API_URL`] unless overridden) using a shared [`reqwest::Client`].
//! Contracts, per call:
//!
//! | Call | Method and path | Body |
//! |------|-----------------|------|
//! | login | `POST /login` | form-url-encoded `username`, `password` |
//! | register | `POST /register` | JSON `{username, password}` |
//! | list | `GET /favorites` | — |
//! | add | `POST /favorites` | JSON movie |
//! | delete | `DELETE /favorites/{title}` | — |
//! | update | `PUT /favorites/{oldTitle}` | JSON movie |
//!
//! Authorized calls send `Authorization: Bearer <token>`. Titles are
//! percent-encoded into the path. Any non-2xx status is failure, with no
//! distinction between 401, 404, 409, or 500, and every failure path of a
//! call maps to the same generic message. The underlying cause goes to the
//! tracing log instead.

use serde::Serialize;
use store::Movie;

use crate::client::{MoviesApi, TokenResponse};
use crate::error::ApiError;

/// Backend origin used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// `reqwest`-backed client for the favorites backend.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpApi {
    /// Client against [`DEFAULT_API_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Client against a custom origin, e.g. for a staging backend.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn favorites_url(&self) -> String {
        format!("{}/favorites", self.base_url)
    }

    fn favorite_url(&self, title: &str) -> String {
        format!("{}/favorites/{}", self.base_url, urlencoding::encode(title))
    }
}

impl MoviesApi for HttpApi {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let response = self
            .client
            .post(format!("{}/login", self.base_url))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "login request failed");
                ApiError::auth("Login failed")
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), username, "login rejected");
            return Err(ApiError::auth("Login failed"));
        }

        response.json().await.map_err(|e| {
            tracing::error!(error = %e, "login response was not a token payload");
            ApiError::auth("Login failed")
        })
    }

    async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/register", self.base_url))
            .json(&Credentials { username, password })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "register request failed");
                ApiError::auth("Register failed")
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), username, "register rejected");
            return Err(ApiError::auth("Register failed"));
        }

        Ok(())
    }

    async fn list_favorites(&self, token: &str) -> Result<Vec<Movie>, ApiError> {
        let response = self
            .client
            .get(self.favorites_url())
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "favorites request failed");
                ApiError::fetch("Failed to fetch favorites")
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "favorites fetch rejected");
            return Err(ApiError::fetch("Failed to fetch favorites"));
        }

        response.json().await.map_err(|e| {
            tracing::error!(error = %e, "favorites response was not a movie list");
            ApiError::fetch("Failed to fetch favorites")
        })
    }

    async fn add_favorite(&self, token: &str, movie: &Movie) -> Result<Movie, ApiError> {
        let response = self
            .client
            .post(self.favorites_url())
            .header("Authorization", format!("Bearer {token}"))
            .json(movie)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, title = %movie.title, "add request failed");
                ApiError::write("Failed to add favorite")
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), title = %movie.title, "add rejected");
            return Err(ApiError::write("Failed to add favorite"));
        }

        response.json().await.map_err(|e| {
            tracing::error!(error = %e, "add response was not a movie");
            ApiError::write("Failed to add favorite")
        })
    }

    async fn delete_favorite(&self, token: &str, title: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.favorite_url(title))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, title, "delete request failed");
                ApiError::write("Failed to delete favorite")
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), title, "delete rejected");
            return Err(ApiError::write("Failed to delete favorite"));
        }

        Ok(())
    }

    async fn update_favorite(
        &self,
        token: &str,
        old_title: &str,
        movie: &Movie,
    ) -> Result<Movie, ApiError> {
        let response = self
            .client
            .put(self.favorite_url(old_title))
            .header("Authorization", format!("Bearer {token}"))
            .json(movie)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, old_title, "update request failed");
                ApiError::write("Failed to update favorite")
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), old_title, "update rejected");
            return Err(ApiError::write("Failed to update favorite"));
        }

        response.json().await.map_err(|e| {
            tracing::error!(error = %e, "update response was not a movie");
            ApiError::write("Failed to update favorite")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = HttpApi::with_base_url("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.favorites_url(), "http://localhost:8000/favorites");
    }

    #[test]
    fn test_titles_are_percent_encoded_in_paths() {
        let client = HttpApi::new();
        assert_eq!(
            client.favorite_url("2001: A Space Odyssey"),
            "http://localhost:8000/favorites/2001%3A%20A%20Space%20Odyssey"
        );
    }
}
