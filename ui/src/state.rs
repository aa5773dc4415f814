//! # Application state and controller
//!
//! One explicit state struct ([`AppState`]) owned by a top-level controller
//! ([`App`]), so the views stay purely presentational: they read accessors and
//! forward user intents to command methods, and nothing about the state
//! machine lives in any particular rendering technology.
//!
//! ## State
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `session` | `Some` once login/register succeeded; mirrored to durable storage |
//! | `favorites` | [`store::Favorites`] — the ticket-guarded mirror of the server's list |
//! | `loading` | Advisory flag while any call is in flight; disables affected triggers but does not serialize requests |
//! | `error` | Shared error slot; cleared at the start of each call, overwritten by the next failure |
//!
//! ## Commands
//!
//! `login`, `register`, `logout`, `refresh`, `add_movie`, `update_movie`,
//! `delete_movie`. Each performs one backend call and applies the local
//! transformation only after success, so no rollback is ever needed; failures
//! store one human-readable message and leave prior state untouched.
//! `register` follows up with login semantics for the same credentials, which
//! also fetches the favorites list.
//!
//! [`AppProvider`] owns the signal, restores a persisted session on mount, and
//! provides the controller through context ([`use_app`]).

use api::{HttpApi, MoviesApi};
use dioxus::prelude::*;
use store::{Favorites, Movie, MovieDraft, Session, SessionStore};

/// The whole client-side application state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub session: Option<Session>,
    pub favorites: Favorites,
    pub loading: bool,
    pub error: Option<String>,
}

/// Backend client used by the controller.
fn make_api() -> impl MoviesApi {
    HttpApi::new()
}

/// Platform-appropriate session storage: `window.localStorage` on the web,
/// an in-process store elsewhere (no persistence across restarts).
#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn session_store() -> impl SessionStore {
    store::LocalStorage::new()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn session_store() -> impl SessionStore {
    static STORE: std::sync::OnceLock<store::MemoryStore> = std::sync::OnceLock::new();
    STORE.get_or_init(store::MemoryStore::new).clone()
}

/// Get the application controller.
pub fn use_app() -> App {
    use_context::<App>()
}

/// Copyable handle over the application state: read accessors plus the
/// command methods the views call.
#[derive(Clone, Copy)]
pub struct App {
    state: Signal<AppState>,
}

impl App {
    // Read accessors. Calling these inside a component subscribes it to the
    // state signal.

    pub fn is_authenticated(&self) -> bool {
        self.state.read().session.is_some()
    }

    pub fn username(&self) -> Option<String> {
        self.state
            .read()
            .session
            .as_ref()
            .map(|s| s.username.clone())
    }

    pub fn movies(&self) -> Vec<Movie> {
        self.state.read().favorites.movies().to_vec()
    }

    pub fn movie_count(&self) -> usize {
        self.state.read().favorites.len()
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn set_error(mut self, message: impl Into<String>) {
        self.state.write().error = Some(message.into());
    }

    pub fn clear_error(mut self) {
        self.state.write().error = None;
    }

    // Commands.

    /// Exchange credentials for a session, persist it, then fetch favorites.
    pub async fn login(mut self, username: String, password: String) {
        self.begin_call();
        match make_api().login(&username, &password).await {
            Ok(tokens) => {
                tracing::info!(%username, "logged in");
                let session = Session::new(username, tokens.access_token);
                session_store().save(&session);
                self.state.write().session = Some(session);
                self.finish_call();
                self.refresh().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                self.fail(e);
            }
        }
    }

    /// Create an account, then log in with the same credentials.
    pub async fn register(mut self, username: String, password: String) {
        self.begin_call();
        match make_api().register(&username, &password).await {
            Ok(()) => {
                tracing::info!(%username, "registered");
                self.finish_call();
                self.login(username, password).await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "register failed");
                self.fail(e);
            }
        }
    }

    /// Drop the session from memory and durable storage, and the favorites
    /// mirror with it.
    pub fn logout(mut self) {
        session_store().clear();
        let mut state = self.state.write();
        state.session = None;
        state.favorites.clear();
        state.error = None;
        state.loading = false;
        tracing::info!("logged out");
    }

    /// Re-fetch the full favorites list. Stale snapshots are dropped by the
    /// ticket guard.
    pub async fn refresh(mut self) {
        let Some(token) = self.token() else {
            return;
        };
        let ticket = self.state.write().favorites.begin();
        self.begin_call();
        match make_api().list_favorites(&token).await {
            Ok(movies) => {
                self.state.write().favorites.replace(ticket, movies);
                self.finish_call();
            }
            Err(e) => self.fail(e),
        }
    }

    /// Validate the draft and create the movie. Returns whether it succeeded,
    /// so the caller can close the form.
    pub async fn add_movie(mut self, draft: MovieDraft) -> bool {
        let Some(token) = self.token() else {
            return false;
        };
        let movie = match draft.validate() {
            Ok(movie) => movie,
            Err(e) => {
                self.set_error(e.to_string());
                return false;
            }
        };
        let ticket = self.state.write().favorites.begin();
        self.begin_call();
        match make_api().add_favorite(&token, &movie).await {
            Ok(stored) => {
                self.state.write().favorites.insert(ticket, stored);
                self.finish_call();
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }

    /// Validate the draft and replace the movie at `old_title`. Returns
    /// whether it succeeded.
    pub async fn update_movie(mut self, old_title: String, draft: MovieDraft) -> bool {
        let Some(token) = self.token() else {
            return false;
        };
        let movie = match draft.validate() {
            Ok(movie) => movie,
            Err(e) => {
                self.set_error(e.to_string());
                return false;
            }
        };
        let ticket = self.state.write().favorites.begin();
        self.begin_call();
        match make_api().update_favorite(&token, &old_title, &movie).await {
            Ok(updated) => {
                self.state.write().favorites.update(ticket, &old_title, updated);
                self.finish_call();
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }

    /// Delete the movie with the given title.
    pub async fn delete_movie(mut self, title: String) {
        let Some(token) = self.token() else {
            return;
        };
        let ticket = self.state.write().favorites.begin();
        self.begin_call();
        match make_api().delete_favorite(&token, &title).await {
            Ok(()) => {
                self.state.write().favorites.remove(ticket, &title);
                self.finish_call();
            }
            Err(e) => self.fail(e),
        }
    }

    fn token(&self) -> Option<String> {
        self.state.read().session.as_ref().map(|s| s.token.clone())
    }

    fn begin_call(&mut self) {
        let mut state = self.state.write();
        state.loading = true;
        state.error = None;
    }

    fn finish_call(&mut self) {
        self.state.write().loading = false;
    }

    fn fail(&mut self, error: impl std::fmt::Display) {
        let mut state = self.state.write();
        state.error = Some(error.to_string());
        state.loading = false;
    }
}

/// Provider component that owns the application state.
/// Wrap the app with this component; views reach the controller via
/// [`use_app`].
#[component]
pub fn AppProvider(children: Element) -> Element {
    let state = use_signal(|| AppState {
        session: session_store().load(),
        ..Default::default()
    });
    let app = use_context_provider(|| App { state });

    // A session restored from storage fetches its favorites once on mount;
    // cold starts without one render the auth gate untouched.
    use_future(move || async move {
        if app.is_authenticated() {
            app.refresh().await;
        }
    });

    rsx! {
        {children}
    }
}
