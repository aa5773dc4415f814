//! # API crate — client for the movie favorites backend
//!
//! Everything the frontends need to talk to the backend lives here: the
//! operation trait, the HTTP implementation, the error taxonomy, and an
//! in-memory backend double for tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`MoviesApi`] trait with the six operations (login, register, list, add, delete, update), plus the login token payload |
//! | [`http`] | [`HttpApi`], the `reqwest`-backed implementation against a fixed origin |
//! | [`memory`] | [`MemoryApi`], an in-memory mirror of the backend's semantics for tests and native fallback |
//! | [`error`] | [`ApiError`] — `Auth` / `Fetch` / `Write`, one generic message per failed call |
//!
//! Domain models ([`Movie`], [`Session`], [`MovieDraft`]) are defined in the
//! `store` crate and re-exported here so callers only need one import path.

pub mod client;
pub mod error;
pub mod http;
pub mod memory;

pub use client::{MoviesApi, TokenResponse};
pub use error::ApiError;
pub use http::{HttpApi, DEFAULT_API_URL};
pub use memory::MemoryApi;

pub use store::{Movie, MovieDraft, Session, ValidationError};
