//! This crate contains all shared UI for the workspace.

mod state;
pub use state::{use_app, App, AppProvider, AppState};

mod auth_form;
pub use auth_form::AuthForm;

mod header;
pub use header::Header;

mod movie_card;
pub use movie_card::MovieCard;

mod movie_modal;
pub use movie_modal::MovieModal;

mod stars;
pub use stars::{StarRow, StarSelector};

mod error_banner;
pub use error_banner::ErrorBanner;
