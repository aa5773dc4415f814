//! # Domain models for movies and sessions
//!
//! Defines the data structures shared by the API client and the UI. These types
//! are `Serialize + Deserialize` so they can cross the HTTP boundary verbatim.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Movie`] | A single favorite movie. The `title` is the sole identifier within a user's list — the backend has no surrogate ID, so duplicate titles are unsupported and renaming a movie changes its identity. |
//! | [`Session`] | The authenticated identity for the current browser instance: username plus the opaque bearer token returned by login. |
//! | [`MovieDraft`] | Raw form input for creating or editing a movie. All free-text fields are unparsed strings; [`MovieDraft::validate`] turns a draft into a fully-populated [`Movie`] or a [`ValidationError`] before any network call is attempted. |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Earliest year a draft may claim. Roundhay Garden Scene, 1888.
pub const MIN_YEAR: i32 = 1888;
/// Latest year a draft may claim, leaving room for announced releases.
pub const MAX_YEAR: i32 = 2100;

/// A user-owned movie record, tracked by title.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique key within a user's list.
    pub title: String,
    pub year: i32,
    pub genre: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub description: String,
}

/// The authenticated identity: username plus opaque bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub token: String,
}

impl Session {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }
}

/// Unvalidated form input for a movie.
///
/// `year` stays a string until validation so the form can round-trip whatever
/// the user typed. `rating` is a `u8` because the star selector only ever
/// produces small integers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub year: String,
    pub genre: String,
    pub rating: u8,
    pub description: String,
}

/// Why a [`MovieDraft`] failed validation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Genre is required")]
    MissingGenre,
    #[error("Year must be a number")]
    YearNotANumber,
    #[error("Year must be between {MIN_YEAR} and {MAX_YEAR}")]
    YearOutOfRange,
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
}

impl MovieDraft {
    /// Pre-fill a draft from an existing movie, for the edit form.
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year.to_string(),
            genre: movie.genre.clone(),
            rating: movie.rating,
            description: movie.description.clone(),
        }
    }

    /// Validate the draft into a fully-populated [`Movie`].
    ///
    /// Text fields are trimmed. Title and genre must be non-empty, the year
    /// must parse into [`MIN_YEAR`]..=[`MAX_YEAR`], and the rating must be
    /// 1..=5. The description may be empty.
    pub fn validate(&self) -> Result<Movie, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let genre = self.genre.trim();
        if genre.is_empty() {
            return Err(ValidationError::MissingGenre);
        }

        let year: i32 = self
            .year
            .trim()
            .parse()
            .map_err(|_| ValidationError::YearNotANumber)?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::YearOutOfRange);
        }

        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::RatingOutOfRange);
        }

        Ok(Movie {
            title: title.to_string(),
            year,
            genre: genre.to_string(),
            rating: self.rating,
            description: self.description.trim().to_string(),
        })
    }
}
