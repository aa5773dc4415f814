//! Card for one favorite in the grid.

use dioxus::prelude::*;
use store::Movie;

use crate::{use_app, StarRow};

/// Title, year, genre badge, star row, description, and the edit/delete
/// actions. Intents are forwarded to the page.
#[component]
pub fn MovieCard(
    movie: Movie,
    on_edit: EventHandler<Movie>,
    on_delete: EventHandler<String>,
) -> Element {
    let app = use_app();
    let edit_movie = movie.clone();
    let delete_title = movie.title.clone();

    rsx! {
        article {
            class: "movie-card",

            div {
                class: "movie-card-top",
                h3 { "{movie.title}" }
                div {
                    class: "movie-card-actions",
                    button {
                        class: "icon",
                        title: "Edit movie",
                        disabled: app.loading(),
                        onclick: move |_| on_edit.call(edit_movie.clone()),
                        "✎"
                    }
                    button {
                        class: "icon danger",
                        title: "Delete movie",
                        disabled: app.loading(),
                        onclick: move |_| on_delete.call(delete_title.clone()),
                        "✕"
                    }
                }
            }

            div {
                class: "movie-meta",
                span { class: "movie-year", "{movie.year}" }
                span { class: "movie-genre", "{movie.genre}" }
            }

            div {
                class: "movie-rating",
                StarRow { rating: movie.rating }
                span { class: "stars-value", "{movie.rating}/5" }
            }

            p { class: "movie-description", "{movie.description}" }
        }
    }
}
