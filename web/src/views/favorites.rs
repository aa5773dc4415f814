//! Authenticated favorites page: header, grid, and the movie modal.

use api::{Movie, MovieDraft};
use dioxus::prelude::*;
use ui::{use_app, ErrorBanner, Header, MovieCard, MovieModal};

use crate::Route;

#[component]
pub fn Favorites() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Movie>::None);

    // No session (cold start or logout) renders the auth gate instead.
    if !app.is_authenticated() {
        nav.replace(Route::Login {});
    }

    let movies = app.movies();
    let count = movies.len();
    let count_label = if count == 1 {
        "1 movie in your collection".to_string()
    } else {
        format!("{count} movies in your collection")
    };

    let mut open_add = move || {
        editing.set(None);
        show_modal.set(true);
    };

    let handle_submit = move |draft: MovieDraft| {
        spawn(async move {
            let ok = match editing() {
                Some(movie) => app.update_movie(movie.title, draft).await,
                None => app.add_movie(draft).await,
            };
            if ok {
                show_modal.set(false);
                editing.set(None);
            }
        });
    };

    rsx! {
        div {
            class: "app-shell",

            Header { on_add: move |_| open_add() }

            main {
                class: "app-main",

                ErrorBanner {}

                if app.loading() && count == 0 {
                    div {
                        class: "empty-state",
                        div { class: "spinner" }
                        p { "Loading your favorite movies..." }
                    }
                } else if count == 0 {
                    div {
                        class: "empty-state",
                        span { class: "app-logo app-logo-large", "🎬" }
                        h2 { "No favorite movies yet" }
                        p { "Start building your collection by adding your first movie!" }
                        button {
                            class: "primary",
                            onclick: move |_| open_add(),
                            "+ Add Your First Movie"
                        }
                    }
                } else {
                    div {
                        class: "grid-heading",
                        h2 { "Your Favorite Movies" }
                        p { "{count_label}" }
                    }
                    div {
                        class: "movie-grid",
                        for movie in movies {
                            MovieCard {
                                key: "{movie.title}",
                                movie: movie.clone(),
                                on_edit: move |movie: Movie| {
                                    editing.set(Some(movie));
                                    show_modal.set(true);
                                },
                                on_delete: move |title: String| {
                                    spawn(async move {
                                        app.delete_movie(title).await;
                                    });
                                },
                            }
                        }
                    }
                }
            }

            if show_modal() {
                MovieModal {
                    initial: editing(),
                    on_submit: handle_submit,
                    on_cancel: move |_| {
                        show_modal.set(false);
                        editing.set(None);
                    },
                }
            }
        }
    }
}
