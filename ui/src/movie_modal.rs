//! Overlay form for creating or editing a movie.

use dioxus::prelude::*;
use store::models::{MAX_YEAR, MIN_YEAR};
use store::{Movie, MovieDraft};

use crate::{use_app, StarSelector};

/// Modal form over the favorites grid.
///
/// With `initial` set the form is pre-filled for editing; otherwise it is a
/// blank creation form. The draft is handed to the page unvalidated — the
/// controller validates before any network call and surfaces the message in
/// the shared banner.
#[component]
pub fn MovieModal(
    initial: Option<Movie>,
    on_submit: EventHandler<MovieDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let app = use_app();
    let editing = initial.is_some();
    let mut draft = use_signal(move || match initial {
        Some(ref movie) => MovieDraft::from_movie(movie),
        None => MovieDraft {
            rating: 5,
            ..Default::default()
        },
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(draft());
    };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal",

                div {
                    class: "modal-top",
                    h2 {
                        if editing { "Edit Movie" } else { "Add New Movie" }
                    }
                    button {
                        class: "icon",
                        title: "Close",
                        onclick: move |_| on_cancel.call(()),
                        "✕"
                    }
                }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "form-field",
                        label { r#for: "movie-title", "Movie Title" }
                        input {
                            id: "movie-title",
                            r#type: "text",
                            placeholder: "Enter movie title",
                            value: draft().title,
                            oninput: move |evt| draft.write().title = evt.value(),
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            label { r#for: "movie-year", "Year" }
                            input {
                                id: "movie-year",
                                r#type: "number",
                                min: "{MIN_YEAR}",
                                max: "{MAX_YEAR}",
                                placeholder: "2010",
                                value: draft().year,
                                oninput: move |evt| draft.write().year = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "movie-genre", "Genre" }
                            input {
                                id: "movie-genre",
                                r#type: "text",
                                placeholder: "e.g., Action",
                                value: draft().genre,
                                oninput: move |evt| draft.write().genre = evt.value(),
                            }
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Rating" }
                        StarSelector {
                            rating: draft().rating,
                            on_select: move |rating| draft.write().rating = rating,
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "movie-description", "Description" }
                        textarea {
                            id: "movie-description",
                            rows: "3",
                            placeholder: "What makes it a favorite?",
                            value: draft().description,
                            oninput: move |evt| draft.write().description = evt.value(),
                        }
                    }

                    div {
                        class: "form-actions",
                        button {
                            class: "primary",
                            r#type: "submit",
                            disabled: app.loading(),
                            if editing { "Save Changes" } else { "Add Movie" }
                        }
                        button {
                            class: "secondary",
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
