//! Header bar for the authenticated view.

use dioxus::prelude::*;

use crate::use_app;

/// App name, welcome line, and the Add Movie / Logout actions.
///
/// Logout is handled here; adding is forwarded to the page, which owns the
/// modal.
#[component]
pub fn Header(on_add: EventHandler<()>) -> Element {
    let app = use_app();

    rsx! {
        header {
            class: "app-header",
            div {
                class: "app-header-inner",

                div {
                    class: "app-identity",
                    span { class: "app-logo", "🎬" }
                    div {
                        h1 { "Movie Favorites" }
                        if let Some(username) = app.username() {
                            p { class: "app-welcome", "Welcome back, {username}!" }
                        }
                    }
                }

                div {
                    class: "app-actions",
                    button {
                        class: "primary",
                        disabled: app.loading(),
                        onclick: move |_| on_add.call(()),
                        "+ Add Movie"
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| app.logout(),
                        "Logout"
                    }
                }
            }
        }
    }
}
