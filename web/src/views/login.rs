//! Auth gate view.

use dioxus::prelude::*;
use ui::{use_app, AuthForm};

use crate::Route;

/// Unauthenticated landing page: branding plus the login/register card.
#[component]
pub fn Login() -> Element {
    let app = use_app();
    let nav = use_navigator();

    // Once a session exists there is nothing to do here.
    if app.is_authenticated() {
        nav.replace(Route::Favorites {});
    }

    rsx! {
        div {
            class: "auth-screen",
            div {
                class: "auth-screen-inner",

                div {
                    class: "auth-branding",
                    span { class: "app-logo app-logo-large", "🎬" }
                    h1 { "Movie Favorites" }
                    p { "Create your personal collection of favorite movies" }
                }

                AuthForm {}
            }
        }
    }
}
