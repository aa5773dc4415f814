use dioxus::prelude::*;

use ui::AppProvider;
use views::{Favorites, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/favorites")]
    Favorites {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/favorites`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Favorites {});
    rsx! {}
}
