//! Inline banner for the shared error slot.

use dioxus::prelude::*;

use crate::use_app;

/// Renders the current error message, or nothing.
///
/// The slot is not scoped per operation: it is cleared when a new call
/// starts and overwritten by the next failure.
#[component]
pub fn ErrorBanner() -> Element {
    let app = use_app();

    match app.error() {
        Some(message) => rsx! {
            div {
                class: "error-banner",
                p { "{message}" }
            }
        },
        None => rsx! {},
    }
}
