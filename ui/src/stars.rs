//! Star rating widgets: a read-only row for cards and a clickable selector
//! for the movie form.

use dioxus::prelude::*;

/// Read-only 1–5 star row.
#[component]
pub fn StarRow(rating: u8) -> Element {
    rsx! {
        span {
            class: "stars",
            for i in 1..=5u8 {
                span {
                    key: "{i}",
                    class: if i <= rating { "star filled" } else { "star" },
                    "★"
                }
            }
        }
    }
}

/// Clickable star selector for picking a rating.
#[component]
pub fn StarSelector(rating: u8, on_select: EventHandler<u8>) -> Element {
    rsx! {
        div {
            class: "stars stars-input",
            for i in 1..=5u8 {
                button {
                    key: "{i}",
                    r#type: "button",
                    class: if i <= rating { "star filled" } else { "star" },
                    onclick: move |_| on_select.call(i),
                    "★"
                }
            }
            span { class: "stars-value", "{rating}/5" }
        }
    }
}
