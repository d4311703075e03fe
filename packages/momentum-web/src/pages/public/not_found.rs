//! Fallback for unknown paths

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(path, "unknown route");

    rsx! {
        main {
            class: "not-found",
            h1 { "Page not found" }
            p { "There is nothing at /{path}." }
            Link { to: Route::Landing {}, class: "btn btn-primary", "\u{2190} Back to Home" }
        }
    }
}
