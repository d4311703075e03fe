//! Loading components

use dioxus::prelude::*;

use crate::config::site_config;
use crate::timer::sleep;

/// Full-page loader, faded out shortly after the app starts
#[component]
pub fn PageLoader() -> Element {
    let mut hidden = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            sleep(site_config().page_loader_delay_ms).await;
            hidden.set(true);
        });
    });

    rsx! {
        div {
            id: "page-loader",
            class: if hidden() { "page-loader hidden" } else { "page-loader" },
            aria_hidden: "true",
            div {
                class: "loader-dots",
                div { class: "loader-dot" }
                div { class: "loader-dot", style: "animation-delay: 0.1s" }
                div { class: "loader-dot", style: "animation-delay: 0.2s" }
            }
            p { class: "loader-text", "Momentum Tutoring" }
        }
    }
}
