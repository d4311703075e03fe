//! Root application component

use dioxus::prelude::*;

use crate::components::{OverlayProvider, ToastProvider};
use crate::routes::Route;

#[cfg(feature = "web")]
async fn render_icons() {
    const ICON_ATTEMPTS: u32 = 20;
    const ICON_RETRY_MS: u32 = 100;

    for _ in 0..ICON_ATTEMPTS {
        match crate::dom::create_icons() {
            Ok(true) => {
                tracing::debug!("lucide icons rendered");
                return;
            }
            Ok(false) => crate::timer::sleep(ICON_RETRY_MS).await,
            Err(e) => {
                tracing::warn!(error = %e, "could not render icons");
                return;
            }
        }
    }
    tracing::warn!("lucide never loaded, icons left as placeholders");
}

#[cfg(not(feature = "web"))]
async fn render_icons() {
    tracing::debug!("icons are rendered in the browser only");
}

/// Root application component
#[component]
pub fn App() -> Element {
    // Lucide swaps `<i data-lucide>` placeholders for SVGs; the script loads
    // asynchronously so poll briefly until it is there
    use_effect(|| {
        spawn(async {
            render_icons().await;
        });
    });

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/styles.css") }
        document::Script { src: "https://unpkg.com/lucide@latest" }

        // Overlay and toast contexts wrap the entire app
        OverlayProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
