//! Modal dialogs and the overlay context shared with the mobile menu

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::state::{ModalKind, Overlays};

/// Overlay state shared by the navbar, mobile menu and modals
#[derive(Clone, Copy)]
pub struct OverlayContext {
    pub state: Signal<Overlays>,
}

impl OverlayContext {
    pub fn open_modal(&self, kind: ModalKind) {
        let mut state = self.state;
        state.write().open_modal(kind);
    }

    pub fn close_modal(&self, kind: ModalKind) {
        let mut state = self.state;
        state.write().close_modal(kind);
    }

    pub fn toggle_menu(&self) {
        let mut state = self.state;
        state.write().toggle_menu();
    }

    pub fn close_menu(&self) {
        let mut state = self.state;
        state.write().close_menu();
    }

    pub fn is_menu_open(&self) -> bool {
        self.state.read().is_menu_open()
    }

    pub fn is_modal_open(&self, kind: ModalKind) -> bool {
        self.state.read().is_modal_open(kind)
    }
}

/// Owns the overlay state, mirrors the scroll lock onto the page and
/// closes everything on Escape.
#[component]
pub fn OverlayProvider(children: Element) -> Element {
    let state = use_signal(Overlays::new);
    use_context_provider(|| OverlayContext { state });

    // Keep body overflow in sync with the lock
    use_effect(move || {
        let locked = state.read().is_scroll_locked();
        #[cfg(feature = "web")]
        {
            if let Err(e) = crate::dom::set_scroll_locked(locked) {
                tracing::warn!(error = %e, "could not update scroll lock");
            }
        }
        #[cfg(not(feature = "web"))]
        let _ = locked;
    });

    let escape = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        let mut state = state;
        while rx.next().await.is_some() {
            tracing::debug!("escape pressed, closing overlays");
            state.write().escape();
        }
    });

    use_hook(move || {
        #[cfg(feature = "web")]
        {
            use wasm_bindgen::JsCast;

            let installed = crate::dom::on_window_event("keydown", move |event| {
                let is_escape = event
                    .dyn_ref::<web_sys::KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Escape");
                if is_escape {
                    escape.send(());
                }
            });
            if let Err(e) = installed {
                tracing::warn!(error = %e, "escape key listener unavailable");
            }
        }
        #[cfg(not(feature = "web"))]
        let _ = escape;
    });

    children
}

/// Hook to access the overlay context
pub fn use_overlays() -> OverlayContext {
    use_context::<OverlayContext>()
}

/// A link or button that opens a modal
#[component]
pub fn ModalTrigger(kind: ModalKind, class: String, children: Element) -> Element {
    let overlays = use_overlays();
    let trigger = kind.trigger_class();

    rsx! {
        a {
            href: "#",
            class: "{class} {trigger}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                overlays.open_modal(kind);
            },
            {children}
        }
    }
}

/// Modal dialog. Closes on its close button or a click on the backdrop.
#[component]
pub fn Modal(kind: ModalKind, title: String, subtitle: String, children: Element) -> Element {
    let overlays = use_overlays();
    let is_open = overlays.is_modal_open(kind);
    let hidden = !is_open;

    rsx! {
        div {
            id: kind.element_id(),
            class: if is_open { "modal active" } else { "modal" },
            role: "dialog",
            aria_modal: "true",
            aria_hidden: "{hidden}",
            // Only clicks that land on the backdrop itself reach here
            onclick: move |_| overlays.close_modal(kind),
            div {
                class: "modal-content",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                button {
                    class: "close-btn",
                    r#type: "button",
                    aria_label: "Close",
                    onclick: move |_| overlays.close_modal(kind),
                    "\u{00D7}"
                }
                div {
                    class: "modal-header",
                    h2 { "{title}" }
                    p { "{subtitle}" }
                }
                {children}
            }
        }
    }
}
