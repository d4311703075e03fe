//! Toast notifications

use dioxus::prelude::*;

use crate::config::site_config;
use crate::state::{Toast, ToastKind, ToastQueue, ToastRequest};
use crate::timer::sleep;

/// Handle for showing toasts from anywhere below `ToastProvider`
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    /// Show a toast for the configured default duration
    pub fn show(&self, kind: ToastKind, title: &str, message: &str) {
        self.show_for(kind, title, message, site_config().toast_duration_ms);
    }

    pub fn show_for(&self, kind: ToastKind, title: &str, message: &str, duration_ms: u32) {
        let mut queue = self.queue;
        let request = ToastRequest::new(kind, title, message, duration_ms);
        let visible_for = request.duration_ms;
        let id = queue.write().push(request);
        tracing::debug!(id, ?kind, title, visible_for, "toast shown");

        spawn(async move {
            sleep(visible_for).await;
            queue.write().begin_leave(id);
        });
    }
}

/// Provides `Toasts` to children and renders the toast stack
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::new);
    use_context_provider(|| Toasts { queue });

    rsx! {
        {children}
        div {
            id: "toast-container",
            class: "toast-container",
            for toast in queue.read().toasts().iter().cloned() {
                ToastItem { key: "{toast.id}", toast, queue }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, queue: Signal<ToastQueue>) -> Element {
    let kind_class = toast.request.kind.class();
    let is_leaving = toast.leaving;
    let leaving = if is_leaving { "leaving" } else { "" };
    let id = toast.id;
    let mut queue = queue;

    rsx! {
        div {
            class: "toast {kind_class} {leaving}",
            role: "status",
            onanimationend: move |_| {
                if is_leaving {
                    queue.write().remove(id);
                }
            },
            span { class: "toast-icon", "{toast.request.kind.icon()}" }
            div {
                class: "toast-body",
                div { class: "toast-title", "{toast.request.title}" }
                div { class: "toast-message", "{toast.request.message}" }
            }
        }
    }
}

/// Hook to access the toast handle
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}
