//! Fixed navbar, scrollspy and back-to-top button

use dioxus::prelude::*;
use futures_util::StreamExt;

use super::{use_overlays, ModalTrigger};
use crate::config::site_config;
use crate::state::{ModalKind, NavbarView, ScrollThresholds};
use crate::types::NAV_LINKS;

fn thresholds() -> ScrollThresholds {
    let config = site_config();
    ScrollThresholds {
        scrolled: config.navbar_scrolled_px,
        back_to_top: config.back_to_top_px,
        spy_offset: config.scrollspy_offset_px,
    }
}

#[cfg(feature = "web")]
fn measure_navbar_view() -> NavbarView {
    let sections = crate::dom::section_bounds().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not measure sections");
        Vec::new()
    });
    NavbarView::from_scroll(crate::dom::scroll_y(), &sections, thresholds())
}

#[cfg(not(feature = "web"))]
fn measure_navbar_view() -> NavbarView {
    NavbarView::from_scroll(0.0, &[], thresholds())
}

/// Smooth-scroll so the section lands just below the fixed header
pub fn scroll_to_section(section: &str) {
    #[cfg(feature = "web")]
    {
        use crate::state::anchor_scroll_target;

        let top = match crate::dom::element_viewport_top(section) {
            Ok(Some(top)) => top,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, section, "could not locate section");
                return;
            }
        };
        let target = anchor_scroll_target(top, crate::dom::scroll_y(), site_config().header_offset_px);
        if let Err(e) = crate::dom::scroll_to_smooth(target) {
            tracing::warn!(error = %e, "smooth scroll failed");
        }
    }

    #[cfg(not(feature = "web"))]
    let _ = section;
}

pub fn scroll_to_top() {
    #[cfg(feature = "web")]
    {
        if let Err(e) = crate::dom::scroll_to_smooth(0.0) {
            tracing::warn!(error = %e, "smooth scroll failed");
        }
    }
}

/// Navbar view, recomputed on every window scroll
pub fn use_navbar_view() -> Signal<NavbarView> {
    let mut view = use_signal(NavbarView::default);

    let pump = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        while rx.next().await.is_some() {
            let next = measure_navbar_view();
            if *view.peek() != next {
                view.set(next);
            }
        }
    });

    use_effect(move || {
        pump.send(());
        #[cfg(feature = "web")]
        {
            if let Err(e) = crate::dom::on_window_event("scroll", move |_| pump.send(())) {
                tracing::warn!(error = %e, "scroll listener unavailable");
            }
        }
    });

    view
}

#[component]
pub fn Navbar(view: NavbarView) -> Element {
    let overlays = use_overlays();
    let menu_open = overlays.is_menu_open();
    let scrolled = if view.scrolled { "scrolled" } else { "" };
    let hamburger_class = if menu_open { "hamburger active" } else { "hamburger" };

    rsx! {
        nav {
            id: "navbar",
            class: "navbar {scrolled}",
            div {
                class: "container nav-container",
                a {
                    href: "#home",
                    class: "logo",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        scroll_to_section("home");
                    },
                    span { class: "logo-mark", "M" }
                    span { class: "logo-text", "Momentum Tutoring" }
                }
                ul {
                    class: "nav-links",
                    for link in NAV_LINKS.iter().copied() {
                        li {
                            key: "{link.section}",
                            a {
                                href: link.href(),
                                class: if view.is_link_active(&link.href()) { "nav-link active" } else { "nav-link" },
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    scroll_to_section(link.section);
                                },
                                "{link.label}"
                            }
                        }
                    }
                }
                div {
                    class: "nav-actions",
                    ModalTrigger { kind: ModalKind::Request, class: "btn btn-primary nav-cta", "Get a Tutor" }
                }
                button {
                    id: "hamburger",
                    class: hamburger_class,
                    r#type: "button",
                    aria_label: "Toggle menu",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| overlays.toggle_menu(),
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

#[component]
pub fn BackToTop(visible: bool) -> Element {
    rsx! {
        button {
            id: "back-to-top",
            class: if visible { "back-to-top visible" } else { "back-to-top" },
            r#type: "button",
            aria_label: "Back to top",
            onclick: move |_| scroll_to_top(),
            "\u{2191}"
        }
    }
}
