//! Slide-in mobile navigation

use dioxus::prelude::*;

use super::{scroll_to_section, use_overlays, ModalTrigger};
use crate::config::site_config;
use crate::state::ModalKind;
use crate::timer::sleep;
use crate::types::NAV_LINKS;

#[component]
pub fn MobileMenu() -> Element {
    let overlays = use_overlays();
    let active = if overlays.is_menu_open() { "active" } else { "" };

    rsx! {
        div {
            id: "mobile-menu-overlay",
            class: "mobile-menu-overlay {active}",
            onclick: move |_| overlays.close_menu(),
        }
        aside {
            id: "mobile-menu",
            class: "mobile-menu {active}",
            button {
                id: "mobile-close-btn",
                class: "mobile-close-btn",
                r#type: "button",
                aria_label: "Close menu",
                onclick: move |_| overlays.close_menu(),
                "\u{00D7}"
            }
            ul {
                class: "mobile-nav",
                for link in NAV_LINKS.iter().copied() {
                    li {
                        key: "{link.section}",
                        a {
                            href: link.href(),
                            class: "mobile-nav-link",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                overlays.close_menu();
                                // Let the panel slide away before scrolling
                                spawn(async move {
                                    sleep(site_config().mobile_nav_scroll_delay_ms).await;
                                    scroll_to_section(link.section);
                                });
                            },
                            "{link.label}"
                        }
                    }
                }
            }
            div {
                class: "mobile-menu-actions",
                ModalTrigger { kind: ModalKind::Request, class: "btn btn-primary btn-full", "Get a Tutor" }
                ModalTrigger { kind: ModalKind::Volunteer, class: "btn btn-outline btn-full", "Become a Tutor" }
            }
        }
    }
}
