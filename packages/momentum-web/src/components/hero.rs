//! Hero section with the pointer-driven 3D tilt

use std::rc::Rc;

use dioxus::prelude::*;

use super::ModalTrigger;
use crate::config::site_config;
use crate::state::{ModalKind, Tilt};

#[cfg(feature = "web")]
fn supports_tilt() -> bool {
    !crate::dom::has_touch()
}

#[cfg(not(feature = "web"))]
fn supports_tilt() -> bool {
    false
}

#[component]
pub fn Hero() -> Element {
    let mut hero = use_signal(|| None::<Rc<MountedData>>);
    let mut tilt = use_signal(Tilt::default);
    let tilt_enabled = use_hook(supports_tilt);
    let transform = tilt.read().css_transform();

    rsx! {
        section {
            id: "home",
            class: "hero",
            onmounted: move |evt: MountedEvent| hero.set(Some(evt.data())),
            onmousemove: move |evt: MouseEvent| {
                if !tilt_enabled {
                    return;
                }
                let Some(element) = hero.read().clone() else {
                    return;
                };
                let pointer = evt.client_coordinates();
                spawn(async move {
                    let Ok(rect) = element.get_client_rect().await else {
                        return;
                    };
                    tilt.set(Tilt::from_pointer(
                        pointer.x - rect.origin.x,
                        pointer.y - rect.origin.y,
                        rect.size.width,
                        rect.size.height,
                        site_config().tilt_divisor,
                    ));
                });
            },
            onmouseleave: move |_| tilt.set(Tilt::default()),
            div {
                class: "container hero-grid",
                div {
                    class: "hero-text reveal-left",
                    span { class: "hero-badge", "100% free, volunteer-run tutoring" }
                    h1 {
                        class: "hero-title",
                        "Every student deserves "
                        span { class: "gradient-text", "momentum" }
                    }
                    p {
                        class: "hero-subtitle",
                        "Momentum Tutoring connects K-12 students with dedicated high school and college volunteers for free one-on-one help in math, science, reading and more."
                    }
                    div {
                        class: "hero-actions",
                        ModalTrigger { kind: ModalKind::Request, class: "btn btn-primary btn-lg", "Request a Tutor" }
                        ModalTrigger { kind: ModalKind::Volunteer, class: "btn btn-outline btn-lg", "Become a Tutor" }
                    }
                }
                div {
                    class: "hero-visual reveal-right",
                    div {
                        class: "hero-img-placeholder",
                        style: "transform: {transform};",
                        i { "data-lucide": "graduation-cap", class: "hero-icon" }
                        p { class: "hero-visual-caption", "Learning that builds on itself" }
                    }
                }
            }
        }
    }
}
