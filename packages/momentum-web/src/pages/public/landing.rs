//! Landing page

use dioxus::prelude::*;

use crate::components::{
    use_navbar_view, use_reveal_on_scroll, BackToTop, FaqList, Hero, InquiryForm, MobileMenu,
    Modal, ModalTrigger, Navbar, PageLoader, StatsSection, TestimonialsCarousel,
};
use crate::config::site_config;
use crate::state::{FormKind, ModalKind};
use crate::types::{Feature, SERVICES, STEPS};

/// Landing page - every section of the site plus both modal forms
#[component]
pub fn Landing() -> Element {
    let view = use_navbar_view();
    use_reveal_on_scroll();

    let navbar_view = view.read().clone();
    let back_to_top = navbar_view.back_to_top_visible;

    rsx! {
        PageLoader {}
        Navbar { view: navbar_view }
        MobileMenu {}

        main {
            Hero {}
            StatsSection {}
            AboutSection {}
            FeatureSection {
                id: "services",
                eyebrow: "What We Offer",
                title: "Help in the subjects that matter",
                features: SERVICES.to_vec(),
            }
            FeatureSection {
                id: "how-it-works",
                eyebrow: "How It Works",
                title: "Three steps to a tutor",
                features: STEPS.to_vec(),
            }
            section {
                id: "testimonials",
                class: "section section-alt",
                div {
                    class: "container",
                    SectionHeading { eyebrow: "Testimonials", title: "What families and tutors say" }
                    TestimonialsCarousel {}
                }
            }
            section {
                id: "faq",
                class: "section",
                div {
                    class: "container container-narrow",
                    SectionHeading { eyebrow: "FAQ", title: "Frequently asked questions" }
                    FaqList {}
                }
            }
            CallToAction {}
        }

        Footer {}
        BackToTop { visible: back_to_top }

        Modal {
            kind: ModalKind::Volunteer,
            title: "Become a Volunteer Tutor",
            subtitle: "Share what you know and help a student build momentum.",
            InquiryForm { kind: FormKind::Volunteer }
        }
        Modal {
            kind: ModalKind::Request,
            title: "Request a Tutor",
            subtitle: "Tell us about the student and we'll find a match.",
            InquiryForm { kind: FormKind::Request }
        }
    }
}

#[component]
fn SectionHeading(eyebrow: String, title: String) -> Element {
    rsx! {
        div {
            class: "section-heading reveal-up",
            span { class: "eyebrow", "{eyebrow}" }
            h2 { class: "section-title", "{title}" }
        }
    }
}

#[component]
fn AboutSection() -> Element {
    rsx! {
        section {
            id: "about",
            class: "section",
            div {
                class: "container about-grid",
                div {
                    class: "about-text reveal-left",
                    span { class: "eyebrow", "About Us" }
                    h2 { class: "section-title", "Students teaching students" }
                    p {
                        "Momentum Tutoring started with a handful of high schoolers helping classmates after school. Today our volunteers support students across every grade level, for free."
                    }
                    p {
                        "We believe a little consistent help goes a long way. Every session is built around the student's own classwork and pace."
                    }
                }
                ul {
                    class: "about-points reveal-right",
                    li { i { "data-lucide": "heart-handshake" } "Always free for families" }
                    li { i { "data-lucide": "shield-check" } "Vetted, trained volunteers" }
                    li { i { "data-lucide": "calendar-clock" } "Flexible scheduling" }
                    li { i { "data-lucide": "monitor" } "Online or in person" }
                }
            }
        }
    }
}

#[component]
fn FeatureSection(id: String, eyebrow: String, title: String, features: Vec<Feature>) -> Element {
    rsx! {
        section {
            id: "{id}",
            class: "section section-alt",
            div {
                class: "container",
                SectionHeading { eyebrow, title }
                div {
                    class: "feature-grid",
                    for (index, feature) in features.into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "feature-card reveal-up",
                            div { class: "feature-icon", i { "data-lucide": "{feature.icon}" } }
                            h3 { "{feature.title}" }
                            p { "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CallToAction() -> Element {
    let email = &site_config().contact_email;

    rsx! {
        section {
            id: "contact",
            class: "section cta-section",
            div {
                class: "container cta-inner reveal-up",
                h2 { "Ready to build momentum?" }
                p { "Whether you need a tutor or want to become one, we'd love to hear from you." }
                div {
                    class: "cta-actions",
                    ModalTrigger { kind: ModalKind::Request, class: "btn btn-light btn-lg", "Request a Tutor" }
                    ModalTrigger { kind: ModalKind::Volunteer, class: "btn btn-outline-light btn-lg", "Volunteer With Us" }
                }
                p {
                    class: "cta-contact",
                    "Questions? Email "
                    a { href: "mailto:{email}", "{email}" }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "container footer-inner",
                p { "\u{00A9} Momentum Tutoring. Free tutoring, powered by volunteers." }
            }
        }
    }
}
