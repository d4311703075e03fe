//! Testimonial carousel with autoplay, dots and touch swipe

use dioxus::prelude::*;

use crate::config::site_config;
use crate::state::{CarouselNav, CarouselState};
use crate::timer::sleep;
use crate::types::{Testimonial, TESTIMONIALS};

/// Advance every interval until a newer autoplay generation supersedes this one
fn run_autoplay(mut carousel: Signal<CarouselState>, generation: u64) {
    let interval = site_config().autoplay_interval_ms;
    spawn(async move {
        loop {
            sleep(interval).await;
            if !carousel.write().autoplay_tick(generation) {
                break;
            }
        }
    });
}

fn navigate(mut carousel: Signal<CarouselState>, nav: CarouselNav) {
    let generation = carousel.write().navigate(nav);
    run_autoplay(carousel, generation);
}

#[component]
pub fn TestimonialsCarousel() -> Element {
    let mut carousel = use_signal(|| CarouselState::new(TESTIMONIALS.len()));
    let mut touch_start_x = use_signal(|| 0.0_f64);

    use_effect(move || {
        let generation = carousel.write().restart_autoplay();
        run_autoplay(carousel, generation);
    });

    let (offset, dots, live) = {
        let state = carousel.read();
        let dots: Vec<bool> = (0..state.slide_count())
            .map(|index| state.is_dot_active(index))
            .collect();
        // Rotating slides are not announced; paused ones are
        let live = if state.autoplay_active() { "off" } else { "polite" };
        (state.track_offset_percent(), dots, live)
    };

    rsx! {
        div {
            id: "testimonials-carousel",
            class: "testimonials-carousel",
            onmouseenter: move |_| carousel.write().suspend_autoplay(),
            onmouseleave: move |_| {
                let generation = carousel.write().restart_autoplay();
                run_autoplay(carousel, generation);
            },
            div {
                class: "testimonials-viewport",
                div {
                    id: "testimonials-track",
                    class: "testimonials-track",
                    aria_live: live,
                    style: "transform: translateX(-{offset}%);",
                    ontouchstart: move |evt: TouchEvent| {
                        if let Some(touch) = evt.touches_changed().first() {
                            touch_start_x.set(touch.screen_coordinates().x);
                        }
                    },
                    ontouchend: move |evt: TouchEvent| {
                        let Some(touch) = evt.touches_changed().first().map(|t| t.screen_coordinates().x) else {
                            return;
                        };
                        let threshold = site_config().swipe_threshold_px;
                        let swiped = carousel.write().swipe(touch_start_x(), touch, threshold);
                        if let Some(generation) = swiped {
                            run_autoplay(carousel, generation);
                        }
                    },
                    for (index, testimonial) in TESTIMONIALS.iter().copied().enumerate() {
                        TestimonialCard { key: "{index}", testimonial }
                    }
                }
            }
            button {
                class: "carousel-btn carousel-prev",
                r#type: "button",
                aria_label: "Previous testimonial",
                onclick: move |_| navigate(carousel, CarouselNav::Previous),
                "\u{2039}"
            }
            button {
                class: "carousel-btn carousel-next",
                r#type: "button",
                aria_label: "Next testimonial",
                onclick: move |_| navigate(carousel, CarouselNav::Next),
                "\u{203A}"
            }
            div {
                id: "carousel-dots",
                class: "carousel-dots",
                for (index, active) in dots.into_iter().enumerate() {
                    {
                        let label = format!("Go to testimonial {}", index + 1);
                        rsx! {
                            button {
                                key: "{index}",
                                class: if active { "carousel-dot active" } else { "carousel-dot" },
                                r#type: "button",
                                aria_label: label,
                                onclick: move |_| navigate(carousel, CarouselNav::GoTo(index)),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> Element {
    let initials = testimonial.initials();

    rsx! {
        article {
            class: "testimonial-card",
            div { class: "testimonial-stars", "\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}" }
            blockquote { class: "testimonial-quote", "\u{201C}{testimonial.quote}\u{201D}" }
            div {
                class: "testimonial-author",
                div { class: "testimonial-avatar", "{initials}" }
                div {
                    p { class: "testimonial-name", "{testimonial.name}" }
                    p { class: "testimonial-role", "{testimonial.role}" }
                }
            }
        }
    }
}
