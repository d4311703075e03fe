//! Count-up statistics and scroll-reveal animations

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::config::site_config;
use crate::state::CounterAnimation;
use crate::timer::{now_ms, sleep, FRAME_MS};
use crate::types::STATS;

/// Elements carrying one of these classes fade in the first time they scroll
/// into view
pub const REVEAL_SELECTOR: &str = ".reveal-up, .reveal-left, .reveal-right";

/// Mark reveal elements `visible` when they first intersect the viewport.
///
/// Only use reveal classes on elements whose `class` never re-renders; the
/// `visible` class is added outside the virtual DOM.
pub fn use_reveal_on_scroll() {
    use_effect(|| {
        #[cfg(feature = "web")]
        {
            let watched = crate::dom::observe_first_visibility(
                REVEAL_SELECTOR,
                0.1,
                "0px 0px -40px 0px",
                |element| {
                    if let Err(e) = element.class_list().add_1("visible") {
                        tracing::debug!(error = ?e, "could not reveal element");
                    }
                },
            );
            match watched {
                Ok(count) => tracing::debug!(count, "watching reveal elements"),
                Err(e) => tracing::warn!(error = %e, "reveal animations disabled"),
            }
        }
    });
}

/// Animate one counter from zero to its target, one frame at a time
fn animate_counter(mut values: Signal<Vec<i64>>, index: usize, target: i64) {
    let counter = CounterAnimation::new(target, site_config().counter_duration_ms);
    spawn(async move {
        let started = now_ms();
        loop {
            let step = counter.step(now_ms() - started);
            if let Some(slot) = values.write().get_mut(index) {
                *slot = step.value();
            }
            if step.is_done() {
                break;
            }
            sleep(FRAME_MS).await;
        }
    });
}

#[component]
pub fn StatsSection() -> Element {
    let values = use_signal(|| vec![0_i64; STATS.len()]);

    // Counter indices arrive here as their elements become 30% visible
    let start = use_coroutine(move |mut rx: UnboundedReceiver<usize>| async move {
        while let Some(index) = rx.next().await {
            if let Some(stat) = STATS.get(index) {
                animate_counter(values, index, stat.target);
            }
        }
    });

    use_effect(move || {
        #[cfg(feature = "web")]
        {
            let watched = crate::dom::observe_first_visibility(
                ".stat-number[data-target]",
                0.3,
                "0px",
                move |element| {
                    let index = element
                        .get_attribute("data-index")
                        .and_then(|raw| raw.parse::<usize>().ok());
                    if let Some(index) = index {
                        start.send(index);
                    }
                },
            );
            if let Err(e) = watched {
                tracing::warn!(error = %e, "stat counters disabled");
            }
        }
        #[cfg(not(feature = "web"))]
        let _ = start;
    });

    rsx! {
        section {
            id: "stats",
            class: "stats",
            div {
                class: "container stats-grid",
                for (index, stat) in STATS.iter().enumerate() {
                    {
                        let value = values.read().get(index).copied().unwrap_or(0);
                        rsx! {
                            div {
                                key: "{index}",
                                class: "stat-card reveal-up",
                                div {
                                    class: "stat-value",
                                    span {
                                        class: "stat-number",
                                        "data-target": "{stat.target}",
                                        "data-index": "{index}",
                                        "{value}"
                                    }
                                    span { class: "stat-suffix", "{stat.suffix}" }
                                }
                                p { class: "stat-label", "{stat.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
