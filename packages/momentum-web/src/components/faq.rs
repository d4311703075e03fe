//! FAQ accordion

use dioxus::prelude::*;

use crate::state::AccordionState;
use crate::types::FAQS;

#[component]
pub fn FaqList() -> Element {
    let mut accordion = use_signal(AccordionState::new);

    rsx! {
        div {
            class: "faq-list",
            for (index, entry) in FAQS.iter().copied().enumerate() {
                {
                    let expanded = accordion.read().is_expanded(index);
                    rsx! {
                        div {
                            key: "{index}",
                            class: if expanded { "faq-item active" } else { "faq-item" },
                            button {
                                class: "faq-question",
                                r#type: "button",
                                aria_expanded: "{expanded}",
                                onclick: move |_| accordion.write().toggle(index),
                                span { "{entry.question}" }
                                span { class: "faq-icon", if expanded { "\u{2212}" } else { "+" } }
                            }
                            div {
                                class: "faq-answer",
                                p { "{entry.answer}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    const STYLES: &str = include_str!("../../assets/styles.css");

    fn rule(selector: &str) -> &'static str {
        let start = STYLES
            .find(&format!("\n{selector} {{"))
            .unwrap_or_else(|| panic!("no rule for {selector}"));
        let body = &STYLES[start..];
        &body[..body.find('}').unwrap()]
    }

    #[test]
    fn test_open_answer_height_is_not_capped() {
        let open = rule(".faq-item.active .faq-answer");
        assert!(open.contains("grid-template-rows: 1fr"));
        assert!(!open.contains("max-height"));

        let closed = rule(".faq-answer");
        assert!(closed.contains("grid-template-rows: 0fr"));
        assert!(!closed.contains("max-height"));
    }
}
