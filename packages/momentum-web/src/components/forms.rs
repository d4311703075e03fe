//! Volunteer and tutoring request forms

use dioxus::prelude::*;

use super::{use_overlays, use_toasts};
use crate::config::site_config;
use crate::state::{
    FieldSpec, FieldState, FormKind, SubmitOutcome, ToastKind, FAILURE_MESSAGE, FAILURE_TITLE,
    OPENING_TITLE, SUCCESS_TITLE,
};
use crate::timer::sleep;

/// One of the two modal forms. Submitting opens a pre-filled email draft.
#[component]
pub fn InquiryForm(kind: FormKind) -> Element {
    let mut form_state = use_signal(|| kind.new_form());
    let overlays = use_overlays();
    let toasts = use_toasts();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let config = site_config();
        let mut overlay_state = overlays.state;
        let outcome = kind.submit(
            &mut form_state.write(),
            &mut overlay_state.write(),
            &config.contact_email,
        );
        let SubmitOutcome::Draft(draft) = outcome else {
            toasts.show(ToastKind::Error, FAILURE_TITLE, FAILURE_MESSAGE);
            return;
        };

        let copy = kind.copy();
        tracing::info!(form = kind.element_id(), subject = %draft.subject, "opening email draft");

        toasts.show(ToastKind::Info, OPENING_TITLE, copy.opening_message);

        let url = draft.mailto_url();
        let open_delay = config.mail_open_delay_ms;
        spawn(async move {
            sleep(open_delay).await;
            open_draft(&url);
        });

        let success_delay = config.success_toast_delay_ms;
        spawn(async move {
            sleep(success_delay).await;
            toasts.show(ToastKind::Success, SUCCESS_TITLE, copy.success_message);
        });
    };

    let state = form_state.read();

    rsx! {
        form {
            id: kind.element_id(),
            class: "modal-form",
            novalidate: true,
            onsubmit: handle_submit,
            div {
                class: "form-grid",
                for spec in state.specs().iter().copied() {
                    FormField {
                        key: "{spec.id}",
                        spec,
                        state: state.field(spec.id).cloned().unwrap_or_default(),
                        on_input: move |value: String| form_state.write().input(spec.id, value),
                        on_blur: move |_| form_state.write().blur(spec.id),
                    }
                }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary btn-full",
                "{kind.submit_label()}"
            }
        }
    }
}

#[cfg(feature = "web")]
fn open_draft(url: &str) {
    if let Err(e) = crate::dom::open_in_new_tab(url) {
        tracing::warn!(error = %e, "could not open email client");
    }
}

#[cfg(not(feature = "web"))]
fn open_draft(url: &str) {
    tracing::debug!(url, "email draft ready");
}

#[component]
fn FormField(
    spec: FieldSpec,
    state: FieldState,
    on_input: EventHandler<String>,
    on_blur: EventHandler<()>,
) -> Element {
    let status = state.status_class();
    let error = state.error_message();
    let error_id = spec.error_slot_id();
    let wide = if spec.kind.input_type().is_none() { "form-group full" } else { "form-group" };

    rsx! {
        div {
            class: wide,
            label {
                r#for: spec.id,
                "{spec.label}"
                if spec.required {
                    span { class: "required", " *" }
                }
            }
            if let Some(input_type) = spec.kind.input_type() {
                input {
                    id: spec.id,
                    name: spec.id,
                    r#type: input_type,
                    class: "form-input {status}",
                    placeholder: spec.placeholder,
                    required: spec.required,
                    aria_describedby: "{error_id}",
                    value: "{state.value}",
                    oninput: move |e: FormEvent| on_input.call(e.value()),
                    onblur: move |_| on_blur.call(()),
                }
            } else {
                textarea {
                    id: spec.id,
                    name: spec.id,
                    class: "form-input {status}",
                    placeholder: spec.placeholder,
                    required: spec.required,
                    rows: "4",
                    aria_describedby: "{error_id}",
                    value: "{state.value}",
                    oninput: move |e: FormEvent| on_input.call(e.value()),
                    onblur: move |_| on_blur.call(()),
                }
            }
            span { id: "{error_id}", class: "form-error", role: "alert", "{error}" }
        }
    }
}
