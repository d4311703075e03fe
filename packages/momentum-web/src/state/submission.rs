//! The volunteer and tutoring request forms, and the mailto drafts they
//! produce. Nothing is sent over the network; the visitor's email client
//! does the delivery.

use super::overlays::{ModalKind, Overlays};
use super::validation::{FieldKind, FieldSpec, FormState};

const NOT_PROVIDED: &str = "Not provided";

pub static VOLUNTEER_FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        id: "vol-name",
        label: "Full Name",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Your full name",
        fallback: None,
    },
    FieldSpec {
        id: "vol-email",
        label: "Email",
        kind: FieldKind::Email,
        required: true,
        placeholder: "you@example.com",
        fallback: None,
    },
    FieldSpec {
        id: "vol-grade",
        label: "Grade / Age",
        kind: FieldKind::Text,
        required: true,
        placeholder: "e.g. 11th grade",
        fallback: None,
    },
    FieldSpec {
        id: "vol-phone",
        label: "Phone",
        kind: FieldKind::Tel,
        required: false,
        placeholder: "Optional",
        fallback: Some(NOT_PROVIDED),
    },
    FieldSpec {
        id: "vol-subjects",
        label: "Subjects You Can Tutor",
        kind: FieldKind::Text,
        required: true,
        placeholder: "e.g. Algebra, Chemistry, Essay writing",
        fallback: None,
    },
    FieldSpec {
        id: "vol-message",
        label: "Why do you want to volunteer?",
        kind: FieldKind::TextArea,
        required: false,
        placeholder: "Tell us a little about yourself",
        fallback: Some(NOT_PROVIDED),
    },
];

pub static REQUEST_FIELDS: [FieldSpec; 8] = [
    FieldSpec {
        id: "req-name",
        label: "Student Name",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Student's full name",
        fallback: None,
    },
    FieldSpec {
        id: "req-parent",
        label: "Parent / Guardian Name",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Parent or guardian",
        fallback: None,
    },
    FieldSpec {
        id: "req-email",
        label: "Contact Email",
        kind: FieldKind::Email,
        required: true,
        placeholder: "you@example.com",
        fallback: None,
    },
    FieldSpec {
        id: "req-phone",
        label: "Phone",
        kind: FieldKind::Tel,
        required: false,
        placeholder: "Optional",
        fallback: Some(NOT_PROVIDED),
    },
    FieldSpec {
        id: "req-grade",
        label: "Grade",
        kind: FieldKind::Text,
        required: true,
        placeholder: "e.g. 7th grade",
        fallback: None,
    },
    FieldSpec {
        id: "req-subjects",
        label: "Subjects Needed",
        kind: FieldKind::Text,
        required: true,
        placeholder: "e.g. Geometry, Reading",
        fallback: None,
    },
    FieldSpec {
        id: "req-availability",
        label: "Availability",
        kind: FieldKind::Text,
        required: true,
        placeholder: "e.g. Weekday evenings",
        fallback: None,
    },
    FieldSpec {
        id: "req-notes",
        label: "Additional Notes",
        kind: FieldKind::TextArea,
        required: false,
        placeholder: "Anything we should know?",
        fallback: Some("None"),
    },
];

/// A pre-filled email for the visitor's mail client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    /// `mailto:` URL with percent-encoded subject and body
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// Toast copy shown around a successful submission
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionCopy {
    pub opening_message: &'static str,
    pub success_message: &'static str,
}

pub const OPENING_TITLE: &str = "Opening Email Client";
pub const SUCCESS_TITLE: &str = "Draft Created!";
pub const FAILURE_TITLE: &str = "Oops!";
pub const FAILURE_MESSAGE: &str = "Please fill in all required fields correctly.";

/// Result of pressing submit
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Some required field failed; the form and its modal are untouched
    Blocked,
    /// Draft composed, modal closed and form reset
    Draft(MailDraft),
}

/// Which of the two forms; each lives in the modal of the same kind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Volunteer,
    Request,
}

impl FormKind {
    pub fn element_id(&self) -> &'static str {
        match self {
            FormKind::Volunteer => "volunteer-form",
            FormKind::Request => "request-form",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormKind::Volunteer => &VOLUNTEER_FIELDS,
            FormKind::Request => &REQUEST_FIELDS,
        }
    }

    pub fn modal(&self) -> ModalKind {
        match self {
            FormKind::Volunteer => ModalKind::Volunteer,
            FormKind::Request => ModalKind::Request,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormKind::Volunteer => "Submit Application",
            FormKind::Request => "Request Tutoring",
        }
    }

    pub fn copy(&self) -> SubmissionCopy {
        match self {
            FormKind::Volunteer => SubmissionCopy {
                opening_message: "Your email app will open with a pre-filled draft. Please click Send to complete your application.",
                success_message: "Please check your email app and click Send to finish your application.",
            },
            FormKind::Request => SubmissionCopy {
                opening_message: "Your email app will open with a pre-filled draft.",
                success_message: "Please check your email app and click Send to submit your request.",
            },
        }
    }

    pub fn new_form(&self) -> FormState {
        FormState::new(self.fields())
    }

    /// Submit the form.
    ///
    /// On failure every invalid field is marked and nothing else changes. On
    /// success the draft is composed from the entered values, then the modal
    /// is closed (releasing its scroll lock hold) and the form is reset.
    pub fn submit(&self, form: &mut FormState, overlays: &mut Overlays, recipient: &str) -> SubmitOutcome {
        if !form.validate_all() {
            tracing::debug!(form = self.element_id(), "submission blocked by validation");
            return SubmitOutcome::Blocked;
        }

        let draft = self.compose(form, recipient);
        overlays.close_modal(self.modal());
        form.reset();
        SubmitOutcome::Draft(draft)
    }

    /// Compose the draft from a form that has already passed validation
    pub fn compose(&self, form: &FormState, recipient: &str) -> MailDraft {
        match self {
            FormKind::Volunteer => compose_volunteer(form, recipient),
            FormKind::Request => compose_request(form, recipient),
        }
    }
}

fn compose_volunteer(form: &FormState, recipient: &str) -> MailDraft {
    let name = form.value("vol-name");
    let body = format!(
        "Volunteer Application\n\n\
         Name: {name}\n\
         Email: {email}\n\
         Grade/Age: {grade}\n\
         Phone: {phone}\n\
         Subjects: {subjects}\n\
         Message: {message}\n\n\
         I am interested in volunteering with Momentum Tutoring!",
        email = form.value("vol-email"),
        grade = form.value("vol-grade"),
        phone = form.value_or_fallback("vol-phone"),
        subjects = form.value("vol-subjects"),
        message = form.value_or_fallback("vol-message"),
    );

    MailDraft {
        recipient: recipient.to_string(),
        subject: format!("New Volunteer Application: {name}"),
        body,
    }
}

fn compose_request(form: &FormState, recipient: &str) -> MailDraft {
    let student = form.value("req-name");
    let body = format!(
        "Tutoring Request\n\n\
         Student Name: {student}\n\
         Parent Name: {parent}\n\
         Contact Email: {email}\n\
         Phone: {phone}\n\
         Grade: {grade}\n\
         Subjects Needed: {subjects}\n\
         Availability: {availability}\n\
         Additional Notes: {notes}\n\n\
         I would like to request tutoring support.",
        parent = form.value("req-parent"),
        email = form.value("req-email"),
        phone = form.value_or_fallback("req-phone"),
        grade = form.value("req-grade"),
        subjects = form.value("req-subjects"),
        availability = form.value("req-availability"),
        notes = form.value_or_fallback("req-notes"),
    );

    MailDraft {
        recipient: recipient.to_string(),
        subject: format!("Tutoring Request: {student}"),
        body,
    }
}
