//! Inline form validation
//!
//! Field states are derived from the current value and recomputed on blur,
//! and on input only while a field is showing an error.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::FieldError;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Input type of a form field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
}

impl FieldKind {
    /// Value for the `type` attribute; `None` for textareas
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Tel => Some("tel"),
            FieldKind::TextArea => None,
        }
    }
}

/// Static description of one form field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    /// Text used in the email draft when an optional field is left blank
    pub fallback: Option<&'static str>,
}

impl FieldSpec {
    /// Id of the element that shows this field's error message
    pub fn error_slot_id(&self) -> String {
        format!("{}-error", self.id)
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validate a raw value against a field's rules
pub fn validate_value(spec: &FieldSpec, value: &str) -> Result<(), FieldError> {
    let value = value.trim();

    if spec.required && value.is_empty() {
        return Err(FieldError::Required);
    }

    if spec.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }

    Ok(())
}

/// Presentational state of a field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not yet validated, or validated while empty
    #[default]
    Neutral,
    Valid,
    Invalid(FieldError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub status: FieldStatus,
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        matches!(self.status, FieldStatus::Invalid(_))
    }

    /// Message for the error slot; empty when the field is not in error
    pub fn error_message(&self) -> String {
        match self.status {
            FieldStatus::Invalid(err) => err.to_string(),
            _ => String::new(),
        }
    }

    /// `error`, `valid`, or nothing
    pub fn status_class(&self) -> &'static str {
        match self.status {
            FieldStatus::Neutral => "",
            FieldStatus::Valid => "valid",
            FieldStatus::Invalid(_) => "error",
        }
    }

    /// Recompute the status from the current value
    pub fn validate(&mut self, spec: &FieldSpec) -> bool {
        match validate_value(spec, &self.value) {
            Ok(()) => {
                self.status = if self.value.trim().is_empty() {
                    FieldStatus::Neutral
                } else {
                    FieldStatus::Valid
                };
                true
            }
            Err(err) => {
                self.status = FieldStatus::Invalid(err);
                false
            }
        }
    }
}

/// Values and validation state for every field of one form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    specs: &'static [FieldSpec],
    fields: Vec<FieldState>,
}

impl FormState {
    pub fn new(specs: &'static [FieldSpec]) -> Self {
        Self {
            specs,
            fields: vec![FieldState::default(); specs.len()],
        }
    }

    pub fn specs(&self) -> &'static [FieldSpec] {
        self.specs
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.id == id)
    }

    pub fn field(&self, id: &str) -> Option<&FieldState> {
        self.position(id).map(|i| &self.fields[i])
    }

    /// Raw value of a field, empty if the form has no such field
    pub fn value(&self, id: &str) -> &str {
        self.field(id).map(|f| f.value.as_str()).unwrap_or("")
    }

    /// Value for the email draft: the field's fallback when left empty
    pub fn value_or_fallback(&self, id: &str) -> String {
        let Some(i) = self.position(id) else {
            return String::new();
        };
        let value = &self.fields[i].value;
        match self.specs[i].fallback {
            Some(fallback) if value.is_empty() => fallback.to_string(),
            _ => value.clone(),
        }
    }

    /// Input event: store the value, re-validating only a field in error
    pub fn input(&mut self, id: &str, value: String) {
        let Some(i) = self.position(id) else {
            return;
        };
        let field = &mut self.fields[i];
        field.value = value;
        if self.specs[i].required && field.is_invalid() {
            field.validate(&self.specs[i]);
        }
    }

    /// Blur event: always validate a required field
    pub fn blur(&mut self, id: &str) {
        let Some(i) = self.position(id) else {
            return;
        };
        if self.specs[i].required {
            self.fields[i].validate(&self.specs[i]);
        }
    }

    /// Validate every required field. All of them are marked, not just the
    /// first failure.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for (spec, field) in self.specs.iter().zip(self.fields.iter_mut()) {
            if spec.required && !field.validate(spec) {
                all_valid = false;
            }
        }
        all_valid
    }

    /// Restore default values and clear every status and message
    pub fn reset(&mut self) {
        self.fields = vec![FieldState::default(); self.specs.len()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: FieldSpec = FieldSpec {
        id: "t-name",
        label: "Name",
        kind: FieldKind::Text,
        required: true,
        placeholder: "",
        fallback: None,
    };

    const EMAIL: FieldSpec = FieldSpec {
        id: "t-email",
        label: "Email",
        kind: FieldKind::Email,
        required: true,
        placeholder: "",
        fallback: None,
    };

    const PHONE: FieldSpec = FieldSpec {
        id: "t-phone",
        label: "Phone",
        kind: FieldKind::Tel,
        required: false,
        placeholder: "",
        fallback: Some("Not provided"),
    };

    static FIELDS: [FieldSpec; 3] = [NAME, EMAIL, PHONE];

    #[test]
    fn test_email_predicate() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn test_empty_required_email_reports_required_not_invalid() {
        assert_eq!(validate_value(&EMAIL, ""), Err(FieldError::Required));
        assert_eq!(validate_value(&EMAIL, "   "), Err(FieldError::Required));
        assert_eq!(validate_value(&EMAIL, "a@b"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_value(&EMAIL, " a@b.co "), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(FieldError::InvalidEmail.to_string(), "Please enter a valid email");
    }

    #[test]
    fn test_input_does_not_validate_untouched_field() {
        let mut form = FormState::new(&FIELDS);
        form.input("t-email", "a@".to_string());
        assert_eq!(form.field("t-email").unwrap().status, FieldStatus::Neutral);
    }

    #[test]
    fn test_input_revalidates_field_in_error() {
        let mut form = FormState::new(&FIELDS);
        form.input("t-email", "a@".to_string());
        form.blur("t-email");
        assert_eq!(
            form.field("t-email").unwrap().status,
            FieldStatus::Invalid(FieldError::InvalidEmail)
        );

        form.input("t-email", "a@b.co".to_string());
        let field = form.field("t-email").unwrap();
        assert_eq!(field.status, FieldStatus::Valid);
        assert_eq!(field.error_message(), "");
        assert_eq!(field.status_class(), "valid");
    }

    #[test]
    fn test_validate_all_marks_every_failure() {
        let mut form = FormState::new(&FIELDS);
        assert!(!form.validate_all());
        assert!(form.field("t-name").unwrap().is_invalid());
        assert!(form.field("t-email").unwrap().is_invalid());
        assert_eq!(form.field("t-phone").unwrap().status, FieldStatus::Neutral);
    }

    #[test]
    fn test_validate_all_passes_with_optional_blank() {
        let mut form = FormState::new(&FIELDS);
        form.input("t-name", "Ada".to_string());
        form.input("t-email", "ada@example.org".to_string());
        assert!(form.validate_all());
        assert_eq!(form.value_or_fallback("t-phone"), "Not provided");
    }

    #[test]
    fn test_reset_clears_values_and_status() {
        let mut form = FormState::new(&FIELDS);
        form.input("t-name", "Ada".to_string());
        form.validate_all();
        form.reset();

        assert_eq!(form.value("t-name"), "");
        assert_eq!(form.field("t-email").unwrap().error_message(), "");
        assert_eq!(form.field("t-name").unwrap().status_class(), "");
    }

    #[test]
    fn test_error_slot_id() {
        assert_eq!(NAME.error_slot_id(), "t-name-error");
    }
}
