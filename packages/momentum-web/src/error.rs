//! Typed errors for the landing page.
//!
//! Uses `thiserror` so every failure the page can surface carries a
//! message that is shown to the visitor as-is.

use thiserror::Error;

/// Why a single form field failed validation.
///
/// The `Display` text is what lands in the field's error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Required field is empty after trimming
    #[error("This field is required")]
    Required,

    /// Email field holds something that is not an address
    #[error("Please enter a valid email")]
    InvalidEmail,
}

/// Errors loading the build-time site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors talking to the browser from Rust.
#[cfg(feature = "web")]
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
