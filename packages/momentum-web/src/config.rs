//! Site configuration
//!
//! A browser has no process environment, so overrides are baked in at build
//! time: set `MOMENTUM_SITE_CONFIG` to a JSON object when running `dx build`
//! and any field it names replaces the default below.

use serde::Deserialize;
use std::sync::OnceLock;

use crate::error::ConfigError;

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Contact address and every timing/threshold the widgets use.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Recipient of both mailto drafts
    pub contact_email: String,
    pub toast_duration_ms: u32,
    pub autoplay_interval_ms: u32,
    /// Swipes must move strictly further than this
    pub swipe_threshold_px: f64,
    pub counter_duration_ms: f64,
    pub navbar_scrolled_px: f64,
    pub back_to_top_px: f64,
    pub scrollspy_offset_px: f64,
    /// Height of the fixed header, subtracted from anchor scroll targets
    pub header_offset_px: f64,
    pub mobile_nav_scroll_delay_ms: u32,
    pub mail_open_delay_ms: u32,
    pub success_toast_delay_ms: u32,
    pub page_loader_delay_ms: u32,
    pub tilt_divisor: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: "momentumtotutoring@gmail.com".to_string(),
            toast_duration_ms: 4000,
            autoplay_interval_ms: 5000,
            swipe_threshold_px: 50.0,
            counter_duration_ms: 2000.0,
            navbar_scrolled_px: 60.0,
            back_to_top_px: 500.0,
            scrollspy_offset_px: 120.0,
            header_offset_px: 90.0,
            mobile_nav_scroll_delay_ms: 300,
            mail_open_delay_ms: 800,
            success_toast_delay_ms: 2000,
            page_loader_delay_ms: 600,
            tilt_divisor: 35.0,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load the configuration baked in at build time, falling back to defaults
    pub fn load() -> Self {
        match option_env!("MOMENTUM_SITE_CONFIG") {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring MOMENTUM_SITE_CONFIG");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

/// Initialize the site configuration. Call this at startup.
pub fn init_site_config(config: SiteConfig) {
    if SITE_CONFIG.set(config).is_err() {
        tracing::debug!("site config already initialized");
    }
}

/// Get the configured site settings
pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(SiteConfig::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.contact_email, "momentumtotutoring@gmail.com");
        assert_eq!(config.autoplay_interval_ms, 5000);
        assert_eq!(config.swipe_threshold_px, 50.0);
        assert_eq!(config.mail_open_delay_ms, 800);
        assert_eq!(config.success_toast_delay_ms, 2000);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            SiteConfig::from_json(r#"{"contact_email":"hello@example.org","toast_duration_ms":1500}"#)
                .unwrap();
        assert_eq!(config.contact_email, "hello@example.org");
        assert_eq!(config.toast_duration_ms, 1500);
        assert_eq!(config.autoplay_interval_ms, 5000);
        assert_eq!(config.header_offset_px, 90.0);
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        let err = SiteConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
