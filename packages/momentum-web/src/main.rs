//! Momentum Tutoring - Dioxus Web Application
//!
//! Single-page landing site for a volunteer tutoring program. All page
//! behavior lives in DOM-free models under `state`; `components` renders them.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod config;
#[cfg(feature = "web")]
mod dom;
mod error;
mod pages;
mod routes;
mod state;
mod timer;
mod types;

use config::{init_site_config, SiteConfig};

#[cfg(feature = "web")]
fn init_logging() {
    tracing_wasm::set_as_global_default();
}

#[cfg(all(not(feature = "web"), not(target_arch = "wasm32")))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[cfg(all(not(feature = "web"), target_arch = "wasm32"))]
fn init_logging() {}

fn main() {
    // Initialize logging
    init_logging();

    let config = SiteConfig::load();
    tracing::info!(contact = %config.contact_email, "starting Momentum Tutoring");
    init_site_config(config);

    dioxus::launch(app::App);
}
