//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::public::{Landing, NotFound};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
