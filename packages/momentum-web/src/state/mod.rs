//! Widget state
//!
//! Every widget's behavior lives here as a plain struct with no DOM access,
//! so it can be driven and tested without a browser. Components in
//! `crate::components` own one of these in a signal and forward events to it.

mod accordion;
mod animation;
mod carousel;
mod navbar;
mod overlays;
mod submission;
mod toast;
mod validation;

pub use accordion::*;
pub use animation::*;
pub use carousel::*;
pub use navbar::*;
pub use overlays::*;
pub use submission::*;
pub use toast::*;
pub use validation::*;
