//! Reusable UI components

mod carousel;
mod faq;
mod forms;
mod hero;
mod loading;
mod mobile_menu;
mod navbar;
mod overlays;
mod stats;
mod toast;

pub use carousel::*;
pub use faq::*;
pub use forms::*;
pub use hero::*;
pub use loading::*;
pub use mobile_menu::*;
pub use navbar::*;
pub use overlays::*;
pub use stats::*;
pub use toast::*;
