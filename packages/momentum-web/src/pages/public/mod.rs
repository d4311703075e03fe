//! Public-facing pages

mod landing;
mod not_found;

pub use landing::*;
pub use not_found::*;
