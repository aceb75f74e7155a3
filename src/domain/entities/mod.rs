//! Core domain entities.
//!
//! - [`ShortLink`] - a persisted short link
//! - [`NewShortLink`] - input for creating one

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
