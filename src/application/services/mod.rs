//! Application services.
//!
//! - [`LinkService`] - short link lifecycle and cache coordination

pub mod link_service;

pub use link_service::{LinkService, LinkServiceSettings};
