//! Application layer services implementing business logic.
//!
//! Services consume the repository and cache traits and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link lifecycle and cache coordination

pub mod services;
