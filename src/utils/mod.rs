//! Utility functions for token generation and URL validation.
//!
//! - [`token_generator`] - Short token generation
//! - [`url_validator`] - Destination URL checks

pub mod token_generator;
pub mod url_validator;
