//! Destination URL validation.

use url::Url;

use crate::error::AppError;

/// Checks that `input` is an absolute `http`/`https` URL with a host.
///
/// The URL is only checked, never rewritten: the stored destination is
/// exactly what the client submitted.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with:
/// - `"original URL is required"` for empty input
/// - `"invalid URL format"` for anything else that fails the check
pub fn validate_original_url(input: &str) -> Result<(), AppError> {
    if input.trim().is_empty() {
        return Err(AppError::bad_request("original URL is required"));
    }

    // Stored verbatim and later sent as a `Location` header, which cannot
    // carry control characters.
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid_format());
    }

    let url = Url::parse(input).map_err(|_| invalid_format())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid_format());
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid_format()),
    }
}

fn invalid_format() -> AppError {
    AppError::bad_request("invalid URL format")
}
