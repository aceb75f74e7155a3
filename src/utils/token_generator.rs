//! Short token generation.
//!
//! Tokens are random rather than derived from the URL, so the generator keeps
//! no state. Uniqueness is enforced by the store at insertion time.

use base64::Engine as _;

/// Number of random bytes; 6 bytes encode to exactly 8 base64 characters.
const TOKEN_LENGTH_BYTES: usize = 6;

/// Length of every generated token.
pub const TOKEN_LENGTH: usize = 8;

/// Generates a cryptographically secure random short token.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character token from `[A-Za-z0-9_-]`.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
