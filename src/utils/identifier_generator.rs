//! Short identifier generation.
//!
//! Identifiers are random, fixed-length, and drawn from the URL-safe base64
//! alphabet. Generation is pure: uniqueness against existing mappings is not
//! checked here but enforced by the store's constraint, so a collision
//! surfaces as an insert conflict rather than corrupting an existing mapping.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
///
/// 6 bytes encode to exactly [`IDENTIFIER_LENGTH`] characters without padding.
const IDENTIFIER_LENGTH_BYTES: usize = 6;

/// Length of a generated identifier in characters.
pub const IDENTIFIER_LENGTH: usize = 8;

/// Generates a random 8-character short identifier.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, so identifiers contain only letters, digits, `-` and `_`.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let identifier = generate_identifier();
/// assert_eq!(identifier.len(), 8);
/// assert!(identifier.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_identifier() -> String {
    let mut buffer = [0u8; IDENTIFIER_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
