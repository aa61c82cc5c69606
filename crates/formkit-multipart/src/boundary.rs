//! Multipart boundary generation and validation.
//!
//! Generated tokens have the fixed form `Boundary-` plus 15 random
//! alphanumeric characters (24 characters total). The token is a framing
//! separator, not a cryptographic nonce: callers must not rely on its
//! unpredictability for anything beyond basic framing-injection avoidance.
//! A payload that happens to contain the literal boundary string still
//! produces an ambiguous body; the frame builder does not scan for this.

use formkit_core::EncodeError;
use rand::distr::{Alphanumeric, SampleString};
use rand::Rng;

/// Prefix of every generated boundary token.
pub const BOUNDARY_PREFIX: &str = "Boundary-";

/// Number of random alphanumeric characters after the prefix.
pub const BOUNDARY_RANDOM_LEN: usize = 15;

// RFC 2046 caps boundary tokens at 70 characters.
const MAX_BOUNDARY_LEN: usize = 70;

/// Generate a boundary token using the thread-local randomness source.
pub fn generate() -> String {
    generate_with(&mut rand::rng())
}

/// Generate a boundary token from a caller-supplied randomness source.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let token = Alphanumeric.sample_string(rng, BOUNDARY_RANDOM_LEN);
    format!("{}{}", BOUNDARY_PREFIX, token)
}

/// Check a boundary token against the boundary grammar.
///
/// Generated tokens always pass. Caller-supplied tokens must be non-empty,
/// at most 70 characters, and limited to alphanumerics and hyphens so they
/// can never legitimately occur inside header text.
pub fn validate(boundary: &str) -> Result<(), EncodeError> {
    let well_formed = !boundary.is_empty()
        && boundary.len() <= MAX_BOUNDARY_LEN
        && boundary
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-');
    if well_formed {
        Ok(())
    } else {
        tracing::debug!(boundary, "rejected malformed boundary token");
        Err(EncodeError::MalformedBoundary(boundary.to_string()))
    }
}
