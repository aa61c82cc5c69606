//! Bidirectional body conversion seam.

use bytes::Bytes;
use formkit_core::EncodeError;

/// A bidirectional transform between a wire body and a typed value.
///
/// Routing layers drive both directions: `apply` when accepting an incoming
/// request body, `unapply` when producing an outgoing one. Failures use the
/// closed [`EncodeError`] taxonomy and are returned synchronously; there is
/// no retry and no partial success.
pub trait BodyConversion {
    /// Decoded-side value of this conversion.
    type Value;

    /// Wire body to value.
    fn apply(&self, body: Bytes) -> Result<Self::Value, EncodeError>;

    /// Value to wire body.
    fn unapply(&self, value: Self::Value) -> Result<Bytes, EncodeError>;
}
