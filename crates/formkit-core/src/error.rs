//! Error types for upload validation and multipart encoding.
//!
//! Every rejection is one value of the closed [`EncodeError`] enum. Variants
//! carry plain data only (no wrapped sources), so callers can compare errors
//! directly and map each kind to a user-facing rejection. This crate never
//! produces HTTP status codes or log entries on its own; callers own that
//! mapping.

use thiserror::Error;

/// Why an upload or encoding operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Upload buffer had zero length.
    #[error("upload data is empty")]
    EmptyData,

    /// Upload buffer exceeded the configured size limit.
    #[error("file too large: {size} bytes exceeds limit of {max_size} bytes")]
    FileTooLarge { size: usize, max_size: usize },

    /// A declared content-type string was not recognized.
    #[error("unsupported content type: {0}")]
    InvalidContentType(String),

    /// Content failed the expected type's signature or encoding check.
    ///
    /// `detected` is usually `None`: validation checks the expected type's
    /// own signature and does not attempt full content sniffing.
    #[error("content does not match expected type {expected}")]
    ContentMismatch {
        expected: String,
        detected: Option<String>,
    },

    /// A caller-supplied multipart boundary violates the boundary grammar.
    #[error("malformed multipart boundary: {0}")]
    MalformedBoundary(String),

    /// Header or field text could not be converted for the wire.
    #[error("encoding failed: {0}")]
    Encoding(String),
}

impl EncodeError {
    /// Content-mismatch rejection for the given expected content type, with
    /// no detected-type hint.
    pub fn content_mismatch(expected: impl Into<String>) -> Self {
        EncodeError::ContentMismatch {
            expected: expected.into(),
            detected: None,
        }
    }

    /// Machine-readable error code, stable across message wording changes.
    pub fn error_code(&self) -> &'static str {
        match self {
            EncodeError::EmptyData => "EMPTY_DATA",
            EncodeError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            EncodeError::InvalidContentType(_) => "INVALID_CONTENT_TYPE",
            EncodeError::ContentMismatch { .. } => "CONTENT_MISMATCH",
            EncodeError::MalformedBoundary(_) => "MALFORMED_BOUNDARY",
            EncodeError::Encoding(_) => "ENCODING_ERROR",
        }
    }
}
