//! Multipart encoding for single-file uploads and plain form records.
//!
//! [`FileUpload`] validates a payload (size limit plus content check) and
//! frames it as an RFC 7578 `multipart/form-data` body with a single field.
//! [`FormData`] serializes a record's scalar fields into a simplified
//! multipart-like body for internal transport. Both implement
//! [`BodyConversion`], the bidirectional seam routing layers drive as a
//! request-body transform.
//!
//! All operations are synchronous transforms over in-memory buffers; no
//! streaming, no I/O, no shared mutable state across encoder instances.

pub mod boundary;
pub mod conversion;
pub mod form;
pub mod segment;
pub mod upload;

// Re-export commonly used types
pub use conversion::BodyConversion;
pub use form::FormData;
pub use segment::FormField;
pub use upload::FileUpload;

pub use formkit_core::{
    validate_upload, ContentCheck, EncodeError, FileType, ImageType, Signature,
    DEFAULT_MAX_FILE_SIZE,
};
