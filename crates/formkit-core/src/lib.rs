//! Formkit core library
//!
//! This crate provides the domain types shared by the formkit encoders: the
//! closed rejection taxonomy, file-type descriptors with their content
//! checks, and the upload validation gate. Everything here is synchronous,
//! allocation-light, and free of I/O.

pub mod error;
pub mod file_type;
pub mod validation;

// Re-export commonly used types
pub use error::EncodeError;
pub use file_type::{ContentCheck, FileType, ImageType, Signature};
pub use validation::{validate_upload, DEFAULT_MAX_FILE_SIZE};
