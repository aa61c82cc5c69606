//! Single-file upload encoder.

use bytes::Bytes;
use formkit_core::{validate_upload, EncodeError, FileType, DEFAULT_MAX_FILE_SIZE};

use crate::boundary;
use crate::conversion::BodyConversion;
use crate::segment::{self, FormField};

/// Encoder for a single-file `multipart/form-data` upload.
///
/// Bound to one field name, filename, and file type. The boundary is
/// generated at construction and fixed for the encoder's lifetime, so the
/// encoder is immutable after construction and safe to share across
/// threads. It never retains a payload buffer beyond the call inspecting
/// it.
///
/// [`apply`](FileUpload::apply) is a validation gate that returns the
/// payload unchanged; [`unapply`](FileUpload::unapply) runs the same
/// validation and frames the full multipart body. Neither skips
/// validation.
#[derive(Debug, Clone)]
pub struct FileUpload {
    field_name: String,
    filename: String,
    file_type: FileType,
    max_size: usize,
    boundary: String,
}

impl FileUpload {
    /// New encoder with a generated boundary and the default 10 MiB limit.
    ///
    /// `file_type` accepts a [`FileType`] or anything convertible into one,
    /// such as an [`ImageType`](formkit_core::ImageType).
    pub fn new(
        field_name: impl Into<String>,
        filename: impl Into<String>,
        file_type: impl Into<FileType>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            filename: filename.into(),
            file_type: file_type.into(),
            max_size: DEFAULT_MAX_FILE_SIZE,
            boundary: boundary::generate(),
        }
    }

    /// Set the maximum accepted payload size in bytes.
    #[must_use]
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Replace the generated boundary with a caller-supplied token.
    ///
    /// The token must satisfy the boundary grammar; see
    /// [`boundary::validate`].
    pub fn with_boundary(mut self, boundary: impl Into<String>) -> Result<Self, EncodeError> {
        let boundary = boundary.into();
        boundary::validate(&boundary)?;
        self.boundary = boundary;
        Ok(self)
    }

    /// The boundary token framing this encoder's bodies.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// The file type payloads are validated against.
    pub fn file_type(&self) -> &FileType {
        &self.file_type
    }

    /// Maximum accepted payload size in bytes.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type_header(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Validate `data`, returning it unchanged on success.
    pub fn apply(&self, data: Bytes) -> Result<Bytes, EncodeError> {
        validate_upload(&data, self.max_size, &self.file_type)?;
        Ok(data)
    }

    /// Validate `data` and frame the complete multipart body around it.
    pub fn unapply(&self, data: Bytes) -> Result<Bytes, EncodeError> {
        validate_upload(&data, self.max_size, &self.file_type)?;
        let field = FormField {
            name: self.field_name.clone(),
            filename: Some(self.filename.clone()),
            content_type: Some(self.file_type.content_type().to_string()),
            data,
        };
        segment::frame(&self.boundary, &field)
    }
}

impl BodyConversion for FileUpload {
    type Value = Bytes;

    fn apply(&self, body: Bytes) -> Result<Bytes, EncodeError> {
        FileUpload::apply(self, body)
    }

    fn unapply(&self, value: Bytes) -> Result<Bytes, EncodeError> {
        FileUpload::unapply(self, value)
    }
}
