//! File-type descriptors and content checks.
//!
//! A [`FileType`] pairs a MIME content type and canonical extension with a
//! [`ContentCheck`] describing how candidate bytes are verified before an
//! upload is accepted. Built-in descriptors cover the document and text
//! formats the upload encoders support; image formats live in [`ImageType`]
//! and convert into a `FileType` when used generically.
//!
//! Checks are pure functions of the byte buffer. A buffer shorter than the
//! bytes a signature inspects is a non-match, not a distinct error.

mod image;

pub use image::ImageType;

use std::borrow::Cow;

use crate::error::EncodeError;

/// Fixed-position byte signature rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    /// Buffer starts with the given bytes.
    Prefix(&'static [u8]),
    /// Buffer starts with any one of the given byte strings.
    OneOf(&'static [&'static [u8]]),
    /// RIFF container with the `WEBP` form type at bytes 8..12. The declared
    /// container size at bytes 4..8 is not checked.
    RiffWebp,
    /// ISO BMFF `ftyp` box with the given brand at bytes 8..12.
    FtypBrand([u8; 4]),
}

impl Signature {
    /// Whether `data` carries this signature.
    pub fn matches(&self, data: &[u8]) -> bool {
        match self {
            Signature::Prefix(prefix) => data.starts_with(prefix),
            Signature::OneOf(prefixes) => prefixes.iter().any(|prefix| data.starts_with(prefix)),
            Signature::RiffWebp => {
                data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP"
            }
            Signature::FtypBrand(brand) => {
                data.len() >= 12 && &data[4..8] == b"ftyp" && data[8..12] == brand[..]
            }
        }
    }
}

/// How a file type verifies candidate bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCheck {
    /// No content sniffing; any bytes pass.
    None,
    /// Bytes must decode as valid UTF-8 text.
    Utf8,
    /// Fixed-position signature match.
    Signature(Signature),
    /// Caller-supplied predicate; returning `false` reports a content
    /// mismatch against the descriptor's content type.
    Custom(fn(&[u8]) -> bool),
}

/// Immutable descriptor of a supported upload type.
///
/// Constructed once (built-in constructors below, or [`FileType::new`] for
/// caller-defined types) and reused across validations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileType {
    content_type: Cow<'static, str>,
    extension: Cow<'static, str>,
    check: ContentCheck,
}

impl FileType {
    /// Descriptor with a caller-chosen content type, extension, and check.
    pub fn new(
        content_type: impl Into<Cow<'static, str>>,
        extension: impl Into<Cow<'static, str>>,
        check: ContentCheck,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            extension: extension.into(),
            check,
        }
    }

    /// Generic JSON. Declared supported, not signature-checked.
    pub fn json() -> Self {
        Self::new("application/json", "json", ContentCheck::None)
    }

    /// Plain text. Declared supported, not signature-checked.
    pub fn text() -> Self {
        Self::new("text/plain", "txt", ContentCheck::None)
    }

    /// CSV; content must decode as UTF-8.
    pub fn csv() -> Self {
        Self::new("text/csv", "csv", ContentCheck::Utf8)
    }

    /// PDF; content must start with the `%PDF` marker.
    pub fn pdf() -> Self {
        Self::new(
            "application/pdf",
            "pdf",
            ContentCheck::Signature(Signature::Prefix(b"%PDF")),
        )
    }

    /// Legacy Word document. Declared supported, not signature-checked.
    pub fn doc() -> Self {
        Self::new("application/msword", "doc", ContentCheck::None)
    }

    /// Word document. Declared supported, not signature-checked.
    pub fn docx() -> Self {
        Self::new(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "docx",
            ContentCheck::None,
        )
    }

    /// Legacy Excel spreadsheet. Declared supported, not signature-checked.
    pub fn xls() -> Self {
        Self::new("application/vnd.ms-excel", "xls", ContentCheck::None)
    }

    /// Excel spreadsheet. Declared supported, not signature-checked.
    pub fn xlsx() -> Self {
        Self::new(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            "xlsx",
            ContentCheck::None,
        )
    }

    /// Legacy PowerPoint presentation. Declared supported, not
    /// signature-checked.
    pub fn ppt() -> Self {
        Self::new("application/vnd.ms-powerpoint", "ppt", ContentCheck::None)
    }

    /// PowerPoint presentation. Declared supported, not signature-checked.
    pub fn pptx() -> Self {
        Self::new(
            "application/vnd.openxmlformats-officedocument.presentationml.presentation",
            "pptx",
            ContentCheck::None,
        )
    }

    /// ZIP archive. Declared supported, not signature-checked.
    pub fn zip() -> Self {
        Self::new("application/zip", "zip", ContentCheck::None)
    }

    /// MIME content type sent with uploads of this type.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Canonical file extension, without the leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The content check applied by [`FileType::validate`].
    pub fn check(&self) -> ContentCheck {
        self.check
    }

    /// Verify candidate bytes against this type's content check.
    ///
    /// A failing check reports [`EncodeError::ContentMismatch`] carrying
    /// this descriptor's content type; no other error kind is produced.
    pub fn validate(&self, data: &[u8]) -> Result<(), EncodeError> {
        let ok = match self.check {
            ContentCheck::None => true,
            ContentCheck::Utf8 => std::str::from_utf8(data).is_ok(),
            ContentCheck::Signature(signature) => signature.matches(data),
            ContentCheck::Custom(predicate) => predicate(data),
        };
        if ok {
            Ok(())
        } else {
            Err(EncodeError::content_mismatch(
                self.content_type.clone().into_owned(),
            ))
        }
    }

    /// Resolve a declared content-type string against the built-in types.
    ///
    /// Matching is case-insensitive and ignores parameters such as
    /// `; charset=utf-8`. Unknown strings are rejected with
    /// [`EncodeError::InvalidContentType`].
    pub fn for_content_type(content_type: &str) -> Result<Self, EncodeError> {
        let normalized = content_type.to_ascii_lowercase();
        let essence = normalized.split(';').next().unwrap_or("").trim();

        if let Some(image) = ImageType::ALL
            .iter()
            .copied()
            .find(|image| image.content_type() == essence)
        {
            return Ok(FileType::from(image));
        }

        match essence {
            "application/json" => Ok(Self::json()),
            "text/plain" => Ok(Self::text()),
            "text/csv" => Ok(Self::csv()),
            "application/pdf" => Ok(Self::pdf()),
            "application/msword" => Ok(Self::doc()),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Ok(Self::docx())
            }
            "application/vnd.ms-excel" => Ok(Self::xls()),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => Ok(Self::xlsx()),
            "application/vnd.ms-powerpoint" => Ok(Self::ppt()),
            "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
                Ok(Self::pptx())
            }
            "application/zip" => Ok(Self::zip()),
            _ => Err(EncodeError::InvalidContentType(content_type.to_string())),
        }
    }
}
