//! Image formats and their magic-number signatures.

use super::{ContentCheck, FileType, Signature};

/// Supported image formats, each verified by a byte-exact signature.
///
/// An `ImageType` converts into a generic [`FileType`] via `From`, so the
/// validation path only needs to know one descriptor shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Jpeg,
    Png,
    Gif,
    Webp,
    Tiff,
    Bmp,
    Heic,
    Avif,
}

impl ImageType {
    /// All supported image formats.
    pub const ALL: [ImageType; 8] = [
        ImageType::Jpeg,
        ImageType::Png,
        ImageType::Gif,
        ImageType::Webp,
        ImageType::Tiff,
        ImageType::Bmp,
        ImageType::Heic,
        ImageType::Avif,
    ];

    /// MIME content type sent with uploads of this format.
    pub fn content_type(self) -> &'static str {
        match self {
            ImageType::Jpeg => "image/jpeg",
            ImageType::Png => "image/png",
            ImageType::Gif => "image/gif",
            ImageType::Webp => "image/webp",
            ImageType::Tiff => "image/tiff",
            ImageType::Bmp => "image/bmp",
            ImageType::Heic => "image/heic",
            ImageType::Avif => "image/avif",
        }
    }

    /// Canonical file extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageType::Jpeg => "jpg",
            ImageType::Png => "png",
            ImageType::Gif => "gif",
            ImageType::Webp => "webp",
            ImageType::Tiff => "tiff",
            ImageType::Bmp => "bmp",
            ImageType::Heic => "heic",
            ImageType::Avif => "avif",
        }
    }

    pub(crate) fn signature(self) -> Signature {
        match self {
            ImageType::Jpeg => Signature::Prefix(&[0xFF, 0xD8, 0xFF]),
            ImageType::Png => {
                Signature::Prefix(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])
            }
            ImageType::Gif => Signature::OneOf(&[b"GIF87a", b"GIF89a"]),
            ImageType::Webp => Signature::RiffWebp,
            // Little-endian and big-endian markers.
            ImageType::Tiff => {
                Signature::OneOf(&[&[0x49, 0x49, 0x2A, 0x00], &[0x4D, 0x4D, 0x00, 0x2A]])
            }
            ImageType::Bmp => Signature::Prefix(b"BM"),
            ImageType::Heic => Signature::FtypBrand(*b"heic"),
            ImageType::Avif => Signature::FtypBrand(*b"avif"),
        }
    }

    /// Whether `data` carries this format's signature.
    pub fn matches(self, data: &[u8]) -> bool {
        self.signature().matches(data)
    }
}

impl From<ImageType> for FileType {
    fn from(image: ImageType) -> Self {
        FileType::new(
            image.content_type(),
            image.extension(),
            ContentCheck::Signature(image.signature()),
        )
    }
}
