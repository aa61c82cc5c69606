//! Upload validation gate.
//!
//! One entry point, [`validate_upload`], applied by the encoders before any
//! byte of a payload reaches the wire. Checks run in a fixed order and stop
//! at the first failure; the file type's own content check runs last and its
//! outcome propagates unchanged.

use crate::error::EncodeError;
use crate::file_type::FileType;

/// Default upload size limit: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Validate a candidate upload buffer.
///
/// Order matters and is part of the contract: empty data is reported before
/// the size limit (an empty buffer with `max_size = 0` is `EmptyData`, not
/// `FileTooLarge`), and the content check only runs for non-empty buffers
/// within the limit.
pub fn validate_upload(
    data: &[u8],
    max_size: usize,
    file_type: &FileType,
) -> Result<(), EncodeError> {
    if data.is_empty() {
        tracing::debug!(
            content_type = %file_type.content_type(),
            "rejected upload: empty data"
        );
        return Err(EncodeError::EmptyData);
    }

    if data.len() > max_size {
        tracing::debug!(
            size = data.len(),
            max_size,
            content_type = %file_type.content_type(),
            "rejected upload: over size limit"
        );
        return Err(EncodeError::FileTooLarge {
            size: data.len(),
            max_size,
        });
    }

    file_type.validate(data).map_err(|err| {
        tracing::debug!(
            content_type = %file_type.content_type(),
            "rejected upload: {}",
            err
        );
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_type::ImageType;

    #[test]
    fn test_empty_data_reported_before_size_limit() {
        let file_type = FileType::text();
        assert_eq!(
            validate_upload(&[], 0, &file_type),
            Err(EncodeError::EmptyData)
        );
        assert_eq!(
            validate_upload(&[], DEFAULT_MAX_FILE_SIZE, &file_type),
            Err(EncodeError::EmptyData)
        );
    }

    #[test]
    fn test_size_limit_boundary() {
        let file_type = FileType::text();
        let data = vec![0x41; 100];
        assert!(validate_upload(&data, 100, &file_type).is_ok());
        assert_eq!(
            validate_upload(&data, 99, &file_type),
            Err(EncodeError::FileTooLarge {
                size: 100,
                max_size: 99
            })
        );
    }

    #[test]
    fn test_size_checked_before_content() {
        // Invalid JPEG bytes, but the size failure wins.
        let file_type = FileType::from(ImageType::Jpeg);
        let data = vec![0x00; 200];
        assert_eq!(
            validate_upload(&data, 100, &file_type),
            Err(EncodeError::FileTooLarge {
                size: 200,
                max_size: 100
            })
        );
    }

    #[test]
    fn test_content_check_outcome_propagates_unchanged() {
        let file_type = FileType::from(ImageType::Png);
        assert_eq!(
            validate_upload(&[0x00, 0x01, 0x02], DEFAULT_MAX_FILE_SIZE, &file_type),
            Err(EncodeError::content_mismatch("image/png"))
        );
        assert!(validate_upload(
            &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00],
            DEFAULT_MAX_FILE_SIZE,
            &file_type
        )
        .is_ok());
    }

    #[test]
    fn test_default_limit_is_ten_mebibytes() {
        assert_eq!(DEFAULT_MAX_FILE_SIZE, 10_485_760);
    }
}
