//! Wire segments for multipart bodies.
//!
//! Builders for the three framing segments around an opaque payload: the
//! opening boundary line, the header block, and the closing boundary. Each
//! builder is independently callable so encoders can insert payload bytes
//! verbatim between the header block and the closing boundary. Payload
//! bytes are never scanned; a payload containing the literal boundary
//! token is a known limitation of this framing.

use bytes::{Bytes, BytesMut};
use formkit_core::EncodeError;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

// Escaped inside quoted header parameter values: control bytes (CR/LF would
// terminate the header line), the double quote (would close the parameter),
// and `%` so the escaping stays reversible.
const HEADER_VALUE_ESCAPE: &AsciiSet = &CONTROLS.add(b'"').add(b'%');

/// A single form field ready for framing. Intermediate value only; nothing
/// retains it past the call that frames it.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Opening boundary line: `--<boundary>\r\n`.
pub fn opening_boundary(boundary: &str) -> Bytes {
    Bytes::from(format!("--{}\r\n", boundary))
}

/// Header block for a field: the `Content-Disposition` line (with a
/// `filename` parameter when present), an optional `Content-Type` line, and
/// the blank line separating headers from the body.
pub fn header_block(field: &FormField) -> Result<Bytes, EncodeError> {
    let mut headers = format!(
        "Content-Disposition: form-data; name=\"{}\"",
        escape_header_value(&field.name)
    );
    if let Some(filename) = &field.filename {
        headers.push_str(&format!("; filename=\"{}\"", escape_header_value(filename)));
    }
    headers.push_str("\r\n");
    if let Some(content_type) = &field.content_type {
        headers.push_str(&format!("Content-Type: {}\r\n", content_type));
    }
    headers.push_str("\r\n");
    encode_text(&headers)
}

/// Closing boundary for a file-upload body: `\r\n--<boundary>--\r\n`.
pub fn closing_boundary(boundary: &str) -> Bytes {
    Bytes::from(format!("\r\n--{}--\r\n", boundary))
}

/// Frame a complete single-field body around the field's payload.
pub fn frame(boundary: &str, field: &FormField) -> Result<Bytes, EncodeError> {
    let opening = opening_boundary(boundary);
    let headers = header_block(field)?;
    let closing = closing_boundary(boundary);

    let mut body =
        BytesMut::with_capacity(opening.len() + headers.len() + field.data.len() + closing.len());
    body.extend_from_slice(&opening);
    body.extend_from_slice(&headers);
    body.extend_from_slice(&field.data);
    body.extend_from_slice(&closing);
    Ok(body.freeze())
}

// Quote, CR, LF and `%` are percent-escaped rather than inserted verbatim,
// so a crafted field name or filename cannot break out of the quoted
// parameter or inject extra header lines.
fn escape_header_value(value: &str) -> String {
    utf8_percent_encode(value, HEADER_VALUE_ESCAPE).to_string()
}

// Rust strings are always valid UTF-8, so this cannot fail today; the
// `Encoding` kind stays a distinct reportable failure of header assembly.
fn encode_text(text: &str) -> Result<Bytes, EncodeError> {
    Ok(Bytes::copy_from_slice(text.as_bytes()))
}
