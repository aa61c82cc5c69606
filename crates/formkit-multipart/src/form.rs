//! Simplified multipart serialization of plain form records.

use std::marker::PhantomData;

use bytes::{Bytes, BytesMut};
use formkit_core::EncodeError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::boundary;
use crate::conversion::BodyConversion;
use crate::segment::{self, FormField};

/// Serializer for non-file form submissions.
///
/// [`unapply`](FormData::unapply) renders a record's scalar fields as a
/// simplified multipart-like body for internal transport. The format is
/// deliberately not RFC 7578 compliant (no array support, booleans collapse
/// to `"1"`/`"0"`, no file semantics) and is not meant for generic
/// multipart parsers.
///
/// [`apply`](FormData::apply) does NOT parse that format back: it decodes a
/// conventional URL-encoded form body, which is what plain form routes
/// submit. The asymmetry is an intentional scope constraint, not a missing
/// feature.
pub struct FormData<T> {
    boundary: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> FormData<T>
where
    T: Serialize + DeserializeOwned,
{
    /// New serializer with a generated boundary.
    pub fn new() -> Self {
        Self {
            boundary: boundary::generate(),
            _record: PhantomData,
        }
    }

    /// The boundary token framing this serializer's bodies.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type_header(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Render the record's fields as a simplified multipart body.
    ///
    /// Fields whose value is null are dropped. Booleans render as `"1"` and
    /// `"0"`, numbers and strings via their text form, nested values as
    /// JSON text. Field order follows the underlying map enumeration and is
    /// not part of the contract.
    pub fn unapply(&self, record: &T) -> Result<Bytes, EncodeError> {
        let value =
            serde_json::to_value(record).map_err(|err| EncodeError::Encoding(err.to_string()))?;
        let fields = match value {
            Value::Object(map) => map,
            _ => {
                tracing::debug!("rejected form record: not a key/value object");
                return Err(EncodeError::Encoding(
                    "form record did not serialize to a key/value object".to_string(),
                ));
            }
        };

        let mut body = BytesMut::new();
        for (name, value) in fields {
            let text = match render_field(&value) {
                Some(text) => text,
                None => continue,
            };
            let field = FormField {
                name,
                filename: None,
                content_type: None,
                data: Bytes::new(),
            };
            body.extend_from_slice(&segment::opening_boundary(&self.boundary));
            body.extend_from_slice(&segment::header_block(&field)?);
            body.extend_from_slice(text.as_bytes());
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        Ok(body.freeze())
    }

    /// Decode a URL-encoded form body into the record type.
    pub fn apply(&self, body: &[u8]) -> Result<T, EncodeError> {
        serde_urlencoded::from_bytes(body).map_err(|err| EncodeError::Encoding(err.to_string()))
    }
}

impl<T> Default for FormData<T>
where
    T: Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BodyConversion for FormData<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = T;

    fn apply(&self, body: Bytes) -> Result<T, EncodeError> {
        FormData::apply(self, &body)
    }

    fn unapply(&self, value: T) -> Result<Bytes, EncodeError> {
        FormData::unapply(self, &value)
    }
}

/// Render one field value as form text. `None` drops the field.
fn render_field(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some("0".to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        nested => Some(nested.to_string()),
    }
}
