//! The response envelope every vplatform endpoint answers with.
//!
//! # Design
//! `data` is kept as an untyped `serde_json::Value` until the calling
//! operation knows which shape to expect. Each service picks one of the
//! `into_*` extractors, so a wrong shape becomes a `ShapeMismatch` error and
//! never a silent default. Fields that are missing or `null` on the wire
//! decode to empty values, and a non-string `message` or `stackTrace` decodes
//! to an empty string. A body fails to decode only when it is not a JSON
//! object or its `validationErrors` is not a list of objects.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ErrorCause, Result, VPlatformError};
use crate::http::HttpResponse;

/// One rejected input field as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(default, deserialize_with = "lenient_string")]
    pub field: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
}

/// Generic response wrapper: `{data, message, validationErrors, stackTrace}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub validation_errors: Vec<ValidationError>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub stack_trace: String,
}

impl Envelope {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| VPlatformError::from_single(ErrorCause::Decode(e.to_string())))
    }

    /// Decodes an HTTP response and applies the failure rules shared by every
    /// operation: validation errors first, then HTTP status.
    pub fn from_response(response: &HttpResponse) -> Result<Self> {
        let envelope = match Self::decode(response.body.as_bytes()) {
            Ok(envelope) => envelope,
            Err(_) if !response.is_success() => {
                return Err(ErrorCause::HttpStatus {
                    status: response.status,
                    message: response.body.clone(),
                }
                .into());
            }
            Err(err) => return Err(err),
        };

        if let Some(err) = VPlatformError::from_validation_errors(&envelope.validation_errors) {
            return Err(err);
        }

        if !response.is_success() {
            return Err(ErrorCause::HttpStatus {
                status: response.status,
                message: envelope.message,
            }
            .into());
        }

        Ok(envelope)
    }

    /// `data` as a non-empty identifier string (token, public id, UTI).
    pub fn into_identifier(self) -> Result<String> {
        match self.data {
            serde_json::Value::String(id) if !id.is_empty() => Ok(id),
            serde_json::Value::String(_) => Err(shape_mismatch(
                "string",
                "is an empty identifier string".to_string(),
            )),
            _ => Err(shape_mismatch("string", "is not of type string".to_string())),
        }
    }

    /// `data` deserialized as `T`; `type_name` appears in the mismatch message.
    pub fn into_record<T: DeserializeOwned>(self, type_name: &str) -> Result<T> {
        serde_json::from_value(self.data)
            .map_err(|e| shape_mismatch(type_name, format!("is not of type {type_name}: {e}")))
    }
}

fn shape_mismatch(expected: &str, detail: String) -> VPlatformError {
    VPlatformError::from_single(ErrorCause::ShapeMismatch {
        expected: expected.to_string(),
        detail,
    })
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any JSON value; only a string is kept, everything else becomes empty.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}
