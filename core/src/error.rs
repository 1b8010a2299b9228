//! Error types for the vplatform client.
//!
//! # Design
//! Every failed operation returns one `VPlatformError`, which holds an ordered,
//! non-empty list of causes. A rejected request usually carries several
//! field-level validation causes at once and all of them are kept in server
//! order. Transport, decode and shape failures are wrapped as a single cause
//! so callers have one error type to inspect.

use thiserror::Error;

use crate::envelope::ValidationError;
use crate::transport::TransportError;

/// Result type using `VPlatformError`.
pub type Result<T> = std::result::Result<T, VPlatformError>;

/// One reason an operation failed.
#[derive(Debug, Error)]
pub enum ErrorCause {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body is not a JSON envelope.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The server rejected one input field.
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// The server answered with a non-2xx status and no validation errors.
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// `data` does not have the shape the operation expects.
    #[error("response.data {detail}")]
    ShapeMismatch { expected: String, detail: String },
}

/// Aggregated error returned by every client operation.
#[derive(Debug, Error)]
#[error("{}", render(.causes))]
pub struct VPlatformError {
    causes: Vec<ErrorCause>,
}

impl VPlatformError {
    /// Builds one cause per validation error, keeping server order.
    ///
    /// Returns `None` for an empty list, so an aggregated error always has at
    /// least one cause.
    pub fn from_validation_errors(errors: &[ValidationError]) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        let causes = errors
            .iter()
            .map(|e| ErrorCause::Validation {
                field: e.field.clone(),
                message: e.message.clone(),
            })
            .collect();
        Some(Self { causes })
    }

    pub fn from_single(cause: impl Into<ErrorCause>) -> Self {
        Self {
            causes: vec![cause.into()],
        }
    }

    pub fn causes(&self) -> &[ErrorCause] {
        &self.causes
    }

    pub fn len(&self) -> usize {
        self.causes.len()
    }

    /// Never true: every error has at least one cause.
    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }

    /// True when every cause is a server-side validation rejection.
    pub fn is_validation(&self) -> bool {
        self.causes
            .iter()
            .all(|c| matches!(c, ErrorCause::Validation { .. }))
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self.causes.as_slice(), [ErrorCause::ShapeMismatch { .. }])
    }

    pub fn is_transport(&self) -> bool {
        matches!(self.causes.as_slice(), [ErrorCause::Transport(_)])
    }
}

impl From<ErrorCause> for VPlatformError {
    fn from(cause: ErrorCause) -> Self {
        Self::from_single(cause)
    }
}

impl From<TransportError> for VPlatformError {
    fn from(err: TransportError) -> Self {
        Self::from_single(ErrorCause::Transport(err))
    }
}

fn render(causes: &[ErrorCause]) -> String {
    match causes {
        [single] => single.to_string(),
        _ => {
            let mut msg = String::from("multiple errors:");
            for cause in causes {
                msg.push('\n');
                msg.push_str(&cause.to_string());
            }
            msg
        }
    }
}

/// Errors raised while loading `ClientConfig` from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
