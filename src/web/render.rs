//! JSON rendering of values and errors.

use serde::{Deserialize, Serialize};

use crate::error::{Error, INTERNAL_MESSAGE};

use super::{Response, Status};

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Caller-safe message
    pub message: String,
}

/// Renders `value` as JSON with the given status.
///
/// If `value` cannot be serialized the result is a 500 error response.
pub fn json<T: Serialize>(status: Status, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => Response::new(status, body),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response body");
            message(Status::InternalServerError, INTERNAL_MESSAGE)
        }
    }
}

/// Renders an error as `{"message": ...}` with its status.
///
/// Internal causes are never rendered.
pub fn error(err: &Error) -> Response {
    message(err.status(), err.public_message())
}

fn message(status: Status, message: &str) -> Response {
    let body = ErrorBody {
        message: message.to_string(),
    };
    // A struct with one String field always serializes.
    let body = serde_json::to_vec(&body).unwrap_or_default();
    Response::new(status, body)
}
