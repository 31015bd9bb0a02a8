//! Transport-neutral responses.

use std::fmt;

use serde::de::DeserializeOwned;

/// Content type of every rendered response.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// HTTP status codes produced by the account handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// 200
    Ok,
    /// 400
    BadRequest,
    /// 500
    InternalServerError,
}

impl Status {
    /// Numeric status code.
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::InternalServerError => 500,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "200 OK"),
            Status::BadRequest => write!(f, "400 Bad Request"),
            Status::InternalServerError => write!(f, "500 Internal Server Error"),
        }
    }
}

/// A rendered response, ready for a framework to write out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: Status,
    body: Vec<u8>,
}

impl Response {
    pub(crate) fn new(status: Status, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Response status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Always [`CONTENT_TYPE_JSON`].
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE_JSON
    }

    /// Serialized JSON body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decodes the body as `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(Status::Ok.code(), 200);
        assert_eq!(Status::BadRequest.code(), 400);
        assert_eq!(Status::InternalServerError.code(), 500);
        assert_eq!(Status::BadRequest.to_string(), "400 Bad Request");
    }

    #[test]
    fn json_decodes_body() {
        let response = Response::new(Status::Ok, br#"{"id":1}"#.to_vec());

        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(response.content_type(), CONTENT_TYPE_JSON);
    }
}
