//! Framework-neutral request representation.

use std::collections::HashMap;

use crate::request::{RequestMeta, Session};

use super::ExtractMetadata;

/// A request as seen by the account handlers.
///
/// Holds simple owned data so no web framework leaks into the core. Framework
/// integrations build one from their own request type after authentication
/// has run.
///
/// Path parameters are carried for routing and logging only. Handlers that act
/// on "self" never read an account id from them.
///
/// ```
/// use account_core::web::{ExtractMetadata, RequestAdapter};
/// use account_core::{Account, Session};
///
/// let mut adapter = RequestAdapter::new("req-12345".to_string());
/// adapter.set_session(Some(Session::for_account(&Account::new(
///     1,
///     "octocat",
///     "octocat@github.com",
/// ))));
/// adapter.set_body(br#"{"email":"octocat@google.com"}"#.to_vec());
///
/// let meta = adapter.extract_metadata();
/// assert_eq!(meta.request_id, "req-12345");
/// assert_eq!(meta.session.unwrap().principal.id, 1);
/// ```
#[derive(Debug, Clone)]
pub struct RequestAdapter {
    request_id: String,
    session: Option<Session>,
    path_params: HashMap<String, String>,
    body: Vec<u8>,
}

impl RequestAdapter {
    /// Creates an adapter with the given request ID and nothing else.
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            session: None,
            path_params: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Sets the session resolved by the authentication layer.
    pub fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    /// Adds a routing path parameter.
    pub fn add_path_param(&mut self, key: String, value: String) {
        self.path_params.insert(key, value);
    }

    /// Replaces the raw request body.
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
    }

    /// Returns the request ID.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the session, if authentication set one.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns a path parameter, if present.
    pub fn path_param(&self, key: &str) -> Option<&str> {
        self.path_params.get(key).map(String::as_str)
    }

    /// Returns the raw request body. Empty if none was set.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl ExtractMetadata for RequestAdapter {
    fn extract_metadata(&self) -> RequestMeta {
        RequestMeta {
            request_id: self.request_id.clone(),
            session: self.session.clone(),
        }
    }
}
