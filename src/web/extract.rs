//! Extraction boundary trait for web integration.

use crate::request::RequestMeta;

/// Maps a framework-specific request to [`RequestMeta`].
///
/// Implementations only translate: they do not authenticate, authorize or
/// validate. The session must already have been established by the
/// framework's authentication layer.
///
/// ```
/// use account_core::web::ExtractMetadata;
/// use account_core::{Principal, RequestMeta, Session};
///
/// struct MyFrameworkRequest {
///     request_id: String,
///     user: Option<Principal>,
/// }
///
/// impl ExtractMetadata for MyFrameworkRequest {
///     fn extract_metadata(&self) -> RequestMeta {
///         RequestMeta {
///             request_id: self.request_id.clone(),
///             session: self.user.clone().map(Session::new),
///         }
///     }
/// }
/// ```
pub trait ExtractMetadata {
    /// Returns the request id and the session, if any.
    fn extract_metadata(&self) -> RequestMeta;
}
