//! Building request contexts from adapters.

use crate::context::Ctx;
use crate::error::Error;
use crate::state::Authed;

use super::ExtractMetadata;

/// Builds an authenticated context from a request.
///
/// # Errors
///
/// Returns an internal fault if the request carries no session. Routes that
/// reach account handlers are expected to sit behind authentication, so an
/// absent session is a wiring error rather than a caller error.
///
/// ```
/// use account_core::web::{extract_authed, RequestAdapter};
///
/// let adapter = RequestAdapter::new("req-no-auth".to_string());
/// let error = extract_authed(&adapter).unwrap_err();
/// assert_eq!(error.public_message(), "Internal Server Error");
/// ```
pub fn extract_authed<R: ExtractMetadata>(request: &R) -> Result<Ctx<Authed>, Error> {
    let meta = request.extract_metadata();

    Ctx::new_unauthed(meta.request_id).authenticate(meta.session)
}
