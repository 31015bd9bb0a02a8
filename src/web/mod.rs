//! Transport boundary.
//!
//! Framework-neutral request and response types plus the account handlers.
//! A framework integration:
//!
//! 1. authenticates the request and builds a [`RequestAdapter`] with the
//!    resulting session and the raw body
//! 2. calls a handler such as [`UpdateHandler::handle`]
//! 3. writes the returned [`Response`] status, content type and body
//!
//! Nothing here depends on a particular HTTP stack and there is no global
//! state: handlers receive their collaborators at construction.

mod adapter;
mod extract;
mod middleware;
pub mod render;
mod response;
pub mod user;

pub use adapter::RequestAdapter;
pub use extract::ExtractMetadata;
pub use middleware::extract_authed;
pub use render::ErrorBody;
pub use response::{Response, Status, CONTENT_TYPE_JSON};
pub use user::{handle_update, UpdateHandler};
