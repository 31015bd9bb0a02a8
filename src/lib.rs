//! Account record mutation and validation.
//!
//! This crate holds the core of an identity subsystem's account handling:
//! - **Validation**: pure checks for names, service accounts and passwords
//!   ([`check`])
//! - **Credential hashing**: a pluggable [`CredentialHasher`] with an Argon2id
//!   default
//! - **Update self**: an authenticated caller changes their own email,
//!   display name or password ([`web::handle_update`])
//!
//! Persistence sits behind the [`AccountStore`] port and HTTP frameworks sit
//! behind [`web::RequestAdapter`] and [`web::Response`].
//!
//! # Core Types
//!
//! - [`Account`]: stored record; its credential hash is a [`Secret`]
//! - [`AccountView`]: the only rendered form of an account, without credential
//! - [`Ctx`]: request context whose type says whether a session is bound
//! - [`Error`]: client fault or internal fault, nothing else
//!
//! # Examples
//!
//! ```
//! use account_core::{check, ServiceAccount, ValidationErrorKind};
//!
//! assert!(check::name("build-bot").is_ok());
//!
//! let sa = ServiceAccount::new("build-bot", "org", 7);
//! let error = check::service_account(&sa).unwrap_err();
//! assert_eq!(error.kind(), ValidationErrorKind::InvalidParentType);
//! assert_eq!(error.message(), "Provided parent type is invalid.");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod account;
pub mod check;
pub mod config;
mod context;
mod error;
mod hash;
mod logging;
mod request;
mod secret;
mod state;
mod store;
pub mod web;

#[cfg(test)]
mod test_utils;

pub use account::{Account, AccountView, ParentResourceType, ServiceAccount, UserInput};
pub use check::{ValidationError, ValidationErrorKind};
pub use config::{Config, ConfigError, HashingConfig};
pub use context::Ctx;
pub use error::{Cause, Error, INTERNAL_MESSAGE};
pub use hash::{Argon2Hasher, CredentialHasher, HashError};
pub use logging::RequestLog;
pub use request::{AuthMetadata, Principal, RequestMeta, Session};
pub use secret::Secret;
pub use state::{Authed, Unauthed};
pub use store::{AccountStore, MemoryAccountStore, StoreError};
