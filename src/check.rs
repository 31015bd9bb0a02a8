//! Structural validation of account-like entities.
//!
//! Every function here is pure and stateless. A failure is always a
//! [`ValidationError`] describing the first violated rule, which the web
//! boundary maps to a client fault.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::account::{ParentResourceType, ServiceAccount};

/// Minimum length of a name.
pub const MIN_NAME_LENGTH: usize = 1;
/// Maximum length of a name.
pub const MAX_NAME_LENGTH: usize = 64;
/// Maximum length of a display name.
pub const MAX_DISPLAY_NAME_LENGTH: usize = 256;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_-]*$").expect("name pattern compiles"));

/// Error returned when an entity fails structural validation.
///
/// The message is safe to show to the caller; it never echoes the rejected
/// value.
///
/// # Examples
///
/// ```
/// use account_core::{ValidationError, ValidationErrorKind};
///
/// let error = ValidationError::new(ValidationErrorKind::InvalidName, "Name cannot be empty.");
/// assert_eq!(error.kind(), ValidationErrorKind::InvalidName);
/// assert_eq!(error.to_string(), "Name cannot be empty.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Kind of validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Name is empty, too long, or outside the name grammar.
    InvalidName,
    /// Service account parent type is not `repo` or `space`.
    InvalidParentType,
    /// A password was supplied but is empty.
    EmptyPassword,
    /// Display name is too long or contains control characters.
    InvalidDisplayName,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName => write!(f, "invalid name"),
            Self::InvalidParentType => write!(f, "invalid parent type"),
            Self::EmptyPassword => write!(f, "empty password"),
            Self::InvalidDisplayName => write!(f, "invalid display name"),
        }
    }
}

/// Checks that `name` is a well-formed machine name.
///
/// A name must be between 1 and 64 characters, start with a lowercase letter,
/// and contain only lowercase letters, digits, `-` and `_`.
///
/// # Examples
///
/// ```
/// use account_core::check;
///
/// assert!(check::name("octocat").is_ok());
/// assert!(check::name("").is_err());
/// assert!(check::name("Octocat").is_err());
/// ```
pub fn name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len < MIN_NAME_LENGTH {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidName,
            "Name cannot be empty.",
        ));
    }

    if len > MAX_NAME_LENGTH {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidName,
            format!(
                "Name has to be between {} and {} in length.",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH
            ),
        ));
    }

    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidName,
            "Name has to start with a letter and only contain the following characters [a-z0-9-_].",
        ));
    }

    Ok(())
}

/// Checks a service account before it is persisted.
///
/// The name is checked first, so a malformed name is reported even when the
/// parent type is also invalid.
///
/// # Examples
///
/// ```
/// use account_core::{check, ServiceAccount, ValidationErrorKind};
///
/// let sa = ServiceAccount::new("deploy-bot", "repo", 42);
/// assert!(check::service_account(&sa).is_ok());
///
/// let sa = ServiceAccount::new("deploy-bot", "org", 42);
/// let err = check::service_account(&sa).unwrap_err();
/// assert_eq!(err.kind(), ValidationErrorKind::InvalidParentType);
/// ```
pub fn service_account(sa: &ServiceAccount) -> Result<(), ValidationError> {
    name(&sa.name)?;

    match ParentResourceType::from(sa.parent_type.as_str()) {
        ParentResourceType::Repo | ParentResourceType::Space => Ok(()),
        ParentResourceType::Other(_) => Err(ValidationError::new(
            ValidationErrorKind::InvalidParentType,
            "Provided parent type is invalid.",
        )),
    }
}

/// Checks a plaintext password supplied for an update.
///
/// Only emptiness is rejected. There is no strength policy.
pub fn password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyPassword,
            "Password cannot be empty.",
        ));
    }
    Ok(())
}

/// Checks a display name.
///
/// Empty display names are allowed.
pub fn display_name(display_name: &str) -> Result<(), ValidationError> {
    if display_name.chars().count() > MAX_DISPLAY_NAME_LENGTH {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidDisplayName,
            format!(
                "Display name cannot be longer than {} characters.",
                MAX_DISPLAY_NAME_LENGTH
            ),
        ));
    }

    if display_name.chars().any(char::is_control) {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidDisplayName,
            "Display name cannot contain control characters.",
        ));
    }

    Ok(())
}
