//! Account data model.
//!
//! Records are owned by the [`AccountStore`](crate::AccountStore). Handlers work
//! on a transient copy for the duration of one request and render it through
//! [`AccountView`], which has no credential field.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::secret::Secret;

/// A user account record.
///
/// `Account` does not implement `Serialize`. The only outward representation
/// is [`AccountView`].
#[derive(Debug, Clone)]
pub struct Account {
    /// Store-assigned identifier, immutable once assigned.
    pub id: i64,
    /// Unique login name.
    pub uid: String,
    /// Contact email, unique across accounts.
    pub email: String,
    /// Display name.
    pub name: String,
    /// One-way credential hash. Never equals the plaintext.
    pub password: Secret<String>,
    /// Administrative flag.
    pub admin: bool,
    /// Creation time.
    pub created: DateTime<Utc>,
    /// Last modification time.
    pub updated: DateTime<Utc>,
}

impl Account {
    /// Creates an account with an empty display name and no admin rights.
    pub fn new(id: i64, uid: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            uid: uid.into(),
            email: email.into(),
            name: String::new(),
            password: Secret::new(String::new()),
            admin: false,
            created: now,
            updated: now,
        }
    }

    /// Sets the stored credential hash.
    pub fn with_password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password = Secret::new(hash.into());
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the sanitized view of this record.
    pub fn view(&self) -> AccountView {
        AccountView::from(self)
    }
}

/// Sanitized account representation rendered to clients.
///
/// There is intentionally no credential field on this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    /// Account identifier.
    pub id: i64,
    /// Login name.
    pub uid: String,
    /// Contact email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Administrative flag.
    pub admin: bool,
    /// Creation time.
    pub created: DateTime<Utc>,
    /// Last modification time.
    pub updated: DateTime<Utc>,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            uid: account.uid.clone(),
            email: account.email.clone(),
            name: account.name.clone(),
            admin: account.admin,
            created: account.created,
            updated: account.updated,
        }
    }
}

/// Partial update payload for the caller's own account.
///
/// A missing key or an explicit `null` leaves the field unchanged. Present
/// values overwrite, except that an empty `password` is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    /// New contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New plaintext password, hashed before it touches the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserInput {
    /// Returns `true` when no field is present.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.name.is_none()
    }
}

/// Kind of resource a service account is delegated from.
///
/// Wire values other than `"repo"` and `"space"` decode to `Other` so that
/// validation, not the decoder, reports them. Validation compares the wire
/// value, so `Other("repo")` is treated as `Repo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParentResourceType {
    /// Scoped to a repository.
    Repo,
    /// Scoped to a space.
    Space,
    /// Any unrecognized value.
    Other(String),
}

impl ParentResourceType {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Repo => "repo",
            Self::Space => "space",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for ParentResourceType {
    fn from(raw: &str) -> Self {
        match raw {
            "repo" => Self::Repo,
            "space" => Self::Space,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ParentResourceType {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<ParentResourceType> for String {
    fn from(kind: ParentResourceType) -> Self {
        match kind {
            ParentResourceType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ParentResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A delegated identity scoped to a parent repository or space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccount {
    /// Store-assigned identifier.
    pub id: i64,
    /// Machine name, checked by [`check::name`](crate::check::name).
    pub name: String,
    /// Kind of the owning resource.
    pub parent_type: ParentResourceType,
    /// Identifier of the owning resource.
    pub parent_id: i64,
    /// Creation time.
    pub created: DateTime<Utc>,
    /// Last modification time.
    pub updated: DateTime<Utc>,
}

impl ServiceAccount {
    /// Creates a service account under the given parent.
    pub fn new(
        name: impl Into<String>,
        parent_type: impl Into<ParentResourceType>,
        parent_id: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            parent_type: parent_type.into(),
            parent_id,
            created: now,
            updated: now,
        }
    }
}
