use crate::account::Account;

/// Metadata about an incoming request.
///
/// Contains the request identifier and the session established by the
/// authentication layer, if any.
#[derive(Debug, Clone)]
pub struct RequestMeta {
    /// Unique identifier for this request
    pub request_id: String,
    /// Authenticated session, if any
    pub session: Option<Session>,
}

/// The identity attached to an authenticated request.
///
/// Only `id` is authoritative for "update self": handlers load the record
/// with this identifier and ignore any identifier supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Account identifier
    pub id: i64,
    /// Login name
    pub uid: String,
}

impl Principal {
    /// Builds the principal for an account.
    pub fn from_account(account: &Account) -> Self {
        Self {
            id: account.id,
            uid: account.uid.clone(),
        }
    }
}

/// How the session was established.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthMetadata {
    /// No extra information.
    #[default]
    Empty,
    /// Authenticated with an access token.
    Token {
        /// Identifier of the token used
        token_id: i64,
    },
}

/// An authenticated session: a principal plus how it was established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The acting principal
    pub principal: Principal,
    /// Authentication metadata
    pub metadata: AuthMetadata,
}

impl Session {
    /// Creates a session with empty metadata.
    pub fn new(principal: Principal) -> Self {
        Self {
            principal,
            metadata: AuthMetadata::Empty,
        }
    }

    /// Creates a session for `account` with empty metadata.
    pub fn for_account(account: &Account) -> Self {
        Self::new(Principal::from_account(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_copies_identity_from_account() {
        let account = Account::new(3, "octocat", "octocat@github.com");

        let principal = Principal::from_account(&account);

        assert_eq!(principal.id, 3);
        assert_eq!(principal.uid, "octocat");
    }

    #[test]
    fn session_defaults_to_empty_metadata() {
        let session = Session::for_account(&Account::new(1, "a", "a@example.com"));
        assert_eq!(session.metadata, AuthMetadata::Empty);
        assert_eq!(session.principal.id, 1);
    }
}
