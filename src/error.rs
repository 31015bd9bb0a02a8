use thiserror::Error as ThisError;

use crate::check::ValidationError;
use crate::hash::HashError;
use crate::store::StoreError;
use crate::web::Status;

/// Public message for every internal fault.
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Outcome of a failed update request.
///
/// The set is closed: a caller either sent something wrong
/// ([`Error::ClientFault`]) or something on our side failed
/// ([`Error::InternalFault`]). Conversions from the collaborator errors pick
/// the variant, so handlers never classify by message text.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The request was rejected; `reason` is safe to show the caller.
    #[error("{reason}")]
    ClientFault {
        /// Human-readable reason
        reason: String,
    },

    /// A collaborator failed. The cause is logged, never rendered.
    #[error("internal fault: {cause}")]
    InternalFault {
        /// What failed
        #[source]
        cause: Cause,
    },
}

/// Underlying reason for an internal fault.
#[derive(Debug, ThisError)]
pub enum Cause {
    /// The account store failed, including a missing record for the principal.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The credential hasher failed.
    #[error(transparent)]
    Hash(#[from] HashError),

    /// The request reached the handler without a session.
    #[error("request has no authenticated session")]
    MissingSession,
}

impl Error {
    /// Creates a client fault with the given reason.
    pub fn client(reason: impl Into<String>) -> Self {
        Self::ClientFault {
            reason: reason.into(),
        }
    }

    /// Creates an internal fault.
    pub fn internal(cause: impl Into<Cause>) -> Self {
        Self::InternalFault {
            cause: cause.into(),
        }
    }

    /// Returns true for caller errors.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Self::ClientFault { .. })
    }

    /// HTTP status for this error.
    pub fn status(&self) -> Status {
        match self {
            Self::ClientFault { .. } => Status::BadRequest,
            Self::InternalFault { .. } => Status::InternalServerError,
        }
    }

    /// Message safe to render to the caller.
    ///
    /// Internal faults always read [`INTERNAL_MESSAGE`].
    pub fn public_message(&self) -> &str {
        match self {
            Self::ClientFault { reason } => reason,
            Self::InternalFault { .. } => INTERNAL_MESSAGE,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Self::client(e.message())
    }
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Self::internal(e)
    }
}

impl From<HashError> for Error {
    fn from(e: HashError) -> Self {
        Self::internal(e)
    }
}
