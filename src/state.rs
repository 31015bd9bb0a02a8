//! Type-states for context progression.
//!
//! Each state owns exactly what a context in that state may use, so an
//! authenticated context cannot exist without its session.

use crate::request::Session;

/// State of an unauthenticated context.
///
/// `Ctx<Unauthed>` has no session and cannot load or mutate records.
#[derive(Debug, Clone, Copy)]
pub struct Unauthed {
    _private: (),
}

impl Unauthed {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

/// State of an authenticated context.
///
/// Holds the session resolved by the authentication layer. Only this state
/// exposes the principal and the request logger.
#[derive(Debug, Clone)]
pub struct Authed {
    session: Session,
}

impl Authed {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }
}
