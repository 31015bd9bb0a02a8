use crate::error::{Cause, Error};
use crate::logging::RequestLog;
use crate::request::{Principal, Session};
use crate::state::{Authed, Unauthed};

/// Per-request execution context.
///
/// `Ctx<S>` is generic over its authentication state:
/// - `Ctx<Unauthed>`: request id only
/// - `Ctx<Authed>`: request id plus the resolved session
///
/// ```text
/// Ctx<Unauthed> --authenticate--> Ctx<Authed>
/// ```
///
/// Handlers that mutate "self" take their principal from `Ctx<Authed>`, never
/// from request parameters.
#[derive(Debug, Clone)]
pub struct Ctx<S = Authed> {
    request_id: String,
    state: S,
}

impl<S> Ctx<S> {
    /// Returns the request ID for this context.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

impl Ctx<Unauthed> {
    /// Creates a new unauthenticated context with only a request ID.
    pub(crate) fn new_unauthed(request_id: String) -> Self {
        Self {
            request_id,
            state: Unauthed::new(),
        }
    }

    /// Binds the session established by the authentication layer.
    ///
    /// # Errors
    ///
    /// A missing session means the request bypassed authentication, which is
    /// a wiring fault rather than a caller error: returns
    /// [`Error::InternalFault`] with [`Cause::MissingSession`].
    pub fn authenticate(self, session: Option<Session>) -> Result<Ctx<Authed>, Error> {
        match session {
            Some(session) => Ok(Ctx {
                request_id: self.request_id,
                state: Authed::new(session),
            }),
            None => Err(Error::internal(Cause::MissingSession)),
        }
    }
}

impl Ctx<Authed> {
    /// Returns the session bound to this context.
    pub fn session(&self) -> &Session {
        self.state.session()
    }

    /// Returns the acting principal.
    pub fn principal(&self) -> &Principal {
        &self.session().principal
    }

    /// Returns a logger stamped with this request and principal.
    pub fn log(&self) -> RequestLog<'_> {
        RequestLog::new(&self.request_id, self.principal().id)
    }
}
