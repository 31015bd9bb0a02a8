//! Handlers for the caller's own account.

use std::sync::Arc;

use chrono::Utc;

use crate::account::{Account, AccountView, UserInput};
use crate::check;
use crate::context::Ctx;
use crate::error::Error;
use crate::hash::CredentialHasher;
use crate::state::Authed;
use crate::store::AccountStore;

use super::{extract_authed, render, RequestAdapter, Response, Status};

/// Updates the authenticated caller's own account.
///
/// Built once at startup with its store and hashing strategy; both are shared
/// by every request the handler serves.
pub struct UpdateHandler<S: ?Sized> {
    store: Arc<S>,
    hasher: Arc<dyn CredentialHasher>,
}

/// Builds the "update self" handler.
///
/// ```no_run
/// use std::sync::Arc;
/// use account_core::web::{handle_update, RequestAdapter};
/// use account_core::{Argon2Hasher, MemoryAccountStore};
///
/// # async fn run(request: RequestAdapter) {
/// let handler = handle_update(
///     Arc::new(MemoryAccountStore::new()),
///     Arc::new(Argon2Hasher::default()),
/// );
/// let response = handler.handle(&request).await;
/// # }
/// ```
pub fn handle_update<S>(store: Arc<S>, hasher: Arc<dyn CredentialHasher>) -> UpdateHandler<S>
where
    S: AccountStore + ?Sized,
{
    UpdateHandler { store, hasher }
}

impl<S> UpdateHandler<S>
where
    S: AccountStore + ?Sized,
{
    /// Serves one request.
    ///
    /// Responds 200 with the updated [`AccountView`], 400 with the reason for
    /// a bad payload, or 500 with a generic message when a collaborator
    /// fails. On any error the stored record is left untouched.
    pub async fn handle(&self, request: &RequestAdapter) -> Response {
        let ctx = match extract_authed(request) {
            Ok(ctx) => ctx,
            Err(err) => {
                tracing::error!(
                    request_id = %request.request_id(),
                    error = %err,
                    "update reached handler without a session"
                );
                return render::error(&err);
            }
        };

        match self.update(&ctx, request.body()).await {
            Ok(view) => render::json(Status::Ok, &view),
            Err(err) => {
                let log = ctx.log();
                if err.is_client_fault() {
                    log.info(format_args!("account update rejected: {err}"));
                } else {
                    log.error(format_args!("account update failed: {err}"));
                }
                render::error(&err)
            }
        }
    }

    async fn update(&self, ctx: &Ctx<Authed>, body: &[u8]) -> Result<AccountView, Error> {
        let mut account = self.store.find(ctx.principal().id).await?;

        // A JSON `null` body is an empty update.
        let input: UserInput = serde_json::from_slice::<Option<UserInput>>(body)
            .map_err(|e| Error::client(format!("Invalid request body: {e}.")))?
            .unwrap_or_default();

        if apply_input(&mut account, input, self.hasher.as_ref())? {
            account.updated = Utc::now();
        }

        self.store.update(&account).await?;
        ctx.log()
            .debug(format_args!("account {} updated", ctx.principal().uid));

        Ok(account.view())
    }
}

/// Applies present fields to `account`. Returns whether anything changed.
///
/// The record is only modified in memory; a failure part way leaves the
/// caller's copy dirty, so callers must not persist after an error.
fn apply_input(
    account: &mut Account,
    input: UserInput,
    hasher: &dyn CredentialHasher,
) -> Result<bool, Error> {
    let mut changed = false;

    if let Some(email) = input.email {
        changed |= account.email != email;
        account.email = email;
    }

    if let Some(password) = input.password {
        check::password(&password)?;
        let hash = hasher.hash(password.as_bytes())?;
        account.password.replace(hash);
        changed = true;
    }

    if let Some(name) = input.name {
        changed |= account.name != name;
        account.name = name;
    }

    Ok(changed)
}
