//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use account_core::web::RequestAdapter;
use account_core::{
    Account, AccountStore, CredentialHasher, HashError, MemoryAccountStore, Session, StoreError,
};
use async_trait::async_trait;

/// Hash returned by [`static_hasher`].
pub const STATIC_HASH: &str = "$2a$10$onMfkmQZtlkOfnZJe7GaiesbPBbXcyB53KyFKllWq829mxlhNoJSi";

/// The account every scenario starts from.
pub fn octocat() -> Account {
    Account::new(1, "octocat", "octocat@github.com")
        .with_name("The Octocat")
        .with_password_hash("$previous$")
}

pub fn static_hasher() -> Arc<dyn CredentialHasher> {
    Arc::new(|_: &[u8]| -> Result<String, HashError> { Ok(STATIC_HASH.to_string()) })
}

pub fn failing_hasher() -> Arc<dyn CredentialHasher> {
    Arc::new(|_: &[u8]| -> Result<String, HashError> { Err(HashError::new("hash too short")) })
}

/// Request from `account`'s session carrying `body`.
pub fn request_from(account: &Account, body: &str) -> RequestAdapter {
    let mut request = RequestAdapter::new(format!("req-{}", account.id));
    request.set_session(Some(Session::for_account(account)));
    request.set_body(body.as_bytes().to_vec());
    request
}

/// Which store operation should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    None,
    Find,
    Update,
}

/// In-memory store that counts calls and can be told to fail.
pub struct RecordingStore {
    inner: MemoryAccountStore,
    failure: Failure,
    finds: AtomicUsize,
    updates: AtomicUsize,
}

impl RecordingStore {
    pub fn with(accounts: impl IntoIterator<Item = Account>) -> Arc<Self> {
        Self::failing(accounts, Failure::None)
    }

    pub fn failing(accounts: impl IntoIterator<Item = Account>, failure: Failure) -> Arc<Self> {
        let inner = MemoryAccountStore::new();
        for account in accounts {
            inner.insert(account).unwrap();
        }
        Arc::new(Self {
            inner,
            failure,
            finds: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
        })
    }

    pub fn get(&self, id: i64) -> Option<Account> {
        self.inner.get(id)
    }

    pub fn finds(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountStore for RecordingStore {
    async fn find(&self, id: i64) -> Result<Account, StoreError> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        if self.failure == Failure::Find {
            return Err(StoreError::internal("connection reset"));
        }
        self.inner.find(id).await
    }

    async fn update(&self, account: &Account) -> Result<(), StoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.failure == Failure::Update {
            return Err(StoreError::internal("write conflict"));
        }
        self.inner.update(account).await
    }
}
