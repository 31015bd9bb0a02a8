//! Account record store port.
//!
//! The core depends only on [`AccountStore`]. Persistence, uniqueness
//! enforcement and concurrency control belong to the implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use thiserror::Error;

use crate::account::Account;

/// Failure reported by an account store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the requested identifier.
    #[error("account {id} not found")]
    NotFound {
        /// Requested identifier
        id: i64,
    },

    /// Any other storage failure.
    #[error("storage failure: {0}")]
    Internal(String),
}

impl StoreError {
    /// Create an internal storage error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Keyed lookup and update of account records.
///
/// Only `find` and `update` are used by the update path. Concurrent updates
/// to one record are last-writer-wins unless the implementation says otherwise.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Loads the account with the given identifier.
    async fn find(&self, id: i64) -> Result<Account, StoreError>;

    /// Persists `account`, keyed by `account.id`.
    async fn update(&self, account: &Account) -> Result<(), StoreError>;
}

/// In-memory store keyed by account id.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<i64, Account>>,
}

impl MemoryAccountStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a record.
    pub fn insert(&self, account: Account) -> Result<(), StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::internal("account map lock poisoned"))?;
        accounts.insert(account.id, account);
        Ok(())
    }

    /// Returns a copy of the stored record, if any.
    pub fn get(&self, id: i64) -> Option<Account> {
        self.accounts
            .read()
            .ok()
            .and_then(|accounts| accounts.get(&id).cloned())
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.accounts.read().map(|a| a.len()).unwrap_or(0)
    }

    /// Returns `true` when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find(&self, id: i64) -> Result<Account, StoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| StoreError::internal("account map lock poisoned"))?;
        accounts
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn update(&self, account: &Account) -> Result<(), StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::internal("account map lock poisoned"))?;
        match accounts.get_mut(&account.id) {
            Some(existing) => {
                *existing = account.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound { id: account.id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn find_returns_inserted_account() {
        let store = MemoryAccountStore::new();
        store
            .insert(Account::new(1, "octocat", "octocat@github.com"))
            .unwrap();

        let found = store.find(1).await.unwrap();
        assert_eq!(found.email, "octocat@github.com");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn find_missing_is_not_found() {
        let store = MemoryAccountStore::new();

        let error = store.find(42).await.unwrap_err();
        assert!(matches!(error, StoreError::NotFound { id: 42 }));
        assert_eq!(error.to_string(), "account 42 not found");
    }

    #[tokio::test]
    async fn update_replaces_record() {
        let store = MemoryAccountStore::new();
        store
            .insert(Account::new(1, "octocat", "octocat@github.com"))
            .unwrap();

        let mut account = store.find(1).await.unwrap();
        account.email = "octocat@google.com".to_string();
        store.update(&account).await.unwrap();

        assert_eq!(store.get(1).unwrap().email, "octocat@google.com");
    }

    #[tokio::test]
    async fn update_does_not_create_records() {
        let store = MemoryAccountStore::new();
        let account = Account::new(9, "ghost", "ghost@example.com");

        assert!(matches!(
            store.update(&account).await,
            Err(StoreError::NotFound { id: 9 })
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn found_records_are_copies() {
        let store = MemoryAccountStore::new();
        store
            .insert(Account::new(1, "octocat", "octocat@github.com"))
            .unwrap();

        let mut copy = store.find(1).await.unwrap();
        copy.email = "changed@example.com".to_string();

        assert_eq!(store.get(1).unwrap().email, "octocat@github.com");
    }
}
