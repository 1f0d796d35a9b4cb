// Test dependencies - in-memory implementations for tests
//
// Provides an account store that can be injected into ServerDeps without a
// running database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::common::errors::StoreError;
use crate::domains::account::models::Account;
use crate::kernel::{AccountPatch, BaseAccountStore, NewAccount};

/// In-memory account store
///
/// Assigns ids and timestamps on insert the way the real store does, and can
/// be switched into a failing state to exercise operational-error paths.
pub struct MemoryAccountStore {
    accounts: Arc<Mutex<Vec<Account>>>,
    unavailable: Arc<Mutex<bool>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(Vec::new())),
            unavailable: Arc::new(Mutex::new(false)),
        }
    }

    /// Make every subsequent call fail with `StoreError::Unavailable`
    pub fn set_unavailable(&self) {
        *self.unavailable.lock().unwrap() = true;
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if *self.unavailable.lock().unwrap() {
            Err(StoreError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAccountStore for MemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        self.check_available()?;
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        self.check_available()?;
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Account>, StoreError> {
        self.check_available()?;
        let accounts = self.accounts.lock().unwrap();
        let mut all: Vec<Account> = accounts.clone();
        all.reverse(); // newest first, matching the SQL ordering
        Ok(all)
    }

    async fn insert(&self, fields: NewAccount) -> Result<Account, StoreError> {
        self.check_available()?;
        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            name: fields.name,
            email: fields.email,
            password_digest: fields.password_digest,
            created_at: now,
            updated_at: now,
        };

        self.accounts.lock().unwrap().push(account.clone());
        Ok(account)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: AccountPatch,
    ) -> Result<Option<Account>, StoreError> {
        self.check_available()?;
        let mut accounts = self.accounts.lock().unwrap();

        let Some(account) = accounts.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            account.name = name;
        }
        if let Some(email) = patch.email {
            account.email = email;
        }
        if let Some(digest) = patch.password_digest {
            account.password_digest = digest;
        }
        account.updated_at = Utc::now();

        Ok(Some(account.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| a.id != id);
        Ok(accounts.len() < before)
    }
}
