// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "create an account") lives in domain actions
// that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAccountStore)

use async_trait::async_trait;
use uuid::Uuid;

use crate::common::errors::StoreError;
use crate::domains::account::models::Account;

/// Fields for a new account record.
///
/// `password_digest` arrives already hashed; the store never sees plaintext.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_digest: String,
}

/// Partial update for an account record. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_digest: Option<String>,
}

// =============================================================================
// Account Store Trait (Infrastructure - persistence boundary)
// =============================================================================

#[async_trait]
pub trait BaseAccountStore: Send + Sync {
    /// Find an account by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Find an account by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError>;

    /// All accounts, newest first
    async fn find_all(&self) -> Result<Vec<Account>, StoreError>;

    /// Insert a new record; the store assigns id and timestamps
    async fn insert(&self, fields: NewAccount) -> Result<Account, StoreError>;

    /// Apply a partial update, refreshing `updated_at`; `None` if the id
    /// does not exist
    async fn update_by_id(
        &self,
        id: Uuid,
        patch: AccountPatch,
    ) -> Result<Option<Account>, StoreError>;

    /// Remove a record; `true` if something was deleted
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError>;
}
