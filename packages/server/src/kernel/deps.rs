//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container handed to every
//! domain action. The store and the signing key are built once at startup
//! and read-only afterwards.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::errors::StoreError;
use crate::domains::account::models::Account;
use crate::domains::auth::JwtService;
use crate::kernel::{AccountPatch, BaseAccountStore, NewAccount};

// =============================================================================
// Postgres Store Adapter (implements BaseAccountStore trait)
// =============================================================================

/// Postgres-backed account store wrapping the `Account` model queries
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseAccountStore for PgAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        Account::find_by_email(email, &self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        Account::find_by_id(id, &self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Account>, StoreError> {
        Account::find_all(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn insert(&self, fields: NewAccount) -> Result<Account, StoreError> {
        Account::insert(&fields, &self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: AccountPatch,
    ) -> Result<Option<Account>, StoreError> {
        Account::update_by_id(id, &patch, &self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        Account::delete_by_id(id, &self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to domain actions
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseAccountStore>,
    /// JWT service for token creation
    pub jwt_service: Arc<JwtService>,
}

impl ServerDeps {
    pub fn new(store: Arc<dyn BaseAccountStore>, jwt_service: Arc<JwtService>) -> Self {
        Self { store, jwt_service }
    }
}
