//! Account query actions
//!
//! Query actions return data directly; absence is not an error.

use uuid::Uuid;

use crate::common::errors::AccountError;
use crate::domains::account::data::AccountData;
use crate::kernel::ServerDeps;

/// Get a single account by exact email
pub async fn account_by_email(
    email: &str,
    deps: &ServerDeps,
) -> Result<Option<AccountData>, AccountError> {
    Ok(deps
        .store
        .find_by_email(email)
        .await?
        .map(AccountData::from))
}

/// Get a single account by id
pub async fn account_by_id(
    id: Uuid,
    deps: &ServerDeps,
) -> Result<Option<AccountData>, AccountError> {
    Ok(deps.store.find_by_id(id).await?.map(AccountData::from))
}

/// Get all accounts, newest first
pub async fn list_accounts(deps: &ServerDeps) -> Result<Vec<AccountData>, AccountError> {
    Ok(deps
        .store
        .find_all()
        .await?
        .into_iter()
        .map(AccountData::from)
        .collect())
}
