//! Delete account action

use tracing::info;
use uuid::Uuid;

use crate::common::errors::AccountError;
use crate::kernel::ServerDeps;

/// Delete an account by id.
///
/// Deleting an absent id is `NotFound`, not a crash; any underlying store
/// failure surfaces as the generic operational error.
pub async fn delete_account(id: Uuid, deps: &ServerDeps) -> Result<bool, AccountError> {
    deps.store
        .find_by_id(id)
        .await?
        .ok_or(AccountError::NotFound)?;

    let removed = deps.store.delete_by_id(id).await?;

    info!(account_id = %id, "account deleted");

    Ok(removed)
}
