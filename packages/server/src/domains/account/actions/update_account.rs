//! Update account action - partial mutation guarded by an existence check

use crate::common::errors::AccountError;
use crate::domains::account::data::{AccountData, UpdateUserInput};
use crate::domains::auth::password;
use crate::kernel::{AccountPatch, ServerDeps};

/// Update an existing account's name, email, or password.
///
/// A supplied password is re-hashed here, the same as at registration; the
/// store only ever receives the digest.
pub async fn update_account(
    input: UpdateUserInput,
    deps: &ServerDeps,
) -> Result<AccountData, AccountError> {
    deps.store
        .find_by_id(input.id)
        .await?
        .ok_or(AccountError::NotFound)?;

    let password_digest = match input.password.as_deref() {
        Some(plaintext) if !plaintext.is_empty() => Some(password::hash_password(plaintext)?),
        _ => None,
    };

    let account = deps
        .store
        .update_by_id(
            input.id,
            AccountPatch {
                name: input.name,
                email: input.email,
                password_digest,
            },
        )
        .await?
        .ok_or(AccountError::NotFound)?;

    Ok(AccountData::from(account))
}
