//! Create account action - registration with uniqueness-by-email

use tracing::info;

use crate::common::errors::AccountError;
use crate::domains::account::data::AccountData;
use crate::domains::auth::password;
use crate::kernel::{NewAccount, ServerDeps};

/// Create a new account.
///
/// The email must not belong to a live account, and the plaintext password
/// is hashed here, before the store ever sees the record.
pub async fn create_account(
    name: String,
    email: String,
    password: String,
    deps: &ServerDeps,
) -> Result<AccountData, AccountError> {
    if password.is_empty() {
        return Err(AccountError::MissingCredential);
    }

    if deps.store.find_by_email(&email).await?.is_some() {
        return Err(AccountError::AlreadyExists);
    }

    let password_digest = password::hash_password(&password)?;

    let account = deps
        .store
        .insert(NewAccount {
            name,
            email,
            password_digest,
        })
        .await?;

    info!(account_id = %account.id, "account created");

    Ok(AccountData::from(account))
}
