//! Create session action - credential login and token issuance

use tracing::info;

use crate::common::errors::AccountError;
use crate::domains::account::data::SessionData;
use crate::domains::auth::password;
use crate::kernel::ServerDeps;

/// Authenticate by email and password and issue a bearer token.
///
/// Every credential failure maps to the same `InvalidCredential` message so
/// a caller cannot probe which of email or password was wrong.
pub async fn create_session(
    email: String,
    password: String,
    deps: &ServerDeps,
) -> Result<SessionData, AccountError> {
    if email.is_empty() {
        return Err(AccountError::MissingCredential);
    }

    // Login is case-insensitive on email.
    let email = email.to_lowercase();

    let account = deps
        .store
        .find_by_email(&email)
        .await?
        .ok_or(AccountError::InvalidCredential)?;

    if password.is_empty() && account.password_digest.is_empty() {
        return Err(AccountError::InvalidCredential);
    }

    if !password::verify_password(&password, &account.password_digest) {
        return Err(AccountError::InvalidCredential);
    }

    let token = deps.jwt_service.create_token(account.id)?;

    info!(account_id = %account.id, "session created");

    Ok(SessionData {
        token: format!("Bearer {}", token),
        id: account.id.to_string(),
        name: account.name,
        email: account.email,
    })
}
