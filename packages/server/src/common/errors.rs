use thiserror::Error;

/// Operational failure of the account store.
///
/// "Not found" is never an error at this layer; adapters report absence as
/// `None` or `false` and reserve this type for the store being unreachable
/// or misbehaving.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("account store unavailable: {0}")]
    Unavailable(String),
}

/// Failures of the account operations, surfaced to the request layer as-is.
///
/// Every credential failure in `create_session` maps to `InvalidCredential`,
/// whose single message keeps unknown-email and wrong-password outcomes
/// indistinguishable to the caller.
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("user already exists")]
    AlreadyExists,

    #[error("user does not exist")]
    NotFound,

    #[error("a required credential is missing")]
    MissingCredential,

    #[error("e-mail or password may be incorrect")]
    InvalidCredential,

    #[error("internal server error")]
    Store(#[from] StoreError),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}
