//! Account domain actions - business logic functions
//!
//! Actions are async functions called directly from GraphQL resolvers. Each
//! one enforces its own preconditions against the store before mutating.

mod create_account;
mod create_session;
mod delete_account;
mod queries;
mod update_account;

pub use create_account::create_account;
pub use create_session::create_session;
pub use delete_account::delete_account;
pub use queries::{account_by_email, account_by_id, list_accounts};
pub use update_account::update_account;
