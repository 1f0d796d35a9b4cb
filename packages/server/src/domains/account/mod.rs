//! Account domain - user records and their lifecycle

pub mod actions;
pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::AccountData;
pub use models::Account;
