//! Auth domain - credential hashing and session token issuance

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtService};
