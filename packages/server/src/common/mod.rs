pub mod errors;

pub use errors::{AccountError, StoreError};
