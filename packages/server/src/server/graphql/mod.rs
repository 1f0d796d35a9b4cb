pub mod context;
pub mod schema;

pub use context::GraphQLContext;
pub use schema::{create_schema, Schema};
