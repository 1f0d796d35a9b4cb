use crate::kernel::ServerDeps;

/// GraphQL request context
///
/// Carries the shared dependency container available to all resolvers.
#[derive(Clone)]
pub struct GraphQLContext {
    deps: ServerDeps,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: ServerDeps) -> Self {
        Self { deps }
    }

    pub fn deps(&self) -> &ServerDeps {
        &self.deps
    }
}
