//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::kernel::{PgAccountStore, ServerDeps};
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::routes::{graphql_handler, graphql_playground, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router
///
/// The store and the signing key are constructed once here and injected into
/// every resolver through the GraphQL context; nothing else holds mutable
/// state across requests.
pub fn build_app(pool: PgPool, jwt_secret: &str) -> Router {
    let store = Arc::new(PgAccountStore::new(pool.clone()));
    let jwt_service = Arc::new(JwtService::new(jwt_secret, "user-api".to_string()));
    let deps = ServerDeps::new(store, jwt_service);

    let schema = Arc::new(create_schema());
    let context = GraphQLContext::new(deps);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/playground", get(graphql_playground))
        .route("/health", get(health_handler))
        .layer(Extension(context))
        .layer(Extension(AppState { db_pool: pool }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}
