//! GraphQL schema definition.

use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};
use tracing::error;
use uuid::Uuid;

use super::context::GraphQLContext;
use crate::common::errors::AccountError;
use crate::domains::account::actions as account_actions;
use crate::domains::account::data::{
    AccountData, CreateSessionInput, CreateUserInput, SessionData, UpdateUserInput,
};

fn to_field_error(err: AccountError) -> FieldError {
    error!(error = %err, "account operation failed");
    FieldError::new(err.to_string(), juniper::Value::null())
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// Get a single user by email
    async fn read_one_user_email(
        ctx: &GraphQLContext,
        email: String,
    ) -> FieldResult<Option<AccountData>> {
        account_actions::account_by_email(&email, ctx.deps())
            .await
            .map_err(to_field_error)
    }

    /// Get a single user by id
    #[graphql(name = "readOneUserID")]
    async fn read_one_user_id(
        ctx: &GraphQLContext,
        id: Uuid,
    ) -> FieldResult<Option<AccountData>> {
        account_actions::account_by_id(id, ctx.deps())
            .await
            .map_err(to_field_error)
    }

    /// Get all users
    async fn read_users(ctx: &GraphQLContext) -> FieldResult<Vec<AccountData>> {
        account_actions::list_accounts(ctx.deps())
            .await
            .map_err(to_field_error)
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Register a new user
    async fn create_user(
        ctx: &GraphQLContext,
        user_input: CreateUserInput,
    ) -> FieldResult<AccountData> {
        account_actions::create_account(
            user_input.name,
            user_input.email,
            user_input.password,
            ctx.deps(),
        )
        .await
        .map_err(to_field_error)
    }

    /// Update an existing user's name, email, or password
    async fn update_user(
        ctx: &GraphQLContext,
        user_input: UpdateUserInput,
    ) -> FieldResult<AccountData> {
        account_actions::update_account(user_input, ctx.deps())
            .await
            .map_err(to_field_error)
    }

    /// Delete a user by id
    async fn delete_user(ctx: &GraphQLContext, id: Uuid) -> FieldResult<bool> {
        account_actions::delete_account(id, ctx.deps())
            .await
            .map_err(to_field_error)
    }

    /// Log in with email and password, returning a bearer token and the
    /// public profile
    async fn create_session(
        ctx: &GraphQLContext,
        create_session_input: CreateSessionInput,
    ) -> FieldResult<SessionData> {
        account_actions::create_session(
            create_session_input.email,
            create_session_input.password,
            ctx.deps(),
        )
        .await
        .map_err(to_field_error)
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
