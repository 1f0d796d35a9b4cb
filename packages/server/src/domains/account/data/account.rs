use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::account::models::Account;

/// Account GraphQL data type
///
/// Public API representation of an account; never carries the password
/// digest.
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A registered user account")]
pub struct AccountData {
    /// Unique identifier
    pub id: String,

    pub name: String,

    pub email: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountData {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name,
            email: account.email,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Result of a successful login
///
/// The bearer token plus the public profile of the authenticated account.
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "An authenticated session")]
pub struct SessionData {
    /// Opaque bearer credential, already prefixed with the scheme label
    pub token: String,

    pub id: String,

    pub name: String,

    pub email: String,
}

#[derive(Debug, Clone, GraphQLInputObject)]
#[graphql(description = "Fields for registering a new user")]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, GraphQLInputObject)]
#[graphql(description = "Partial update for an existing user")]
pub struct UpdateUserInput {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, GraphQLInputObject)]
#[graphql(description = "Credentials for logging in")]
pub struct CreateSessionInput {
    pub email: String,
    pub password: String,
}
