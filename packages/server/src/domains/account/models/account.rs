use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::kernel::{AccountPatch, NewAccount};

/// Account model - SQL persistence layer
///
/// `password_digest` is always a one-way transform of a caller-supplied
/// plaintext; the plaintext itself is never persisted.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_digest: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Find account by exact email
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find account by id
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// All accounts, newest first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert new account; id and timestamps are assigned by the database
    pub async fn insert(fields: &NewAccount, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO users (name, email, password_digest)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.password_digest)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Apply a partial update, refreshing updated_at
    pub async fn update_by_id(id: Uuid, patch: &AccountPatch, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                password_digest = COALESCE($4, password_digest),
                updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.email.as_deref())
        .bind(patch.password_digest.as_deref())
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete by id; true if a row was removed
    pub async fn delete_by_id(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
