//! PostgreSQL Store
//!
//! SQLx-backed implementation of [`UserStore`]. Queries are runtime-checked
//! `query_as` calls so the crate builds without a live database; the schema
//! lives in `./migrations`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{StoreError, StoreResult, UserStore};
use crate::models::{NewUser, User, UserChanges, UserRow};

const USER_COLUMNS: &str = "id, username, name, password_hash, gender, address, pincode, \
     email, phone_number, created_at, updated_at";

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Creates a store over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps driver errors, surfacing unique violations as typed conflicts
fn map_store_err(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::Conflict(
            db_err
                .constraint()
                .unwrap_or("users unique constraint")
                .to_string(),
        ),
        other => StoreError::Database(other),
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: NewUser) -> StoreResult<User> {
        let sql = format!(
            "INSERT INTO users \
                 (username, name, password_hash, gender, address, pincode, email, phone_number) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {USER_COLUMNS}"
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user.username)
            .bind(user.name)
            .bind(user.password_hash)
            .bind(user.gender)
            .bind(user.address)
            .bind(user.pincode)
            .bind(user.email)
            .bind(user.phone_number)
            .fetch_one(&self.pool)
            .await
            .map_err(map_store_err)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at");

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update_by_id(&self, id: Uuid, changes: UserChanges) -> StoreResult<Option<User>> {
        // COALESCE keeps columns whose corresponding change is NULL.
        let sql = format!(
            "UPDATE users SET \
                 username = COALESCE($2, username), \
                 name = COALESCE($3, name), \
                 password_hash = COALESCE($4, password_hash), \
                 gender = COALESCE($5, gender), \
                 address = COALESCE($6, address), \
                 pincode = COALESCE($7, pincode), \
                 email = COALESCE($8, email), \
                 phone_number = COALESCE($9, phone_number), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .bind(changes.username)
            .bind(changes.name)
            .bind(changes.password_hash)
            .bind(changes.gender)
            .bind(changes.address)
            .bind(changes.pincode)
            .bind(changes.email)
            .bind(changes.phone_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_store_err)?;

        Ok(row.map(User::from))
    }

    async fn delete_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let sql = format!("DELETE FROM users WHERE id = $1 RETURNING {USER_COLUMNS}");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(User::from))
    }
}
