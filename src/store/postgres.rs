use async_trait::async_trait;
use sqlx::PgPool;

use super::{CreateUserParams, StoreError, UpdateUserParams, UserStore};
use crate::modules::users::model::User;

/// SQLSTATE for unique-constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Production [`UserStore`] backed by PostgreSQL.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            StoreError::Duplicate
        }
        other => StoreError::Other(other.into()),
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, params: CreateUserParams) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, full_name, sex, age, email, phone, hashed_password)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(&params.username)
        .bind(&params.full_name)
        .bind(&params.sex)
        .bind(params.age)
        .bind(&params.email)
        .bind(&params.phone)
        .bind(&params.hashed_password)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn get_user_by_id(&self, id: i64) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn update_user(&self, params: UpdateUserParams) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "UPDATE users
             SET full_name = $2, sex = $3, email = $4, phone = $5
             WHERE id = $1
             RETURNING *",
        )
        .bind(params.id)
        .bind(&params.full_name)
        .bind(&params.sex)
        .bind(&params.email)
        .bind(&params.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn delete_user_by_id(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
