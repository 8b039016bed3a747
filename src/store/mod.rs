//! Persistence boundary for user records.
//!
//! Handlers only see the [`UserStore`] trait, so the service core can be
//! exercised against [`memory::MemoryStore`] in tests while production wires
//! in [`postgres::PgStore`]. Store failures come back pre-classified as
//! [`StoreError`]; mapping them to HTTP statuses is the service layer's job.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;

use crate::modules::users::model::User;

/// Classified store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("record already exists")]
    Duplicate,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Fields required to insert a new user record.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub full_name: String,
    pub sex: String,
    pub age: i32,
    pub email: String,
    pub phone: String,
    pub hashed_password: String,
}

/// Full replacement values for the mutable profile fields. Callers overlay
/// request fields onto the current record before building this.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i64,
    pub full_name: String,
    pub sex: String,
    pub email: String,
    pub phone: String,
}

/// CRUD operations over persisted user records.
///
/// Implementations enforce username and email uniqueness and never reuse ids.
/// Cancellation rides the dropped future; no call holds work beyond it.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, params: CreateUserParams) -> Result<User, StoreError>;
    async fn get_user_by_id(&self, id: i64) -> Result<User, StoreError>;
    async fn get_user_by_username(&self, username: &str) -> Result<User, StoreError>;
    async fn update_user(&self, params: UpdateUserParams) -> Result<User, StoreError>;
    async fn delete_user_by_id(&self, id: i64) -> Result<(), StoreError>;
}
