use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{CreateUserParams, StoreError, UpdateUserParams, UserStore};
use crate::modules::users::model::User;

/// In-memory [`UserStore`] for tests and local runs.
///
/// Mirrors the database contract: username and email are unique, ids grow
/// monotonically and are never reused, not even after a delete.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    users: HashMap<i64, User>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, params: CreateUserParams) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        let taken = inner
            .users
            .values()
            .any(|u| u.username == params.username || u.email == params.email);
        if taken {
            return Err(StoreError::Duplicate);
        }

        inner.last_id += 1;
        let user = User {
            id: inner.last_id,
            username: params.username,
            full_name: params.full_name,
            sex: params.sex,
            age: params.age,
            avatar: String::new(),
            status: String::new(),
            email: params.email,
            phone: params.phone,
            hashed_password: params.hashed_password,
            password_changed_at: None,
            created_at: Utc::now(),
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user_by_id(&self, id: i64) -> Result<User, StoreError> {
        let inner = self.inner.read().await;
        inner.users.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, StoreError> {
        let inner = self.inner.read().await;
        inner
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_user(&self, params: UpdateUserParams) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        let email_taken = inner
            .users
            .values()
            .any(|u| u.id != params.id && u.email == params.email);
        if email_taken {
            return Err(StoreError::Duplicate);
        }

        let user = inner
            .users
            .get_mut(&params.id)
            .ok_or(StoreError::NotFound)?;
        user.full_name = params.full_name;
        user.sex = params.sex;
        user.email = params.email;
        user.phone = params.phone;
        Ok(user.clone())
    }

    async fn delete_user_by_id(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
