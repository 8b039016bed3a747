use anyhow::anyhow;
use chrono::Duration;
use tracing::instrument;

use crate::store::{CreateUserParams, StoreError, UpdateUserParams, UserStore};
use crate::token::{Maker, Payload};
use crate::utils::errors::AppError;
use crate::utils::password::{hash_password, verify_password};

use super::model::{CreateUserDto, LoginDto, LoginResponse, UpdateUserDto, UserResponse};

fn map_fetch_error(err: StoreError) -> AppError {
    match err {
        StoreError::NotFound => AppError::not_found(anyhow!("user not found")),
        other => AppError::internal(other),
    }
}

pub struct UserService;

impl UserService {
    #[instrument(skip_all, fields(username = %dto.username))]
    pub async fn create_user(
        store: &dyn UserStore,
        dto: CreateUserDto,
    ) -> Result<UserResponse, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let user = store
            .create_user(CreateUserParams {
                username: dto.username,
                full_name: dto.full_name,
                sex: dto.sex,
                age: dto.age,
                email: dto.email,
                phone: dto.phone,
                hashed_password,
            })
            .await
            .map_err(|err| match err {
                StoreError::Duplicate => AppError::forbidden(anyhow!("this user already exists")),
                other => AppError::internal(other),
            })?;

        Ok(user.into())
    }

    #[instrument(skip_all, fields(username = %dto.username))]
    pub async fn login_user(
        store: &dyn UserStore,
        token_maker: &dyn Maker,
        token_duration: Duration,
        dto: LoginDto,
    ) -> Result<LoginResponse, AppError> {
        let user = store
            .get_user_by_username(&dto.username)
            .await
            .map_err(map_fetch_error)?;

        if !verify_password(&dto.password, &user.hashed_password)? {
            return Err(AppError::unauthorized(anyhow!(
                "invalid username or password"
            )));
        }

        let token = token_maker
            .create_token(&user.username, token_duration)
            .map_err(AppError::internal)?;

        Ok(LoginResponse {
            token,
            user: user.into(),
        })
    }

    #[instrument(skip(store))]
    pub async fn get_user(store: &dyn UserStore, username: &str) -> Result<UserResponse, AppError> {
        let user = store
            .get_user_by_username(username)
            .await
            .map_err(map_fetch_error)?;
        Ok(user.into())
    }

    #[instrument(skip_all, fields(username = %username))]
    pub async fn update_user(
        store: &dyn UserStore,
        auth_payload: &Payload,
        username: &str,
        dto: UpdateUserDto,
    ) -> Result<UserResponse, AppError> {
        if !dto.has_updates() {
            return Err(AppError::bad_request(anyhow!(
                "at least one field must be provided"
            )));
        }

        // Users may only patch their own profile. Fetching someone else's
        // profile stays open to any authenticated user; this asymmetry is the
        // intended product behavior.
        if auth_payload.username != username {
            return Err(AppError::forbidden(anyhow!("permission denied")));
        }

        let current = store
            .get_user_by_username(username)
            .await
            .map_err(map_fetch_error)?;

        let updated = store
            .update_user(UpdateUserParams {
                id: current.id,
                full_name: dto.full_name.unwrap_or(current.full_name),
                sex: dto.sex.unwrap_or(current.sex),
                email: dto.email.unwrap_or(current.email),
                phone: dto.phone.unwrap_or(current.phone),
            })
            .await
            .map_err(AppError::internal)?;

        Ok(updated.into())
    }
}
