use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateUserDto, LoginDto, LoginResponse, UpdateUserDto, UserResponse};
use super::service::UserService;

fn check_username_path(username: &str) -> Result<(), AppError> {
    if username.is_empty() || !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(anyhow!("invalid request")));
    }
    Ok(())
}

/// POST /users — register an account.
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserService::create_user(state.store.as_ref(), dto).await?;
    Ok(Json(user))
}

/// POST /users/login — exchange credentials for a bearer token.
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = UserService::login_user(
        state.store.as_ref(),
        state.token_maker.as_ref(),
        state.token_config.access_token_duration(),
        dto,
    )
    .await?;
    Ok(Json(response))
}

/// GET /users/{username} — public profile. Any authenticated user may fetch
/// any profile; no ownership check here.
pub async fn get_user(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    check_username_path(&username)?;
    let user = UserService::get_user(state.store.as_ref(), &username).await?;
    Ok(Json(user))
}

/// POST /users/{username} — patch own profile fields.
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(payload): AuthUser,
    Path(username): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<UserResponse>, AppError> {
    check_username_path(&username)?;
    let user = UserService::update_user(state.store.as_ref(), &payload, &username, dto).await?;
    Ok(Json(user))
}
