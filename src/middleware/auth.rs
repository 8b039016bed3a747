use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::state::AppState;
use crate::token::Payload;
use crate::utils::errors::AppError;

/// The single supported authorization scheme, compared case-insensitively.
const AUTH_TYPE_BEARER: &str = "bearer";

/// Extractor that verifies the bearer token and hands the decoded payload to
/// the handler. Rejection happens before any handler or store code runs, and
/// the check has no side effects beyond producing the payload.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Payload);

impl AuthUser {
    /// The username the presented token authenticates.
    pub fn username(&self) -> &str {
        &self.0.username
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::unauthorized(anyhow!("authorization header is not provided"))
            })?;

        let fields: Vec<&str> = auth_header.split_whitespace().collect();
        let [auth_type, token] = fields[..] else {
            return Err(AppError::unauthorized(anyhow!(
                "authorization header is not accepted"
            )));
        };

        if auth_type.to_lowercase() != AUTH_TYPE_BEARER {
            return Err(AppError::unauthorized(anyhow!(
                "unsupported authorization type {auth_type}"
            )));
        }

        // Invalid and expired tokens stay distinguishable in the message.
        let payload = state
            .token_maker
            .verify_token(token)
            .map_err(AppError::unauthorized)?;

        Ok(AuthUser(payload))
    }
}
