//! Request-body validation: the [`ValidatedJson`] extractor plus the custom
//! field predicates layered onto the generic `validator` constraints.

use std::sync::LazyLock;

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use regex::Regex;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::utils::errors::AppError;

/// E.164: leading `+`, non-zero first digit, at most 15 digits.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").expect("phone regex must compile")
});

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let compact: String = phone.chars().filter(|c| *c != ' ').collect();
    if PHONE_RE.is_match(&compact) {
        return Ok(());
    }
    let mut err = ValidationError::new("phone");
    err.message = Some("phone must be a valid E.164 number".into());
    Err(err)
}

pub fn validate_sex(sex: &str) -> Result<(), ValidationError> {
    if sex == "M" || sex == "F" {
        return Ok(());
    }
    let mut err = ValidationError::new("sex");
    err.message = Some("sex must be M or F".into());
    Err(err)
}

pub fn validate_alphanumeric(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Ok(());
    }
    let mut err = ValidationError::new("alphanum");
    err.message = Some("must contain only letters and digits".into());
    Err(err)
}

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| format!("{field}: {msg}"))
                    .or_else(|| Some(format!("{field} is invalid")))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// JSON extractor that runs `validator` rules after deserialization and maps
/// both malformed bodies and failed constraints to a 400 response.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::bad_request(anyhow!(
                        "missing 'Content-Type: application/json' header"
                    ));
                }
                AppError::bad_request(anyhow!("invalid request body"))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}
