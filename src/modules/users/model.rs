//! User entity, request DTOs, and the public response projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::validator::{validate_alphanumeric, validate_phone, validate_sex};

/// A user record as the store persists it.
///
/// `username` and `email` are unique across all records; `id` is assigned at
/// creation and never reused. `avatar` and `status` are opaque strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub sex: String,
    pub age: i32,
    pub avatar: String,
    pub status: String,
    pub email: String,
    pub phone: String,
    pub hashed_password: String,
    pub password_changed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Registration request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(
        length(min = 3, max = 32),
        custom(function = validate_alphanumeric)
    )]
    pub username: String,
    #[validate(length(min = 3, max = 64))]
    pub full_name: String,
    #[validate(custom(function = validate_sex))]
    pub sex: String,
    #[validate(range(min = 18, max = 60))]
    pub age: i32,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = validate_phone))]
    pub phone: String,
    #[validate(length(min = 5, max = 64))]
    pub password: String,
}

/// Login request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(custom(function = validate_alphanumeric))]
    pub username: String,
    #[validate(length(min = 6))]
    pub password: String,
}

/// Profile patch. Absent fields keep their stored value; at least one field
/// must be present.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserDto {
    #[validate(length(min = 3, max = 64))]
    pub full_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(custom(function = validate_phone))]
    pub phone: Option<String>,
    #[validate(custom(function = validate_sex))]
    pub sex: Option<String>,
}

impl UpdateUserDto {
    pub fn has_updates(&self) -> bool {
        self.full_name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.sex.is_some()
    }
}

/// The subset of a user record safe to return to clients. Never carries the
/// password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub sex: String,
    pub age: i32,
    pub avatar: String,
    pub status: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            sex: user.sex,
            age: user.age,
            avatar: user.avatar,
            status: user.status,
            email: user.email,
            phone: user.phone,
            created_at: user.created_at,
        }
    }
}

/// Successful login: a fresh bearer token plus the public projection.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create_dto() -> CreateUserDto {
        CreateUserDto {
            username: "alice".to_string(),
            full_name: "Alice Example".to_string(),
            sex: "M".to_string(),
            age: 25,
            email: "alice@example.com".to_string(),
            phone: "+15551234567".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[test]
    fn create_dto_accepts_valid_input() {
        assert!(valid_create_dto().validate().is_ok());
    }

    #[test]
    fn create_dto_field_bounds() {
        let mut dto = valid_create_dto();
        dto.username = "ab".to_string();
        assert!(dto.validate().is_err());

        let mut dto = valid_create_dto();
        dto.age = 17;
        assert!(dto.validate().is_err());

        let mut dto = valid_create_dto();
        dto.age = 61;
        assert!(dto.validate().is_err());

        let mut dto = valid_create_dto();
        dto.sex = "X".to_string();
        assert!(dto.validate().is_err());

        let mut dto = valid_create_dto();
        dto.email = "not-an-email".to_string();
        assert!(dto.validate().is_err());

        let mut dto = valid_create_dto();
        dto.phone = "555-1234".to_string();
        assert!(dto.validate().is_err());

        let mut dto = valid_create_dto();
        dto.password = "1234".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn update_dto_validates_present_fields_only() {
        let dto = UpdateUserDto {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        assert!(dto.has_updates());

        let dto = UpdateUserDto::default();
        assert!(dto.validate().is_ok());
        assert!(!dto.has_updates());

        let dto = UpdateUserDto {
            sex: Some("Z".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn response_projection_excludes_password_hash() {
        let user = User {
            id: 7,
            username: "alice".to_string(),
            full_name: "Alice Example".to_string(),
            sex: "F".to_string(),
            age: 25,
            avatar: String::new(),
            status: String::new(),
            email: "alice@example.com".to_string(),
            phone: "+15551234567".to_string(),
            hashed_password: "$2b$12$secret".to_string(),
            password_changed_at: None,
            created_at: Utc::now(),
        };

        let serialized = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(serialized.contains("alice@example.com"));
        assert!(!serialized.contains("hashed_password"));
        assert!(!serialized.contains("$2b$12$secret"));
    }
}
