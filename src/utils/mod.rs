//! Shared utilities: application errors and password hashing.

pub mod errors;
pub mod password;
