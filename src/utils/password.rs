use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

/// Hashes a plaintext password with a fresh salt. Two hashes of the same
/// password are never equal.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("failed to hash password: {e}")))
}

/// Verifies a plaintext password against a stored hash in constant time.
///
/// Returns `Ok(false)` on a mismatch; `Err` is reserved for malformed hashes.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, AppError> {
    verify(password, hashed)
        .map_err(|e| AppError::internal(anyhow::anyhow!("failed to verify password: {e}")))
}
