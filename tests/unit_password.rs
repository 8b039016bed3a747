mod common;

use common::random_string;
use userhub::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_password_success() {
    let password = random_string(10);
    let hashed = hash_password(&password).unwrap();

    assert!(!hashed.is_empty());
    assert_ne!(hashed, password);
}

#[test]
fn test_verify_correct_password() {
    let password = random_string(10);
    let hashed = hash_password(&password).unwrap();

    assert!(verify_password(&password, &hashed).unwrap());
}

#[test]
fn test_verify_wrong_password_is_mismatch_not_error() {
    let hashed = hash_password("correctpassword").unwrap();

    let result = verify_password("wrongpassword", &hashed);
    assert!(result.is_ok());
    assert!(!result.unwrap());
}

#[test]
fn test_verify_malformed_hash_is_error() {
    let result = verify_password("whatever", "not_a_valid_bcrypt_hash");
    assert!(result.is_err());
}

#[test]
fn test_same_password_hashes_differently() {
    let password = random_string(10);
    let first = hash_password(&password).unwrap();
    let second = hash_password(&password).unwrap();

    assert_ne!(first, second);
    assert!(verify_password(&password, &first).unwrap());
    assert!(verify_password(&password, &second).unwrap());
}

#[test]
fn test_verify_is_case_sensitive() {
    let hashed = hash_password("Password123").unwrap();

    assert!(!verify_password("password123", &hashed).unwrap());
    assert!(!verify_password("PASSWORD123", &hashed).unwrap());
}
