mod common;

use chrono::{Duration, Utc};
use common::TEST_SYMMETRIC_KEY;
use userhub::token::{Error, Maker, PasetoMaker};

#[test]
fn test_create_and_verify_token() {
    let maker = PasetoMaker::new(TEST_SYMMETRIC_KEY).unwrap();
    let username = "fallenangel";
    let duration = Duration::minutes(1);
    let before = Utc::now();

    let token = maker.create_token(username, duration).unwrap();
    assert!(!token.is_empty());

    let payload = maker.verify_token(&token).unwrap();
    assert!(!payload.id.is_nil());
    assert_eq!(payload.username, username);
    assert_eq!((payload.expired_at - payload.issued_at).num_seconds(), 60);
    // issued_at is "now" within scheduling slack
    assert!((payload.issued_at - before).num_seconds().abs() < 2);
}

#[test]
fn test_expired_token() {
    let maker = PasetoMaker::new(TEST_SYMMETRIC_KEY).unwrap();

    let token = maker
        .create_token("fallenangel", Duration::nanoseconds(1))
        .unwrap();
    std::thread::sleep(std::time::Duration::from_millis(10));

    let err = maker.verify_token(&token).unwrap_err();
    assert_eq!(err, Error::Expired);
}

#[test]
fn test_tampered_token_is_invalid() {
    let maker = PasetoMaker::new(TEST_SYMMETRIC_KEY).unwrap();
    let token = maker
        .create_token("fallenangel", Duration::minutes(1))
        .unwrap();

    // flip one character inside the ciphertext section
    let mut chars: Vec<char> = token.chars().collect();
    let i = 15;
    chars[i] = if chars[i] == 'A' { 'B' } else { 'A' };
    let tampered: String = chars.into_iter().collect();
    assert_ne!(tampered, token);

    let err = maker.verify_token(&tampered).unwrap_err();
    assert_eq!(err, Error::Invalid);
}

#[test]
fn test_token_from_other_key_is_invalid() {
    let maker = PasetoMaker::new(TEST_SYMMETRIC_KEY).unwrap();
    let other = PasetoMaker::new("abcdefghijklmnopqrstuvwxyz012345").unwrap();

    let token = other
        .create_token("fallenangel", Duration::minutes(1))
        .unwrap();

    let err = maker.verify_token(&token).unwrap_err();
    assert_eq!(err, Error::Invalid);
}

#[test]
fn test_garbage_token_is_invalid() {
    let maker = PasetoMaker::new(TEST_SYMMETRIC_KEY).unwrap();

    for token in ["", "not-a-token", "v2.local.AAAA", "v2.public.AAAA.AAAA"] {
        let err = maker.verify_token(token).unwrap_err();
        assert_eq!(err, Error::Invalid, "token {token:?}");
    }
}

#[test]
fn test_short_key_rejected() {
    let err = PasetoMaker::new("too-short").err().unwrap();
    assert_eq!(
        err,
        Error::KeySize {
            expected: 32,
            got: 9
        }
    );
}

#[test]
fn test_non_positive_duration_rejected() {
    let maker = PasetoMaker::new(TEST_SYMMETRIC_KEY).unwrap();

    let err = maker
        .create_token("fallenangel", Duration::zero())
        .unwrap_err();
    assert_eq!(err, Error::InvalidDuration);

    let err = maker
        .create_token("fallenangel", Duration::seconds(-60))
        .unwrap_err();
    assert_eq!(err, Error::InvalidDuration);
}

#[test]
fn test_tokens_are_unique_per_issue() {
    let maker = PasetoMaker::new(TEST_SYMMETRIC_KEY).unwrap();

    let first = maker
        .create_token("fallenangel", Duration::minutes(1))
        .unwrap();
    let second = maker
        .create_token("fallenangel", Duration::minutes(1))
        .unwrap();
    assert_ne!(first, second);

    let p1 = maker.verify_token(&first).unwrap();
    let p2 = maker.verify_token(&second).unwrap();
    assert_ne!(p1.id, p2.id);
}
