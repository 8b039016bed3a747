#![allow(dead_code)]

use std::sync::Arc;

use rand::Rng;
use userhub::config::token::TokenConfig;
use userhub::router::init_router;
use userhub::state::AppState;
use userhub::store::MemoryStore;
use userhub::token::PasetoMaker;

/// 32 bytes, the minimum the token maker accepts.
pub const TEST_SYMMETRIC_KEY: &str = "12345678901234567890123456789012";

pub fn test_state_with_duration(secs: i64) -> AppState {
    let token_config = TokenConfig {
        symmetric_key: TEST_SYMMETRIC_KEY.to_string(),
        access_token_duration_secs: secs,
    };
    let token_maker = PasetoMaker::new(TEST_SYMMETRIC_KEY).unwrap();

    AppState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(token_maker),
        token_config,
    )
}

pub fn setup_test_app() -> axum::Router {
    init_router(test_state_with_duration(3600))
}

pub fn setup_test_app_with_duration(secs: i64) -> axum::Router {
    init_router(test_state_with_duration(secs))
}

pub fn random_string(n: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

pub fn random_username() -> String {
    format!("user{}", random_string(8))
}

pub fn random_email() -> String {
    format!("{}@{}.com", random_string(6), random_string(5))
}
