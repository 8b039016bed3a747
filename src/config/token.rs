use std::env;

use chrono::Duration;

#[derive(Clone, Debug)]
pub struct TokenConfig {
    /// Symmetric key for the token maker; at least 32 bytes.
    pub symmetric_key: String,
    pub access_token_duration_secs: i64,
}

impl TokenConfig {
    pub fn from_env() -> Self {
        Self {
            symmetric_key: env::var("TOKEN_SYMMETRIC_KEY").unwrap_or_default(),
            access_token_duration_secs: env::var("ACCESS_TOKEN_DURATION_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(900), // 15 minutes
        }
    }

    pub fn access_token_duration(&self) -> Duration {
        Duration::seconds(self.access_token_duration_secs)
    }
}
