//! Bearer-token issuance and verification.
//!
//! Tokens are opaque PASETO v2.local strings: the serialized [`Payload`] is
//! encrypted and authenticated under a symmetric key together with a fixed
//! footer that scopes tokens to this application. [`Maker`] is the seam that
//! lets an alternative token scheme be swapped in without touching callers.

pub mod paseto;
pub mod payload;

pub use paseto::PasetoMaker;
pub use payload::Payload;

use chrono::Duration;

/// Errors produced while creating or verifying tokens.
///
/// All tamper, format, and wrong-key failures collapse into [`Error::Invalid`]
/// so a caller cannot learn which check rejected the token. Expiry is the one
/// distinguishable verification failure.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("token is invalid")]
    Invalid,
    #[error("token is expired")]
    Expired,
    #[error("token duration must be positive")]
    InvalidDuration,
    #[error("symmetric key must be at least {expected} bytes, got {got}")]
    KeySize { expected: usize, got: usize },
}

/// Capability to issue and verify bearer tokens.
pub trait Maker: Send + Sync {
    /// Issues a token for `username` that expires after `duration`.
    fn create_token(&self, username: &str, duration: Duration) -> Result<String, Error>;

    /// Decrypts and authenticates `token`, returning the payload it carries.
    fn verify_token(&self, token: &str) -> Result<Payload, Error>;
}
