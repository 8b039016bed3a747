use chrono::Duration;
use pasetors::Local;
use pasetors::keys::SymmetricKey;
use pasetors::token::UntrustedToken;
use pasetors::version2::{LocalToken, V2};

use super::{Error, Maker, Payload};

/// Footer bound into every token as authenticated data. Tokens minted for
/// another application or environment under the same key will not verify here.
const TOKEN_FOOTER: &[u8] = b"userhub";

/// XChaCha20-Poly1305 key size required by PASETO v2.local.
const KEY_SIZE: usize = 32;

/// [`Maker`] backed by PASETO v2.local authenticated encryption.
///
/// The payload is confidential to holders of the key, not merely
/// tamper-evident, which matters because it carries a username.
pub struct PasetoMaker {
    key: SymmetricKey<V2>,
}

impl PasetoMaker {
    /// Builds a maker from a symmetric key string.
    ///
    /// Fails if the key is shorter than the cipher's key size; the key is
    /// never padded or truncated.
    pub fn new(key: &str) -> Result<Self, Error> {
        if key.len() < KEY_SIZE {
            return Err(Error::KeySize {
                expected: KEY_SIZE,
                got: key.len(),
            });
        }

        let key = SymmetricKey::<V2>::from(key.as_bytes()).map_err(|_| Error::KeySize {
            expected: KEY_SIZE,
            got: key.len(),
        })?;
        Ok(Self { key })
    }
}

impl Maker for PasetoMaker {
    fn create_token(&self, username: &str, duration: Duration) -> Result<String, Error> {
        let payload = Payload::new(username, duration)?;
        let message = serde_json::to_vec(&payload).map_err(|_| Error::Invalid)?;

        LocalToken::encrypt(&self.key, &message, Some(TOKEN_FOOTER)).map_err(|_| Error::Invalid)
    }

    fn verify_token(&self, token: &str) -> Result<Payload, Error> {
        // Any parse, decryption, tag, or footer failure folds into the same
        // error so the caller cannot learn which check rejected the token.
        let untrusted = UntrustedToken::<Local, V2>::try_from(token).map_err(|_| Error::Invalid)?;
        let trusted = LocalToken::decrypt(&self.key, &untrusted, Some(TOKEN_FOOTER))
            .map_err(|_| Error::Invalid)?;

        let payload: Payload =
            serde_json::from_str(trusted.payload()).map_err(|_| Error::Invalid)?;
        payload.check_expiry()?;
        Ok(payload)
    }
}
