use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Error;

/// The claims carried inside a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Collision-resistant token id, fresh per token.
    pub id: Uuid,
    /// The username this token authenticates.
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expired_at: DateTime<Utc>,
}

impl Payload {
    /// Builds a payload valid for `duration` from now.
    ///
    /// The id comes from `Uuid::new_v4`, which draws from the OS CSPRNG, so
    /// there is no process-wide mutable random state to share or seed.
    pub fn new(username: &str, duration: Duration) -> Result<Self, Error> {
        if duration <= Duration::zero() {
            return Err(Error::InvalidDuration);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            username: username.to_owned(),
            issued_at: now,
            expired_at: now + duration,
        })
    }

    /// Checks the expiry claim against the current time.
    pub fn check_expiry(&self) -> Result<(), Error> {
        if Utc::now() > self.expired_at {
            return Err(Error::Expired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_duration() {
        assert_eq!(
            Payload::new("alice", Duration::zero()).unwrap_err(),
            Error::InvalidDuration
        );
        assert_eq!(
            Payload::new("alice", Duration::seconds(-5)).unwrap_err(),
            Error::InvalidDuration
        );
    }

    #[test]
    fn expiry_follows_issuance_by_duration() {
        let payload = Payload::new("alice", Duration::minutes(15)).unwrap();
        assert_eq!(
            (payload.expired_at - payload.issued_at).num_seconds(),
            15 * 60
        );
        assert!(payload.check_expiry().is_ok());
    }

    #[test]
    fn fresh_ids_per_payload() {
        let a = Payload::new("alice", Duration::minutes(1)).unwrap();
        let b = Payload::new("alice", Duration::minutes(1)).unwrap();
        assert_ne!(a.id, b.id);
    }
}
