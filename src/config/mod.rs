//! Environment-variable configuration.
//!
//! Each submodule owns one concern and exposes a `from_env()` constructor:
//!
//! - [`database`]: PostgreSQL pool initialization (`DATABASE_URL`)
//! - [`server`]: listen address (`SERVER_ADDR`)
//! - [`token`]: token key and access-token lifetime
//!   (`TOKEN_SYMMETRIC_KEY`, `ACCESS_TOKEN_DURATION_SECS`)

pub mod database;
pub mod server;
pub mod token;
