//! # userhub
//!
//! A user-account REST API built with Axum and PostgreSQL: register an
//! account, log in for a bearer token, fetch a public profile, and patch your
//! own profile fields.
//!
//! Tokens are PASETO v2.local strings minted by [`token::PasetoMaker`]: the
//! payload (token id, username, issue and expiry times) is authenticated and
//! encrypted under a symmetric key with an application footer, so a token is
//! confidential as well as tamper-evident. The [`middleware::auth::AuthUser`]
//! extractor gates the authenticated routes.
//!
//! Persistence sits behind the [`store::UserStore`] trait; production uses
//! [`store::PgStore`] while tests drive the full router against
//! [`store::MemoryStore`].
//!
//! ## Module layout
//!
//! ```text
//! src/
//! ├── config/      # env-var configuration (database, server, token)
//! ├── middleware/  # bearer-token auth extractor
//! ├── modules/     # feature modules (controller / service / model / router)
//! ├── store/       # UserStore trait + Postgres and in-memory impls
//! ├── token/       # Maker trait, Payload, PASETO maker
//! ├── utils/       # AppError, password hashing
//! ├── router.rs    # top-level router
//! ├── state.rs     # shared AppState
//! ├── logging.rs   # request logging middleware
//! └── validator.rs # ValidatedJson + custom field predicates
//! ```

pub mod config;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod token;
pub mod utils;
pub mod validator;
