use axum::{Router, middleware};

use crate::logging::logging_middleware;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .nest("/users", init_users_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
}
