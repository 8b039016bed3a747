use std::sync::Arc;

use dotenvy::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use userhub::config::database::init_db_pool;
use userhub::config::server::ServerConfig;
use userhub::config::token::TokenConfig;
use userhub::router::init_router;
use userhub::state::AppState;
use userhub::store::PgStore;
use userhub::token::PasetoMaker;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,axum::rejection=trace", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server_config = ServerConfig::from_env();
    let token_config = TokenConfig::from_env();

    let token_maker =
        PasetoMaker::new(&token_config.symmetric_key).expect("failed to create token maker");
    let pool = init_db_pool().await;

    let state = AppState::new(
        Arc::new(PgStore::new(pool)),
        Arc::new(token_maker),
        token_config,
    );
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&server_config.addr)
        .await
        .expect("failed to bind server address");
    tracing::info!("server listening on {}", server_config.addr);
    axum::serve(listener, app).await.expect("server error");
}
