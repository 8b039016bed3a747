use std::sync::Arc;

use crate::config::token::TokenConfig;
use crate::store::UserStore;
use crate::token::Maker;

/// Shared application state.
///
/// The token maker owns the signing key for the process lifetime; everything
/// here is read-only after startup and safe to share across requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub token_maker: Arc<dyn Maker>,
    pub token_config: TokenConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UserStore>,
        token_maker: Arc<dyn Maker>,
        token_config: TokenConfig,
    ) -> Self {
        Self {
            store,
            token_maker,
            token_config,
        }
    }
}
