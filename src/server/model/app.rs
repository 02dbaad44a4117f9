use std::sync::Arc;

use crate::{marketplace::MarketplaceClient, server::model::session::SessionConfig};

#[derive(Clone)]
pub struct AppState {
    pub marketplace: MarketplaceClient,
    pub session: Arc<SessionConfig>,
}

impl AppState {
    pub fn new(marketplace: MarketplaceClient, session: SessionConfig) -> Self {
        Self {
            marketplace,
            session: Arc::new(session),
        }
    }
}
