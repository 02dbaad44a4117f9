use chrono::Duration;

use crate::{
    marketplace::MarketplaceClient,
    server::{
        config::Config,
        error::Error,
        model::{app::AppState, session::SessionConfig},
    },
};

/// Build the marketplace client for the configured base URL
pub fn build_marketplace_client(config: &Config) -> Result<MarketplaceClient, Error> {
    let client = MarketplaceClient::builder()
        .base_url(&config.marketplace_api_url)
        .user_agent(config.user_agent())
        .build()?;

    Ok(client)
}

/// Build session signing configuration
///
/// Cookies are only marked `Secure` in release builds so the dashboard works
/// over plain HTTP during development.
pub fn build_session_config(config: &Config) -> SessionConfig {
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionConfig::new(
        &config.session_secret,
        Duration::hours(config.session_max_age_hours),
        secure_cookies,
    )
}

pub fn build_state(config: &Config) -> Result<AppState, Error> {
    let marketplace = build_marketplace_client(config)?;
    let session = build_session_config(config);

    Ok(AppState::new(marketplace, session))
}
