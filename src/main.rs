use dioxus_logger::tracing::{self, Level};
use pacific_admin::server::{config::Config, error::Error, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = serve(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let state = startup::build_state(&config)?;
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!(
        "Starting server on {} for marketplace {}",
        config.bind_address,
        config.marketplace_api_url
    );

    let app = router::routes().with_state(state);
    axum::serve(listener, app).await?;

    Ok(())
}
