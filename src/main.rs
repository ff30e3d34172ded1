//! Make/Buy/Partner API server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use make_buy_partner::adapters::ai::advisor_from_config;
use make_buy_partner::adapters::content::HttpContentExtractor;
use make_buy_partner::adapters::http::{app_router, ExerciseAppState};
use make_buy_partner::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "Starting make-buy-partner"
    );

    let advisor = advisor_from_config(&config)?;
    let extractor = HttpContentExtractor::new(config.server.extract_timeout())?;

    let state = ExerciseAppState::new(advisor, Arc::new(extractor))
        .with_ai_enabled(config.ai_enabled())
        .with_verbose_errors(config.features.verbose_errors);
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
