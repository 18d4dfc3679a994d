use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod tts;

use api::routes::{create_router, AppState};
use config::Config;
use error::AppError;
use tts::{TtsService, VoiceCatalog};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let config = Config::from_env()?;
    let addr = config.socket_addr()?;

    tracing::info!("Groq TTS Proxy v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Upstream: {}", config.base_url);
    if config.api_key.is_empty() {
        tracing::warn!("GROQ_API_KEY is not set; upstream calls will be rejected");
    }

    // Create TTS service
    let tts = TtsService::from_config(&config, VoiceCatalog::default())?;

    // Create app state
    let state = Arc::new(AppState { tts });

    // Create router
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
