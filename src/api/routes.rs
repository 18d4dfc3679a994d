use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::tts::TtsService;

pub struct AppState {
    pub tts: TtsService,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/", get(handlers::health))
        .route("/v1/audio/voices", get(handlers::list_voices))
        .route("/audio/voices", get(handlers::list_voices))
        .route("/v1/voices", get(handlers::list_voices))
        .route("/voices", get(handlers::list_voices))
        .route("/v1/audio/speech", post(handlers::speech))
        .route("/audio/speech", post(handlers::speech))
        // Request bodies are relayed whole; size limits are the upstream's call.
        .layer(DefaultBodyLimit::disable())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
