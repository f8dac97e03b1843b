// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::ocr::{ocr_regions_handler, ocr_text_handler, HealthResponse};
use crate::config::AppConfig;
use crate::version::{get_version_info, VERSION_NUMBER};
use crate::vision::ocr::{OcrEngine, OcrService};

#[derive(Clone)]
pub struct AppState {
    pub ocr_service: OcrService,
    /// Engine version captured at startup, reported by /health
    pub engine_version: Arc<str>,
}

impl AppState {
    pub fn new(engine: Arc<dyn OcrEngine>, engine_version: &str) -> Self {
        Self {
            ocr_service: OcrService::new(engine),
            engine_version: Arc::from(engine_version),
        }
    }
}

pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        // OCR endpoints
        .route("/v1/ocr/text", post(ocr_text_handler))
        .route("/v1/ocr/regions", post(ocr_regions_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(config: &AppConfig, state: AppState) -> anyhow::Result<()> {
    let app = router(state, config.max_body_bytes);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION_NUMBER.to_string(),
        engine: state.engine_version.to_string(),
    })
}

async fn version_handler() -> Json<serde_json::Value> {
    Json(get_version_info())
}
