// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use ocr_bbox_extractor::{
    api::{start_server, AppState},
    config::AppConfig,
    version,
    vision::ocr::TesseractEngine,
};
use std::{env, sync::Arc};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = AppConfig::parse();
    config.validate().context("invalid configuration")?;

    println!("📝 Starting {}", version::get_version_string());

    // Tesseract must be reachable before we accept uploads
    let engine = TesseractEngine::new(config.tesseract());
    let engine_version = engine
        .version()
        .with_context(|| format!("Tesseract check failed for '{}'", config.tesseract_cmd))?;
    info!("✅ {} (language: {})", engine_version, config.lang);

    let state = AppState::new(Arc::new(engine), &engine_version);
    start_server(&config, state).await
}
