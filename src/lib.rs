// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod version;
pub mod vision;

pub use config::AppConfig;
pub use vision::ocr::{
    aggregate, ConfigError, Granularity, OcrEngine, OcrError, OcrService, Region, TesseractEngine,
    Token,
};
