// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tesseract-backed OCR and region aggregation
//!
//! Components:
//! - `token` - Token records, granularity levels and region boxes
//! - `engine` - The OCR engine seam and its error types
//! - `tesseract` - Engine implementation that shells out to the Tesseract CLI
//! - `aggregate` - Groups flat token rows into regions at a granularity
//! - `service` - Per-request pipeline combining engine, aggregation and export

pub mod aggregate;
pub mod engine;
pub mod service;
pub mod tesseract;
pub mod token;

pub use aggregate::aggregate;
pub use engine::{ConfigError, OcrEngine, OcrError};
pub use service::{OcrService, RegionDetection, ServiceError, TextExtraction};
pub use tesseract::{parse_tsv, TesseractConfig, TesseractEngine};
pub use token::{Granularity, Region, Token};
