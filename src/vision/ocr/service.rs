// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-request OCR pipeline
//!
//! Text path: engine transcription only. Region path: granularity check,
//! engine tokenization, aggregation, overlay and export.

use std::sync::Arc;
use std::time::Instant;

use image::DynamicImage;
use thiserror::Error;
use tracing::{debug, info};

use super::aggregate::aggregate;
use super::engine::{ConfigError, OcrEngine, OcrError};
use super::token::{Granularity, Region};
use crate::vision::{export, overlay};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ocr(#[from] OcrError),

    #[error("Failed to encode annotated image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Everything produced by one region-detection request
#[derive(Debug, Clone)]
pub struct RegionDetection {
    pub granularity: Granularity,
    pub regions: Vec<Region>,
    /// PNG bytes of the source image with region outlines
    pub annotated_png: Vec<u8>,
    /// Human-readable segment listing
    pub report: String,
    pub processing_time_ms: u64,
}

/// Result of a text-extraction request
#[derive(Debug, Clone)]
pub struct TextExtraction {
    pub text: String,
    pub processing_time_ms: u64,
}

#[derive(Clone)]
pub struct OcrService {
    engine: Arc<dyn OcrEngine>,
}

impl OcrService {
    pub fn new(engine: Arc<dyn OcrEngine>) -> Self {
        Self { engine }
    }

    pub fn extract_text(&self, image: &DynamicImage) -> Result<TextExtraction, ServiceError> {
        let start = Instant::now();
        let text = self.engine.transcribe(image)?;
        let processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            "Text extraction complete: {} chars, {}ms",
            text.len(),
            processing_time_ms
        );

        Ok(TextExtraction {
            text,
            processing_time_ms,
        })
    }

    /// Detect regions at `granularity` (one of word, line, paragraph, block,
    /// page). An unrecognized granularity fails before the engine is called.
    pub fn detect_regions(
        &self,
        image: &DynamicImage,
        granularity: &str,
    ) -> Result<RegionDetection, ServiceError> {
        let granularity: Granularity = granularity.parse()?;
        let start = Instant::now();

        let tokens = self.engine.tokenize(image, granularity)?;
        debug!("Engine returned {} token rows", tokens.len());

        let regions = aggregate(&tokens, granularity);
        let annotated = overlay::render(image, &regions);
        let annotated_png = export::encode_image(&annotated)?;
        let report = export::encode_report(&regions);
        let processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            "Region detection complete: {} {} regions, {}ms",
            regions.len(),
            granularity,
            processing_time_ms
        );

        Ok(RegionDetection {
            granularity,
            regions,
            annotated_png,
            report,
            processing_time_ms,
        })
    }
}
