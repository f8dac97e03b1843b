// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR response types

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::vision::ocr::service::{RegionDetection, TextExtraction};
use crate::vision::ocr::{Granularity, Region};
use crate::vision::{
    annotated_file_name, image_download_link, report_file_name, segments_title,
    EXTRACTED_TEXT_FILE_NAME,
};

/// Response from text extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrTextResponse {
    /// Trimmed full-image transcription
    pub text: String,
    /// Suggested download name for the text
    pub file_name: String,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl From<TextExtraction> for OcrTextResponse {
    fn from(extraction: TextExtraction) -> Self {
        Self {
            text: extraction.text,
            file_name: EXTRACTED_TEXT_FILE_NAME.to_string(),
            processing_time_ms: extraction.processing_time_ms,
        }
    }
}

/// Response from bounding box detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrRegionsResponse {
    pub granularity: Granularity,
    /// Heading for the segment listing
    pub title: String,
    pub regions: Vec<Region>,
    pub count: usize,
    /// Plain-text segment report
    pub report: String,
    pub report_file_name: String,
    /// Base64 PNG of the image with region outlines
    pub annotated_image: String,
    pub annotated_file_name: String,
    /// HTML anchor that downloads the annotated image
    pub download_link: String,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl OcrRegionsResponse {
    pub fn new(detection: RegionDetection, upload_name: &str) -> Self {
        let annotated_name = annotated_file_name(upload_name);
        let download_link = image_download_link(&detection.annotated_png, &annotated_name);

        Self {
            granularity: detection.granularity,
            title: segments_title(detection.granularity),
            count: detection.regions.len(),
            regions: detection.regions,
            report: detection.report,
            report_file_name: report_file_name(upload_name),
            annotated_image: STANDARD.encode(&detection.annotated_png),
            annotated_file_name: annotated_name,
            download_link,
            processing_time_ms: detection.processing_time_ms,
        }
    }
}

/// Response for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// OCR engine version reported at startup
    pub engine: String,
}
