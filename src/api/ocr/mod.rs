// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR API endpoint module
//!
//! Provides POST /v1/ocr/text and POST /v1/ocr/regions.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{ocr_regions_handler, ocr_text_handler};
pub use request::{OcrRegionsRequest, OcrTextRequest};
pub use response::{HealthResponse, OcrRegionsResponse, OcrTextResponse};
