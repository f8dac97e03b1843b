// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision processing module for image text extraction
//!
//! This module provides:
//! - Image loading and format sniffing for uploads
//! - OCR via an external engine (Tesseract) and region aggregation
//! - Overlay rendering of detected regions
//! - Export of annotated images and region reports

pub mod export;
pub mod image_utils;
pub mod ocr;
pub mod overlay;

pub use export::{
    annotated_file_name, encode_image, encode_report, image_download_link, report_file_name,
    segments_title, EXTRACTED_TEXT_FILE_NAME,
};
pub use image_utils::{decode_base64_image, decode_image_bytes, detect_format, ImageError, ImageInfo};
pub use overlay::{outline_color, render};
