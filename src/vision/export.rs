// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Downloadable payloads: annotated PNG, segment report, file names

use std::fmt::Write as _;
use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat};

use crate::vision::ocr::{Granularity, Region};

pub const EXTRACTED_TEXT_FILE_NAME: &str = "extracted_text.txt";

/// Encode an image as PNG bytes
pub fn encode_image(image: &DynamicImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// One block per region with its 1-based index, text and corners.
///
/// Regions with blank text are left out but still consume an index.
pub fn encode_report(regions: &[Region]) -> String {
    let mut report = String::new();

    for (i, region) in regions.iter().enumerate() {
        if !region.has_text() {
            continue;
        }

        let confidence_info = region
            .confidence
            .map(|c| format!(" (Confidence: {}%)", c))
            .unwrap_or_default();

        if !report.is_empty() {
            report.push('\n');
        }
        // Writing to a String cannot fail
        let _ = write!(
            report,
            "Segment {}:\n- Text: {}\n- Position: ({}, {}) to ({}, {}){}\n",
            i + 1,
            region.text,
            region.x_min,
            region.y_min,
            region.x_max,
            region.y_max,
            confidence_info
        );
    }

    report
}

/// HTML anchor that downloads the PNG-encoded image via a data URI
pub fn image_download_link(png: &[u8], filename: &str) -> String {
    format!(
        "<a href=\"data:image/png;base64,{}\" download=\"{}\">Download Annotated Image</a>",
        STANDARD.encode(png),
        filename
    )
}

pub fn annotated_file_name(upload_name: &str) -> String {
    format!("annotated_{}", upload_name)
}

pub fn report_file_name(upload_name: &str) -> String {
    format!("segments_{}.txt", upload_name)
}

/// Heading shown above a region listing, e.g. "Detected Line Segments"
pub fn segments_title(granularity: Granularity) -> String {
    format!("Detected {} Segments", granularity.title())
}
