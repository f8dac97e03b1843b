// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR endpoint handlers

use axum::{extract::State, Json};
use tracing::{debug, warn};

use super::request::{OcrRegionsRequest, OcrTextRequest};
use super::response::{OcrRegionsResponse, OcrTextResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::vision::image_utils::format_to_extension;
use crate::vision::{decode_base64_image, ImageInfo};

/// POST /v1/ocr/text - Extract plain text from an image
///
/// # Request
/// - `image`: Base64-encoded PNG or JPEG (required)
/// - `fileName`: Original upload name (optional)
///
/// # Response
/// - `text`: Trimmed transcription, empty when nothing was recognized
/// - `fileName`: Suggested download name ("extracted_text.txt")
/// - `processingTimeMs`: Engine time in milliseconds
///
/// # Errors
/// - 400 Bad Request: Missing, oversized or undecodable image
/// - 503 Service Unavailable: Tesseract could not be started
/// - 500 Internal Server Error: Tesseract failed
pub async fn ocr_text_handler(
    State(state): State<AppState>,
    Json(request): Json<OcrTextRequest>,
) -> Result<Json<OcrTextResponse>, ApiError> {
    request.validate().inspect_err(|e| warn!("OCR text validation failed: {}", e))?;

    let (image, info) = decode_upload(request.image.as_deref())?;

    let service = state.ocr_service.clone();
    let extraction = tokio::task::spawn_blocking(move || service.extract_text(&image))
        .await
        .map_err(|e| ApiError::InternalError(format!("OCR task failed: {}", e)))?
        .inspect_err(|e| {
            warn!(
                "Text extraction failed for {}x{} image: {}",
                info.width, info.height, e
            )
        })?;

    Ok(Json(extraction.into()))
}

/// POST /v1/ocr/regions - Detect text regions and annotate the image
///
/// # Request
/// - `image`: Base64-encoded PNG or JPEG (required)
/// - `granularity`: word, line, paragraph, block or page - defaults to "word"
/// - `fileName`: Original upload name, used to name the downloads (optional)
///
/// # Response
/// - `regions`: Boxes with merged text (`confidence` only for words)
/// - `report`: Plain-text segment listing
/// - `annotatedImage`: Base64 PNG with region outlines
/// - `downloadLink`: HTML anchor for the annotated image
///
/// # Errors
/// - 400 Bad Request: Invalid image or unrecognized granularity
/// - 503 Service Unavailable: Tesseract could not be started
/// - 500 Internal Server Error: Tesseract or encoding failed
pub async fn ocr_regions_handler(
    State(state): State<AppState>,
    Json(request): Json<OcrRegionsRequest>,
) -> Result<Json<OcrRegionsResponse>, ApiError> {
    debug!("OCR regions request, granularity: {}", request.granularity);

    request.validate().inspect_err(|e| warn!("OCR regions validation failed: {}", e))?;

    let (image, info) = decode_upload(request.image.as_deref())?;
    let upload_name = request
        .file_name
        .clone()
        .unwrap_or_else(|| format!("image.{}", format_to_extension(info.format)));

    let service = state.ocr_service.clone();
    let granularity = request.granularity;
    let detection =
        tokio::task::spawn_blocking(move || service.detect_regions(&image, &granularity))
            .await
            .map_err(|e| ApiError::InternalError(format!("OCR task failed: {}", e)))?
            .inspect_err(|e| warn!("Region detection failed: {}", e))?;

    Ok(Json(OcrRegionsResponse::new(detection, &upload_name)))
}

fn decode_upload(image: Option<&str>) -> Result<(image::DynamicImage, ImageInfo), ApiError> {
    let (image, info) = decode_base64_image(image.unwrap_or_default()).inspect_err(|e| {
        warn!("Failed to decode image: {}", e);
    })?;

    debug!(
        "Decoded image: {}x{}, {} bytes",
        info.width, info.height, info.size_bytes
    );

    Ok((image, info))
}
