// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR request types and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Maximum image size (10MB base64 encoded)
const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

fn default_granularity() -> String {
    "word".to_string()
}

/// Request for plain text extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrTextRequest {
    /// Base64-encoded PNG or JPEG
    #[serde(default)]
    pub image: Option<String>,

    /// Original upload name
    #[serde(default)]
    pub file_name: Option<String>,
}

/// Request for bounding box detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrRegionsRequest {
    /// Base64-encoded PNG or JPEG
    #[serde(default)]
    pub image: Option<String>,

    /// word, line, paragraph, block or page
    #[serde(default = "default_granularity")]
    pub granularity: String,

    /// Original upload name, used to name the downloads
    #[serde(default)]
    pub file_name: Option<String>,
}

impl OcrTextRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_image(self.image.as_deref())?;
        validate_file_name(self.file_name.as_deref())
    }
}

impl OcrRegionsRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_image(self.image.as_deref())?;
        validate_file_name(self.file_name.as_deref())
    }
}

fn validate_image(image: Option<&str>) -> Result<(), ApiError> {
    let image = image.unwrap_or_default();
    if image.is_empty() {
        return Err(ApiError::ValidationError {
            field: "image".to_string(),
            message: "image is required".to_string(),
        });
    }

    if image.len() > MAX_IMAGE_SIZE {
        return Err(ApiError::ValidationError {
            field: "image".to_string(),
            message: format!("image exceeds maximum size of {} bytes", MAX_IMAGE_SIZE),
        });
    }

    Ok(())
}

fn validate_file_name(file_name: Option<&str>) -> Result<(), ApiError> {
    match file_name {
        // Names end up in a download attribute
        Some(name) if name.trim().is_empty() || name.contains(['/', '\\', '"', '<', '>']) => {
            Err(ApiError::ValidationError {
                field: "fileName".to_string(),
                message: format!("invalid file name '{}'", name),
            })
        }
        _ => Ok(()),
    }
}
