// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use image::DynamicImage;
use thiserror::Error;

use super::token::{Granularity, Token};

/// Failures reported by the external OCR engine
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("OCR engine unavailable: {0}")]
    Unavailable(String),

    #[error("OCR engine failed: {0}")]
    Engine(String),

    #[error("OCR engine produced malformed output: {0}")]
    MalformedOutput(String),

    #[error("OCR I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Caller supplied an invalid option
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unrecognized granularity '{0}', expected one of: word, line, paragraph, block, page")]
    UnknownGranularity(String),
}

/// External OCR capability
///
/// Implementations block for the duration of the engine call and must not
/// mutate the input image.
#[cfg_attr(test, mockall::automock)]
pub trait OcrEngine: Send + Sync {
    /// Full-image transcription, trimmed of surrounding whitespace
    fn transcribe(&self, image: &DynamicImage) -> Result<String, OcrError>;

    /// Flat token table in the engine's emission order
    fn tokenize(
        &self,
        image: &DynamicImage,
        granularity: Granularity,
    ) -> Result<Vec<Token>, OcrError>;
}
