// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tesseract CLI adapter
//!
//! Each call writes the image to a scratch PNG and runs the `tesseract`
//! executable against it, either for plain text or for the TSV token table.

use std::io;
use std::path::Path;
use std::process::Command;

use image::{DynamicImage, ImageFormat};
use tracing::{debug, warn};

use super::engine::{OcrEngine, OcrError};
use super::token::{Granularity, Token};

/// OCR engine mode passed to every invocation (default LSTM/legacy selection)
const ENGINE_MODE: u8 = 3;

/// Minimum column count of a TSV row; the 12th (text) column may be absent
const TSV_MIN_COLUMNS: usize = 11;

#[derive(Debug, Clone)]
pub struct TesseractConfig {
    /// Executable name or path
    pub command: String,
    /// Language pack(s), e.g. "eng" or "eng+deu"
    pub language: String,
}

impl Default for TesseractConfig {
    fn default() -> Self {
        Self {
            command: "tesseract".to_string(),
            language: "eng".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TesseractEngine {
    config: TesseractConfig,
}

impl TesseractEngine {
    pub fn new(config: TesseractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TesseractConfig {
        &self.config
    }

    /// First line of `tesseract --version`, e.g. "tesseract 5.3.0"
    pub fn version(&self) -> Result<String, OcrError> {
        let output = Command::new(&self.config.command)
            .arg("--version")
            .output()
            .map_err(|e| self.unavailable(e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Engine(stderr.trim().to_string()));
        }

        // Older releases print the banner on stderr
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        stdout
            .lines()
            .chain(stderr.lines())
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .ok_or_else(|| OcrError::MalformedOutput("empty version output".to_string()))
    }

    fn run(&self, image: &DynamicImage, extra_args: &[String]) -> Result<String, OcrError> {
        let mut scratch = tempfile::Builder::new()
            .prefix("ocr-input-")
            .suffix(".png")
            .tempfile()?;
        image
            .write_to(scratch.as_file_mut(), ImageFormat::Png)
            .map_err(io::Error::other)?;

        self.invoke(scratch.path(), extra_args)
    }

    fn invoke(&self, path: &Path, extra_args: &[String]) -> Result<String, OcrError> {
        debug!(
            "Running {} on {} with {:?}",
            self.config.command,
            path.display(),
            extra_args
        );

        let output = Command::new(&self.config.command)
            .arg(path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.language)
            .arg("--oem")
            .arg(ENGINE_MODE.to_string())
            .args(extra_args)
            .output()
            .map_err(|e| self.unavailable(e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("tesseract exited with {}: {}", output.status, stderr.trim());
            return Err(OcrError::Engine(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn unavailable(&self, err: io::Error) -> OcrError {
        OcrError::Unavailable(format!(
            "failed to run '{}' (is Tesseract installed?): {}",
            self.config.command, err
        ))
    }
}

impl OcrEngine for TesseractEngine {
    fn transcribe(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let text = self.run(image, &[])?;
        Ok(text.trim().to_string())
    }

    fn tokenize(
        &self,
        image: &DynamicImage,
        granularity: Granularity,
    ) -> Result<Vec<Token>, OcrError> {
        let args = [
            "--psm".to_string(),
            granularity.page_segmentation_mode().to_string(),
            "tsv".to_string(),
        ];
        let tsv = self.run(image, &args)?;
        parse_tsv(&tsv)
    }
}

/// Parse Tesseract's TSV output into tokens, preserving row order.
///
/// Columns: level, page_num, block_num, par_num, line_num, word_num, left,
/// top, width, height, conf, text. The header row is skipped.
pub fn parse_tsv(tsv: &str) -> Result<Vec<Token>, OcrError> {
    let mut tokens = Vec::new();

    for (idx, row) in tsv.lines().enumerate().skip(1) {
        let row = row.trim_end_matches('\r');
        if row.trim().is_empty() {
            continue;
        }

        let cols: Vec<&str> = row.splitn(12, '\t').collect();
        if cols.len() < TSV_MIN_COLUMNS {
            return Err(OcrError::MalformedOutput(format!(
                "row {} has {} columns, expected at least {}",
                idx + 1,
                cols.len(),
                TSV_MIN_COLUMNS
            )));
        }

        let int = |col: usize| -> Result<i32, OcrError> {
            cols[col].trim().parse::<i32>().map_err(|e| {
                OcrError::MalformedOutput(format!("row {} column {}: {}", idx + 1, col + 1, e))
            })
        };

        let level = u8::try_from(int(0)?).map_err(|e| {
            OcrError::MalformedOutput(format!("row {} level: {}", idx + 1, e))
        })?;
        let confidence = cols[10].trim().parse::<f32>().map_err(|e| {
            OcrError::MalformedOutput(format!("row {} confidence: {}", idx + 1, e))
        })?;

        tokens.push(Token {
            level,
            x: int(6)?,
            y: int(7)?,
            width: int(8)?,
            height: int(9)?,
            text: cols.get(11).copied().unwrap_or_default().to_string(),
            confidence: confidence.trunc() as i32,
        });
    }

    Ok(tokens)
}
