// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration from command-line flags and environment variables

use std::net::{IpAddr, SocketAddr};

use anyhow::{anyhow, Result};
use clap::Parser;

use crate::vision::ocr::TesseractConfig;

/// Default request body limit (16MB), enough for a base64 encoded 10MB image
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// OCR Text & Bounding Box Extractor
#[derive(Parser, Debug, Clone)]
#[command(name = "ocr-bbox-extractor")]
#[command(version)]
#[command(about = "Extract text and bounding boxes from images with Tesseract", long_about = None)]
pub struct AppConfig {
    /// Address to bind the HTTP server to
    #[arg(long, env = "OCR_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port for the HTTP server
    #[arg(long, env = "OCR_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Tesseract executable name or path
    #[arg(long, env = "TESSERACT_CMD", default_value = "tesseract")]
    pub tesseract_cmd: String,

    /// Tesseract language pack(s), e.g. "eng" or "eng+deu"
    #[arg(long, env = "OCR_LANG", default_value = "eng")]
    pub lang: String,

    /// Maximum accepted request body in bytes
    #[arg(long, env = "OCR_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(anyhow!("port must be non-zero"));
        }
        if self.tesseract_cmd.trim().is_empty() {
            return Err(anyhow!("tesseract command must not be empty"));
        }
        if self.lang.trim().is_empty() {
            return Err(anyhow!("OCR language must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max body size must be non-zero"));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn tesseract(&self) -> TesseractConfig {
        TesseractConfig {
            command: self.tesseract_cmd.clone(),
            language: self.lang.clone(),
        }
    }
}
