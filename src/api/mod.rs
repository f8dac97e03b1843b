// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod http_server;
pub mod ocr;

pub use errors::{ApiError, ErrorResponse};
pub use http_server::{router, start_server, AppState};
pub use ocr::{
    ocr_regions_handler, ocr_text_handler, HealthResponse, OcrRegionsRequest, OcrRegionsResponse,
    OcrTextRequest, OcrTextResponse,
};
