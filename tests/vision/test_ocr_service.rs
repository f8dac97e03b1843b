// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! OcrService pipeline tests with a scripted engine

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use ocr_bbox_extractor::vision::ocr::{
    Granularity, OcrEngine, OcrError, OcrService, ServiceError, Token,
};
use ocr_bbox_extractor::vision::overlay::{GREEN, RED, YELLOW};

struct ScriptedEngine {
    tokens: Vec<Token>,
    tokenize_calls: AtomicUsize,
    last_granularity: Mutex<Option<Granularity>>,
}

impl ScriptedEngine {
    fn new(tokens: Vec<Token>) -> Arc<Self> {
        Arc::new(Self {
            tokens,
            tokenize_calls: AtomicUsize::new(0),
            last_granularity: Mutex::new(None),
        })
    }
}

impl OcrEngine for ScriptedEngine {
    fn transcribe(&self, _image: &DynamicImage) -> Result<String, OcrError> {
        Ok("Hello World".to_string())
    }

    fn tokenize(
        &self,
        _image: &DynamicImage,
        granularity: Granularity,
    ) -> Result<Vec<Token>, OcrError> {
        self.tokenize_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_granularity.lock().unwrap() = Some(granularity);
        Ok(self.tokens.clone())
    }
}

fn token(level: u8, text: &str, x: i32, y: i32, w: i32, h: i32, conf: i32) -> Token {
    Token {
        level,
        x,
        y,
        width: w,
        height: h,
        text: text.to_string(),
        confidence: conf,
    }
}

fn page_tokens() -> Vec<Token> {
    vec![
        token(1, "", 0, 0, 100, 60, -1),
        token(2, "", 5, 5, 90, 50, -1),
        token(3, "", 5, 5, 90, 50, -1),
        token(4, "", 5, 5, 90, 20, -1),
        token(5, "sure", 5, 5, 30, 20, 91),
        token(5, "maybe", 40, 5, 25, 20, 60),
        token(5, "doubt", 70, 5, 20, 20, 30),
        token(4, "", 5, 35, 40, 20, -1),
        token(5, "", 5, 35, 40, 20, -1),
    ]
}

fn white(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([255, 255, 255, 255]),
    ))
}

#[test]
fn test_word_outlines_follow_confidence() {
    let engine = ScriptedEngine::new(page_tokens());
    let service = OcrService::new(engine.clone());
    let source = white(100, 60);

    let detection = service.detect_regions(&source, "word").unwrap();
    assert_eq!(detection.regions.len(), 3);
    assert_eq!(*engine.last_granularity.lock().unwrap(), Some(Granularity::Word));

    let annotated = image::load_from_memory(&detection.annotated_png).unwrap();
    assert_eq!(annotated.dimensions(), (100, 60));
    assert_eq!(annotated.get_pixel(5, 5), GREEN);
    assert_eq!(annotated.get_pixel(40, 5), YELLOW);
    assert_eq!(annotated.get_pixel(70, 5), RED);

    // Inputs are never modified
    assert_eq!(source.get_pixel(5, 5), Rgba([255, 255, 255, 255]));
}

#[test]
fn test_line_report_skips_blank_lines() {
    let engine = ScriptedEngine::new(page_tokens());
    let service = OcrService::new(engine);

    let detection = service.detect_regions(&white(100, 60), "Line").unwrap();
    assert_eq!(detection.granularity, Granularity::Line);
    assert_eq!(detection.regions.len(), 1);
    assert_eq!(detection.regions[0].text, " sure maybe doubt");
    assert!(detection.report.starts_with("Segment 1:\n- Text:  sure maybe doubt\n"));
    assert!(!detection.report.contains("Segment 2"));
}

#[test]
fn test_unknown_granularity_skips_engine() {
    let engine = ScriptedEngine::new(page_tokens());
    let service = OcrService::new(engine.clone());

    for bad in ["sentence", "", "words"] {
        let err = service.detect_regions(&white(10, 10), bad).unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)), "{:?}", err);
    }
    assert_eq!(engine.tokenize_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_repeat_requests_are_identical() {
    let engine = ScriptedEngine::new(page_tokens());
    let service = OcrService::new(engine.clone());
    let image = white(100, 60);

    let first = service.detect_regions(&image, "block").unwrap();
    let second = service.detect_regions(&image, "block").unwrap();
    assert_eq!(first.regions, second.regions);
    assert_eq!(first.report, second.report);
    assert_eq!(first.annotated_png, second.annotated_png);
    assert_eq!(engine.tokenize_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_extract_text() {
    let service = OcrService::new(ScriptedEngine::new(Vec::new()));
    let extraction = service.extract_text(&white(4, 4)).unwrap();
    assert_eq!(extraction.text, "Hello World");
}
