// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Token and region types shared by the OCR engine and the aggregator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::engine::ConfigError;

/// One row of the engine's token table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Hierarchy depth: 1=page, 2=block, 3=paragraph, 4=line, 5=word
    pub level: u8,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Recognized fragment, empty for structural rows
    pub text: String,
    /// Word confidence 0-100, -1 for non-text rows
    pub confidence: i32,
}

impl Token {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// An aggregated bounding box at a requested granularity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
    pub text: String,
    /// Only set for word granularity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<i32>,
}

impl Region {
    /// Region covering a single token's box, carrying its own text
    pub fn from_token(token: &Token) -> Self {
        Self {
            x_min: token.x,
            y_min: token.y,
            x_max: token.right(),
            y_max: token.bottom(),
            text: token.text.clone(),
            confidence: None,
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }
}

/// Requested aggregation level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Word,
    Line,
    Paragraph,
    Block,
    Page,
}

impl Granularity {
    pub const ALL: [Granularity; 5] = [
        Granularity::Word,
        Granularity::Line,
        Granularity::Paragraph,
        Granularity::Block,
        Granularity::Page,
    ];

    /// Hierarchy level of the token rows this granularity targets
    pub fn level(self) -> u8 {
        match self {
            Granularity::Word => 5,
            Granularity::Line => 4,
            Granularity::Paragraph => 3,
            Granularity::Block => 2,
            Granularity::Page => 1,
        }
    }

    /// Tesseract page segmentation mode used when tokenizing
    pub fn page_segmentation_mode(self) -> u8 {
        match self {
            Granularity::Line => 6,
            Granularity::Paragraph => 4,
            Granularity::Word | Granularity::Block | Granularity::Page => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Word => "word",
            Granularity::Line => "line",
            Granularity::Paragraph => "paragraph",
            Granularity::Block => "block",
            Granularity::Page => "page",
        }
    }

    /// Capitalized name for headings, e.g. "Paragraph"
    pub fn title(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "word" => Ok(Granularity::Word),
            "line" => Ok(Granularity::Line),
            "paragraph" => Ok(Granularity::Paragraph),
            "block" => Ok(Granularity::Block),
            "page" => Ok(Granularity::Page),
            _ => Err(ConfigError::UnknownGranularity(s.to_string())),
        }
    }
}
