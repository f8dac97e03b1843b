// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Grouping of flat OCR token rows into regions
//!
//! The engine emits a page row, then block rows, paragraph rows, line rows
//! and word rows, repeated for each nested structure. A region at a coarser
//! granularity is opened by a row at the target level and grows with every
//! finer row that follows until the next target-level row.

use super::token::{Granularity, Region, Token};

/// Aggregate `tokens` into regions at `granularity`, in discovery order.
pub fn aggregate(tokens: &[Token], granularity: Granularity) -> Vec<Region> {
    match granularity {
        Granularity::Word => word_regions(tokens),
        _ => merged_regions(tokens, granularity.level()),
    }
}

fn word_regions(tokens: &[Token]) -> Vec<Region> {
    tokens
        .iter()
        .filter(|token| token.confidence > 0 && !token.text.trim().is_empty())
        .map(|token| Region {
            confidence: Some(token.confidence),
            ..Region::from_token(token)
        })
        .collect()
}

fn merged_regions(tokens: &[Token], target_level: u8) -> Vec<Region> {
    let mut regions = Vec::new();
    let mut current: Option<Region> = None;

    for token in tokens {
        if token.level == target_level {
            if let Some(done) = current.take().filter(Region::has_text) {
                regions.push(done);
            }
            current = Some(Region::from_token(token));
        } else if token.level > target_level {
            // x_min/y_min stay pinned to the opening row
            if let Some(region) = current.as_mut() {
                region.text.push(' ');
                region.text.push_str(&token.text);
                region.x_max = region.x_max.max(token.right());
                region.y_max = region.y_max.max(token.bottom());
            }
        }
    }

    if let Some(done) = current.filter(Region::has_text) {
        regions.push(done);
    }

    regions
}
