// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Region outlines drawn over a copy of the source image

use image::{DynamicImage, Rgba};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::vision::ocr::Region;

/// Outline width in pixels, grown inward from the region edge
pub const OUTLINE_WIDTH: u32 = 2;

pub const GREEN: Rgba<u8> = Rgba([0, 128, 0, 255]);
pub const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Color used for regions without a confidence score
pub const DEFAULT_COLOR: Rgba<u8> = RED;

/// Outline color for a region, keyed to confidence when present
pub fn outline_color(region: &Region) -> Rgba<u8> {
    match region.confidence {
        Some(c) if c >= 80 => GREEN,
        Some(c) if c >= 50 => YELLOW,
        Some(_) => RED,
        None => DEFAULT_COLOR,
    }
}

/// Return a new RGBA image with an outline for every region.
pub fn render(image: &DynamicImage, regions: &[Region]) -> DynamicImage {
    let mut canvas = image.to_rgba8();

    for region in regions {
        let color = outline_color(region);
        // Inclusive pixel span on both axes
        let width = (region.x_max - region.x_min + 1).max(1) as u32;
        let height = (region.y_max - region.y_min + 1).max(1) as u32;

        for inset in 0..OUTLINE_WIDTH {
            let w = width.saturating_sub(2 * inset);
            let h = height.saturating_sub(2 * inset);
            if w == 0 || h == 0 {
                break;
            }
            let rect = Rect::at(region.x_min + inset as i32, region.y_min + inset as i32).of_size(w, h);
            draw_hollow_rect_mut(&mut canvas, rect, color);
        }
    }

    DynamicImage::ImageRgba8(canvas)
}
