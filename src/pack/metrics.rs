//! Per-glyph drawing metrics and the per-pass line height.

use crate::rasterize::RawGlyphBitmap;

/// Drawing offsets and advance for one glyph, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphPlacement {
    pub offset_x: i32,
    pub offset_y: i32,
    pub advance_px: i32,
}

/// Derive placement from one glyph's rasterizer metrics.
///
/// `offset_y` negates the upward-positive bearing so the glyph top lands the
/// right number of pixels above the cursor in a downward-increasing
/// coordinate system. The 26.6 advance is floor-divided by 64: `div_euclid`
/// floors toward negative infinity, matching the arithmetic shift the
/// existing assets were generated with, including for negative advances.
pub fn placement(raster: &RawGlyphBitmap) -> GlyphPlacement {
    GlyphPlacement {
        offset_x: raster.bearing_left_px,
        offset_y: -raster.bearing_top_px,
        advance_px: raster.advance_26_6.div_euclid(64),
    }
}

/// Per-pass line height in whole pixels.
///
/// Computed once per pixel-size pass from the face-wide 26.6 metric. When
/// that degenerates to zero the fallback `size_px + 2` keeps the line height
/// positive.
pub fn line_height_px(global_line_height_26_6: i32, size_px: u32) -> u32 {
    let height = global_line_height_26_6.div_euclid(64);
    if height <= 0 {
        size_px + 2
    } else {
        height as u32
    }
}
