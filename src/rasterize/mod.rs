//! Glyph rasterization boundary.
//!
//! The compiler core consumes rasters through the [`GlyphRasterSource`]
//! trait; the FreeType backend behind it is the only piece that touches a
//! real font file. Keeping the seam here lets pipeline tests run against an
//! in-memory source with no font on disk.

pub mod freetype;

use anyhow::Result;

/// One glyph's monochrome raster and metrics, as handed over by the
/// rasterizer.
///
/// Values are transient: they live for one glyph's processing and are not
/// part of the compiled asset. `pixel_data` rows start at byte-aligned
/// offsets and are padded to `pitch_bytes`, which is independent of
/// `width_px`.
#[derive(Debug, Clone)]
pub struct RawGlyphBitmap {
    pub width_px: u32,
    pub height_px: u32,
    /// Bytes per source row, row padding included.
    pub pitch_bytes: u32,
    /// Row-major pixels, MSB-first within each byte.
    pub pixel_data: Vec<u8>,
    /// Horizontal distance from the glyph origin to the bitmap's left edge.
    pub bearing_left_px: i32,
    /// Distance from the baseline to the bitmap's top edge, upward-positive.
    pub bearing_top_px: i32,
    /// Horizontal advance in 26.6 fixed point.
    pub advance_26_6: i32,
}

/// A source of monochrome glyph rasters at one fixed pixel size.
pub trait GlyphRasterSource {
    /// Rasterize one codepoint.
    ///
    /// `Ok(None)` means the face has no glyph for this codepoint; the caller
    /// must skip it entirely rather than substitute a placeholder.
    fn rasterize(&self, codepoint: char) -> Result<Option<RawGlyphBitmap>>;

    /// Face-wide line height in 26.6 fixed point.
    ///
    /// Always reported directly by the source; callers never probe
    /// alternative metrics paths.
    fn line_height_26_6(&self) -> i32;
}
