//! FreeType-backed glyph rasterization.

use super::{GlyphRasterSource, RawGlyphBitmap};
use anyhow::{Context, Result};
use freetype::face::LoadFlag;
use freetype::{Face, Library};
use std::path::Path;

/// Rasterizes glyphs from one font face at one pixel size.
///
/// The face handle is acquired for the duration of one compilation pass and
/// released when this value drops, on every exit path.
pub struct FreeTypeRasterizer {
    face: Face,
}

impl FreeTypeRasterizer {
    /// Open `font_path` and scale it to `pixel_size`.
    pub fn new(font_path: &Path, pixel_size: u32) -> Result<Self> {
        let library = Library::init().context("failed to initialize FreeType")?;
        let face = library
            .new_face(font_path, 0)
            .with_context(|| format!("failed to open font {}", font_path.display()))?;
        face.set_pixel_sizes(0, pixel_size)
            .with_context(|| format!("failed to scale face to {pixel_size}px"))?;
        Ok(Self { face })
    }
}

impl GlyphRasterSource for FreeTypeRasterizer {
    fn rasterize(&self, codepoint: char) -> Result<Option<RawGlyphBitmap>> {
        // Char index 0 is .notdef: no glyph for this codepoint.
        let Some(glyph_index) = self.face.get_char_index(codepoint as usize) else {
            return Ok(None);
        };

        self.face
            .load_glyph(glyph_index, LoadFlag::RENDER | LoadFlag::TARGET_MONO)
            .with_context(|| format!("failed to render U+{:04X}", codepoint as u32))?;

        let slot = self.face.glyph();
        let bitmap = slot.bitmap();
        Ok(Some(RawGlyphBitmap {
            width_px: bitmap.width() as u32,
            height_px: bitmap.rows() as u32,
            pitch_bytes: bitmap.pitch().unsigned_abs(),
            pixel_data: bitmap.buffer().to_vec(),
            bearing_left_px: slot.bitmap_left(),
            bearing_top_px: slot.bitmap_top(),
            advance_26_6: slot.advance().x as i32,
        }))
    }

    fn line_height_26_6(&self) -> i32 {
        self.face
            .size_metrics()
            .map(|metrics| metrics.height as i32)
            .unwrap_or(0)
    }
}
