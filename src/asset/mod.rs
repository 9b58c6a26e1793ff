//! Compiled font asset model.
//!
//! One `FontAsset` is built per (font file, pixel size) pass, is immutable
//! once built, and is handed to an emitter as-is.

/// One glyph's packed bitmap and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedGlyph {
    /// Big-endian UTF-8 lookup key, unique within an asset.
    pub codepoint_key: u32,
    pub width_px: u32,
    pub height_px: u32,
    /// Continuous MSB-first bitstream, `ceil(width*height/8)` bytes.
    pub packed_bits: Vec<u8>,
    pub offset_x: i32,
    pub offset_y: i32,
    pub advance_px: i32,
}

/// One compiled font at one pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAsset {
    pub size_px: u32,
    /// Always positive; see the metrics fallback.
    pub line_height_px: u32,
    /// Survivors only, in repertoire enumeration order.
    pub glyphs: Vec<PackedGlyph>,
}

/// Accumulates the surviving glyphs of one compilation pass.
///
/// Pure aggregation: glyphs are kept in the order they are pushed, never
/// synthesized, reordered, or deduplicated.
pub struct FontAssetBuilder {
    size_px: u32,
    line_height_px: u32,
    glyphs: Vec<PackedGlyph>,
}

impl FontAssetBuilder {
    pub fn new(size_px: u32, line_height_px: u32) -> Self {
        Self {
            size_px,
            line_height_px,
            glyphs: Vec::new(),
        }
    }

    /// Append the next surviving glyph.
    pub fn push(&mut self, glyph: PackedGlyph) {
        self.glyphs.push(glyph);
    }

    pub fn build(self) -> FontAsset {
        FontAsset {
            size_px: self.size_px,
            line_height_px: self.line_height_px,
            glyphs: self.glyphs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(key: u32) -> PackedGlyph {
        PackedGlyph {
            codepoint_key: key,
            width_px: 1,
            height_px: 1,
            packed_bits: vec![0x80],
            offset_x: 0,
            offset_y: -1,
            advance_px: 2,
        }
    }

    #[test]
    fn builder_preserves_push_order() {
        let mut builder = FontAssetBuilder::new(16, 18);
        builder.push(glyph(0x41));
        builder.push(glyph(0x21));
        builder.push(glyph(0xE0B881));

        let asset = builder.build();
        assert_eq!(asset.size_px, 16);
        assert_eq!(asset.line_height_px, 18);
        let keys: Vec<u32> = asset.glyphs.iter().map(|g| g.codepoint_key).collect();
        assert_eq!(keys, vec![0x41, 0x21, 0xE0B881]);
    }

    #[test]
    fn empty_pass_builds_an_empty_asset() {
        let asset = FontAssetBuilder::new(20, 22).build();
        assert!(asset.glyphs.is_empty());
    }
}
