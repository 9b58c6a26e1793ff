//! C source emission for the SmartFont embedded runtime.
//!
//! For a pass at size N the emitted file is `font_<name>N.c`: one
//! `smart_font_bitmap_t` record per glyph, then a `smart_font_info_t`
//! symbol table whose entries reference the bitmap records by address.
//! Bitmap data is owned by the records; symbols only point at them.

use super::Emitter;
use crate::asset::{FontAsset, PackedGlyph};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Emits SmartFont-compatible C source.
pub struct CSourceEmitter {
    name_base: String,
}

impl CSourceEmitter {
    pub fn new(name_base: &str) -> Self {
        Self {
            name_base: name_base.to_string(),
        }
    }

    /// Render the whole translation unit as a string.
    pub fn render(&self, asset: &FontAsset) -> String {
        let font_name = format!("{}{}", self.name_base, asset.size_px);
        let mut out = String::new();

        out.push_str("#include \"SmartFont.h\"\n");
        out.push_str("#if defined(__AVR__)\n");
        out.push_str("    #include <avr/pgmspace.h>\n");
        out.push_str("    #define CONST_PREFIX           const PROGMEM\n");
        out.push_str("#elif defined(__XTENSA__)\n");
        out.push_str("    #include <pgmspace.h>\n");
        out.push_str("    #define CONST_PREFIX           const PROGMEM\n");
        out.push_str("#else\n");
        out.push_str("    #define CONST_PREFIX           const\n");
        out.push_str("#endif\n\n");

        for glyph in &asset.glyphs {
            out.push_str(&render_bitmap_record(glyph));
        }

        out.push_str(&format!("const smart_font_info_t font_{font_name} = {{\n"));
        out.push_str(&format!("    .count = {},\n", asset.glyphs.len()));
        out.push_str(&format!("    .font_size = {},\n", asset.size_px));
        out.push_str(&format!("    .height = {},\n", asset.line_height_px));
        out.push_str("    .symbols = {\n");
        for glyph in &asset.glyphs {
            out.push_str(&format!(
                "        {{.utf8=0x{key:x}, .offset_x={}, .offset_y={}, .cur_dist={}, .bitmap=&{}}},\n",
                glyph.offset_x,
                glyph.offset_y,
                glyph.advance_px,
                symbol_name(glyph),
                key = glyph.codepoint_key,
            ));
        }
        out.push_str("    }\n");
        out.push_str("};\n");
        out
    }
}

impl Emitter for CSourceEmitter {
    fn emit(&self, asset: &FontAsset, out_dir: &Path) -> Result<PathBuf> {
        let path = out_dir.join(format!("font_{}{}.c", self.name_base, asset.size_px));
        fs::write(&path, self.render(asset))
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}

fn symbol_name(glyph: &PackedGlyph) -> String {
    format!("symbol_0x{:x}", glyph.codepoint_key)
}

fn render_bitmap_record(glyph: &PackedGlyph) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "static CONST_PREFIX smart_font_bitmap_t {} = {{\n",
        symbol_name(glyph)
    ));
    out.push_str(&format!("    .width = {},\n", glyph.width_px));
    out.push_str(&format!("    .height = {},\n", glyph.height_px));
    out.push_str("    .data = {\n");
    let bytes: String = glyph
        .packed_bits
        .iter()
        .map(|byte| format!("0x{byte:02x}, "))
        .collect();
    out.push_str(&format!("        {bytes}\n"));
    out.push_str("    }\n");
    out.push_str("};\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_asset() -> FontAsset {
        FontAsset {
            size_px: 16,
            line_height_px: 21,
            glyphs: vec![
                PackedGlyph {
                    codepoint_key: 0x41,
                    width_px: 5,
                    height_px: 2,
                    packed_bits: vec![0xB2, 0x40],
                    offset_x: 1,
                    offset_y: -12,
                    advance_px: 6,
                },
                PackedGlyph {
                    codepoint_key: 0x00E0_B881,
                    width_px: 0,
                    height_px: 0,
                    packed_bits: Vec::new(),
                    offset_x: 0,
                    offset_y: 0,
                    advance_px: 7,
                },
            ],
        }
    }

    #[test]
    fn renders_bitmap_records_and_symbol_table() {
        let emitter = CSourceEmitter::new("sarabun_bold");
        let source = emitter.render(&sample_asset());

        assert!(source.starts_with("#include \"SmartFont.h\"\n"));
        assert!(source.contains(
            "static CONST_PREFIX smart_font_bitmap_t symbol_0x41 = {\n    .width = 5,\n    .height = 2,\n    .data = {\n        0xb2, 0x40, \n    }\n};"
        ));
        assert!(source.contains("const smart_font_info_t font_sarabun_bold16 = {"));
        assert!(source.contains("    .count = 2,\n    .font_size = 16,\n    .height = 21,"));
        assert!(source.contains(
            "{.utf8=0x41, .offset_x=1, .offset_y=-12, .cur_dist=6, .bitmap=&symbol_0x41},"
        ));
        assert!(source.contains(
            "{.utf8=0xe0b881, .offset_x=0, .offset_y=0, .cur_dist=7, .bitmap=&symbol_0xe0b881},"
        ));
    }

    #[test]
    fn symbol_table_preserves_glyph_order() {
        let emitter = CSourceEmitter::new("f");
        let source = emitter.render(&sample_asset());
        let first = source.find(".utf8=0x41").unwrap();
        let second = source.find(".utf8=0xe0b881").unwrap();
        assert!(first < second);
    }

    #[test]
    fn zero_area_glyph_renders_an_empty_data_block() {
        let emitter = CSourceEmitter::new("f");
        let source = emitter.render(&sample_asset());
        assert!(source.contains(
            "static CONST_PREFIX smart_font_bitmap_t symbol_0xe0b881 = {\n    .width = 0,\n    .height = 0,\n    .data = {\n        \n    }\n};"
        ));
    }

    #[test]
    fn emit_writes_one_file_named_for_the_size() {
        let dir = tempfile::tempdir().unwrap();
        let emitter = CSourceEmitter::new("sarabun_bold");
        let path = emitter.emit(&sample_asset(), dir.path()).unwrap();

        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("font_sarabun_bold16.c")
        );
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, emitter.render(&sample_asset()));
    }
}
