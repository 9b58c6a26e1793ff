//! Compilation driver: one packed font asset per requested pixel size.
//!
//! Each pass opens its own rasterizer for the (font, size) pair, walks the
//! fixed repertoire once, and hands the finished asset to the emitter.
//! Passes share no mutable state.

use crate::asset::{FontAsset, FontAssetBuilder, PackedGlyph};
use crate::core::cli::CliArgs;
use crate::emit::c_source::CSourceEmitter;
use crate::emit::Emitter;
use crate::pack::{bitpack, key, metrics, repertoire};
use crate::rasterize::freetype::FreeTypeRasterizer;
use crate::rasterize::GlyphRasterSource;
use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, info};

/// Run every compilation pass requested on the command line.
pub fn compile(args: &CliArgs) -> Result<()> {
    args.validate().map_err(anyhow::Error::msg)?;

    fs::create_dir_all(&args.out).with_context(|| {
        format!("failed to create output directory {}", args.out.display())
    })?;

    let emitter = CSourceEmitter::new(&args.name);
    for &size in &args.sizes {
        info!(size, font = %args.font.display(), "compiling");
        // Rasterizer (and its FreeType handles) lives for exactly one pass.
        let source = FreeTypeRasterizer::new(&args.font, size)?;
        let asset = compile_pass(&source, size)?;
        info!(size, glyphs = asset.glyphs.len(), "pass complete");
        let path = emitter.emit(&asset, &args.out)?;
        println!("Generated {}", path.display());
    }
    Ok(())
}

/// Build one immutable font asset from one rasterizer at one pixel size.
///
/// Codepoints the face has no glyph for are skipped entirely; the asset
/// records survivors only, in repertoire order.
pub fn compile_pass(source: &dyn GlyphRasterSource, size_px: u32) -> Result<FontAsset> {
    let line_height_px = metrics::line_height_px(source.line_height_26_6(), size_px);

    let mut builder = FontAssetBuilder::new(size_px, line_height_px);
    for codepoint in repertoire::codepoints() {
        let Some(raster) = source.rasterize(codepoint)? else {
            debug!(codepoint = codepoint as u32, "no glyph in face, skipped");
            continue;
        };
        let placement = metrics::placement(&raster);
        builder.push(PackedGlyph {
            codepoint_key: key::utf8_key(codepoint),
            width_px: raster.width_px,
            height_px: raster.height_px,
            packed_bits: bitpack::pack(&raster),
            offset_x: placement.offset_x,
            offset_y: placement.offset_y,
            advance_px: placement.advance_px,
        });
    }
    Ok(builder.build())
}
