//! Glyph packing and metadata derivation
//!
//! This module contains the per-glyph transforms between the rasterizer's
//! output and the compiled asset:
//! - Bit packing of row-padded rasters into continuous bitstreams
//! - UTF-8 lookup key encoding
//! - Drawing metrics and line height
//! - The fixed codepoint repertoire

pub mod bitpack;
pub mod key;
pub mod metrics;
pub mod repertoire;
