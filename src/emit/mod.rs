//! Asset serialization boundary.
//!
//! Emitters are stateless formatters over a finished [`FontAsset`]: they
//! must not reorder glyphs or alter any value computed upstream.

pub mod c_source;

use crate::asset::FontAsset;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Serializes one font asset into the output directory.
pub trait Emitter {
    /// Write the asset, returning the path of the generated file.
    fn emit(&self, asset: &FontAsset, out_dir: &Path) -> Result<PathBuf>;
}
