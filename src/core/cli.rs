//! Command line interface for the glyphpack font compiler
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs before any font work starts.

use clap::Parser;
use std::path::PathBuf;

/// Glyphpack CLI arguments
///
/// Examples:
///   glyphpack Sarabun-Bold.ttf --sizes 16 --name sarabun_bold
///   glyphpack Sarabun-Bold.ttf --sizes 16 20 24 --name sarabun_bold --out ./output
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "glyphpack",
    version,
    about = "Compile fonts into packed monochrome bitmap assets",
    long_about = "Glyphpack rasterizes a TTF/OTF font at fixed pixel sizes and emits one C source file per size, containing bit-packed monochrome glyph bitmaps and a symbol table for an embedded rendering runtime."
)]
pub struct CliArgs {
    /// Path to the font file to compile
    #[clap(
        value_name = "FONT",
        help = "TTF/OTF font file to compile",
        long_help = "Path to the scalable font file to compile. Any format FreeType can open is accepted; TTF and OTF are the usual choices."
    )]
    pub font: PathBuf,

    /// Pixel sizes to compile
    ///
    /// One independent compilation pass, and one output file, per size.
    #[clap(
        long = "sizes",
        required = true,
        num_args = 1..,
        value_name = "PX",
        help = "Pixel sizes to generate, one output file per size"
    )]
    pub sizes: Vec<u32>,

    /// Base identifier for the generated font
    ///
    /// Interpolated into C symbol names, so it must be a valid C identifier.
    #[clap(
        long = "name",
        required = true,
        value_name = "NAME",
        help = "Base identifier for the generated font symbols",
        long_help = "Base identifier for the generated font. The emitted file for size N is font_<NAME>N.c and defines the symbol font_<NAME>N, so the name must be a valid C identifier."
    )]
    pub name: String,

    /// Output directory
    #[clap(
        long = "out",
        default_value = ".",
        value_name = "DIR",
        help = "Output directory, created if it does not exist"
    )]
    pub out: PathBuf,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures inputs are usable before the compiler starts,
    /// providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if !self.font.exists() {
            return Err(format!(
                "Font file does not exist: {}\nMake sure the path is correct and the file exists.",
                self.font.display()
            ));
        }
        if !self.font.is_file() {
            return Err(format!(
                "Font path is not a file: {}",
                self.font.display()
            ));
        }

        if self.sizes.iter().any(|&size| size == 0) {
            return Err("Pixel sizes must be positive integers.".to_string());
        }

        if !is_c_identifier(&self.name) {
            return Err(format!(
                "Invalid name: '{}'\nThe name is used in C symbol names, so it must start with a letter or underscore and contain only letters, digits, and underscores.",
                self.name
            ));
        }

        Ok(())
    }
}

/// Whether `name` is usable as (part of) a C identifier.
fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(is_c_identifier("sarabun_bold"));
        assert!(is_c_identifier("_private"));
        assert!(is_c_identifier("f16"));
    }

    #[test]
    fn rejects_non_identifiers() {
        assert!(!is_c_identifier(""));
        assert!(!is_c_identifier("16px"));
        assert!(!is_c_identifier("sarabun-bold"));
        assert!(!is_c_identifier("sarabun bold"));
    }
}
