//! Glyphpack
pub mod asset;
pub mod core;
pub mod emit;
pub mod logging;
pub mod pack;
pub mod rasterize;
