//! Core application functionality
//!
//! This module contains the compiler's outer shell:
//! - CLI parsing and validation
//! - Platform entry/exit handling
//! - The per-size compilation driver

pub mod cli;
pub mod compiler;
pub mod platform;

// Re-export commonly used items
pub use cli::CliArgs;
pub use compiler::compile;
