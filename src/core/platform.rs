//! Platform entry and exit handling.
//!
//! Thin wrappers around argument acquisition and fatal-error reporting so
//! `main` stays declarative.

/// Handle a fatal error: print it and exit non-zero.
///
/// Fallback cases (missing glyphs, degenerate metrics) never reach here;
/// only unrecoverable I/O and font errors do.
pub fn handle_error(error: anyhow::Error) {
    eprintln!();
    eprintln!("Error running glyphpack:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse CLI arguments from the process environment.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
