//! A bitmap font compiler for embedded rendering runtimes.
//!
//! Rasterizes a scalable font at fixed pixel sizes and emits each size as a
//! packed monochrome font asset in C source form.

use anyhow::Result;
use glyphpack::core;

/// Run the compiler with the given CLI arguments.
fn run_app(cli_args: core::cli::CliArgs) -> Result<()> {
    core::compiler::compile(&cli_args)
}

fn main() {
    glyphpack::logging::init();
    let cli_args = core::platform::get_cli_args();
    match run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
