//! decolor - strip explicit colors from SVG files so they inherit `currentColor`.

mod cli;
mod embed;
mod error;
mod logger;
mod svg;
mod utils;

use clap::{ColorChoice, Parser};
use cli::{Cli, Job};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match cli::run(&Job::from_cli(&cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}
