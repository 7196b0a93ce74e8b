//! Flippin command-line tool.
//!
//! # Usage
//!
//! ```sh
//! flippin check 1011110111112101211101210 0202002020000001000101110
//! flippin solve 1011110111112101211101210 0202002020000001000101110
//! flippin toggle 1011110111112101211101210 2 2
//! flippin import puzzles.json
//! ```
//!
//! Set `RUST_LOG=debug` to trace the solver.

use std::{io, process::ExitCode};

use clap::Parser as _;
use flippin_app::Cli;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match flippin_app::run(&cli.command, &mut io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            log::debug!("command failed: {err:?}");
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
