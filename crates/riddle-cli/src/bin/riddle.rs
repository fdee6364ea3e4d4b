//! Generates a logic-grid riddle and prints it to stdout.
//!
//! Set `RUST_LOG=debug` to follow the generation phases.

use std::process::ExitCode;

use clap::Parser as _;
use riddle_cli::command::{self, CommandArgs};

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = CommandArgs::parse();
    match command::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
