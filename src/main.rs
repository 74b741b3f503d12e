//! Calentar CLI
//!
//! # Usage
//!
//! ```bash
//! # Build optimizer and schedule, report what was built
//! calentar validate experiment.yaml --dataset-len 50000
//!
//! # Print the learning rate every 100 iterations
//! calentar preview experiment.yaml --dataset-len 50000 --every 100
//! ```

use calentar::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
