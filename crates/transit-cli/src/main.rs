//! `transit-intent` binary.

use std::process::ExitCode;

use clap::Parser;
use transit_cli::{commands, CliArgs};

fn main() -> ExitCode {
    // A missing .env is normal; real deployments set the environment directly.
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    match commands::execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match commands::error_code(&err) {
                Some(code) => eprintln!("Error [{code}]: {err:#}"),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::from(commands::exit_code(&err))
        }
    }
}
