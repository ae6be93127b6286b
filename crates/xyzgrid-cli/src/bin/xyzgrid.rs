//! `xyzgrid` command-line entry point.

use std::{io, process::ExitCode};

use clap::Parser as _;
use xyzgrid_cli::{AppError, Args, run};

fn main() -> ExitCode {
    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(summary) => {
            log::debug!("done: {summary:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            if let AppError::InvalidGrid(validation) = &err {
                for violation in validation.violations().iter().skip(1) {
                    eprintln!("  {violation}");
                }
            }
            ExitCode::from(err.exit_code())
        }
    }
}
