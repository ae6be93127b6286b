//! The parse → validate → transpose → report pipeline.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use xyzgrid_core::{ValidationError, validate};

use crate::{
    loader::{self, LoadError},
    report,
};

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "sudoku.txt";

/// Output file written when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "sudoku_result.txt";

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// File of whitespace-separated XYZ tokens (row, column, value).
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// File the transposed grid is written to.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also list the transposed grid's cells as XYZ tokens in the output file.
    #[arg(long)]
    pub triplets: bool,
}

/// Errors that stop the pipeline.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// The input file could not be read.
    #[from]
    #[display("{_0}")]
    Load(LoadError),
    /// The loaded grid is not a complete Latin square.
    #[from]
    #[display("invalid 9x9 grid: {_0}")]
    InvalidGrid(ValidationError),
    /// Writing the report to the console failed.
    #[display("cannot write to console: {_0}")]
    Console(io::Error),
}

impl AppError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Load(_) => 3,
            AppError::InvalidGrid(_) => 2,
            AppError::Console(_) => 1,
        }
    }
}

/// What a successful run did.
#[derive(Debug)]
pub struct Summary {
    /// Number of input tokens that were skipped.
    pub rejected_tokens: usize,
    /// Absolute path of the output file, or `None` if writing it failed.
    pub written: Option<PathBuf>,
}

/// Runs the pipeline, printing the report to `out`.
///
/// A failure to write the output file is logged and reported on stderr but
/// does not make the run fail.
///
/// # Errors
///
/// Returns [`AppError::Load`] if the input cannot be read,
/// [`AppError::InvalidGrid`] if validation fails (nothing is printed or
/// written in that case), and [`AppError::Console`] if writing to `out` fails.
pub fn run<W>(args: &Args, out: &mut W) -> Result<Summary, AppError>
where
    W: Write + ?Sized,
{
    let loaded = loader::load_file(&args.input)?;
    if !loaded.rejected.is_empty() {
        log::info!("{} token(s) skipped", loaded.rejected.len());
    }

    validate(&loaded.grid)?;

    let transposed = loaded.grid.transposed();
    report::print_grid(out, "Original grid:", &loaded.grid).map_err(AppError::Console)?;
    writeln!(out).map_err(AppError::Console)?;
    report::print_grid(out, "Transposed grid:", &transposed).map_err(AppError::Console)?;

    let written = match report::write_grid_file(&args.output, &transposed, args.triplets) {
        Ok(path) => {
            writeln!(out, "Result written to: {}", path.display()).map_err(AppError::Console)?;
            Some(path)
        }
        Err(err) => {
            log::error!("failed to write {}: {err}", args.output.display());
            eprintln!("Error writing output file: {err}");
            None
        }
    };

    Ok(Summary {
        rejected_tokens: loaded.rejected.len(),
        written,
    })
}
