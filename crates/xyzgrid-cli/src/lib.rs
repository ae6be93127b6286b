//! Command-line front end for `xyzgrid`.
//!
//! Loads an XYZ token file, validates the grid, prints the original and
//! transposed grids, and writes the transpose to a file. See [`app::run`].

pub mod app;
pub mod loader;
pub mod report;

pub use self::app::{AppError, Args, Summary, run};
