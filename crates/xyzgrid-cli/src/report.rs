//! Text rendering of grids to the console and to files.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use xyzgrid_core::Grid;

use crate::loader::absolute;

/// Header line written before every rendered grid.
pub const GRID_HEADER: &str = "Grid 9x9:";

/// Header of the optional triplet listing.
pub const TRIPLETS_HEADER: &str = "Triplets (x y z):";

/// Writes `title`, the grid header and the grid rows to `out`.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_grid<W>(out: &mut W, title: &str, grid: &Grid) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "{title}")?;
    writeln!(out, "{GRID_HEADER}")?;
    writeln!(out, "{grid}")
}

/// Writes `grid` to the file at `path`, creating parent directories as needed.
///
/// The file holds the grid header and nine rows; with `triplets` set, a blank
/// line, [`TRIPLETS_HEADER`] and one XYZ token per filled cell follow.
/// Returns the absolute path of the written file.
///
/// # Errors
///
/// Returns any error from creating directories or writing the file.
pub fn write_grid_file(path: &Path, grid: &Grid, triplets: bool) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{GRID_HEADER}")?;
    writeln!(out, "{grid}")?;
    if triplets {
        writeln!(out)?;
        writeln!(out, "{TRIPLETS_HEADER}")?;
        for triplet in grid.triplets() {
            writeln!(out, "{triplet}")?;
        }
    }
    out.flush()?;

    Ok(absolute(path))
}

#[cfg(test)]
mod tests {
    use xyzgrid_core::{Digit, Position};

    use super::*;

    fn sparse_grid() -> Grid {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(Digit::D4));
        grid.set(Position::new(8, 7), Some(Digit::D9));
        grid
    }

    #[test]
    fn test_print_grid_renders_dots() {
        let mut out = Vec::new();
        print_grid(&mut out, "Original grid:", &sparse_grid()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Original grid:");
        assert_eq!(lines[1], GRID_HEADER);
        assert_eq!(lines[2], "4 . . . . . . . .");
        assert_eq!(lines[10], ". . . . . . . 9 .");
    }

    #[test]
    fn test_write_grid_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");

        let written = write_grid_file(&path, &sparse_grid(), false).unwrap();
        assert_eq!(written, path);

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], GRID_HEADER);
        assert_eq!(lines[1], "4 . . . . . . . .");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_write_grid_file_appends_triplets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_grid_file(&path, &sparse_grid(), true).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let tail: Vec<_> = text.lines().skip(10).collect();
        assert_eq!(tail, ["", TRIPLETS_HEADER, "004", "879"]);
    }

    #[test]
    fn test_write_grid_file_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        // a regular file cannot act as a parent directory
        let result = write_grid_file(&blocker.join("out.txt"), &sparse_grid(), false);
        assert!(result.is_err());
    }
}
