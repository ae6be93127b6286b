//! End-to-end runs of the `xyzgrid` binary.

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use xyzgrid_core::Grid;

/// Cyclic Latin square: row `r` is `r + 1, r + 2, ...` wrapping after 9.
fn latin_tokens() -> String {
    let mut tokens = String::new();
    for row in 0..9 {
        for col in 0..9 {
            tokens.push_str(&format!("{row}{col}{} ", (row + 2 * col) % 9 + 1));
        }
        tokens.push('\n');
    }
    tokens
}

fn xyzgrid(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xyzgrid"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

fn grid_rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .skip(1)
        .take(9)
        .map(|line| line.split(' ').map(str::to_owned).collect())
        .collect()
}

#[test]
fn valid_input_writes_transpose_to_default_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sudoku.txt"), latin_tokens()).unwrap();

    let output = xyzgrid(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Original grid:\nGrid 9x9:\n"));
    assert!(stdout.contains("\nTransposed grid:\nGrid 9x9:\n"));
    assert!(stdout.contains("Result written to: "));

    let input_grid: Grid = latin_tokens()
        .split_whitespace()
        .map(|t| &t[2..])
        .collect::<String>()
        .parse()
        .unwrap();
    let written = fs::read_to_string(dir.path().join("sudoku_result.txt")).unwrap();
    let rows = grid_rows(&written);
    assert_eq!(written.lines().count(), 10);
    assert_eq!(written.lines().next(), Some("Grid 9x9:"));
    for (i, row) in (0..9).zip(&rows) {
        let column: Vec<String> = input_grid
            .column(i)
            .iter()
            .map(|cell| cell.map_or(".".to_owned(), |d| d.to_string()))
            .collect();
        assert_eq!(row, &column);
    }
}

#[test]
fn explicit_paths_and_triplet_listing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("grid.xyz"), latin_tokens()).unwrap();

    let output = xyzgrid(
        dir.path(),
        &["grid.xyz", "--output", "out/nested/result.txt", "--triplets"],
    );
    assert_eq!(output.status.code(), Some(0));

    let written = fs::read_to_string(dir.path().join("out/nested/result.txt")).unwrap();
    let lines: Vec<_> = written.lines().collect();
    assert_eq!(lines[10], "");
    assert_eq!(lines[11], "Triplets (x y z):");
    assert_eq!(lines.len(), 12 + 81);
    assert_eq!(lines[12], "001");
}

#[test]
fn malformed_tokens_are_skipped_with_a_warning() {
    let dir = tempfile::tempdir().unwrap();
    let input = format!("12 120 {} abc", latin_tokens());
    fs::write(dir.path().join("sudoku.txt"), input).unwrap();

    let output = xyzgrid(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("\"12\""));
    assert!(stderr.contains("\"120\""));
    assert!(stderr.contains("\"abc\""));
}

#[test]
fn missing_input_exits_with_3() {
    let dir = tempfile::tempdir().unwrap();

    let output = xyzgrid(dir.path(), &["nope.txt"]);
    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("file not found"));
    assert!(stderr.contains("nope.txt"));
    assert!(!dir.path().join("sudoku_result.txt").exists());
}

#[test]
fn invalid_grid_exits_with_2_and_names_the_row() {
    let dir = tempfile::tempdir().unwrap();
    // drop the token for row 3's 5
    let tokens: Vec<_> = latin_tokens()
        .split_whitespace()
        .filter(|t| !(t.starts_with('2') && t.ends_with('5')))
        .map(str::to_owned)
        .collect();
    fs::write(dir.path().join("sudoku.txt"), tokens.join(" ")).unwrap();

    let output = xyzgrid(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("empty cell in row 3"));
    assert!(stderr.contains("missing value in row 3: 5"));
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("sudoku_result.txt").exists());
}

#[test]
fn unwritable_output_still_exits_with_0() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sudoku.txt"), latin_tokens()).unwrap();
    fs::write(dir.path().join("blocker"), "").unwrap();

    let output = xyzgrid(dir.path(), &["-o", "blocker/result.txt"]);
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error writing output file"));
}
