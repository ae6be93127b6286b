//! The 9x9 grid and its text rendering.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, Position, Triplet};

/// A 9x9 grid of cells, each either empty or holding a [`Digit`].
///
/// # Text format
///
/// [`Display`] renders nine lines of space-separated cells with empty cells
/// shown as `.`. [`FromStr`] accepts 81 cells written as `1`-`9` for digits
/// and `.`, `_` or `0` for empty cells; whitespace is ignored.
///
/// ```
/// use xyzgrid_core::{Digit, Grid, Position};
///
/// let grid: Grid = "
///     1__ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ __9
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D1));
/// assert_eq!(grid[Position::new(8, 8)], Some(Digit::D9));
/// assert_eq!(grid.to_string().lines().next(), Some("1 . . . . . . . ."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()]
    }

    /// Sets the cell at `pos` and returns its previous content.
    pub fn set(&mut self, pos: Position, cell: Option<Digit>) -> Option<Digit> {
        std::mem::replace(&mut self.cells[pos.cell_index()], cell)
    }

    /// Writes a decoded triplet into the grid, returning the overwritten digit.
    pub fn apply(&mut self, triplet: Triplet) -> Option<Digit> {
        self.set(triplet.position(), Some(triplet.digit()))
    }

    /// Returns row `row` (0-8) as nine cells.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range 0-8.
    #[must_use]
    pub fn row(&self, row: u8) -> [Option<Digit>; 9] {
        std::array::from_fn(|col| self[Position::new(row, house_index(col))])
    }

    /// Returns column `col` (0-8) as nine cells.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not in the range 0-8.
    #[must_use]
    pub fn column(&self, col: u8) -> [Option<Digit>; 9] {
        std::array::from_fn(|row| self[Position::new(house_index(row), col)])
    }

    /// Returns the transpose: the cell at `(i, j)` moves to `(j, i)`.
    ///
    /// No validation is performed. Transposing twice yields the original grid.
    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut out = Self::new();
        for pos in Position::ALL {
            out[pos.transposed()] = self[pos];
        }
        out
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Iterates the filled cells as triplets in row-major order.
    pub fn triplets(&self) -> impl Iterator<Item = Triplet> + '_ {
        Position::ALL
            .into_iter()
            .filter_map(|pos| self[pos].map(|digit| Triplet::new(pos, digit)))
    }
}

#[expect(clippy::cast_possible_truncation)]
fn house_index(i: usize) -> u8 {
    debug_assert!(i < 9);
    i as u8
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.cell_index()]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.cell_index()]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in self.row(row).into_iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}

/// Errors from parsing a [`Grid`] with [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input did not hold exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    CellCount {
        /// Number of cells found.
        count: usize,
    },
    /// A character other than a digit, `.`, `_` or whitespace was found.
    #[display("invalid grid character {ch:?}")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => ch
                    .to_digit(10)
                    .and_then(|v| u8::try_from(v).ok())
                    .and_then(Digit::try_from_value),
                _ => return Err(ParseGridError::InvalidChar { ch }),
            };
            if let Some(&pos) = Position::ALL.get(count) {
                grid[pos] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::CellCount { count });
        }
        Ok(grid)
    }
}
