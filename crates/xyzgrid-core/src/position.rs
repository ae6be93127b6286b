//! Cell coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on the 9x9 grid.
///
/// Both `row` and `col` are 0-based and in the range 0-8. This matches the
/// first two characters of an XYZ token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Returns the position, or `None` if either coordinate is out of range.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 9 && col < 9 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The position mirrored across the main diagonal.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }

    pub(crate) const fn cell_index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[1], Position::new(0, 1));
        assert_eq!(Position::ALL[9], Position::new(1, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.cell_index(), i);
        }
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(Position::try_new(8, 8), Some(Position::new(8, 8)));
        assert_eq!(Position::try_new(9, 0), None);
        assert_eq!(Position::try_new(0, 9), None);
    }

    #[test]
    fn test_transposed_swaps_coordinates() {
        assert_eq!(Position::new(2, 7).transposed(), Position::new(7, 2));
        assert_eq!(Position::new(4, 4).transposed(), Position::new(4, 4));
    }
}
