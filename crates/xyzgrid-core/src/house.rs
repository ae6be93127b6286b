//! Rows and columns of the grid.

use std::fmt::{self, Display};

use crate::Position;

/// A group of nine cells that must hold each digit exactly once.
///
/// Only rows and columns are checked by the validator; there is no box
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum House {
    /// A row identified by its index (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its index (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { row: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { row: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { col: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { col: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all houses, rows first.
    pub const ALL: [Self; 18] = {
        let mut all = [Self::Row { row: 0 }; 18];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { row } => Position::new(row, i),
            House::Column { col } => Position::new(i, col),
        }
    }

    /// Returns the house's nine positions in cell-index order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| self.position_from_cell_index(i))
    }

    /// Returns the name used for the cells inside this house ("column" for a row).
    #[must_use]
    pub const fn cell_label(self) -> &'static str {
        match self {
            House::Row { .. } => "column",
            House::Column { .. } => "row",
        }
    }
}

/// Displays the house 1-based, e.g. `row 3`.
impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            House::Row { row } => write!(f, "row {}", row + 1),
            House::Column { col } => write!(f, "column {}", col + 1),
        }
    }
}
