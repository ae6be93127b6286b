//! Row and column completeness checks.
//!
//! A grid is valid when every row and every column holds each digit 1-9
//! exactly once. The check never modifies the grid.
//!
//! ```
//! use xyzgrid_core::{Grid, House, Violation, validate};
//!
//! let grid: Grid = "
//!     123456789 234567891 345678912
//!     456789123 567891234 678912345
//!     789123456 891234567 912345678
//! "
//! .parse()
//! .unwrap();
//! assert!(validate(&grid).is_ok());
//!
//! let err = validate(&Grid::new()).unwrap_err();
//! assert_eq!(
//!     err.first(),
//!     Violation::EmptyCell { house: House::Row { row: 0 }, cell: 0 }
//! );
//! ```

use std::fmt::{self, Display};

use crate::{Digit, DigitSet, Grid, House};

/// A single rule broken by one house of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Violation {
    /// A cell of the house is empty.
    EmptyCell {
        /// The house being checked.
        house: House,
        /// Index of the cell inside the house (0-8).
        cell: u8,
    },
    /// A digit appears more than once in the house.
    DuplicateDigit {
        /// The house being checked.
        house: House,
        /// The repeated digit.
        digit: Digit,
    },
    /// A digit does not appear in the house.
    MissingDigit {
        /// The house being checked.
        house: House,
        /// The absent digit.
        digit: Digit,
    },
}

impl Violation {
    /// The house the violation was found in.
    #[must_use]
    pub const fn house(self) -> House {
        match self {
            Violation::EmptyCell { house, .. }
            | Violation::DuplicateDigit { house, .. }
            | Violation::MissingDigit { house, .. } => house,
        }
    }
}

/// Displays the violation with 1-based indices.
impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Violation::EmptyCell { house, cell } => write!(
                f,
                "empty cell in {house}, {} {}",
                house.cell_label(),
                cell + 1
            ),
            Violation::DuplicateDigit { house, digit } => {
                write!(f, "duplicate value in {house}: {digit}")
            }
            Violation::MissingDigit { house, digit } => {
                write!(f, "missing value in {house}: {digit}")
            }
        }
    }
}

/// The grid is not a complete Latin square.
///
/// Holds every violation found, rows before columns. There is always at least
/// one.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// The first violation in row-then-column order.
    #[must_use]
    pub fn first(&self) -> Violation {
        self.violations[0]
    }

    /// All violations in the order they were found.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first())?;
        match self.violations.len() - 1 {
            0 => Ok(()),
            1 => write!(f, " (and 1 more problem)"),
            n => write!(f, " (and {n} more problems)"),
        }
    }
}

/// Checks that every row and column holds the digits 1-9 exactly once.
///
/// Houses are scanned rows 1-9, then columns 1-9. Within a house, empty cells
/// and repeated digits are reported in cell order, followed by the absent
/// digits in ascending order.
///
/// # Errors
///
/// Returns [`ValidationError`] listing every violation if any house is
/// incomplete.
pub fn validate(grid: &Grid) -> Result<(), ValidationError> {
    let violations: Vec<_> = House::ALL
        .into_iter()
        .flat_map(|house| check_house(grid, house))
        .collect();

    if violations.is_empty() {
        log::debug!("grid is complete");
        Ok(())
    } else {
        log::debug!("grid has {} violation(s)", violations.len());
        Err(ValidationError { violations })
    }
}

fn check_house(grid: &Grid, house: House) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen = DigitSet::EMPTY;

    for (cell, pos) in (0..).zip(house.positions()) {
        match grid[pos] {
            None => violations.push(Violation::EmptyCell { house, cell }),
            Some(digit) => {
                if !seen.insert(digit) {
                    violations.push(Violation::DuplicateDigit { house, digit });
                }
            }
        }
    }

    violations.extend(
        seen.complement()
            .iter()
            .map(|digit| Violation::MissingDigit { house, digit }),
    );
    violations
}
