//! Core data structures for XYZ-encoded 9x9 grids.
//!
//! This crate is I/O free. It provides:
//!
//! - [`Digit`], [`Position`] and [`House`]: type-safe cell values, coordinates
//!   and row/column groupings.
//! - [`Grid`]: the 9x9 grid, its text rendering and its [transpose](Grid::transposed).
//! - [`Triplet`] and [`parse_tokens`]: decoding of XYZ tokens into a grid.
//! - [`validate`]: the row/column completeness check.
//!
//! # Examples
//!
//! ```
//! use xyzgrid_core::{parse_tokens, validate};
//!
//! let tokens: String = (0..9)
//!     .flat_map(|row| (0..9).map(move |col| format!("{row}{col}{} ", (row + col) % 9 + 1)))
//!     .collect();
//!
//! let loaded = parse_tokens(&tokens);
//! assert!(loaded.rejected.is_empty());
//! assert!(validate(&loaded.grid).is_ok());
//!
//! let transposed = loaded.grid.transposed();
//! assert_eq!(transposed.row(2), loaded.grid.column(2));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;
pub mod triplet;
pub mod validate;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    house::House,
    position::Position,
    triplet::{Loaded, RejectedToken, TokenError, Triplet, parse_tokens},
    validate::{ValidationError, Violation, validate},
};
