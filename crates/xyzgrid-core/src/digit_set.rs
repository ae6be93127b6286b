//! A set of digits 1-9 packed into a bitmask.
//!
//! # Examples
//!
//! ```
//! use xyzgrid_core::{Digit, DigitSet};
//!
//! let mut seen = DigitSet::EMPTY;
//! assert!(seen.insert(Digit::D1));
//! assert!(!seen.insert(Digit::D1)); // already present
//!
//! let missing: Vec<_> = seen.complement().iter().collect();
//! assert_eq!(missing.len(), 8);
//! ```

use std::iter::FusedIterator;

use crate::Digit;

/// A set of [`Digit`]s, where bits 0-8 represent digits 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set holding every digit 1-9.
    pub const FULL: Self = Self { bits: 0x1ff };

    const fn bit(digit: Digit) -> u16 {
        1 << digit.index()
    }

    /// Inserts a digit, returning `false` if it was already present.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let was_absent = !self.contains(digit);
        self.bits |= Self::bit(digit);
        was_absent
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the digits not in this set.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self {
            bits: !self.bits & Self::FULL.bits,
        }
    }

    /// Iterates the digits in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over a [`DigitSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        Some(Digit::ALL[index as usize])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
