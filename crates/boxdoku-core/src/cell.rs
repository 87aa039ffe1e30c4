//! A single board cell.

use std::fmt::{self, Display};

/// A single cell of a board: either empty or filled with a digit.
///
/// A `Filled` cell stores the raw digit value without range checking; the
/// validator is the authority on whether a stored value is legal for a given
/// board size. This keeps the boundary unambiguous: "no value" is `Empty`,
/// never a sentinel digit.
///
/// # Examples
///
/// ```
/// use boxdoku_core::Cell;
///
/// let cell = Cell::Filled(5);
/// assert_eq!(cell.digit(), Some(5));
/// assert!(!cell.is_empty());
///
/// let cell = Cell::from(None);
/// assert!(cell.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// No digit has been placed in this cell.
    #[default]
    Empty,
    /// A digit has been placed in this cell.
    Filled(u8),
}

impl Cell {
    /// Returns `true` if the cell holds no digit.
    #[must_use]
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Returns the digit held by the cell, or `None` if it is empty.
    #[must_use]
    #[inline]
    pub fn digit(self) -> Option<u8> {
        match self {
            Self::Empty => None,
            Self::Filled(digit) => Some(digit),
        }
    }
}

impl From<Option<u8>> for Cell {
    #[inline]
    fn from(digit: Option<u8>) -> Self {
        match digit {
            Some(digit) => Self::Filled(digit),
            None => Self::Empty,
        }
    }
}

impl From<Cell> for Option<u8> {
    #[inline]
    fn from(cell: Cell) -> Self {
        cell.digit()
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("_"),
            Self::Filled(digit) => write!(f, "{digit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_accessor() {
        assert_eq!(Cell::Empty.digit(), None);
        assert_eq!(Cell::Filled(7).digit(), Some(7));
    }

    #[test]
    fn test_option_roundtrip() {
        assert_eq!(Cell::from(Some(3)), Cell::Filled(3));
        assert_eq!(Cell::from(None), Cell::Empty);
        assert_eq!(Option::<u8>::from(Cell::Filled(3)), Some(3));
        assert_eq!(Option::<u8>::from(Cell::Empty), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Empty.to_string(), "_");
        assert_eq!(Cell::Filled(9).to_string(), "9");
    }
}
