//! A fixed-size set of digits, optimized for constraint tracking.
//!
//! This module provides [`DigitSet`], a bitset over digits `1..=32` used for
//! the solver's per-row/column/box "seen digit" indices and for candidate
//! computation. Set union, intersection, and difference are single bitwise
//! operations, and iteration always yields digits in ascending order.
//!
//! # Examples
//!
//! ```
//! use boxdoku_core::DigitSet;
//!
//! let mut set = DigitSet::new();
//! set.insert(1);
//! set.insert(5);
//! set.insert(9);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(5));
//! ```

use std::{fmt, iter::FusedIterator};

/// The largest digit a [`DigitSet`] can hold.
pub const MAX_DIGIT: u8 = 32;

/// A set of digits from 1 to [`MAX_DIGIT`], represented as a bitset.
///
/// Bit `i` of the backing `u32` represents digit `i + 1`. A board of size n
/// uses digits `1..=n`; [`DigitSet::full`] builds the saturated set for a
/// given board size.
///
/// # Examples
///
/// ```
/// use boxdoku_core::DigitSet;
///
/// // All candidates for a 9×9 board.
/// let mut candidates = DigitSet::full(9);
///
/// candidates.remove(5);
/// candidates.remove(7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(5));
/// assert!(candidates.contains(1));
/// ```
///
/// # Set Operations
///
/// ```
/// use boxdoku_core::DigitSet;
///
/// let a = DigitSet::from_iter([1, 2, 3]);
/// let b = DigitSet::from_iter([2, 3, 4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([1, 2, 3, 4]));
/// assert_eq!(a & b, DigitSet::from_iter([2, 3]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([1]));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet(u32);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates an empty set.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Creates the set containing every digit from 1 to `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not in the range `1..=32`.
    #[must_use]
    #[inline]
    pub fn full(size: u8) -> Self {
        assert!(
            (1..=MAX_DIGIT).contains(&size),
            "board size must be between 1 and {MAX_DIGIT}, got {size}"
        );
        if size == MAX_DIGIT {
            Self(u32::MAX)
        } else {
            Self((1 << size) - 1)
        }
    }

    #[inline]
    fn bit(digit: u8) -> u32 {
        assert!(
            (1..=MAX_DIGIT).contains(&digit),
            "digit must be between 1 and {MAX_DIGIT}, got {digit}"
        );
        1 << (digit - 1)
    }

    /// Inserts a digit into the set.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range `1..=32`.
    #[inline]
    pub fn insert(&mut self, digit: u8) {
        self.0 |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    ///
    /// The digit must currently be a member; removing an absent digit is a
    /// violation of the caller's apply/undo discipline.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range `1..=32`.
    #[inline]
    pub fn remove(&mut self, digit: u8) {
        let bit = Self::bit(digit);
        debug_assert!(self.0 & bit != 0, "removed digit {digit} was not present");
        self.0 &= !bit;
    }

    /// Returns `true` if the set contains the digit.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range `1..=32`.
    #[must_use]
    #[inline]
    pub fn contains(self, digit: u8) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the union of two sets.
    #[must_use]
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of two sets.
    #[must_use]
    #[inline]
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    #[inline]
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    #[inline]
    pub fn iter(self) -> Digits {
        Digits(self.0)
    }
}

impl std::ops::BitOr for DigitSet {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl std::ops::BitAnd for DigitSet {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = Digits;

    #[inline]
    fn into_iter(self) -> Digits {
        self.iter()
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Digits(u32);

impl Iterator for Digits {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let digit = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Some(digit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Digits {}
impl FusedIterator for Digits {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_digit_range() {
        let mut set = DigitSet::new();
        set.insert(1);
        set.insert(32);
        assert!(set.contains(1));
        assert!(set.contains(32));
        assert_eq!(set.len(), 2);
    }

    #[test]
    #[should_panic(expected = "digit must be")]
    fn test_rejects_zero() {
        let mut set = DigitSet::new();
        set.insert(0);
    }

    #[test]
    #[should_panic(expected = "digit must be")]
    fn test_rejects_thirty_three() {
        let mut set = DigitSet::new();
        set.insert(33);
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([9, 1, 5, 3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_operations() {
        let a = DigitSet::from_iter([1, 2, 3]);
        let b = DigitSet::from_iter([2, 3, 4]);

        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.intersection(b).len(), 2);
        assert_eq!(a.difference(b).len(), 1);
    }

    #[test]
    fn test_full() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::full(9).len(), 9);
        assert_eq!(DigitSet::full(32).len(), 32);

        for digit in 1..=9 {
            assert!(DigitSet::full(9).contains(digit));
        }
        assert!(!DigitSet::full(9).contains(10));
    }

    #[test]
    fn test_remove() {
        let mut set = DigitSet::from_iter([2, 4]);
        set.remove(2);
        assert!(!set.contains(2));
        assert!(set.contains(4));
    }

    proptest! {
        #[test]
        fn test_matches_btreeset_model(digits in proptest::collection::vec(1u8..=32, 0..20)) {
            let set = DigitSet::from_iter(digits.iter().copied());
            let model: BTreeSet<u8> = digits.iter().copied().collect();

            prop_assert_eq!(set.len(), model.len());
            let collected: Vec<_> = set.iter().collect();
            let expected: Vec<_> = model.iter().copied().collect();
            prop_assert_eq!(collected, expected);
            for digit in 1..=32 {
                prop_assert_eq!(set.contains(digit), model.contains(&digit));
            }
        }

        #[test]
        fn test_set_algebra(
            a in proptest::collection::vec(1u8..=32, 0..20),
            b in proptest::collection::vec(1u8..=32, 0..20),
        ) {
            let sa = DigitSet::from_iter(a.iter().copied());
            let sb = DigitSet::from_iter(b.iter().copied());
            let ma: BTreeSet<u8> = a.into_iter().collect();
            let mb: BTreeSet<u8> = b.into_iter().collect();

            prop_assert_eq!((sa | sb).len(), ma.union(&mb).count());
            prop_assert_eq!((sa & sb).len(), ma.intersection(&mb).count());
            prop_assert_eq!(sa.difference(sb).len(), ma.difference(&mb).count());
        }
    }
}
