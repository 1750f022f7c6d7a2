//! Bit-packed digit sets.

use std::{fmt, iter::FusedIterator};

use crate::Digit;

/// A set of [`Digit`]s backed by a nine-bit mask.
///
/// Membership tests and updates are single bit operations, so candidate
/// computations can build and query sets without allocating.
///
/// # Examples
///
/// ```
/// use lucidoku_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::EMPTY;
/// set.insert(Digit::D4);
/// set.insert(Digit::D8);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Digit::D4));
/// assert_eq!(set.iter().collect::<Vec<_>>(), [Digit::D4, Digit::D8]);
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit.
    pub const FULL: Self = Self(0x1ff);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Adds `digit` to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Removes `digit` from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::bit(digit);
    }

    /// Returns `true` if `digit` is in the set.
    #[inline]
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        (self.0 & Self::bit(digit)) != 0
    }

    /// Returns the number of digits in the set.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member when the set has exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucidoku_core::{Digit, DigitSet};
    ///
    /// let mut set = DigitSet::EMPTY;
    /// assert_eq!(set.as_single(), None);
    /// set.insert(Digit::D6);
    /// assert_eq!(set.as_single(), Some(Digit::D6));
    /// set.insert(Digit::D7);
    /// assert_eq!(set.as_single(), None);
    /// ```
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            Digit::new(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Digits {
        Digits(self.0)
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Digits;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

/// An iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Digits(u16);

impl Iterator for Digits {
    type Item = Digit;

    #[expect(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Digit::new(value)
    }

    #[expect(clippy::cast_possible_truncation)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Digits {}

impl FusedIterator for Digits {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_full() {
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(!DigitSet::EMPTY.contains(digit));
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn insert_and_remove() {
        let mut set = DigitSet::new();
        set.insert(Digit::D3);
        set.insert(Digit::D3);
        assert_eq!(set.len(), 1);
        assert!(set.contains(Digit::D3));
        set.remove(Digit::D3);
        assert!(set.is_empty());
        set.remove(Digit::D3);
        assert!(set.is_empty());
    }

    #[test]
    fn iterates_in_ascending_order() {
        let set: DigitSet = [Digit::D9, Digit::D1, Digit::D5, Digit::D3].into_iter().collect();
        let digits: Vec<_> = set.into_iter().collect();
        assert_eq!(digits, [Digit::D1, Digit::D3, Digit::D5, Digit::D9]);
    }

    #[test]
    fn iterator_len_is_exact() {
        let set: DigitSet = [Digit::D2, Digit::D7].into_iter().collect();
        let iter = set.iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.count(), 2);
    }

    #[test]
    fn as_single_requires_exactly_one() {
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::FULL.as_single(), None);
        let set: DigitSet = [Digit::D8].into_iter().collect();
        assert_eq!(set.as_single(), Some(Digit::D8));
    }

    #[test]
    fn debug_lists_values() {
        let set: DigitSet = [Digit::D1, Digit::D4].into_iter().collect();
        assert_eq!(format!("{set:?}"), "{1, 4}");
    }
}
