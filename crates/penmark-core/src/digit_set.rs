//! A set of digits 1-9, stored as a 9-bit mask.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::Digit;

/// A set of [`Digit`]s backed by a `u16` bit mask.
///
/// Bits 0-8 represent digits 1-9 respectively. Iteration is always in
/// ascending digit order; no code may depend on any other order.
///
/// This is the storage type for candidate and anti-candidate marks, so
/// [`DigitSet::insert`] and [`DigitSet::remove`] report whether membership
/// actually changed; the mutation core uses this to decide whether a user
/// action committed anything.
///
/// # Examples
///
/// ```
/// use penmark_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// assert_eq!(candidates.len(), 8);
/// assert!(!candidates.contains(Digit::D5));
///
/// let pair = DigitSet::from_iter([Digit::D2, Digit::D7]);
/// assert_eq!(pair.as_single(), None);
/// assert_eq!(DigitSet::from_iter([Digit::D3]).as_single(), Some(Digit::D3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

const MASK: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all nine digits.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_digit(digit: Digit) -> Self {
        Self(1 << (digit.value() - 1))
    }

    /// Inserts a digit, returning `true` if it was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let bit = Self::from_digit(digit).0;
        let changed = self.0 & bit == 0;
        self.0 |= bit;
        changed
    }

    /// Removes a digit, returning `true` if it was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let bit = Self::from_digit(digit).0;
        let changed = self.0 & bit != 0;
        self.0 &= !bit;
        changed
    }

    /// Returns whether the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::from_digit(digit).0 != 0
    }

    /// Removes all digits.
    pub const fn clear(&mut self) {
        self.0 = 0;
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member if the set has exactly one, `None` otherwise.
    ///
    /// A cell whose candidate set answers `Some` here is a naked single.
    #[must_use]
    pub const fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            let value = self.0.trailing_zeros() as u8 + 1;
            Digit::try_from_value(value)
        } else {
            None
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for DigitSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DigitSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for DigitSet {
    type Output = Self;
    fn not(self) -> Self {
        Self(!self.0 & MASK)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Ascending iterator over the digits of a [`DigitSet`].
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Digit::try_from_value(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}
