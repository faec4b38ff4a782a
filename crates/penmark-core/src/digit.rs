//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A Sudoku digit in the range 1-9.
///
/// The enum representation makes invalid digits unrepresentable; puzzle
/// parsing goes through [`Digit::from_char`], which is the only place the
/// blank symbols (`'0'` and `'.'`) are relevant.
///
/// # Examples
///
/// ```
/// use penmark_core::Digit;
///
/// let digit = Digit::from_value(7);
/// assert_eq!(digit, Digit::D7);
/// assert_eq!(digit.value(), 7);
///
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All digits, ascending from 1 to 9.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9. Use
    /// [`Digit::try_from_value`] for untrusted input.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value)
            .unwrap_or_else(|| panic!("digit value out of range: {value}"))
    }

    /// Creates a digit from a value, returning `None` outside 1-9.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Creates a digit from a puzzle-string character, returning `None` for
    /// anything outside `'1'..='9'`.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1'..='9' => Self::try_from_value(ch as u8 - b'0'),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_round_trip() {
        for digit in Digit::ALL {
            assert_eq!(Digit::from_value(digit.value()), digit);
            assert_eq!(Digit::try_from_value(digit.value()), Some(digit));
        }
        assert_eq!(Digit::try_from_value(0), None);
        assert_eq!(Digit::try_from_value(10), None);
    }

    #[test]
    fn from_char_accepts_digits_only() {
        assert_eq!(Digit::from_char('1'), Some(Digit::D1));
        assert_eq!(Digit::from_char('9'), Some(Digit::D9));
        assert_eq!(Digit::from_char('0'), None);
        assert_eq!(Digit::from_char('.'), None);
        assert_eq!(Digit::from_char('x'), None);
    }

    #[test]
    fn all_is_ascending() {
        assert_eq!(Digit::ALL.len(), 9);
        for window in Digit::ALL.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    #[should_panic(expected = "digit value out of range: 10")]
    fn from_value_rejects_ten() {
        let _ = Digit::from_value(10);
    }

    #[test]
    fn display_matches_value() {
        assert_eq!(format!("{}", Digit::D4), "4");
    }
}
