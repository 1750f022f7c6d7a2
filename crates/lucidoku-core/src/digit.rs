//! Sudoku digits `1` through `9`.

use std::fmt;

/// A Sudoku digit, `1` through `9`.
///
/// The discriminant equals the numeric value, so converting to `u8` is free.
///
/// # Examples
///
/// ```
/// use lucidoku_core::Digit;
///
/// let digit = Digit::new(5).unwrap();
/// assert_eq!(digit.value(), 5);
/// assert_eq!(digit.to_string(), "5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit `1`.
    D1 = 1,
    /// The digit `2`.
    D2 = 2,
    /// The digit `3`.
    D3 = 3,
    /// The digit `4`.
    D4 = 4,
    /// The digit `5`.
    D5 = 5,
    /// The digit `6`.
    D6 = 6,
    /// The digit `7`.
    D7 = 7,
    /// The digit `8`.
    D8 = 8,
    /// The digit `9`.
    D9 = 9,
}

impl Digit {
    /// All digits in ascending order.
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

    /// Creates a digit from its numeric value.
    ///
    /// Returns `None` unless `value` is in `1..=9`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucidoku_core::Digit;
    ///
    /// assert_eq!(Digit::new(3), Some(Digit::D3));
    /// assert_eq!(Digit::new(0), None);
    /// assert_eq!(Digit::new(10), None);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
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

    /// Returns the numeric value of the digit.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <u8 as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(value)
            .ok_or_else(|| serde::de::Error::custom(format!("digit out of range: {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_one_through_nine() {
        for value in 1..=9 {
            let digit = Digit::new(value).unwrap();
            assert_eq!(digit.value(), value);
        }
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(Digit::new(0), None);
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(255), None);
    }

    #[test]
    fn all_is_ascending() {
        for (digit, value) in Digit::ALL.iter().zip(1u8..) {
            assert_eq!(digit.value(), value);
        }
    }

    #[test]
    fn display_matches_value() {
        assert_eq!(Digit::D7.to_string(), "7");
        assert_eq!(u8::from(Digit::D2), 2);
    }
}
