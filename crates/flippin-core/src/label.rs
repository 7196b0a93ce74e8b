//! Tile label representation.

use std::fmt::{self, Display};

/// A tile label (color) in the range 0-2.
///
/// Pressing a tile advances its label to the [`next`](Label::next) one, wrapping
/// from 2 back to 0.
///
/// # Examples
///
/// ```
/// use flippin_core::Label;
///
/// let label = Label::from_value(2);
/// assert_eq!(label, Label::L2);
/// assert_eq!(label.next(), Label::L0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Label {
    /// The first label.
    #[default]
    L0 = 0,
    /// The second label.
    L1 = 1,
    /// The third label.
    L2 = 2,
}

impl Label {
    /// Array containing all labels in order.
    pub const ALL: [Self; 3] = [Self::L0, Self::L1, Self::L2];

    /// Creates a label from a value in the range 0-2.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 0-2.
    ///
    /// ```should_panic
    /// use flippin_core::Label;
    ///
    /// let _ = Label::from_value(3);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid label value: {value}"))
    }

    /// Creates a label from a value, returning `None` if it is not in the range 0-2.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::L0),
            1 => Some(Self::L1),
            2 => Some(Self::L2),
            _ => None,
        }
    }

    /// Creates a label from its state-string character (`'0'`, `'1'`, or `'2'`).
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Self::L0),
            '1' => Some(Self::L1),
            '2' => Some(Self::L2),
            _ => None,
        }
    }

    /// Returns the numeric value of this label (0-2).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the label after one press.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::L0 => Self::L1,
            Self::L1 => Self::L2,
            Self::L2 => Self::L0,
        }
    }

    /// Returns the label after `presses` presses.
    #[must_use]
    pub const fn advance(self, presses: u8) -> Self {
        match (self.value() + presses % 3) % 3 {
            0 => Self::L0,
            1 => Self::L1,
            _ => Self::L2,
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> u8 {
        label.value()
    }
}

impl From<Label> for i64 {
    fn from(label: Label) -> i64 {
        i64::from(label.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        for label in Label::ALL {
            assert_eq!(Label::from_value(label.value()), label);
        }
        assert_eq!(Label::try_from_value(3), None);
        assert_eq!(Label::from_char('1'), Some(Label::L1));
        assert_eq!(Label::from_char('3'), None);
        assert_eq!(Label::from_char('a'), None);

        assert_eq!(format!("{}", Label::L2), "2");
        let value: u8 = Label::L1.into();
        assert_eq!(value, 1);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Label::L0.next(), Label::L1);
        assert_eq!(Label::L1.next(), Label::L2);
        assert_eq!(Label::L2.next(), Label::L0);
    }

    #[test]
    fn test_advance_matches_repeated_next() {
        for label in Label::ALL {
            let mut expected = label;
            for presses in 0..7 {
                assert_eq!(label.advance(presses), expected);
                expected = expected.next();
            }
        }
    }

    #[test]
    #[should_panic(expected = "Invalid label value: 3")]
    fn test_from_value_three_panics() {
        let _ = Label::from_value(3);
    }
}
