//! Catalog of the twelve canonical note values.
use std::{cmp::Ordering, fmt};

use super::Ratio;

/// Undotted note value. Its length is `2^exponent` whole notes.
///
/// Ordering compares lengths: `Quarter < Half`, `Large` is the
/// greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseValue {
    /// Maxima, 8 whole notes.
    Large,
    /// Longa, 4 whole notes.
    Long,
    /// Breve, 2 whole notes.
    DoubleWhole,
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    SixtyFourth,
    OneTwentyEighth,
    TwoFiftySixth,
}
impl BaseValue {
    /// All values, from the longest to the shortest.
    pub const ALL: [BaseValue; 12] = [
        Self::Large,
        Self::Long,
        Self::DoubleWhole,
        Self::Whole,
        Self::Half,
        Self::Quarter,
        Self::Eighth,
        Self::Sixteenth,
        Self::ThirtySecond,
        Self::SixtyFourth,
        Self::OneTwentyEighth,
        Self::TwoFiftySixth,
    ];

    pub const fn exponent(self) -> i32 {
        match self {
            Self::Large => 3,
            Self::Long => 2,
            Self::DoubleWhole => 1,
            Self::Whole => 0,
            Self::Half => -1,
            Self::Quarter => -2,
            Self::Eighth => -3,
            Self::Sixteenth => -4,
            Self::ThirtySecond => -5,
            Self::SixtyFourth => -6,
            Self::OneTwentyEighth => -7,
            Self::TwoFiftySixth => -8,
        }
    }

    pub fn from_exponent(exponent: i64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|value| value.exponent() as i64 == exponent)
    }

    /// Length in whole notes.
    pub fn magnitude(self) -> Ratio {
        Ratio::power_of_two(self.exponent() as i64)
    }

    /// Lower number of a time signature counting in this value.
    ///
    /// Values longer than a whole note can not be expressed by a
    /// time signature and return None.
    ///
    /// # Example
    /// ```
    /// # use note_duration::primitives::BaseValue;
    /// assert_eq!(BaseValue::Eighth.time_signature_denominator(), Some(8));
    /// assert_eq!(BaseValue::Whole.time_signature_denominator(), Some(1));
    /// assert_eq!(BaseValue::DoubleWhole.time_signature_denominator(), None);
    /// ```
    pub fn time_signature_denominator(self) -> Option<u32> {
        match self.exponent() {
            e if e > 0 => None,
            e => Some(1u32 << e.unsigned_abs()),
        }
    }

    /// Inverse of [BaseValue::time_signature_denominator].
    pub fn from_time_signature_denominator(denominator: u32) -> Option<Self> {
        if !denominator.is_power_of_two() {
            return None;
        }
        Self::from_exponent(-(denominator.trailing_zeros() as i64))
    }
}
impl PartialOrd for BaseValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BaseValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.exponent().cmp(&other.exponent())
    }
}
impl fmt::Display for BaseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exponent() {
            e if e >= 0 => write!(f, "{}", 1u32 << e),
            e => write!(f, "1/{}", 1u32 << e.unsigned_abs()),
        }
    }
}
