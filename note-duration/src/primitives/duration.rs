//! Note value with augmentation dots.
use std::{cmp::Ordering, fmt};

use super::{
    fraction_tools::{augmented_magnitude, decompose_magnitude},
    BaseValue, DurationError, DurationResult, Ratio,
};

/// Base value with any number of augmentation dots.
///
/// Immutable and `Copy`. Equal durations have equal base and dots,
/// and different durations never share a length, so ordering by
/// length agrees with equality.
///
/// # Example
/// ```
/// # use note_duration::primitives::{BaseValue, Duration, Ratio};
/// let dotted_quarter = Duration::new(BaseValue::Quarter, 1)?;
/// assert_eq!(dotted_quarter.to_string(), "1/4.");
/// assert_eq!(
///     dotted_quarter.ratio_of(&Duration::EIGHTH),
///     Ratio::new(3u8, 1u8).unwrap()
/// );
/// # Ok::<(), note_duration::primitives::DurationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    base: BaseValue,
    dot_count: usize,
}
impl Duration {
    pub const LARGE: Self = Self::undotted(BaseValue::Large);
    pub const LONG: Self = Self::undotted(BaseValue::Long);
    pub const DOUBLE_WHOLE: Self = Self::undotted(BaseValue::DoubleWhole);
    pub const WHOLE: Self = Self::undotted(BaseValue::Whole);
    pub const HALF: Self = Self::undotted(BaseValue::Half);
    pub const QUARTER: Self = Self::undotted(BaseValue::Quarter);
    pub const EIGHTH: Self = Self::undotted(BaseValue::Eighth);
    pub const SIXTEENTH: Self = Self::undotted(BaseValue::Sixteenth);
    pub const THIRTY_SECOND: Self = Self::undotted(BaseValue::ThirtySecond);
    pub const SIXTY_FOURTH: Self = Self::undotted(BaseValue::SixtyFourth);
    pub const ONE_TWENTY_EIGHTH: Self =
        Self::undotted(BaseValue::OneTwentyEighth);
    pub const TWO_FIFTY_SIXTH: Self = Self::undotted(BaseValue::TwoFiftySixth);

    /// Make duration from base value and amount of dots.
    ///
    /// Dot count is kept as given, there is no upper limit.
    ///
    /// # Errors
    /// [DurationError::NegativeDotCount] if `dot_count < 0`.
    pub fn new(base: BaseValue, dot_count: isize) -> DurationResult<Self> {
        let dot_count = usize::try_from(dot_count).map_err(|_| {
            log::debug!("rejected {base:?} with {dot_count} dots");
            DurationError::NegativeDotCount(dot_count)
        })?;
        Ok(Self { base, dot_count })
    }
    pub const fn undotted(base: BaseValue) -> Self {
        Self { base, dot_count: 0 }
    }
    pub fn base(&self) -> BaseValue {
        self.base
    }
    pub fn dot_count(&self) -> usize {
        self.dot_count
    }

    /// Length in whole notes, dots included.
    pub fn magnitude(&self) -> Ratio {
        Ratio::from(augmented_magnitude(self.base.exponent(), self.dot_count))
    }

    /// Find duration, which length is exactly `magnitude` whole notes.
    ///
    /// # Example
    /// ```
    /// # use note_duration::primitives::{BaseValue, Duration, Ratio};
    /// let three_eighths = Ratio::new(3u8, 8u8).unwrap();
    /// assert_eq!(
    ///     Duration::from_magnitude(&three_eighths),
    ///     Some(Duration::new(BaseValue::Quarter, 1).unwrap())
    /// );
    /// assert_eq!(Duration::from_magnitude(&Ratio::new(5u8, 8u8).unwrap()), None);
    /// ```
    pub fn from_magnitude(magnitude: &Ratio) -> Option<Self> {
        let (exponent, dot_count) =
            decompose_magnitude(magnitude.numer()?, magnitude.denom()?)?;
        Some(Self {
            base: BaseValue::from_exponent(exponent)?,
            dot_count,
        })
    }

    /// How many of `other` fit in `self`.
    ///
    /// Equal dot counts cancel out and the result is the power of two
    /// between the base values. Otherwise both lengths are computed
    /// exactly and divided.
    ///
    /// `a.ratio_of(&b) * b.ratio_of(&a)` is always exactly 1.
    pub fn ratio_of(&self, other: &Self) -> Ratio {
        if self.dot_count == other.dot_count {
            let exponent =
                self.base.exponent() as i64 - other.base.exponent() as i64;
            log::trace!("{self} to {other}: 2^{exponent}");
            return Ratio::power_of_two(exponent);
        }
        let ratio = self.magnitude() * other.magnitude().recip();
        log::trace!("{self} to {other}: {ratio}");
        ratio
    }

    /// Ignores dots.
    pub fn time_signature_denominator(&self) -> Option<u32> {
        self.base.time_signature_denominator()
    }
}
impl From<BaseValue> for Duration {
    fn from(base: BaseValue) -> Self {
        Self::undotted(base)
    }
}
impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Duration {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.dot_count == other.dot_count {
            return self.base.cmp(&other.base);
        }
        self.magnitude().cmp(&other.magnitude())
    }
}
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, ".".repeat(self.dot_count))
    }
}
