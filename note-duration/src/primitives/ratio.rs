use std::{fmt, ops::Mul};

use fraction::{BigFraction, BigUint};

use super::fraction_tools::{one, power_of_two_exponent, signed_power_of_two};

/// Exact relative length of two durations.
///
/// Backed by a big-integer fraction, so any dot count keeps the
/// result lossless. Always reduced and non-negative.
///
/// # Example
/// ```
/// # use note_duration::primitives::Ratio;
/// let third = Ratio::new(4u8, 3u8).unwrap();
/// assert_eq!(third.to_string(), "4/3");
/// assert_eq!(third.clone() * third.recip(), Ratio::from_integer(1u8));
/// assert_eq!(Ratio::power_of_two(-2).to_string(), "1/4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ratio {
    fraction: BigFraction,
}
impl Ratio {
    /// None if the denominator is zero.
    pub fn new(
        numer: impl Into<BigUint>,
        denom: impl Into<BigUint>,
    ) -> Option<Self> {
        let denom = denom.into();
        if denom.bits() == 0 {
            return None;
        }
        Some(Self {
            fraction: BigFraction::new(numer.into(), denom),
        })
    }
    pub fn from_integer(value: impl Into<BigUint>) -> Self {
        Self {
            fraction: BigFraction::new(value.into(), one()),
        }
    }
    /// `2^exponent`, exponent can be negative.
    pub fn power_of_two(exponent: i64) -> Self {
        Self {
            fraction: signed_power_of_two(exponent),
        }
    }
    pub fn get(&self) -> &BigFraction {
        &self.fraction
    }
    pub fn numer(&self) -> Option<&BigUint> {
        self.fraction.numer()
    }
    pub fn denom(&self) -> Option<&BigUint> {
        self.fraction.denom()
    }
    /// Multiplicative inverse. Zero stays zero.
    pub fn recip(&self) -> Self {
        match (self.numer(), self.denom()) {
            (Some(numer), Some(denom)) if numer.bits() > 0 => Self {
                fraction: BigFraction::new(denom.clone(), numer.clone()),
            },
            _ => self.clone(),
        }
    }
    /// Exponent `k` if the ratio is exactly `2^k`.
    pub fn power_of_two_exponent(&self) -> Option<i64> {
        let numer = power_of_two_exponent(self.numer()?)?;
        let denom = power_of_two_exponent(self.denom()?)?;
        match (numer, denom) {
            (n, 0) => Some(n as i64),
            (0, d) => Some(-(d as i64)),
            _ => None,
        }
    }
}
impl From<BigFraction> for Ratio {
    fn from(fraction: BigFraction) -> Self {
        Self { fraction }
    }
}
impl Mul for Ratio {
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            fraction: self.fraction * rhs.fraction,
        }
    }
    type Output = Self;
}
impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.numer(), self.denom()) {
            (Some(numer), Some(denom)) if *denom == one() => {
                write!(f, "{numer}")
            }
            (Some(numer), Some(denom)) => write!(f, "{numer}/{denom}"),
            _ => write!(f, "{}", self.fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use fraction::BigUint;

    use super::Ratio;

    #[test]
    fn ratio_new() {
        assert_eq!(Ratio::new(2u8, 8u8), Ratio::new(1u8, 4u8));
        assert_eq!(Ratio::new(1u8, 0u8), None);
        assert_eq!(Ratio::new(8u8, 2u8), Some(Ratio::from_integer(4u8)));
    }

    #[test]
    fn ratio_power_of_two() {
        assert_eq!(Ratio::power_of_two(2), Ratio::from_integer(4u8));
        assert_eq!(Ratio::power_of_two(-3), Ratio::new(1u8, 8u8).unwrap());
        assert_eq!(Ratio::power_of_two(-3).power_of_two_exponent(), Some(-3));
        assert_eq!(Ratio::power_of_two(0).power_of_two_exponent(), Some(0));
        assert_eq!(
            Ratio::new(4u8, 3u8).unwrap().power_of_two_exponent(),
            None
        );
        assert_eq!(
            Ratio::new(3u8, 4u8).unwrap().power_of_two_exponent(),
            None
        );
    }

    #[test]
    fn ratio_recip() {
        let a = Ratio::new(7u8, 12u8).unwrap();
        assert_eq!(a.recip(), Ratio::new(12u8, 7u8).unwrap());
        assert_eq!(a.clone() * a.recip(), Ratio::from_integer(1u8));
        let zero = Ratio::from_integer(0u8);
        assert_eq!(zero.recip(), zero);
    }

    #[test]
    fn ratio_order_and_display() {
        let quarter = Ratio::new(1u8, 4u8).unwrap();
        let dotted_quarter = Ratio::new(3u8, 8u8).unwrap();
        assert!(quarter < dotted_quarter);
        assert_eq!(dotted_quarter.to_string(), "3/8");
        assert_eq!(Ratio::from_integer(8u8).to_string(), "8");
        let huge = Ratio::from_integer(BigUint::from(1u8) << 200u64);
        assert_eq!(huge.power_of_two_exponent(), Some(200));
    }
}
