//! Exact power-of-two helpers for musical lengths.
//!
//! Every catalog length is `2^e` whole notes and every dot multiplier
//! is `(2^(n+1) - 1) / 2^n`, so all the arithmetic here stays inside
//! big unsigned integers and shifts.

use fraction::{BigFraction, BigUint};

pub(crate) fn one() -> BigUint {
    BigUint::from(1u8)
}

/// `2^exponent` as a big integer.
pub fn power_of_two(exponent: u64) -> BigUint {
    one() << exponent
}

/// `2^exponent` as an exact fraction. Negative exponents give `1/2^-e`.
pub fn signed_power_of_two(exponent: i64) -> BigFraction {
    let shifted = power_of_two(exponent.unsigned_abs());
    if exponent < 0 {
        BigFraction::new(one(), shifted)
    } else {
        BigFraction::new(shifted, one())
    }
}

/// Exponent `k` if `num == 2^k`.
///
/// # Example
/// ```
/// # use fraction::BigUint;
/// # use note_duration::primitives::fraction_tools::power_of_two_exponent;
/// assert_eq!(power_of_two_exponent(&BigUint::from(64u32)), Some(6));
/// assert_eq!(power_of_two_exponent(&BigUint::from(1u32)), Some(0));
/// assert_eq!(power_of_two_exponent(&BigUint::from(12u32)), None);
/// assert_eq!(power_of_two_exponent(&BigUint::from(0u32)), None);
/// ```
pub fn power_of_two_exponent(num: &BigUint) -> Option<u64> {
    let bits = num.bits();
    if bits == 0 {
        return None;
    }
    (*num == power_of_two(bits - 1)).then(|| bits - 1)
}

/// Numerator of the dot multiplier: `2^(n+1) - 1`.
///
/// Zero dots give 1, one dot 3, two dots 7, and so on.
pub fn dots_numerator(dot_count: usize) -> BigUint {
    power_of_two(dot_count as u64 + 1) - one()
}

/// Length multiplier of `dot_count` augmentation dots.
///
/// Each dot adds half of the previous increment, so the multiplier is
/// `2 - 2^(-n)`, kept exact as `(2^(n+1) - 1) / 2^n`.
///
/// # Example
/// ```
/// # use fraction::BigFraction;
/// # use note_duration::primitives::fraction_tools::dot_multiplier;
/// assert_eq!(dot_multiplier(0), BigFraction::new(1u8, 1u8));
/// assert_eq!(dot_multiplier(1), BigFraction::new(3u8, 2u8));
/// assert_eq!(dot_multiplier(3), BigFraction::new(15u8, 8u8));
/// ```
pub fn dot_multiplier(dot_count: usize) -> BigFraction {
    BigFraction::new(
        dots_numerator(dot_count),
        power_of_two(dot_count as u64),
    )
}

/// Length in whole notes of a base value `2^exponent` with
/// `dot_count` dots.
pub fn augmented_magnitude(exponent: i32, dot_count: usize) -> BigFraction {
    signed_power_of_two(exponent as i64) * dot_multiplier(dot_count)
}

/// Split a magnitude back into `(exponent, dot_count)`.
///
/// Returns None if the fraction is not of the form
/// `2^e * (2^(n+1) - 1) / 2^n`.
pub fn decompose_magnitude(
    numer: &BigUint,
    denom: &BigUint,
) -> Option<(i64, usize)> {
    let twos_in_numer = numer.trailing_zeros()?;
    let odd = numer >> twos_in_numer;
    let twos_in_denom = power_of_two_exponent(denom)?;
    // odd part must be 2^(n+1) - 1
    let dots = power_of_two_exponent(&(odd + one()))?.checked_sub(1)?;
    let dot_count = usize::try_from(dots).ok()?;
    let exponent = twos_in_numer as i64 - twos_in_denom as i64 + dots as i64;
    Some((exponent, dot_count))
}
