//! Values, from which note lengths are built.
//!
//! A [BaseValue] is one of twelve power-of-two lengths, from maxima
//! down to 1/256. A [Duration] adds augmentation dots to it. Relative
//! lengths are exact [Ratio]s, computed in [fraction_tools].

pub mod base_value;
pub mod duration;
pub mod fraction_tools;
pub mod ratio;

pub use base_value::BaseValue;
pub use duration::Duration;
pub use ratio::Ratio;

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum DurationError {
    #[error("Dot count can not be negative: {0}")]
    NegativeDotCount(isize),
}
pub type DurationResult<T> = Result<T, DurationError>;
