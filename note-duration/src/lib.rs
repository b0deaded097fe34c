//! Rhythmic note values: base values, augmentation dots, exact
//! relative lengths and their notation.
//!
//! ```
//! use note_duration::primitives::{BaseValue, Duration, Ratio};
//!
//! let quarter = Duration::QUARTER;
//! assert_eq!(quarter.ratio_of(&Duration::WHOLE), Ratio::new(1u8, 4u8).unwrap());
//! assert_eq!(Duration::new(BaseValue::SixtyFourth, 3)?.to_string(), "1/64...");
//! assert_eq!(BaseValue::TwoFiftySixth.time_signature_denominator(), Some(256));
//! # Ok::<(), note_duration::primitives::DurationError>(())
//! ```

pub mod lilypond_render;
pub mod primitives;

pub use primitives::{BaseValue, Duration, DurationError, DurationResult, Ratio};
