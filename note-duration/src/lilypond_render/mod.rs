//! Durations as LilyPond tokens.
use crate::primitives::{BaseValue, Duration};

pub trait RendersToLilypond {
    fn render_lilypond(&self) -> String;
}

impl RendersToLilypond for BaseValue {
    fn render_lilypond(&self) -> String {
        match self.time_signature_denominator() {
            Some(denom) => format!("{denom}"),
            None => match self {
                Self::DoubleWhole => r"\breve".to_string(),
                Self::Long => r"\longa".to_string(),
                _ => r"\maxima".to_string(),
            },
        }
    }
}

/// # Example
/// ```
/// # use note_duration::{lilypond_render::RendersToLilypond, primitives::*};
/// assert_eq!(Duration::new(BaseValue::Quarter, 1)?.render_lilypond(), "4.");
/// assert_eq!(
///     Duration::new(BaseValue::DoubleWhole, 2)?.render_lilypond(),
///     r"\breve.."
/// );
/// # Ok::<(), DurationError>(())
/// ```
impl RendersToLilypond for Duration {
    fn render_lilypond(&self) -> String {
        format!(
            "{}{}",
            self.base().render_lilypond(),
            ".".repeat(self.dot_count())
        )
    }
}
