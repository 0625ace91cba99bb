use crate::pool::CharClass;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{option} must be in range [{min} .. {max}], got {value}")]
    OutOfRange {
        option: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error(
        "digit and uppercase proportions cannot exceed 1 in total \
         (uppercase {uppercase} + digit {digit})"
    )]
    ProportionSum { uppercase: f64, digit: f64 },

    #[error(
        "rounded-up class counts ({uppercase} uppercase + {digit} digit) exceed the \
         password length of {total} characters"
    )]
    ClassCountOverflow {
        uppercase: usize,
        digit: usize,
        total: usize,
    },

    #[error("no characters left in the {class} pool, but {required} required")]
    EmptyPool { class: CharClass, required: usize },

    #[error("expected {expected} characters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl Error {
    /// Builds an [`Error::OutOfRange`] from any displayable bound type.
    pub(crate) fn out_of_range<T: std::fmt::Display>(
        option: &'static str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        Self::OutOfRange {
            option,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// True for errors caused by the caller's configuration rather than by
    /// character pool exhaustion or an internal inconsistency.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::ProportionSum { .. } | Self::ClassCountOverflow { .. }
        )
    }
}
