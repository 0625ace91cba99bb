use std::ops::RangeInclusive;

use crate::error::Error;

/// Allowed length of a single phrase.
pub const PHRASE_LENGTH_RANGE: RangeInclusive<usize> = 4..=25;

/// Allowed number of phrases.
pub const PHRASE_COUNT_RANGE: RangeInclusive<usize> = 1..=3;

/// Allowed value of each character class proportion.
pub const PROPORTION_RANGE: RangeInclusive<f64> = 0.0..=1.0;

pub const DEFAULT_PHRASE_LENGTH: usize = 6;
pub const DEFAULT_PHRASE_COUNT: usize = 3;
pub const DEFAULT_SEPARATOR: &str = "-";
pub const DEFAULT_PROPORTION: f64 = 0.1;

/// A validated password layout.
///
/// Values of this type always satisfy the documented ranges and the
/// `uppercase_proportion + digit_proportion <= 1` invariant. The only way to
/// obtain one besides [`Default`] is [`PasswordConfigBuilder::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordConfig {
    phrase_length: usize,
    phrase_count: usize,
    separator: String,
    uppercase_proportion: f64,
    digit_proportion: f64,
    exclude_ambiguous: bool,
}

impl PasswordConfig {
    pub fn builder() -> PasswordConfigBuilder {
        PasswordConfigBuilder::default()
    }

    pub fn phrase_length(&self) -> usize {
        self.phrase_length
    }

    pub fn phrase_count(&self) -> usize {
        self.phrase_count
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn uppercase_proportion(&self) -> f64 {
        self.uppercase_proportion
    }

    pub fn digit_proportion(&self) -> f64 {
        self.digit_proportion
    }

    pub fn exclude_ambiguous(&self) -> bool {
        self.exclude_ambiguous
    }

    /// Number of sampled characters, separators excluded.
    pub fn total_length(&self) -> usize {
        self.phrase_length * self.phrase_count
    }

    /// Length of the rendered password in characters, separators included.
    pub fn password_length(&self) -> usize {
        self.total_length() + (self.phrase_count - 1) * self.separator.chars().count()
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            phrase_length: DEFAULT_PHRASE_LENGTH,
            phrase_count: DEFAULT_PHRASE_COUNT,
            separator: DEFAULT_SEPARATOR.to_string(),
            uppercase_proportion: DEFAULT_PROPORTION,
            digit_proportion: DEFAULT_PROPORTION,
            exclude_ambiguous: false,
        }
    }
}

/// Collects raw settings and checks them in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct PasswordConfigBuilder {
    inner: PasswordConfig,
}

impl Default for PasswordConfigBuilder {
    fn default() -> Self {
        Self { inner: PasswordConfig::default() }
    }
}

impl PasswordConfigBuilder {
    pub fn phrase_length(mut self, phrase_length: usize) -> Self {
        self.inner.phrase_length = phrase_length;
        self
    }

    pub fn phrase_count(mut self, phrase_count: usize) -> Self {
        self.inner.phrase_count = phrase_count;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.inner.separator = separator.into();
        self
    }

    pub fn uppercase_proportion(mut self, proportion: f64) -> Self {
        self.inner.uppercase_proportion = proportion;
        self
    }

    pub fn digit_proportion(mut self, proportion: f64) -> Self {
        self.inner.digit_proportion = proportion;
        self
    }

    pub fn exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.inner.exclude_ambiguous = exclude;
        self
    }

    /// Validates every field, then the proportion sum.
    pub fn build(self) -> Result<PasswordConfig, Error> {
        let config = self.inner;

        check_range("phrase_length", config.phrase_length, &PHRASE_LENGTH_RANGE)?;
        check_range("phrase_count", config.phrase_count, &PHRASE_COUNT_RANGE)?;
        check_range("uppercase_proportion", config.uppercase_proportion, &PROPORTION_RANGE)?;
        check_range("digit_proportion", config.digit_proportion, &PROPORTION_RANGE)?;

        if config.uppercase_proportion + config.digit_proportion > 1.0 {
            return Err(Error::ProportionSum {
                uppercase: config.uppercase_proportion,
                digit: config.digit_proportion,
            });
        }

        Ok(config)
    }
}

// NaN is never contained in a range, so it is rejected here as well.
fn check_range<T>(option: &'static str, value: T, range: &RangeInclusive<T>) -> Result<(), Error>
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::out_of_range(option, value, *range.start(), *range.end()))
    }
}
