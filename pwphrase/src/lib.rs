//! Random passwords in the style of the iCloud Keychain suggestions.
//!
//! A password is made of one or more fixed-length phrases joined by a
//! separator, e.g. `ab3dFg-91xzQa-mN4kLp`. The number of uppercase letters and
//! digits is not left to chance: each is a fixed proportion of the total
//! length, rounded up, and everything else is lowercase. Only which characters
//! are drawn and where they land is random.
//!
//! # Pipeline
//!
//! 1. [`PasswordConfig`] is validated once through its builder.
//! 2. [`CharPools`] holds the lowercase, uppercase and digit alphabets,
//!    optionally without the ambiguous characters `iIlL1oO0`.
//! 3. [`ClassCounts`] turns the proportions into exact per-class counts and
//!    [`sample`] draws them with replacement, then shuffles the result.
//! 4. [`join_phrases`] cuts the shuffled characters into phrases.
//!
//! # Usage
//!
//! ```
//! use pwphrase::{PasswordConfig, generate};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = PasswordConfig::builder()
//!     .phrase_length(8)
//!     .phrase_count(1)
//!     .uppercase_proportion(0.0)
//!     .digit_proportion(1.0)
//!     .build()
//!     .unwrap();
//!
//! let pin = generate(&config, &mut StdRng::seed_from_u64(7)).unwrap();
//! assert_eq!(pin.len(), 8);
//! assert!(pin.chars().all(|c| c.is_ascii_digit()));
//! ```
//!
//! The randomness comes from [`rand`]; it is a general-purpose generator, not
//! an audited source for key material.

use rand::Rng;
use tracing::{debug, instrument};

pub mod config;
pub mod error;
pub mod format;
pub mod pool;
pub mod sampler;

pub use config::{PasswordConfig, PasswordConfigBuilder};
pub use error::Error;
pub use format::join_phrases;
pub use pool::{AMBIGUOUS_CHARS, CharClass, CharPool, CharPools};
pub use sampler::{ClassCounts, sample};

/// Generates one password for `config`, drawing randomness from `rng`.
///
/// The same configuration and an identically seeded `rng` always produce the
/// same password.
#[instrument(level = "debug", skip(rng), fields(total_length = config.total_length()))]
pub fn generate<R: Rng + ?Sized>(config: &PasswordConfig, rng: &mut R) -> Result<String, Error> {
    let counts = ClassCounts::from_config(config)?;
    debug!(
        lowercase = counts.lowercase,
        uppercase = counts.uppercase,
        digit = counts.digit,
        "computed class counts"
    );

    let pools = CharPools::new(config.exclude_ambiguous());
    let sampled = sample(&pools, &counts, rng)?;

    join_phrases(&sampled, config.phrase_length(), config.phrase_count(), config.separator())
}

/// Like [`generate`], using the thread-local generator seeded from OS entropy.
pub fn generate_from_entropy(config: &PasswordConfig) -> Result<String, Error> {
    generate(config, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn count_class(password: &str, class: CharClass) -> usize {
        password.chars().filter(|c| class.contains(*c)).count()
    }

    #[test]
    fn test_default_shape() {
        let config = PasswordConfig::default();
        let password = generate(&config, &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(password.chars().count(), 20);
        let phrases: Vec<&str> = password.split('-').collect();
        assert_eq!(phrases.len(), 3);
        assert!(phrases.iter().all(|p| p.len() == 6));
    }

    #[test]
    fn test_exclude_ambiguous_example() {
        // 6 x 3 with 0.1 / 0.1: 2 uppercase, 2 digits, 14 lowercase.
        let config = PasswordConfig::builder().exclude_ambiguous(true).build().unwrap();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..200 {
            let password = generate(&config, &mut rng).unwrap();
            assert_eq!(count_class(&password, CharClass::Uppercase), 2);
            assert_eq!(count_class(&password, CharClass::Digit), 2);
            assert_eq!(count_class(&password, CharClass::Lowercase), 14);
            assert!(!password.chars().any(|c| AMBIGUOUS_CHARS.contains(c)));
            assert_eq!(password.matches('-').count(), 2);
        }
    }

    #[test]
    fn test_pin_code() {
        let config = PasswordConfig::builder()
            .phrase_length(8)
            .phrase_count(1)
            .uppercase_proportion(0.0)
            .digit_proportion(1.0)
            .build()
            .unwrap();
        let password = generate(&config, &mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_shape_and_counts_across_layouts() {
        let mut rng = StdRng::seed_from_u64(5);
        let proportions = [(0.0, 0.0), (0.1, 0.1), (0.25, 0.5), (0.3, 0.3), (1.0, 0.0)];

        for length in [4, 7, 13, 25] {
            for count in 1..=3 {
                for (upper, digit) in proportions {
                    let config = PasswordConfig::builder()
                        .phrase_length(length)
                        .phrase_count(count)
                        .separator("_")
                        .uppercase_proportion(upper)
                        .digit_proportion(digit)
                        .build()
                        .unwrap();
                    let Ok(counts) = ClassCounts::from_config(&config) else {
                        continue;
                    };

                    let password = generate(&config, &mut rng).unwrap();
                    assert_eq!(password.chars().count(), config.password_length());
                    assert_eq!(password.matches('_').count(), count - 1);

                    let total = config.total_length() as f64;
                    assert_eq!(
                        count_class(&password, CharClass::Uppercase),
                        (total * upper).ceil() as usize
                    );
                    assert_eq!(
                        count_class(&password, CharClass::Digit),
                        (total * digit).ceil() as usize
                    );
                    assert_eq!(count_class(&password, CharClass::Lowercase), counts.lowercase);
                }
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = PasswordConfig::default();
        let a = generate(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_entropy_runs_differ() {
        let config = PasswordConfig::builder().phrase_length(25).build().unwrap();
        let a = generate_from_entropy(&config).unwrap();
        let b = generate_from_entropy(&config).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rounding_overflow_surfaces() {
        let config = PasswordConfig::builder()
            .phrase_length(5)
            .phrase_count(1)
            .uppercase_proportion(0.5)
            .digit_proportion(0.5)
            .build()
            .unwrap();
        let err = generate(&config, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, Error::ClassCountOverflow { .. }));
    }
}
