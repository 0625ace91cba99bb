use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::config::PasswordConfig;
use crate::error::Error;
use crate::pool::{CharClass, CharPools};

/// How many characters of each class go into a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassCounts {
    pub lowercase: usize,
    pub uppercase: usize,
    pub digit: usize,
}

impl ClassCounts {
    /// Rounds each proportion of the total length up to a whole count and
    /// gives the remainder to lowercase.
    pub fn from_config(config: &PasswordConfig) -> Result<Self, Error> {
        let total = config.total_length();
        let uppercase = proportion_count(total, config.uppercase_proportion());
        let digit = proportion_count(total, config.digit_proportion());

        // Two ceilings can overshoot even when the proportions sum to at most 1.
        let lowercase = total
            .checked_sub(uppercase + digit)
            .ok_or(Error::ClassCountOverflow { uppercase, digit, total })?;

        Ok(Self { lowercase, uppercase, digit })
    }

    pub fn get(&self, class: CharClass) -> usize {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digit => self.digit,
        }
    }

    pub fn total(&self) -> usize {
        self.lowercase + self.uppercase + self.digit
    }
}

#[inline]
fn proportion_count(total: usize, proportion: f64) -> usize {
    (total as f64 * proportion).ceil() as usize
}

/// Draws `counts` characters with replacement from `pools`, then shuffles
/// them into a uniformly random order.
pub fn sample<R: Rng + ?Sized>(
    pools: &CharPools,
    counts: &ClassCounts,
    rng: &mut R,
) -> Result<Vec<char>, Error> {
    let mut sampled = Vec::with_capacity(counts.total());

    for class in CharClass::ALL {
        let required = counts.get(class);
        if required == 0 {
            continue;
        }

        let pool = pools.get(class);
        if pool.is_empty() {
            return Err(Error::EmptyPool { class, required });
        }

        debug!(%class, required, pool_size = pool.len(), "sampling class");
        let chars = pool.chars();
        sampled.extend((0..required).map(|_| chars[rng.gen_range(0..chars.len())]));
    }

    sampled.shuffle(rng);
    Ok(sampled)
}
