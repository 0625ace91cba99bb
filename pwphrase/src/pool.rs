use std::fmt;

/// Characters that are easy to confuse with one another in many fonts.
pub const AMBIGUOUS_CHARS: &str = "iIlL1oO0";

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
}

impl CharClass {
    pub const ALL: [CharClass; 3] = [CharClass::Lowercase, CharClass::Uppercase, CharClass::Digit];

    /// The full alphabet of this class, in ASCII order.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digit",
        })
    }
}

/// Allowed characters for one class. May be empty after exclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharPool {
    class: CharClass,
    chars: Vec<char>,
}

impl CharPool {
    /// Builds the pool for `class`, dropping every character found in `excluded`.
    pub fn new(class: CharClass, excluded: &str) -> Self {
        let chars = class.alphabet().chars().filter(|c| !excluded.contains(*c)).collect();
        Self { class, chars }
    }

    pub fn class(&self) -> CharClass {
        self.class
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// One pool per character class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharPools {
    lowercase: CharPool,
    uppercase: CharPool,
    digit: CharPool,
}

impl CharPools {
    /// Full alphabets, or alphabets minus [`AMBIGUOUS_CHARS`].
    pub fn new(exclude_ambiguous: bool) -> Self {
        Self::excluding(if exclude_ambiguous { AMBIGUOUS_CHARS } else { "" })
    }

    /// Alphabets minus an arbitrary set of characters. Characters outside
    /// every alphabet are ignored.
    pub fn excluding(excluded: &str) -> Self {
        Self {
            lowercase: CharPool::new(CharClass::Lowercase, excluded),
            uppercase: CharPool::new(CharClass::Uppercase, excluded),
            digit: CharPool::new(CharClass::Digit, excluded),
        }
    }

    pub fn get(&self, class: CharClass) -> &CharPool {
        match class {
            CharClass::Lowercase => &self.lowercase,
            CharClass::Uppercase => &self.uppercase,
            CharClass::Digit => &self.digit,
        }
    }
}
