use crate::error::Error;

/// Splits `chars` into `phrase_count` phrases of `phrase_length` characters
/// and joins them with `separator`.
///
/// `chars` must hold exactly `phrase_length * phrase_count` characters, so no
/// phrase is ever short and nothing is left over.
pub fn join_phrases(
    chars: &[char],
    phrase_length: usize,
    phrase_count: usize,
    separator: &str,
) -> Result<String, Error> {
    let expected = phrase_length * phrase_count;
    if chars.len() != expected || phrase_length == 0 {
        return Err(Error::LengthMismatch { expected, actual: chars.len() });
    }

    let mut password =
        String::with_capacity(expected + separator.len() * phrase_count.saturating_sub(1));
    for (i, phrase) in chars.chunks_exact(phrase_length).enumerate() {
        if i > 0 {
            password.push_str(separator);
        }
        password.extend(phrase);
    }

    Ok(password)
}
