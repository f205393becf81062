// crates/core/src/classify.rs

/// The vowel set used for classification. Everything alphabetic outside this
/// set is a consonant.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Count the vowels in `text`, case-insensitively.
#[must_use]
pub fn count_vowels(text: &str) -> usize {
    text.chars().filter(|&c| is_vowel(c)).count()
}

/// Count the consonants in `text`: ASCII alphabetic characters outside the
/// vowel set. Non-letter characters are discarded.
#[must_use]
pub fn count_consonants(text: &str) -> usize {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .filter(|&c| !is_vowel(c))
        .count()
}
