// WHY: single source for the English alphabet used by the count threshold and missing-letter reports

use std::collections::HashSet;

/// Number of letters in the English alphabet, and the distinct-character target
pub const ALPHABET_SIZE: usize = 26;

/// Lowercase English letters in alphabetical order
pub const ENGLISH_ALPHABET: [char; ALPHABET_SIZE] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Letters of the English alphabet not present in `seen` in either case
pub fn missing_letters(seen: &HashSet<char>) -> Vec<char> {
    ENGLISH_ALPHABET
        .iter()
        .copied()
        .filter(|letter| !seen.contains(letter) && !seen.contains(&letter.to_ascii_uppercase()))
        .collect()
}
