// WHY: pure pangram predicate plus the rule set that controls normalization
// The decision rule is fixed (26 distinct characters); rules only change what is counted

use std::collections::HashSet;

pub mod alphabet;
pub mod normalization;

pub use alphabet::{missing_letters, ALPHABET_SIZE, ENGLISH_ALPHABET};
pub use normalization::{normalize_for_check, normalize_for_check_into};

/// Which whitespace characters are removed before counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitespacePolicy {
    /// Only the literal space character is removed; tabs and newlines are counted
    #[default]
    SpaceOnly,
    /// Every `char::is_whitespace` character is removed
    AllWhitespace,
}

/// Whether `'A'` and `'a'` count as one character or two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    Sensitive,
    /// ASCII case folding only
    Insensitive,
}

/// Which characters are eligible for the distinct-character set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterFilter {
    /// Digits, punctuation and any other non-removed character are counted
    #[default]
    AllCharacters,
    AsciiLettersOnly,
}

/// Normalization rules applied before the distinct-character count
///
/// `Default` is the distinct-count check: strip spaces only, compare
/// case-sensitively, count every remaining character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PangramRules {
    pub whitespace: WhitespacePolicy,
    pub case: CaseMode,
    pub characters: CharacterFilter,
}

impl PangramRules {
    /// Reference rules (same as `Default`)
    pub fn reference() -> Self {
        Self::default()
    }

    /// Natural-language definition: every English letter appears, in any case,
    /// ignoring whitespace and non-letters
    pub fn conventional() -> Self {
        Self {
            whitespace: WhitespacePolicy::AllWhitespace,
            case: CaseMode::Insensitive,
            characters: CharacterFilter::AsciiLettersOnly,
        }
    }
}

/// Outcome of analyzing one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PangramReport {
    /// Number of distinct characters after normalization
    pub distinct_chars: usize,
    pub is_pangram: bool,
    /// Lowercase English letters absent from the sentence in either case
    pub missing_letters: Vec<char>,
}

/// Pangram checker with configurable normalization rules
#[derive(Debug, Clone, Default)]
pub struct PangramChecker {
    rules: PangramRules,
}

impl PangramChecker {
    pub fn new(rules: PangramRules) -> Self {
        Self { rules }
    }

    /// Checker using the reference rules
    pub fn with_default_rules() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &PangramRules {
        &self.rules
    }

    /// True iff the sentence has exactly 26 distinct characters after normalization
    pub fn is_pangram(&self, sentence: &str) -> bool {
        self.distinct_chars(sentence).len() == ALPHABET_SIZE
    }

    /// Full analysis: distinct count, verdict and missing letters
    pub fn analyze(&self, sentence: &str) -> PangramReport {
        let seen = self.distinct_chars(sentence);
        PangramReport {
            distinct_chars: seen.len(),
            is_pangram: seen.len() == ALPHABET_SIZE,
            missing_letters: missing_letters(&seen),
        }
    }

    fn distinct_chars(&self, sentence: &str) -> HashSet<char> {
        let mut normalized = String::with_capacity(sentence.len());
        normalize_for_check_into(sentence, &self.rules, &mut normalized);
        normalized.chars().collect()
    }
}

/// Check a sentence with the reference rules
pub fn is_pangram(sentence: &str) -> bool {
    PangramChecker::with_default_rules().is_pangram(sentence)
}
