// WHY: standalone normalization so the checker and callers share one definition of what gets counted
// Buffer variant lets batch callers reuse a single allocation across sentences

use super::{CaseMode, CharacterFilter, PangramRules, WhitespacePolicy};

/// Apply the rules to `text`, returning only the characters that are counted
pub fn normalize_for_check(text: &str, rules: &PangramRules) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_for_check_into(text, rules, &mut result);
    result
}

/// Normalize into supplied buffer to avoid allocation
pub fn normalize_for_check_into(text: &str, rules: &PangramRules, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    for ch in text.chars() {
        let removed = match rules.whitespace {
            WhitespacePolicy::SpaceOnly => ch == ' ',
            WhitespacePolicy::AllWhitespace => ch.is_whitespace(),
        };
        if removed {
            continue;
        }

        if rules.characters == CharacterFilter::AsciiLettersOnly && !ch.is_ascii_alphabetic() {
            continue;
        }

        match rules.case {
            CaseMode::Sensitive => buffer.push(ch),
            CaseMode::Insensitive => buffer.push(ch.to_ascii_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_strips_spaces_only() {
        let rules = PangramRules::default();
        assert_eq!(normalize_for_check("leet code", &rules), "leetcode");
        assert_eq!(normalize_for_check("tab\there\nnow", &rules), "tab\there\nnow");
        assert_eq!(normalize_for_check("Mixed Case!", &rules), "MixedCase!");
    }

    #[test]
    fn test_all_whitespace_policy() {
        let rules = PangramRules {
            whitespace: WhitespacePolicy::AllWhitespace,
            ..Default::default()
        };
        assert_eq!(normalize_for_check(" a\tb\r\nc\u{00A0}d ", &rules), "abcd");
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        let rules = PangramRules {
            case: CaseMode::Insensitive,
            ..Default::default()
        };
        assert_eq!(normalize_for_check("ABC É", &rules), "abcÉ");
        assert_eq!(normalize_for_check("HeLLo", &rules), "hello");
    }

    #[test]
    fn test_ascii_letters_only() {
        let rules = PangramRules {
            characters: CharacterFilter::AsciiLettersOnly,
            ..Default::default()
        };
        assert_eq!(normalize_for_check("a1,b2.c3 é", &rules), "abc");
    }

    #[test]
    fn test_conventional_rules() {
        let rules = PangramRules::conventional();
        assert_eq!(normalize_for_check("The Fox!\n42", &rules), "thefox");
    }

    #[test]
    fn test_normalize_into_buffer_reuse() {
        let rules = PangramRules::default();
        let mut buffer = String::new();

        normalize_for_check_into("first one", &rules, &mut buffer);
        assert_eq!(buffer, "firstone");

        normalize_for_check_into("b c", &rules, &mut buffer);
        assert_eq!(buffer, "bc");
    }

    #[test]
    fn test_normalize_empty() {
        let rules = PangramRules::conventional();
        assert_eq!(normalize_for_check("", &rules), "");
        assert_eq!(normalize_for_check("   \t", &rules), "");
    }
}
