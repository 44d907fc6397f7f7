//! Stress encoding: pronunciations to binary stress strings.
//!
//! A stress string holds one character per syllable, `1` for a stressed
//! vowel and `0` for an unstressed one. Secondary stress (ARPAbet digit
//! `2`) is collapsed into primary stress.

use crate::dictionary::PhonemeDictionary;
use crate::syllables::count_syllables;

/// Which pronunciation's stress string to select for a polyphone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StressSelection {
    /// The first pronunciation listed in the dictionary.
    #[default]
    Primary,
    /// Every pronunciation, sorted by ascending length then lexically.
    All,
    /// The shortest pronunciation (fewest syllables; among same-length
    /// ties, the lexically smallest, i.e. latest primary stress).
    Min,
    /// The longest pronunciation (most syllables).
    Max,
}

/// Extract the stress string from a pronunciation's phoneme symbols:
/// keep only stress digits, folding secondary stress into primary.
fn stress_from_phones(phones: &[String]) -> String {
    phones
        .iter()
        .flat_map(|phone| phone.chars())
        .filter(|c| c.is_ascii_digit())
        .map(|c| if c == '2' { '1' } else { c })
        .collect()
}

/// Stress string for an out-of-vocabulary word: stress the first syllable
/// only. A zero syllable count yields the empty string.
fn fallback_stress(word: &str) -> String {
    let syllables = count_syllables(word);
    if syllables == 0 {
        return String::new();
    }
    let mut pattern = String::with_capacity(syllables);
    pattern.push('1');
    for _ in 1..syllables {
        pattern.push('0');
    }
    pattern
}

/// Compute the stress string of `word` from its first listed
/// pronunciation, falling back to a syllable-count estimate when the
/// dictionary has no entry.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(stress_pattern(&dict, "border"), "10");
/// ```
pub fn stress_pattern(dict: &PhonemeDictionary, word: &str) -> String {
    match dict.lookup(word) {
        Some(prons) => stress_from_phones(prons[0].phones()),
        None => fallback_stress(word),
    }
}

/// Compute stress strings for `word` under a selection policy.
///
/// `Primary`, `Min`, and `Max` yield one string; `All` yields every
/// pronunciation's string sorted lexically and then (stably) by ascending
/// length. On a dictionary miss every policy yields the single fallback
/// string.
pub fn stress_patterns(
    dict: &PhonemeDictionary,
    word: &str,
    selection: StressSelection,
) -> Vec<String> {
    let Some(prons) = dict.lookup(word) else {
        return vec![fallback_stress(word)];
    };

    match selection {
        StressSelection::Primary => vec![stress_from_phones(prons[0].phones())],
        _ => {
            let mut patterns: Vec<String> = prons
                .iter()
                .map(|pron| stress_from_phones(pron.phones()))
                .collect();
            patterns.sort();
            patterns.sort_by_key(String::len);

            match selection {
                StressSelection::Min => vec![patterns.remove(0)],
                StressSelection::Max => vec![patterns.pop().unwrap_or_default()],
                _ => patterns,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::PhonemeDictionary;

    fn dict() -> PhonemeDictionary {
        PhonemeDictionary::from_entries([
            ("border", vec![vec!["B", "AO1", "R", "D", "ER0"]]),
            ("create", vec![vec!["K", "R", "IY0", "EY1", "T"]]),
            (
                "beautiful",
                vec![vec!["B", "Y", "UW1", "T", "AH0", "F", "AH0", "L"]],
            ),
            (
                // Secondary stress folds into primary
                "understand",
                vec![vec!["AH2", "N", "D", "ER0", "S", "T", "AE1", "N", "D"]],
            ),
            (
                "interest",
                vec![
                    vec!["IH1", "N", "T", "R", "AH0", "S", "T"],
                    vec!["IH1", "N", "T", "ER0", "AH0", "S", "T"],
                ],
            ),
        ])
    }

    #[test]
    fn test_primary_stress() {
        let d = dict();
        assert_eq!(stress_pattern(&d, "border"), "10");
        assert_eq!(stress_pattern(&d, "create"), "01");
        assert_eq!(stress_pattern(&d, "beautiful"), "100");
    }

    #[test]
    fn test_secondary_collapses_to_primary() {
        assert_eq!(stress_pattern(&dict(), "understand"), "101");
    }

    #[test]
    fn test_stress_alphabet_and_length() {
        let d = dict();
        for word in ["border", "create", "beautiful", "understand"] {
            let pattern = stress_pattern(&d, word);
            assert!(pattern.chars().all(|c| c == '0' || c == '1'));
            let syllables = d.lookup(word).unwrap()[0]
                .phones()
                .iter()
                .filter(|p| p.chars().any(|c| c.is_ascii_digit()))
                .count();
            assert_eq!(pattern.len(), syllables);
        }
    }

    #[test]
    fn test_miss_fallback_stresses_first_syllable() {
        let d = dict();
        assert_eq!(stress_pattern(&d, "purple"), "10");
        assert_eq!(stress_patterns(&d, "purple", StressSelection::All), ["10"]);
    }

    #[test]
    fn test_miss_with_no_syllables_is_empty() {
        assert_eq!(stress_pattern(&dict(), "2000"), "");
    }

    #[test]
    fn test_min_max_all() {
        let d = dict();
        assert_eq!(
            stress_patterns(&d, "interest", StressSelection::All),
            ["10", "100"]
        );
        assert_eq!(stress_patterns(&d, "interest", StressSelection::Min), ["10"]);
        assert_eq!(stress_patterns(&d, "interest", StressSelection::Max), ["100"]);
    }
}
