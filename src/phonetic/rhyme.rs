//! Rhyme matching over trailing phoneme slices.
//!
//! Two words rhyme at level `n` when, for some pair of their
//! pronunciations, the phoneme slices starting at the n-th-last vowel are
//! identical. The level auto-reduces for words with fewer vowels so that
//! monosyllables can still rhyme ("old" / "cold").

use crate::dictionary::PhonemeDictionary;
use crate::phonetic::is_vowel_phone;

/// Default rhyme level: compare from the second-to-last vowel.
pub const DEFAULT_RHYME_LEVEL: usize = 2;

/// Count the vowel phones in a pronunciation.
pub fn num_vowels<S: AsRef<str>>(phones: &[S]) -> usize {
    phones.iter().filter(|p| is_vowel_phone(p.as_ref())).count()
}

/// Locate the n-th vowel counting backward from the end of `phones`.
///
/// Returns the negative index of that vowel (so `-1` is the final phone),
/// or `None` when fewer than `n` vowels exist.
///
/// # Example
///
/// ```rust
/// use verseform::phonetic::rhyme::nth_last_vowel;
///
/// let border = ["B", "AO1", "R", "D", "ER0"];
/// assert_eq!(nth_last_vowel(&border, 1), Some(-1));
/// assert_eq!(nth_last_vowel(&border, 2), Some(-4));
/// assert_eq!(nth_last_vowel(&border, 3), None);
/// ```
pub fn nth_last_vowel<S: AsRef<str>>(phones: &[S], n: usize) -> Option<isize> {
    let mut vowel_count = 0;
    for i in 1..=phones.len() {
        if is_vowel_phone(phones[phones.len() - i].as_ref()) {
            vowel_count += 1;
            if vowel_count == n {
                return Some(-(i as isize));
            }
        }
    }
    None
}

// Works around a CMU notation quirk: word-final unstressed ER is treated
// as a plain R so r-colored endings can still match.
fn normalize_equivalents(phones: &[String]) -> Vec<&str> {
    phones
        .iter()
        .map(|phone| match phone.as_str() {
            "ER0" => "R",
            other => other,
        })
        .collect()
}

/// Slice `phones` from negative index `idx` to the end, with out-of-range
/// indices clamped to the whole slice.
fn tail_from<'a>(phones: &'a [&'a str], idx: isize) -> &'a [&'a str] {
    let start = phones.len() as isize + idx;
    if start <= 0 {
        phones
    } else {
        &phones[start as usize..]
    }
}

/// Decide whether two words rhyme by comparing the trailing `level`
/// syllables of every pronunciation pair.
///
/// The level reduces to a pronunciation's vowel count when the word is
/// too short for the requested level, and the reduction carries over to
/// the remaining candidate pronunciations. Words without dictionary
/// entries never rhyme. Symmetric for any fixed level.
pub fn rhymes(dict: &PhonemeDictionary, word1: &str, word2: &str, level: usize) -> bool {
    let Some(prons1) = dict.lookup(word1) else {
        return false;
    };
    let Some(prons2) = dict.lookup(word2) else {
        return false;
    };

    let mut level = level;

    for pron1 in prons1 {
        let phones1 = normalize_equivalents(pron1.phones());

        let vowels = num_vowels(&phones1);
        if vowels < level {
            level = vowels;
        }

        // Fewer vowels than the level (e.g. no vowels at all): this
        // pronunciation cannot anchor a rhyme
        let Some(idx) = nth_last_vowel(&phones1, level) else {
            continue;
        };
        let tail1 = tail_from(&phones1, idx);

        for pron2 in prons2 {
            let phones2 = normalize_equivalents(pron2.phones());
            if tail1 == tail_from(&phones2, idx) {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::PhonemeDictionary;

    fn dict() -> PhonemeDictionary {
        PhonemeDictionary::from_entries([
            ("berate", vec![vec!["B", "ER0", "EY1", "T"]]),
            ("create", vec![vec!["K", "R", "IY0", "EY1", "T"]]),
            ("junction", vec![vec!["JH", "AH1", "NG", "K", "SH", "AH0", "N"]]),
            ("function", vec![vec!["F", "AH1", "NG", "K", "SH", "AH0", "N"]]),
            ("old", vec![vec!["OW1", "L", "D"]]),
            ("cold", vec![vec!["K", "OW1", "L", "D"]]),
            ("prep", vec![vec!["P", "R", "EH1", "P"]]),
            ("stop", vec![vec!["S", "T", "AA1", "P"]]),
            (
                "conduct",
                vec![
                    vec!["K", "AA0", "N", "D", "AH1", "K", "T"],
                    vec!["K", "AA1", "N", "D", "AH0", "K", "T"],
                ],
            ),
            (
                "abstract",
                vec![
                    vec!["AE0", "B", "S", "T", "R", "AE1", "K", "T"],
                    vec!["AE1", "B", "S", "T", "R", "AE2", "K", "T"],
                ],
            ),
            ("border", vec![vec!["B", "AO1", "R", "D", "ER0"]]),
            (
                "beautiful",
                vec![vec!["B", "Y", "UW1", "T", "AH0", "F", "AH0", "L"]],
            ),
        ])
    }

    #[test]
    fn test_num_vowels() {
        let d = dict();
        assert_eq!(num_vowels(d.lookup("create").unwrap()[0].phones()), 2);
        assert_eq!(num_vowels(d.lookup("old").unwrap()[0].phones()), 1);
    }

    #[test]
    fn test_nth_last_vowel() {
        let d = dict();
        assert_eq!(
            nth_last_vowel(d.lookup("beautiful").unwrap()[0].phones(), 3),
            Some(-6)
        );
    }

    #[test]
    fn test_nth_last_vowel_syllable_grouped() {
        // Symbol granularity is the caller's choice; syllable-grouped
        // symbols count the same way
        assert_eq!(nth_last_vowel(&["BAO1R", "DER0"], 2), Some(-2));
        assert_eq!(nth_last_vowel(&["REY1", "SHIY0", "OW2Z"], 2), Some(-2));
    }

    #[test]
    fn test_nth_last_vowel_nonexistent() {
        assert_eq!(nth_last_vowel(&["T", "UW", "TH", "AW", "Z", "AH", "N", "D"], 2), None);
        let no_vowels: [&str; 0] = [];
        assert_eq!(nth_last_vowel(&no_vowels, 2), None);
    }

    #[test]
    fn test_rhyme_level_1() {
        assert!(rhymes(&dict(), "berate", "create", 1));
    }

    #[test]
    fn test_rhyme_level_2() {
        assert!(rhymes(&dict(), "junction", "function", 2));
    }

    #[test]
    fn test_monosyllabic_rhyme_reduces_level() {
        // Level 2 requested, but "old" has a single vowel
        assert!(rhymes(&dict(), "old", "cold", 2));
        assert!(rhymes(&dict(), "old", "cold", 1));
    }

    #[test]
    fn test_bad_rhyme_1_syllable() {
        assert!(!rhymes(&dict(), "prep", "stop", DEFAULT_RHYME_LEVEL));
    }

    #[test]
    fn test_bad_rhyme_2_syllables() {
        assert!(!rhymes(&dict(), "conduct", "abstract", DEFAULT_RHYME_LEVEL));
    }

    #[test]
    fn test_symmetry() {
        let d = dict();
        for (a, b, level) in [
            ("berate", "create", 1),
            ("junction", "function", 2),
            ("old", "cold", 1),
            ("prep", "stop", 2),
            ("conduct", "abstract", 2),
        ] {
            assert_eq!(rhymes(&d, a, b, level), rhymes(&d, b, a, level));
        }
    }

    #[test]
    fn test_unknown_words_never_rhyme() {
        let d = dict();
        assert!(!rhymes(&d, "xylql", "old", 2));
        assert!(!rhymes(&d, "xylql", "xylql", 2));
    }
}
