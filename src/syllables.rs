//! Heuristic syllable counting for out-of-vocabulary words.
//!
//! Used only when the pronunciation dictionary has no entry: counts
//! groups of consecutive orthographic vowels, discounting a final silent
//! 'e'. Approximate by design; dictionary syllable counts always win
//! when available.

const VOWELS: &str = "aeiouy";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Estimate the syllable count of a word from its spelling.
///
/// Words containing no ASCII letters (numerals, stray punctuation) count
/// zero syllables; any word with at least one letter counts at least one.
///
/// # Example
///
/// ```rust
/// use verseform::syllables::count_syllables;
///
/// assert_eq!(count_syllables("tree"), 1);
/// assert_eq!(count_syllables("lonely"), 2);
/// assert_eq!(count_syllables("2000"), 0);
/// ```
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();

    if !word.chars().any(|c| c.is_ascii_alphabetic()) {
        return 0;
    }

    let chars: Vec<char> = word.chars().collect();
    let mut count = 0;
    let mut last_was_vowel = false;

    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !last_was_vowel {
            count += 1;
        }
        last_was_vowel = vowel;
    }

    // Final silent 'e' ("stone", "prepare"), but not a sole vowel ("the")
    // and not '-le' endings ("little")
    if count > 1 && chars.len() >= 2 {
        let last = chars[chars.len() - 1];
        let second_last = chars[chars.len() - 2];
        if last == 'e' && !is_vowel(second_last) && second_last != 'l' {
            count -= 1;
        }
    }

    count.max(1)
}
