//! Levenshtein edit distance.
//!
//! A single scalar, space-optimized dynamic-programming implementation.
//! This backs the nearest-catalog-match classifier, which compares short
//! ASCII pattern strings (stress notation, rhyme-letter notation, stanza
//! length strings), so no automaton machinery is needed here.

use smallvec::SmallVec;

/// Compute standard Levenshtein distance between two strings.
///
/// Uses dynamic programming to compute the minimum number of
/// single-character edits (insertions, deletions, substitutions)
/// required to transform `source` into `target`.
///
/// # Example
///
/// ```rust
/// use verseform::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("0101010101", "0101010101"), 0);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev_row = vec![0; n + 1];
    let mut curr_row = vec![0; n + 1];

    for (j, item) in prev_row.iter_mut().enumerate().take(n + 1) {
        *item = j;
    }

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = if source_chars[i - 1] == target_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(standard_distance("test", "test"), 0);
        assert_eq!(standard_distance("", ""), 0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(standard_distance("", "test"), 4);
        assert_eq!(standard_distance("test", ""), 4);
    }

    #[test]
    fn test_basic() {
        assert_eq!(standard_distance("kitten", "sitting"), 3);
        assert_eq!(standard_distance("saturday", "sunday"), 3);
        assert_eq!(standard_distance("test", "best"), 1);
    }

    #[test]
    fn test_stress_strings() {
        // The shapes this crate actually compares
        assert_eq!(standard_distance("0101010101", "1010101010"), 2);
        assert_eq!(standard_distance("010101011", "0101010101"), 1);
        assert_eq!(standard_distance("XXXXX", "XXXXX"), 0);
    }
}
