//! Pattern catalogs and nearest-catalog-match classification.
//!
//! A [`Catalog`] is an ordered, read-only mapping from a human-readable
//! pattern name to a canonical pattern string. Three process-wide
//! catalogs exist: [`METERS`] (stress strings), [`RHYMES`]
//! (rhyme-letter strings), and [`STANZAS`] (comma-joined stanza
//! lengths). Entry order is part of the classifier's tie-break contract
//! and must not be reordered.

use rustc_hash::FxHashMap;

use crate::distance::standard_distance;

/// An ordered, immutable catalog of named reference patterns.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [(&'static str, &'static str)],
}

impl Catalog {
    /// Create a catalog from a static entry table.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// The `(name, pattern)` entries in definition order.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Named canonical meters as stress strings.
pub const METERS: Catalog = Catalog::new(&[
    ("iambic trimeter", "010101"),
    ("iambic tetrameter", "01010101"),
    ("iambic pentameter", "0101010101"),
    ("trochaic tetrameter", "10101010"),
    ("trochaic pentameter", "1010101010"),
]);

/// Named canonical rhyme schemes as letter strings.
pub const RHYMES: Catalog = Catalog::new(&[
    ("couplets", "aabbccddeeff"),
    ("alternate rhyme", "ababcdcdefefghgh"),
    ("enclosed rhyme", "abbacddceffe"),
    ("rima", "ababcbcdcdedefefgfghg"),
    ("rondeau rhyme", "aabbaaabCaabbaC"),
    ("shakespearean sonnet", "ababcdcdefefgg"),
    ("limerick", "aabba"),
    ("no rhyme", "XXXX"),
]);

/// Named canonical stanza shapes as comma-joined length strings.
pub const STANZAS: Catalog = Catalog::new(&[
    ("sonnet", "14,"),
    ("cinquains", "5,"),
    ("quatrains", "4,"),
    ("tercets", "3,"),
]);

/// Classify `observed` as the catalog entry with minimum Levenshtein
/// distance.
///
/// Patterns whose length differs from the observed string are cyclically
/// repeated and truncated to match before measuring ("expanded"). For
/// each distinct distance value one key is retained: an expanded entry
/// never displaces a key already recorded at that distance, while an
/// exact-length entry always does. The key at the minimum distance wins.
///
/// # Panics
///
/// Panics if the catalog is empty; callers must only classify against
/// the fixed non-empty catalogs.
pub fn closest_match(observed: &str, catalog: &Catalog) -> &'static str {
    debug_assert!(!catalog.is_empty(), "classification over an empty catalog");

    let target_len = observed.chars().count();
    let mut by_distance: FxHashMap<usize, &'static str> = FxHashMap::default();

    for &(name, pattern) in catalog.entries() {
        let pattern_len = pattern.chars().count();
        let expanded = pattern_len != target_len;

        let dist = if expanded {
            let stretched: String = pattern.chars().cycle().take(target_len).collect();
            standard_distance(observed, &stretched)
        } else {
            standard_distance(observed, pattern)
        };

        // Expanded patterns lose ties against whatever already holds
        // this distance
        if expanded && by_distance.contains_key(&dist) {
            continue;
        }

        by_distance.insert(dist, name);
    }

    by_distance
        .into_iter()
        .min_by_key(|(dist, _)| *dist)
        .map(|(_, name)| name)
        .expect("classification over an empty catalog")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_meter_match() {
        assert_eq!(closest_match("0101010101", &METERS), "iambic pentameter");
        assert_eq!(closest_match("01010101", &METERS), "iambic tetrameter");
        assert_eq!(closest_match("10101010", &METERS), "trochaic tetrameter");
    }

    #[test]
    fn test_near_meter_match() {
        // One insertion away from iambic pentameter
        assert_eq!(closest_match("010101011", &METERS), "iambic pentameter");
    }

    #[test]
    fn test_exact_length_preferred_over_expanded() {
        // "0101010101" is both iambic pentameter exactly and iambic
        // trimeter cyclically expanded; the exact-length entry wins
        assert_eq!(closest_match("0101010101", &METERS), "iambic pentameter");
    }

    #[test]
    fn test_rhyme_schemes() {
        assert_eq!(
            closest_match("ababcdcdefefgg", &RHYMES),
            "shakespearean sonnet"
        );
        assert_eq!(closest_match("aabba", &RHYMES), "limerick");
        // Five unrhymed lines: "XXXX" expands cyclically to a zero-cost
        // match
        assert_eq!(closest_match("XXXXX", &RHYMES), "no rhyme");
    }

    #[test]
    fn test_stanza_shapes() {
        assert_eq!(closest_match("14,", &STANZAS), "sonnet");
        assert_eq!(closest_match("4,4,4,", &STANZAS), "quatrains");
    }

    #[test]
    #[should_panic(expected = "empty catalog")]
    fn test_empty_catalog_panics() {
        let empty = Catalog::new(&[]);
        closest_match("0101", &empty);
    }
}
