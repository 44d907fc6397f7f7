//! Pronunciation dictionary abstractions.
//!
//! This module provides the [`PhonemeDictionary`] backing every phonetic
//! query in the crate: stress encoding and rhyme matching both resolve
//! words through it. Entries map a lowercased word to one or more
//! [`Pronunciation`]s, each an ordered sequence of phoneme symbols in
//! CMU/ARPAbet notation (vowels carry a stress digit: 0 = unstressed,
//! 1 = primary, 2 = secondary).
//!
//! Dictionaries can be built from in-memory entries, from CMU plain-text
//! format (`WORD  B AO1 R D ER0`), or from the JSON shape
//! `{"word": [["B", "AO1", "R", "D", "ER0"]]}`.
//!
//! A missing word is not an error: [`PhonemeDictionary::lookup`] returns
//! `None`, and the sentinel-style [`PhonemeDictionary::pronunciations`]
//! returns a slice holding one empty pronunciation, signaling "no
//! phonetic data" to callers that prefer the permissive contract.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// One phonetic rendering of a word as an ordered phoneme-symbol sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pronunciation {
    phones: Vec<String>,
}

impl Pronunciation {
    /// Create a pronunciation from phoneme symbols.
    pub fn new<I, S>(phones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phones: phones.into_iter().map(Into::into).collect(),
        }
    }

    /// The empty pronunciation, used as the dictionary-miss sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The phoneme symbols in order.
    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    /// Whether this pronunciation carries no phonetic data.
    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}

/// Errors raised while loading a dictionary from an external source.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON source was malformed or had the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A line of CMU-format text could not be parsed.
    #[error("malformed dictionary entry at line {line}: {text}")]
    MalformedEntry {
        /// 1-based line number in the source.
        line: usize,
        /// The offending line text.
        text: String,
    },
}

// Slice returned on lookup miss: one empty pronunciation.
static MISS: LazyLock<[Pronunciation; 1]> = LazyLock::new(|| [Pronunciation::empty()]);

/// A word-to-pronunciations table with case-insensitive lookup.
///
/// Read-only after construction; safe to share across threads by
/// reference for concurrent classification calls.
#[derive(Debug, Clone, Default)]
pub struct PhonemeDictionary {
    entries: FxHashMap<String, Vec<Pronunciation>>,
}

impl PhonemeDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from `(word, pronunciations)` pairs, where each
    /// pronunciation is a sequence of phoneme symbols.
    pub fn from_entries<W, P, S>(entries: impl IntoIterator<Item = (W, Vec<P>)>) -> Self
    where
        W: Into<String>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = Self::new();
        for (word, prons) in entries {
            let word = word.into();
            for pron in prons {
                dict.insert(&word, Pronunciation::new(pron));
            }
        }
        dict
    }

    /// Add one pronunciation for `word` (appended after any existing ones).
    pub fn insert(&mut self, word: &str, pronunciation: Pronunciation) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(pronunciation);
    }

    /// Load from CMU plain-text format: one entry per line,
    /// `WORD  B AO1 R D ER0`, with `;;;` comment lines and `WORD(2)`
    /// variant suffixes for alternate pronunciations.
    pub fn from_cmudict_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut dict = Self::new();

        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(";;;") {
                continue;
            }

            let mut fields = trimmed.split_whitespace();
            let word = fields.next().ok_or_else(|| DictionaryError::MalformedEntry {
                line: lineno + 1,
                text: trimmed.to_string(),
            })?;
            let phones: Vec<&str> = fields.collect();
            if phones.is_empty() {
                return Err(DictionaryError::MalformedEntry {
                    line: lineno + 1,
                    text: trimmed.to_string(),
                });
            }

            // Strip the "(2)" variant marker; variants append in file order
            let word = match word.find('(') {
                Some(idx) => &word[..idx],
                None => word,
            };

            dict.insert(word, Pronunciation::new(phones));
        }

        Ok(dict)
    }

    /// Load CMU plain-text format from a file path.
    pub fn from_cmudict_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Self::from_cmudict_reader(BufReader::new(File::open(path)?))
    }

    /// Load from JSON of the shape `{"word": [["B", "AO1", ...], ...]}`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DictionaryError> {
        let raw: FxHashMap<String, Vec<Vec<String>>> = serde_json::from_reader(reader)?;
        Ok(Self::from_entries(raw))
    }

    /// Load the JSON format from a file path.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Self::from_json_reader(BufReader::new(File::open(path)?))
    }

    /// Look up a word's pronunciations. Case-insensitive.
    ///
    /// Returns `None` on a dictionary miss; a present entry always holds
    /// at least one pronunciation.
    pub fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries.get(&word.to_lowercase()).map(Vec::as_slice)
    }

    /// Look up a word's pronunciations with the permissive miss contract:
    /// an absent word yields a slice containing one empty pronunciation
    /// rather than `None`.
    pub fn pronunciations(&self, word: &str) -> &[Pronunciation] {
        self.lookup(word).unwrap_or(MISS.as_slice())
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
