//! # verseform
//!
//! Poetic form detection using a pronunciation dictionary and approximate
//! pattern matching.
//!
//! The analysis pipeline converts a tokenized poem into three structural
//! signals and combines them into a named form:
//!
//! 1. **Scansion** - per-word stress patterns derived from dictionary
//!    pronunciations, joined into one binary stress string per line.
//! 2. **Rhyme scheme** - letter notation built by testing line endings
//!    against each other with a phoneme-level rhyme matcher.
//! 3. **Stanza lengths** - a comma-joined record of block sizes between
//!    blank lines.
//!
//! Each signal is classified against a fixed catalog of named reference
//! patterns by minimum Levenshtein distance (with cyclic length
//! normalization), and a rule cascade over line counts, line lengths,
//! guessed meter, and guessed rhyme produces the final label.
//!
//! ## Example
//!
//! ```rust,ignore
//! use verseform::prelude::*;
//!
//! let dict = PhonemeDictionary::from_cmudict_path("cmudict.dict")?;
//! let poem = tokenize(&std::fs::read_to_string("sonnet.txt")?);
//!
//! println!("{}", guess_form(&dict, &poem));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod dictionary;
pub mod distance;
pub mod phonetic;
pub mod syllables;
pub mod tokenizer;

/// A poem as produced by the tokenizer: an ordered sequence of lines, each
/// an ordered sequence of lowercased word tokens.
///
/// A blank line (stanza break) is represented as a single empty-string
/// token, `vec![String::new()]`.
pub type TokenizedPoem = Vec<Vec<String>>;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::classify::catalog::{Catalog, METERS, RHYMES, STANZAS};
    pub use crate::classify::form::{analyze, guess_form, PoemAnalysis, UNKNOWN_FORM};
    pub use crate::classify::scan::{
        guess_meter, guess_rhyme, guess_stanza, rhyme_scheme, scansion, stanza_lengths,
    };
    pub use crate::dictionary::{DictionaryError, PhonemeDictionary, Pronunciation};
    pub use crate::phonetic::rhyme::{nth_last_vowel, num_vowels, rhymes, DEFAULT_RHYME_LEVEL};
    pub use crate::phonetic::stress::{stress_pattern, stress_patterns, StressSelection};
    pub use crate::syllables::count_syllables;
    pub use crate::tokenizer::tokenize;
    pub use crate::TokenizedPoem;
}
