//! Phonetic analysis over dictionary pronunciations.
//!
//! Two concerns live here, both consuming [`crate::dictionary`]:
//!
//! - [`stress`] encodes pronunciations as binary stress strings, with a
//!   syllable-count fallback for out-of-vocabulary words.
//! - [`rhyme`] decides whether two words rhyme by comparing trailing
//!   phoneme slices anchored at vowel positions.
//!
//! A phoneme symbol counts as a vowel exactly when it contains a stress
//! digit, which is how CMU/ARPAbet notation marks syllable nuclei.

pub mod rhyme;
pub mod stress;

/// Whether a phoneme symbol is a vowel (carries a stress digit).
pub(crate) fn is_vowel_phone(phone: &str) -> bool {
    phone.chars().any(|c| c.is_ascii_digit())
}
