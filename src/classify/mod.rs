//! Poem classification: pattern catalogs, structural scanners, and the
//! form rule cascade.
//!
//! [`catalog`] holds the fixed reference patterns and the
//! nearest-catalog-match routine shared by every classifier. [`scan`]
//! produces the per-poem signals (scansion, rhyme scheme, stanza
//! lengths) and their catalog guesses. [`form`] combines the signals
//! into a final named form.

pub mod catalog;
pub mod form;
pub mod scan;
