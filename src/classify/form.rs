//! Form classification: the rule cascade over the structural signals.
//!
//! [`analyze`] runs every scanner once and applies a priority-ordered
//! cascade over line count, per-line syllable counts, guessed meter, and
//! guessed rhyme. First matching rule wins; a poem matching nothing is
//! labeled [`UNKNOWN_FORM`]. Classification is a pure function of the
//! tokenized poem: no state survives between calls.

use serde::Serialize;

use crate::classify::scan::{guess_meter, guess_rhyme, guess_stanza};
use crate::dictionary::PhonemeDictionary;
use crate::TokenizedPoem;

/// Label returned when no rule in the cascade matches.
pub const UNKNOWN_FORM: &str = "unknown form";

/// Every signal computed for one poem, plus the final form label.
///
/// The intermediate fields back diagnostic output; [`guess_form`] is the
/// plain-label shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoemAnalysis {
    /// Joined stress string per non-blank line.
    pub scansion_lines: Vec<String>,
    /// Rhyme-scheme notation, one character per line.
    pub rhyme_scheme: String,
    /// Comma-joined stanza lengths.
    pub stanza_lengths: String,
    /// Closest named meter.
    pub meter: &'static str,
    /// Closest named rhyme pattern.
    pub rhyme: &'static str,
    /// Closest named stanza shape.
    pub stanza: &'static str,
    /// The detected poetic form.
    pub form: &'static str,
}

/// True when each of the first `ranges.len()` line lengths falls inside
/// its inclusive range. Vacuously true for an empty range list; false
/// when the poem has fewer lines than ranges.
fn within_ranges(line_lengths: &[usize], ranges: &[(usize, usize)]) -> bool {
    ranges.len() <= line_lengths.len()
        && ranges
            .iter()
            .zip(line_lengths)
            .all(|(&(lo, hi), &len)| lo <= len && len <= hi)
}

fn cascade(
    num_lines: usize,
    line_lengths: &[usize],
    meter: &str,
    rhyme: &str,
) -> &'static str {
    if num_lines == 3 && within_ranges(line_lengths, &[(4, 6), (6, 8), (4, 6)]) {
        return "haiku";
    }

    if num_lines == 5 {
        if line_lengths == [1, 2, 3, 4, 10].as_slice() {
            return "tetractys";
        }
        if within_ranges(line_lengths, &[(8, 11), (8, 11), (5, 7), (5, 7), (8, 11)]) {
            return "limerick";
        }
        if within_ranges(line_lengths, &[(4, 6), (6, 8), (4, 6), (6, 8), (6, 8)]) {
            return "tanka";
        }
        if rhyme == "no rhyme" {
            return "cinquain";
        }
    }

    if num_lines == 8 {
        // Known limitation carried over from the original heuristic: the
        // length check collapses to the first line only
        if within_ranges(line_lengths, &[(10, 12)]) && rhyme == "rima" {
            return "ottava rima";
        }
    }

    if num_lines == 14 {
        if meter == "iambic pentameter"
            && (rhyme == "shakespearean sonnet" || rhyme == "alternate rhyme")
        {
            return "Shakespearean sonnet";
        }
        return "sonnet with unusual meter";
    }

    if num_lines == 15 {
        return "rondeau";
    }

    if rhyme == "alternate rhyme" && meter == "iambic tetrameter" {
        return "ballad stanza";
    }

    if meter == "iambic pentameter" {
        if rhyme == "couplets" || rhyme == "shakespearean sonnet" {
            return "heroic couplets";
        }
        if rhyme == "alternate rhyme" {
            return "Sicilian quatrain";
        }
        return "blank verse";
    }

    UNKNOWN_FORM
}

/// Run every scanner over the poem and classify its form.
pub fn analyze(dict: &PhonemeDictionary, poem: &TokenizedPoem) -> PoemAnalysis {
    let meter_guess = guess_meter(dict, poem);
    let rhyme_guess = guess_rhyme(dict, poem);
    let stanza_guess = guess_stanza(poem);

    let form = cascade(
        meter_guess.lines.len(),
        &meter_guess.line_lengths,
        meter_guess.meter,
        rhyme_guess.rhyme,
    );

    PoemAnalysis {
        scansion_lines: meter_guess.lines,
        rhyme_scheme: rhyme_guess.scheme,
        stanza_lengths: stanza_guess.lengths,
        meter: meter_guess.meter,
        rhyme: rhyme_guess.rhyme,
        stanza: stanza_guess.stanza,
        form,
    }
}

/// Classify the poem's form, discarding the intermediate signals.
pub fn guess_form(dict: &PhonemeDictionary, poem: &TokenizedPoem) -> &'static str {
    analyze(dict, poem).form
}
