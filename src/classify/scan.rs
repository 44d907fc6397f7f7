//! Structural scanners: per-poem signals and their catalog guesses.
//!
//! Each scanner walks the tokenized poem once and produces a flat string
//! signal; the `guess_*` functions classify those signals against the
//! fixed catalogs in [`crate::classify::catalog`].

use rustc_hash::FxHashMap;

use crate::classify::catalog::{closest_match, METERS, RHYMES, STANZAS};
use crate::dictionary::PhonemeDictionary;
use crate::phonetic::rhyme::{rhymes, DEFAULT_RHYME_LEVEL};
use crate::phonetic::stress::stress_pattern;
use crate::tokenizer::is_blank_line;
use crate::TokenizedPoem;

/// Space character marking a blank line in rhyme-scheme notation.
pub const BLANK_LINE_MARK: char = ' ';

/// Sentinel marking a line that rhymes with no later line.
pub const NO_RHYME_MARK: char = 'X';

/// A poem's guessed meter together with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterGuess {
    /// One joined stress string per non-blank line.
    pub lines: Vec<String>,
    /// Length (syllable count) of each joined stress string.
    pub line_lengths: Vec<usize>,
    /// The most frequent per-line catalog match.
    pub meter: &'static str,
}

/// A poem's rhyme-scheme string and its catalog match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhymeGuess {
    /// One notation character per poem line.
    pub scheme: String,
    /// Closest named rhyme pattern.
    pub rhyme: &'static str,
}

/// A poem's stanza-length string and its catalog match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StanzaGuess {
    /// Comma-joined stanza lengths, e.g. `"4,10"`.
    pub lengths: String,
    /// Closest named stanza shape.
    pub stanza: &'static str,
}

/// Compute the stress notation for every line of the poem: one stress
/// string per non-empty word, per line. Blank lines produce empty rows.
pub fn scansion(dict: &PhonemeDictionary, poem: &TokenizedPoem) -> Vec<Vec<String>> {
    poem.iter()
        .map(|line| {
            line.iter()
                .filter(|word| !word.is_empty())
                .map(|word| stress_pattern(dict, word))
                .collect()
        })
        .collect()
}

/// Guess the poem's meter: classify each line's joined stress string
/// against the meter catalog and take the most frequent result, ties
/// broken toward the maximum `(count, name)` pair.
pub fn guess_meter(dict: &PhonemeDictionary, poem: &TokenizedPoem) -> MeterGuess {
    let lines: Vec<String> = scansion(dict, poem)
        .into_iter()
        .filter(|row| !row.is_empty())
        .map(|row| row.concat())
        .collect();
    let line_lengths: Vec<usize> = lines.iter().map(String::len).collect();

    let mut counts: FxHashMap<&'static str, usize> = FxHashMap::default();
    for line in &lines {
        *counts.entry(closest_match(line, &METERS)).or_insert(0) += 1;
    }

    let meter = counts
        .into_iter()
        .map(|(name, count)| (count, name))
        .max()
        .map(|(_, name)| name)
        // No scannable lines: classify the empty signal
        .unwrap_or_else(|| closest_match("", &METERS));

    MeterGuess {
        lines,
        line_lengths,
        meter,
    }
}

/// Build the poem's rhyme scheme by scanning each line's ending against
/// the endings of later, not-yet-assigned lines.
///
/// Notation: a lowercase letter per rhyme group (the cursor advances
/// once per new group and wraps after 'z'), uppercase when the matching
/// lines are token-for-token identical, [`BLANK_LINE_MARK`] for blank
/// lines, and [`NO_RHYME_MARK`] for lines that rhyme with nothing later.
/// The result always holds exactly one character per poem line.
pub fn rhyme_scheme(dict: &PhonemeDictionary, poem: &TokenizedPoem) -> String {
    let num_lines = poem.len();
    let mut scheme = vec![NO_RHYME_MARK; num_lines];

    // Rotating cursor into 'a'..='z'; -1 means no group allocated yet
    let mut current_group: isize = -1;

    for i in 0..num_lines {
        if is_blank_line(&poem[i]) {
            scheme[i] = BLANK_LINE_MARK;
            continue;
        }

        let ending = poem[i].last().map(String::as_str).unwrap_or("");
        let mut matched = false;

        for j in (i + 1)..num_lines {
            if scheme[j] != NO_RHYME_MARK {
                continue;
            }

            let later_ending = poem[j].last().map(String::as_str).unwrap_or("");
            if !rhymes(dict, ending, later_ending, DEFAULT_RHYME_LEVEL) {
                continue;
            }

            if !matched {
                matched = true;
                current_group += 1;
            }

            let letter = (b'a' + (current_group % 26) as u8) as char;
            let letter = if poem[i] == poem[j] {
                letter.to_ascii_uppercase()
            } else {
                letter
            };

            scheme[i] = letter;
            scheme[j] = letter;
        }
    }

    scheme.into_iter().collect()
}

/// Guess the poem's rhyme type: classify the rhyme scheme (blank-line
/// marks removed) against the rhyme catalog.
pub fn guess_rhyme(dict: &PhonemeDictionary, poem: &TokenizedPoem) -> RhymeGuess {
    let scheme = rhyme_scheme(dict, poem);
    let no_blanks: String = scheme.chars().filter(|&c| c != BLANK_LINE_MARK).collect();

    RhymeGuess {
        rhyme: closest_match(&no_blanks, &RHYMES),
        scheme,
    }
}

/// Comma-joined stanza lengths: counts of consecutive non-blank lines,
/// flushed at each blank line and after the final line.
pub fn stanza_lengths(poem: &TokenizedPoem) -> String {
    let mut stanzas: Vec<String> = Vec::new();
    let mut run = 0usize;

    for line in poem {
        if is_blank_line(line) {
            stanzas.push(run.to_string());
            run = 0;
        } else {
            run += 1;
        }
    }
    if run != 0 {
        stanzas.push(run.to_string());
    }

    stanzas.join(",")
}

/// Guess the poem's stanza shape: classify the stanza-length string
/// against the stanza catalog.
pub fn guess_stanza(poem: &TokenizedPoem) -> StanzaGuess {
    let lengths = stanza_lengths(poem);

    StanzaGuess {
        stanza: closest_match(&lengths, &STANZAS),
        lengths,
    }
}
