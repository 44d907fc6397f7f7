//! Raw text to tokenized poem.
//!
//! The analysis pipeline consumes a [`crate::TokenizedPoem`]: lines of
//! lowercased, punctuation-free word tokens, with blank lines represented
//! as a single empty-string token so stanza breaks survive tokenization.

use crate::TokenizedPoem;

/// Tokenize a poem's raw text.
///
/// Hyphens split compounds into separate words, ASCII punctuation is
/// stripped, and words are lowercased. A line with no surviving words
/// becomes the blank-line sentinel `vec![String::new()]`.
///
/// # Example
///
/// ```rust
/// use verseform::tokenizer::tokenize;
///
/// let poem = tokenize("The moon-lit sea,\n\nso bright!");
/// assert_eq!(poem[0], ["the", "moon", "lit", "sea"]);
/// assert_eq!(poem[1], [""]);
/// assert_eq!(poem[2], ["so", "bright"]);
/// ```
pub fn tokenize(text: &str) -> TokenizedPoem {
    text.lines()
        .map(|line| {
            let words: Vec<String> = line
                .chars()
                .map(|c| if c == '-' { ' ' } else { c })
                .filter(|c| !c.is_ascii_punctuation())
                .collect::<String>()
                .split_whitespace()
                .map(str::to_lowercase)
                .collect();

            if words.is_empty() {
                vec![String::new()]
            } else {
                words
            }
        })
        .collect()
}

/// Whether a tokenized line is the blank-line (stanza break) sentinel.
pub(crate) fn is_blank_line(line: &[String]) -> bool {
    line.len() == 1 && line[0].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let poem = tokenize("Shall I compare thee, to a summer's day?");
        assert_eq!(
            poem[0],
            ["shall", "i", "compare", "thee", "to", "a", "summers", "day"]
        );
    }

    #[test]
    fn test_hyphens_split_words() {
        let poem = tokenize("moon-lit water");
        assert_eq!(poem[0], ["moon", "lit", "water"]);
    }

    #[test]
    fn test_blank_lines_become_sentinel() {
        let poem = tokenize("one\n\ntwo");
        assert_eq!(poem.len(), 3);
        assert!(is_blank_line(&poem[1]));
        assert!(!is_blank_line(&poem[0]));
    }

    #[test]
    fn test_whitespace_only_line_is_blank() {
        let poem = tokenize("one\n   \ntwo");
        assert!(is_blank_line(&poem[1]));
    }

    #[test]
    fn test_punctuation_only_line_is_blank() {
        let poem = tokenize("one\n***\ntwo");
        assert!(is_blank_line(&poem[1]));
    }
}
