//! Grade-2 whole-word contraction pass
//!
//! Replaces case-insensitive whole-word occurrences of the contraction table
//! entries with their single-cell glyph. Matching is boundary-aware so "the"
//! inside "theme" is left alone. A word starting with an uppercase letter is
//! replaced by the capital indicator followed by the glyph, so sentence
//! capitalization survives a round trip through [`crate::decode`].

use std::collections::HashMap;

use log::debug;

use crate::translator::boundaries::{word_end, word_start};
use crate::translator::table::CAPITAL_INDICATOR;

pub fn replace_words(text: &str, contractions: &HashMap<&'static str, char>) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::new();
    let mut i = 0;
    while i < chars.len() {
        let prev = if i == 0 { None } else { Some(chars[i - 1]) };
        if word_start(prev, Some(chars[i])) {
            if let Some((length, glyph)) = match_contraction(&chars[i..], contractions) {
                debug!(
                    "contracting {:?} to {}",
                    chars[i..i + length].iter().collect::<String>(),
                    glyph
                );
                if chars[i].is_ascii_uppercase() {
                    result.push(CAPITAL_INDICATOR);
                }
                result.push(glyph);
                i += length;
                continue;
            }
        }
        result.push(chars[i]);
        i += 1;
    }
    result
}

/// Find a contraction word matching a prefix of `rest`, provided the match
/// ends at a word boundary. The table words all start with distinct letters
/// so at most one entry can match at any given position.
fn match_contraction(
    rest: &[char],
    contractions: &HashMap<&'static str, char>,
) -> Option<(usize, char)> {
    for (word, &glyph) in contractions {
        // table words are lowercase ASCII, so byte length equals char count
        let length = word.len();
        if rest.len() < length {
            continue;
        }
        if !word.chars().zip(rest).all(|(w, &c)| w == c.to_ascii_lowercase()) {
            continue;
        }
        if word_end(Some(rest[length - 1]), rest.get(length).copied()) {
            return Some((length, glyph));
        }
    }
    None
}
