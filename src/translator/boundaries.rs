//! ASCII word boundary predicates
//!
//! A word character is an ASCII letter, an ASCII digit or an underscore.
//! This pins the boundary rule used for whole-word contraction matching so
//! that "the" never matches inside "theme".

pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn word_start(prev: Option<char>, current: Option<char>) -> bool {
    match (prev, current) {
        (None, Some(c)) if is_word_char(c) => true,
        (Some(p), Some(c)) if is_word_char(c) => !is_word_char(p),
        (_, _) => false,
    }
}

pub fn word_end(prev: Option<char>, current: Option<char>) -> bool {
    match (prev, current) {
        (Some(c), None) => is_word_char(c),
        (Some(p), Some(c)) if is_word_char(p) => !is_word_char(c),
        (_, _) => false,
    }
}
