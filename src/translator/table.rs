//! Static transliteration tables
//!
//! All tables are fixed at compile time. The symbol table maps a lowercase
//! ASCII letter, a decimal digit or a punctuation character to exactly one
//! code point from the Unicode Braille Patterns block. Digits reuse the
//! glyphs of the letters 'a' to 'j'; the ambiguity is resolved positionally
//! with the [`NUMBER_INDICATOR`], not by the glyph itself.

/// Marks the following letter as uppercase
pub const CAPITAL_INDICATOR: char = '⠠';
/// Marks the start of a run of digit glyphs
pub const NUMBER_INDICATOR: char = '⠼';
/// The braille cell with no raised dots, representing a space
pub const BLANK: char = '⠀';

pub const LETTERS: [(char, char); 26] = [
    ('a', '⠁'),
    ('b', '⠃'),
    ('c', '⠉'),
    ('d', '⠙'),
    ('e', '⠑'),
    ('f', '⠋'),
    ('g', '⠛'),
    ('h', '⠓'),
    ('i', '⠊'),
    ('j', '⠚'),
    ('k', '⠅'),
    ('l', '⠇'),
    ('m', '⠍'),
    ('n', '⠝'),
    ('o', '⠕'),
    ('p', '⠏'),
    ('q', '⠟'),
    ('r', '⠗'),
    ('s', '⠎'),
    ('t', '⠞'),
    ('u', '⠥'),
    ('v', '⠧'),
    ('w', '⠺'),
    ('x', '⠭'),
    ('y', '⠽'),
    ('z', '⠵'),
];

/// Digits reuse the glyphs of 'a' to 'j'
pub const DIGITS: [(char, char); 10] = [
    ('1', '⠁'),
    ('2', '⠃'),
    ('3', '⠉'),
    ('4', '⠙'),
    ('5', '⠑'),
    ('6', '⠋'),
    ('7', '⠛'),
    ('8', '⠓'),
    ('9', '⠊'),
    ('0', '⠚'),
];

/// Single-cell punctuation. Punctuation with multi-cell braille forms
/// (parentheses, double quotes) is not in the table and passes through
/// the codec verbatim.
pub const PUNCTUATION: [(char, char); 8] = [
    ('.', '⠲'),
    (',', '⠂'),
    ('?', '⠦'),
    ('!', '⠖'),
    (':', '⠒'),
    (';', '⠆'),
    ('-', '⠤'),
    ('\'', '⠄'),
];

/// Grade-2 whole-word contractions, a small fixed subset
pub const CONTRACTIONS: [(&str, char); 5] = [
    ("the", '⠮'),
    ("and", '⠯'),
    ("for", '⠿'),
    ("with", '⠾'),
    ("ing", '⠬'),
];
