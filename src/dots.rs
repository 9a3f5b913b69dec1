//! Braille cells as sets of raised dots
//!
//! A [`Cell`] is the dot-level view of one braille glyph, used by the
//! "show dots" presentation of the output: dot `n` of an eight-dot cell
//! corresponds to bit `n - 1` of the code point offset within the Unicode
//! Braille Patterns block.

use enumset::{EnumSet, EnumSetType};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CellError {
    #[error("Not a braille pattern {character:?}")]
    NotBraille { character: char },
}

#[derive(EnumSetType, Debug)]
pub enum Dot {
    Dot1,
    Dot2,
    Dot3,
    Dot4,
    Dot5,
    Dot6,
    Dot7,
    Dot8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell(EnumSet<Dot>);

impl From<EnumSet<Dot>> for Cell {
    fn from(value: EnumSet<Dot>) -> Self {
        Cell(value)
    }
}

impl Cell {
    pub fn to_unicode(&self) -> char {
        let unicode = self
            .0
            .iter()
            .map(|dot| 1 << (dot as u32))
            .fold(0x2800, |acc, x| acc | x);
        char::from_u32(unicode).unwrap()
    }

    /// The raised dot numbers in ascending order
    pub fn dots(&self) -> Vec<u8> {
        self.0.iter().map(|dot| dot as u8 + 1).collect()
    }
}

impl TryFrom<char> for Cell {
    type Error = CellError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        let code = character as u32;
        if !(0x2800..=0x28FF).contains(&code) {
            return Err(CellError::NotBraille { character });
        }
        Ok(Cell(EnumSet::from_u64((code - 0x2800) as u64)))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_unicode())
    }
}

impl FromIterator<Dot> for Cell {
    fn from_iter<T: IntoIterator<Item = Dot>>(iter: T) -> Self {
        Cell(EnumSet::from_iter(iter))
    }
}
