//! Bidirectional text to Unicode Braille transliteration with optional
//! grade-2 whole-word contractions.
//!
//! The codec is a pair of pure functions over static tables: [`encode`]
//! turns plain text into braille, [`decode`] turns braille back into a
//! best-effort plain-text reconstruction. Both are total on any input.

pub mod dots;
pub mod translator;

pub use translator::{decode, encode};
