//! Fill-in-the-blank masking.
//!
//! Words longer than the reveal threshold keep their first character and
//! any punctuation; every other character is hidden.

use crate::verse::is_word_char;

/// Glyph standing in for a hidden character.
pub const FILLER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Shown(char),
    Hidden,
}

impl Glyph {
    pub fn as_char(self) -> char {
        match self {
            Glyph::Shown(c) => c,
            Glyph::Hidden => FILLER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskedWord {
    /// Short enough to show in full.
    Visible(String),
    Masked(Vec<Glyph>),
}

impl MaskedWord {
    pub fn render(&self) -> String {
        match self {
            MaskedWord::Visible(word) => word.clone(),
            MaskedWord::Masked(glyphs) => glyphs.iter().map(|g| g.as_char()).collect(),
        }
    }
}

pub fn mask_word(word: &str, reveal_threshold: usize) -> MaskedWord {
    if word.chars().count() <= reveal_threshold {
        return MaskedWord::Visible(word.to_string());
    }
    let glyphs = word
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i == 0 || !is_word_char(c) {
                Glyph::Shown(c)
            } else {
                Glyph::Hidden
            }
        })
        .collect();
    MaskedWord::Masked(glyphs)
}

pub fn mask(word: &str, reveal_threshold: usize) -> String {
    mask_word(word, reveal_threshold).render()
}

/// Mask every space-separated word of `text`.
pub fn mask_words(text: &str, reveal_threshold: usize) -> Vec<MaskedWord> {
    text.split(' ')
        .map(|word| mask_word(word, reveal_threshold))
        .collect()
}

pub fn mask_text(text: &str, reveal_threshold: usize) -> String {
    mask_words(text, reveal_threshold)
        .iter()
        .map(MaskedWord::render)
        .collect::<Vec<_>>()
        .join(" ")
}
