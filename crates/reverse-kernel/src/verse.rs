//! Verse references and the two on-disk line formats.
//!
//! A reference is tokenized once, at parse time, into `{book, chapter, verse}`.
//! Everything downstream (emphasis, comparison, removal) works from the
//! structured value instead of re-deriving fields from the string.

use crate::compare::same;
use crate::error::VerseError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Separator between reference and text inside bucket queues.
const BUCKET_SEPARATOR: &str = "  ";

/// A structured `<Book> <chapter>:<verse>` reference.
///
/// The book may span several tokens (`1 John`, `Song of Solomon`); every
/// book token consists of word characters only, and tokens are joined by
/// single spaces. Chapter and verse keep their digits as written, so
/// `Psalm 23:01` stays `23:01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

impl Reference {
    pub fn new(book: &str, chapter: impl ToString, verse: impl ToString) -> Self {
        Self {
            book: book.split_whitespace().collect::<Vec<_>>().join(" "),
            chapter: chapter.to_string(),
            verse: verse.to_string(),
        }
    }

    /// Case- and surrounding-whitespace-insensitive match against raw text.
    pub fn matches(&self, raw: &str) -> bool {
        same(&self.to_string(), raw)
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

impl FromStr for Reference {
    type Err = VerseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || VerseError::MalformedReference(s.to_string());
        let trimmed = s.trim();
        let (book, numbers) = trimmed.rsplit_once(' ').ok_or_else(malformed)?;
        let book = book.trim();
        if book.is_empty()
            || !book
                .split(' ')
                .filter(|t| !t.is_empty())
                .all(|t| t.chars().all(is_word_char))
        {
            return Err(malformed());
        }
        let (chapter, verse) = chapter_verse(numbers).ok_or_else(malformed)?;
        Ok(Self::new(book, chapter, verse))
    }
}

/// One verse: the unit held by the pool and by every bucket queue.
///
/// Serializes as a bucket line (`"<reference>  <text>"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VerseEntry {
    pub reference: Reference,
    pub text: String,
}

impl VerseEntry {
    pub fn new(reference: Reference, text: impl Into<String>) -> Self {
        Self {
            reference,
            text: text.into(),
        }
    }

    /// Parse a pool line: `"<reference> <text>"`.
    pub fn parse_pool_line(line: &str) -> Result<Self, VerseError> {
        let (reference, text) = split_reference_prefix(line.trim())
            .ok_or_else(|| VerseError::MalformedLine(line.to_string()))?;
        Ok(Self::new(reference.parse()?, text.trim()))
    }

    /// Parse a bucket line: `"<reference>  <text>"`.
    pub fn parse_bucket_line(line: &str) -> Result<Self, VerseError> {
        let (reference, text) = line
            .split_once(BUCKET_SEPARATOR)
            .ok_or_else(|| VerseError::MalformedLine(line.to_string()))?;
        Ok(Self::new(reference.parse()?, text))
    }

    pub fn pool_line(&self) -> String {
        format!("{} {}", self.reference, self.text)
    }

    pub fn bucket_line(&self) -> String {
        format!("{}{BUCKET_SEPARATOR}{}", self.reference, self.text)
    }

    /// Words of the text, split on single spaces.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ')
    }
}

impl TryFrom<String> for VerseEntry {
    type Error = VerseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_bucket_line(&value)
    }
}

impl From<VerseEntry> for String {
    fn from(value: VerseEntry) -> Self {
        value.bucket_line()
    }
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn chapter_verse(token: &str) -> Option<(&str, &str)> {
    let (chapter, verse) = token.split_once(':')?;
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    (digits(chapter) && digits(verse)).then_some((chapter, verse))
}

/// Split `"<book tokens> <chapter>:<verse> <rest>"` at the first
/// chapter:verse token.
///
/// The book prefix must be non-empty and made of word characters and
/// spaces; a single space must follow the chapter:verse token. Returns the
/// trimmed reference and the untrimmed remainder.
pub(crate) fn split_reference_prefix(line: &str) -> Option<(&str, &str)> {
    let mut start = 0;
    for token in line.split(' ') {
        let end = start + token.len();
        if start >= 2 && chapter_verse(token).is_some() {
            if end < line.len() {
                return Some((line[..end].trim(), &line[end + 1..]));
            }
            return None;
        }
        if !token.chars().all(is_word_char) {
            return None;
        }
        start = end + 1;
    }
    None
}
