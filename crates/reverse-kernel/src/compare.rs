//! Answer comparison: normalization, matching and per-word feedback.
//!
//! Pass/fail is decided only by [`is_match`]. The [`diff`] is feedback data
//! for the presentation layer and never influences the outcome.

use crate::verse::{VerseEntry, split_reference_prefix};

/// Uppercase and trim. Empty input normalizes to `None`.
pub fn normalize(s: &str) -> Option<String> {
    let normalized = s.trim().to_uppercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Normalized equality. Empty input never equals anything, itself included.
pub fn same(a: &str, b: &str) -> bool {
    match (normalize(a), normalize(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// One submitted line, split into a candidate reference and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// Empty when the line carries no `<book> <c>:<v>` prefix.
    pub reference: String,
    pub text: String,
}

impl Attempt {
    pub fn parse(line: &str) -> Self {
        match split_reference_prefix(line) {
            Some((reference, text)) => Self {
                reference: reference.to_string(),
                text: text.trim().to_string(),
            },
            None => Self {
                reference: String::new(),
                text: line.trim().to_string(),
            },
        }
    }

    pub fn is_blank(&self) -> bool {
        self.reference.is_empty() && self.text.is_empty()
    }
}

/// True iff both reference and text normalize-equal the target.
pub fn is_match(
    candidate_ref: &str,
    candidate_text: &str,
    target_ref: &str,
    target_text: &str,
) -> bool {
    same(candidate_ref, target_ref) && same(candidate_text, target_text)
}

/// Correctness of one candidate word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMark {
    pub word: String,
    pub correct: bool,
}

/// Feedback for a mismatched attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub reference: String,
    pub reference_correct: bool,
    pub words: Vec<WordMark>,
}

impl Feedback {
    pub fn correct_words(&self) -> usize {
        self.words.iter().filter(|w| w.correct).count()
    }
}

/// Position-wise word diff of `attempt` against `target`.
///
/// Candidate words beyond the target's word count are always incorrect.
pub fn diff(attempt: &Attempt, target: &VerseEntry) -> Feedback {
    let target_words: Vec<&str> = target.words().collect();
    let words = attempt
        .text
        .split(' ')
        .enumerate()
        .map(|(i, word)| WordMark {
            word: word.to_string(),
            correct: target_words.get(i).is_some_and(|t| same(word, t)),
        })
        .collect();
    Feedback {
        reference: attempt.reference.clone(),
        reference_correct: target.reference.matches(&attempt.reference),
        words,
    }
}

/// Outcome of one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Judgement {
    Match,
    Mismatch(Feedback),
    /// Nothing typed; re-prompt without feedback.
    Blank,
}

pub fn judge(line: &str, target: &VerseEntry) -> Judgement {
    let attempt = Attempt::parse(line);
    if is_match(
        &attempt.reference,
        &attempt.text,
        &target.reference.to_string(),
        &target.text,
    ) {
        Judgement::Match
    } else if attempt.is_blank() {
        Judgement::Blank
    } else {
        Judgement::Mismatch(diff(&attempt, target))
    }
}
