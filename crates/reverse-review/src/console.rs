//! The seam between the engine and whatever renders it.
//!
//! The engine emits structured [`ReviewEvent`]s (masked glyphs, per-word
//! correctness flags) and reads raw lines. Styling is the implementor's job.

use crate::error::ReviewError;
use reverse_kernel::{Feedback, MaskedWord, Stream, VerseEntry};
use reverse_store::Totals;
use std::time::Duration;

/// Queue sizes shown before the first card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedStream {
    pub stream: Stream,
    pub count: usize,
}

#[derive(Debug, Clone, Copy)]
pub enum ReviewEvent<'a> {
    Overview {
        totals: Totals,
        plan: &'a [PlannedStream],
    },
    Loading {
        stream: Stream,
        count: usize,
    },
    /// Full text shown for the first recitation of a verse.
    Recite {
        stream: Stream,
        verse: &'a VerseEntry,
    },
    /// Masked text shown for the recall phase.
    Recall {
        stream: Stream,
        verse: &'a VerseEntry,
        words: &'a [MaskedWord],
        mask_all: bool,
    },
    /// A wrong attempt. `reveal` carries the target during recitation.
    Mismatch {
        feedback: &'a Feedback,
        reveal: Option<&'a VerseEntry>,
    },
    Learned {
        stream: Stream,
        verse: &'a VerseEntry,
    },
    Completed,
}

/// Line-based interactive channel.
pub trait Console {
    /// Next input line, `None` once input is closed.
    fn read_line(&mut self) -> Result<Option<String>, ReviewError>;

    fn present(&mut self, event: ReviewEvent<'_>) -> Result<(), ReviewError>;

    /// Pacing delay between cards.
    fn pause(&mut self, duration: Duration);
}
