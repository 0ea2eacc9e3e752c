//! # reverse-kernel
//!
//! Pure data layer for the reverse memory trainer.
//!
//! This crate provides:
//! - `Reference` and `VerseEntry` (the unit every queue and the pool holds)
//! - pool-line and bucket-line formats
//! - `Attempt`: the tokenizer for one line of user input
//! - masking (`mask`, `mask_text`) and comparison (`judge`, `diff`)
//! - schedule keys for the four review streams
//!
//! Nothing here touches the filesystem or the terminal.
//!
//! ## Line formats
//!
//! ```text
//! pool line:    John 3:16 For God so loved the world...
//! bucket line:  John 3:16  For God so loved the world...
//!                        ^^ two spaces
//! ```

pub mod compare;
pub mod error;
pub mod mask;
pub mod schedule;
pub mod verse;

pub use compare::{
    Attempt, Feedback, Judgement, WordMark, diff, is_match, judge, normalize, same,
};
pub use error::VerseError;
pub use mask::{FILLER, Glyph, MaskedWord, mask, mask_text, mask_word, mask_words};
pub use schedule::{
    DEFAULT_INITIAL_REVEAL, Parity, SessionDate, Stream, emphasized, reveal_threshold,
};
pub use verse::{Reference, VerseEntry};
