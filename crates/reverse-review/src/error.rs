//! Error types for review sessions.

use reverse_store::StoreError;

/// Errors that abort a review session.
///
/// A wrong answer is not an error; it loops inside the quiz.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The input channel ended while a quiz was waiting for `reference`.
    #[error("input closed while reviewing {reference}")]
    InputClosed { reference: String },

    #[error("console error: {0}")]
    Console(String),
}
