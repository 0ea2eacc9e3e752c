//! Error types for kernel parsing.

/// Errors arising while parsing references or verse lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerseError {
    /// The reference is not of the form `<Book> <chapter>:<verse>`.
    #[error("malformed reference: {0:?}")]
    MalformedReference(String),

    /// A pool or bucket line has no reference prefix or no text separator.
    #[error("malformed verse line: {0:?}")]
    MalformedLine(String),
}
