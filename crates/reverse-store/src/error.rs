//! Error types for the verse pool and bucket files.

use reverse_kernel::VerseError;
use std::io;
use std::path::Path;

/// Errors raised while seeding, reading, writing or querying stored state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The working file is absent and so is the master it is seeded from.
    #[error("missing master file: {path}")]
    MissingMasterFile { path: String },

    /// The buckets file is not valid JSON of the four-stream shape.
    #[error("malformed bucket data in {path}: {message}")]
    MalformedBucketData { path: String, message: String },

    /// A pool line could not be parsed as a verse.
    #[error("malformed verse at {path}:{line}: {source}")]
    MalformedVerse {
        path: String,
        line: usize,
        #[source]
        source: VerseError,
    },

    /// A keyed stream has no queue under the requested key.
    #[error("bucket {stream}[{key}] not found")]
    BucketNotFound { stream: String, key: String },

    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupted file: {0}")]
    Corrupt(String),
}

/// Adapter for `map_err`: attach the attempted action and path to an IO error.
pub(crate) fn io_error(
    action: &'static str,
    path: &Path,
) -> impl FnOnce(io::Error) -> StoreError + use<> {
    let path = path.display().to_string();
    move |source| StoreError::Io {
        action,
        path,
        source,
    }
}
