//! # reverse-store
//!
//! Persistent state for the reverse trainer: the verse pool and the review
//! buckets, each a mutable working file seeded from an immutable master.
//!
//! This crate provides:
//! - `VerseStore` (FIFO pool of unlearned verses) and `Totals`
//! - `BucketStore` / `Buckets` / `Queue` (four review streams)
//! - `DataLayout` (file names under one data directory)
//! - atomic text writes and validated reads (`files`)
//!
//! There is no locking. One process is assumed to own the data directory;
//! persist-then-reload is the consistency mechanism.

pub mod buckets;
pub mod error;
pub mod files;
pub mod layout;
pub mod pool;

pub use buckets::{BucketStore, Buckets, Queue};
pub use error::StoreError;
pub use layout::{
    BUCKETS_FILE, BUCKETS_MASTER_FILE, DataLayout, VERSES_FILE, VERSES_MASTER_FILE,
};
pub use pool::{Totals, VerseStore};
