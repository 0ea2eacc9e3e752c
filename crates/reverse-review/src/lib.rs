//! # reverse-review
//!
//! Orchestration for one review session.
//!
//! This crate provides:
//! - `Session` (the pool and buckets owned for one run)
//! - `ReviewEngine` (rotation policies, two-phase quiz, persistence points)
//! - the `Console` trait and `ReviewEvent` stream a front end renders
//!
//! Input is a single line-based channel, so the "review all" stream
//! serializes its quizzes in queue order.

pub mod console;
pub mod engine;
pub mod error;
pub mod session;

pub use console::{Console, PlannedStream, ReviewEvent};
pub use engine::{DEFAULT_PACE, ReviewEngine, ReviewOptions, StreamOutcome};
pub use error::ReviewError;
pub use session::Session;
