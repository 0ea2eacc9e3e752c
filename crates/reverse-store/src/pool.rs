//! The pool: verses not yet learned.
//!
//! ```text
//! verses.master.txt  --seed (first run)-->  verses.txt
//!                                              |  load / save
//!                                          VerseStore (FIFO)
//! ```
//!
//! The pool only shrinks. Drawing the head is in-memory until the next save;
//! removal by reference persists immediately.

use crate::error::StoreError;
use crate::files::{count_lines, read_lines, seed_from_master, write_text};
use crate::layout::DataLayout;
use reverse_kernel::{VerseEntry, same};
use serde::Serialize;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Learned/available counts derived from the two pool files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub available: usize,
    pub remaining: usize,
    pub learned: usize,
}

impl Totals {
    /// Line counts of the master and working pool files.
    ///
    /// Assumes the master never grows during a run.
    pub fn load(layout: &DataLayout) -> Result<Self, StoreError> {
        let available = count_lines(&layout.verses_master())?;
        let remaining = count_lines(&layout.verses())?;
        Ok(Self {
            available,
            remaining,
            learned: available.saturating_sub(remaining),
        })
    }
}

#[derive(Debug, Clone)]
pub struct VerseStore {
    path: PathBuf,
    entries: VecDeque<VerseEntry>,
}

impl VerseStore {
    /// Load the working pool, seeding it from the master on first run.
    pub fn load(layout: &DataLayout) -> Result<Self, StoreError> {
        let path = layout.verses();
        seed_from_master(&path, &layout.verses_master())?;
        let entries = read_lines(&path)?
            .iter()
            .enumerate()
            .map(|(i, line)| {
                VerseEntry::parse_pool_line(line).map_err(|source| StoreError::MalformedVerse {
                    path: path.display().to_string(),
                    line: i + 1,
                    source,
                })
            })
            .collect::<Result<VecDeque<_>, _>>()?;
        log::debug!("loaded {} pool verse(s) from {}", entries.len(), path.display());
        Ok(Self { path, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &VerseEntry> {
        self.entries.iter()
    }

    /// Take the head of the pool. Not persisted until the next save.
    pub fn next_verse(&mut self) -> Option<VerseEntry> {
        self.entries.pop_front()
    }

    /// Drop every entry whose reference matches, then persist.
    ///
    /// Matching ignores case and surrounding whitespace. Returns how many
    /// entries were dropped.
    pub fn remove(&mut self, reference: &str) -> Result<usize, StoreError> {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !same(&entry.reference.to_string(), reference));
        let removed = before - self.entries.len();
        log::debug!("removed {removed} pool verse(s) for {reference}");
        self.save()?;
        Ok(removed)
    }

    /// Persist the pool, one `"<reference> <text>"` line per verse.
    pub fn save(&self) -> Result<(), StoreError> {
        let contents: String = self
            .entries
            .iter()
            .map(|entry| format!("{}\n", entry.pool_line()))
            .collect();
        write_text(&self.path, &contents)
    }
}
