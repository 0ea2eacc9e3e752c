//! File names inside a data directory.

use std::path::{Path, PathBuf};

pub const VERSES_MASTER_FILE: &str = "verses.master.txt";
pub const VERSES_FILE: &str = "verses.txt";
pub const BUCKETS_MASTER_FILE: &str = "buckets.master.json";
pub const BUCKETS_FILE: &str = "buckets.json";

/// Locations of the master and working files under one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn verses_master(&self) -> PathBuf {
        self.root.join(VERSES_MASTER_FILE)
    }

    pub fn verses(&self) -> PathBuf {
        self.root.join(VERSES_FILE)
    }

    pub fn buckets_master(&self) -> PathBuf {
        self.root.join(BUCKETS_MASTER_FILE)
    }

    pub fn buckets(&self) -> PathBuf {
        self.root.join(BUCKETS_FILE)
    }
}

impl Default for DataLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
