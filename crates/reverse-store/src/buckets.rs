//! Review buckets: four streams of verse queues persisted as one JSON file.
//!
//! ```text
//! buckets.master.json  --seed (first run)-->  buckets.json
//!                                                |  save = write + reload
//!                                            BucketStore
//! ```
//!
//! Shape on disk:
//!
//! ```text
//! {
//!     "daily": ["<ref>  <text>", ...],
//!     "oddEven": { "odd": [...], "even": [...] },
//!     "dayOfWeek": { "0": [...], ..., "6": [...] },
//!     "dateOfMonth": { "1": [...], ..., "31": [...] }
//! }
//! ```

use crate::error::StoreError;
use crate::files::{read_text, seed_from_master, write_text};
use crate::layout::DataLayout;
use reverse_kernel::{Parity, Stream, VerseEntry};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

/// Ordered queue of pending verses, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue(VecDeque<VerseEntry>);

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VerseEntry> {
        self.0.iter()
    }

    pub fn push_back(&mut self, entry: VerseEntry) {
        self.0.push_back(entry);
    }

    pub fn pop_front(&mut self) -> Option<VerseEntry> {
        self.0.pop_front()
    }

    /// Entries with exact duplicates dropped, first occurrence kept.
    pub fn distinct(&self) -> Vec<VerseEntry> {
        let mut seen = HashSet::new();
        self.0
            .iter()
            .filter(|entry| seen.insert(*entry))
            .cloned()
            .collect()
    }
}

impl FromIterator<VerseEntry> for Queue {
    fn from_iter<I: IntoIterator<Item = VerseEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Queue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for Queue {
    /// `null` and empty-string elements are dropped.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Vec<Option<String>> = Vec::deserialize(deserializer)?;
        raw.into_iter()
            .flatten()
            .filter(|line| !line.trim().is_empty())
            .map(|line| VerseEntry::parse_bucket_line(&line).map_err(D::Error::custom))
            .collect::<Result<VecDeque<_>, _>>()
            .map(Queue)
    }
}

/// The four review streams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buckets {
    pub daily: Queue,
    pub odd_even: BTreeMap<String, Queue>,
    pub day_of_week: BTreeMap<u8, Queue>,
    pub date_of_month: BTreeMap<u8, Queue>,
}

impl Buckets {
    /// Every key present, every queue empty.
    pub fn skeleton() -> Self {
        Self {
            daily: Queue::new(),
            odd_even: [Parity::Odd, Parity::Even]
                .into_iter()
                .map(|p| (p.as_str().to_string(), Queue::new()))
                .collect(),
            day_of_week: (0..=6).map(|k| (k, Queue::new())).collect(),
            date_of_month: (1..=31).map(|k| (k, Queue::new())).collect(),
        }
    }

    pub fn queue(&self, stream: Stream, key: Option<&str>) -> Result<&Queue, StoreError> {
        let found = match (stream, key) {
            (Stream::Daily, None) => Some(&self.daily),
            (Stream::OddEven, Some(key)) => self.odd_even.get(key),
            (Stream::DayOfWeek, Some(key)) => {
                numeric_key(key).and_then(|k| self.day_of_week.get(&k))
            }
            (Stream::DateOfMonth, Some(key)) => {
                numeric_key(key).and_then(|k| self.date_of_month.get(&k))
            }
            _ => None,
        };
        found.ok_or_else(|| bucket_not_found(stream, key))
    }

    /// Resolve a stream's queue: the daily queue, or `stream[key]`.
    pub fn queue_mut(
        &mut self,
        stream: Stream,
        key: Option<&str>,
    ) -> Result<&mut Queue, StoreError> {
        let found = match (stream, key) {
            (Stream::Daily, None) => Some(&mut self.daily),
            (Stream::OddEven, Some(key)) => self.odd_even.get_mut(key),
            (Stream::DayOfWeek, Some(key)) => {
                numeric_key(key).and_then(|k| self.day_of_week.get_mut(&k))
            }
            (Stream::DateOfMonth, Some(key)) => {
                numeric_key(key).and_then(|k| self.date_of_month.get_mut(&k))
            }
            _ => None,
        };
        found.ok_or_else(|| bucket_not_found(stream, key))
    }

    /// Four-space indented JSON, keyed streams in numeric key order.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

fn numeric_key(key: &str) -> Option<u8> {
    key.trim().parse().ok()
}

fn bucket_not_found(stream: Stream, key: Option<&str>) -> StoreError {
    StoreError::BucketNotFound {
        stream: stream.to_string(),
        key: key.unwrap_or_default().to_string(),
    }
}

/// Buckets bound to their working file.
#[derive(Debug, Clone)]
pub struct BucketStore {
    path: PathBuf,
    buckets: Buckets,
}

impl BucketStore {
    /// Load the working buckets, seeding them from the master on first run.
    pub fn load(layout: &DataLayout) -> Result<Self, StoreError> {
        let path = layout.buckets();
        seed_from_master(&path, &layout.buckets_master())?;
        let buckets = read_buckets(&path)?;
        Ok(Self { path, buckets })
    }

    pub fn buckets(&self) -> &Buckets {
        &self.buckets
    }

    pub fn buckets_mut(&mut self) -> &mut Buckets {
        &mut self.buckets
    }

    /// Re-read the working file, replacing in-memory state.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.buckets = read_buckets(&self.path)?;
        Ok(())
    }

    /// Persist, then reload so memory mirrors exactly what was written.
    pub fn save(&mut self) -> Result<(), StoreError> {
        let json = self
            .buckets
            .to_json_string()
            .map_err(|e| StoreError::MalformedBucketData {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;
        write_text(&self.path, &format!("{json}\n"))?;
        log::debug!("saved buckets to {}", self.path.display());
        self.reload()
    }
}

fn read_buckets(path: &Path) -> Result<Buckets, StoreError> {
    let json = read_text(path)?;
    serde_json::from_str(&json).map_err(|e| StoreError::MalformedBucketData {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
