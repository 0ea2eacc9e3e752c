//! Session context: the two stores a review session mutates.

use reverse_store::{BucketStore, DataLayout, StoreError, Totals, VerseStore};

/// Owns the pool and the buckets for one run.
#[derive(Debug)]
pub struct Session {
    layout: DataLayout,
    pub pool: VerseStore,
    pub buckets: BucketStore,
}

impl Session {
    /// Load both stores, seeding working files from their masters.
    pub fn open(layout: DataLayout) -> Result<Self, StoreError> {
        let pool = VerseStore::load(&layout)?;
        let buckets = BucketStore::load(&layout)?;
        Ok(Self {
            layout,
            pool,
            buckets,
        })
    }

    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    pub fn totals(&self) -> Result<Totals, StoreError> {
        Totals::load(&self.layout)
    }

    /// A verse was recalled: drop it from the pool, then persist and reload
    /// the buckets so both files agree.
    pub fn learn(&mut self, reference: &str) -> Result<usize, StoreError> {
        let removed = self.pool.remove(reference)?;
        self.buckets.save()?;
        log::info!("learned {reference}");
        Ok(removed)
    }
}
