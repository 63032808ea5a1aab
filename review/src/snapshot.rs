//! Snapshot store: last-known metadata per (category, code).
//!
//! Absence of an entry is an expected state (a standard has no snapshot
//! until the first automated review has run) and is distinct from the
//! snapshot source failing to load (which substitutes an empty store).

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::collections::HashMap;

use crate::model::{Category, Snapshot, SnapshotFile};

/// Read-only store of per-standard snapshots, one code-keyed map per
/// category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapshotStore {
    nfpc: HashMap<String, Snapshot>,
    nftc: HashMap<String, Snapshot>,
}

impl SnapshotStore {
    /// Build the store from the snapshot source file.
    #[must_use]
    pub fn new(file: SnapshotFile) -> Self {
        Self { nfpc: file.nfpc, nftc: file.nftc }
    }

    /// Look up the snapshot for (category, code). `None` means no review
    /// has recorded this standard yet.
    #[must_use]
    pub fn get(&self, category: Category, code: &str) -> Option<&Snapshot> {
        match category {
            Category::Nfpc => self.nfpc.get(code),
            Category::Nftc => self.nftc.get(code),
        }
    }

    /// Total number of snapshot entries across both categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nfpc.len() + self.nftc.len()
    }

    /// Returns `true` if no snapshots are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nfpc.is_empty() && self.nftc.is_empty()
    }
}
