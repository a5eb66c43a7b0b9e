//! The persistent asset-type index.
//!
//! `asset-types.json` maps each asset-schema title to the directory the
//! game loads those assets from. It is the only state that outlives a
//! processing run: the driver loads it (absent file == empty), upserts one
//! entry per cleaned document that carried a vendor `path`, and rewrites
//! the whole file sorted by id. Entries are never deleted here — asset
//! types absent from one artifact may return in the next.

use serde::{Deserialize, Serialize};

/// One browsable asset type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// The schema's declared title.
    pub id: String,
    /// Display name; currently always equal to `id`.
    pub name: String,
    /// Asset directory relative to the pack root.
    pub location: String,
}

/// In-memory view of the index during a run.
#[derive(Debug, Default, Clone)]
pub struct AssetTypeIndex {
    entries: Vec<IndexEntry>,
}

impl AssetTypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }

    /// Update the location of an existing entry in place, or append a new
    /// entry named after its id.
    pub fn upsert(&mut self, id: &str, location: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.location = location.to_string();
        } else {
            self.entries.push(IndexEntry {
                id: id.to_string(),
                name: id.to_string(),
                location: location.to_string(),
            });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the index, returning entries sorted ascending by id, ready
    /// for persistence.
    pub fn into_sorted_entries(mut self) -> Vec<IndexEntry> {
        self.entries.sort_by(|a, b| a.id.cmp(&b.id));
        self.entries
    }
}
