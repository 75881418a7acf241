//! Application bundle types.
//!
//! These types represent discovered application bundles in the system,
//! independent of how they were discovered.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// A discovered application bundle with its stable identifier.
///
/// Records are created by the scanner and are immutable afterwards.
/// `bundle_id` is never empty: entries for which no identifier could be
/// extracted are never turned into records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
    /// Display name of the bundle (the on-disk entry name, e.g. "Safari.app").
    pub name: String,
    /// Absolute path to the bundle.
    pub path: PathBuf,
    /// Stable reverse-domain identifier (e.g. "com.apple.Safari").
    pub bundle_id: String,
}

impl AppRecord {
    /// Create a new record.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        bundle_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            bundle_id: bundle_id.into(),
        }
    }
}

/// The application index: display name → record.
///
/// Built once per process by the scanner and read-only afterwards.
/// Keys are unique; inserting a record under an existing name replaces
/// the previous record (last writer wins). Iteration order is not
/// defined; it depends on the completion order of concurrent probes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppIndex {
    records: HashMap<String, AppRecord>,
}

impl AppIndex {
    /// Insert a record keyed by its display name.
    ///
    /// Returns the previously stored record for that name, if any.
    pub fn insert(&mut self, record: AppRecord) -> Option<AppRecord> {
        self.records.insert(record.name.clone(), record)
    }

    /// Look up a record by display name.
    pub fn get(&self, name: &str) -> Option<&AppRecord> {
        self.records.get(name)
    }

    /// Number of indexed applications.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no applications.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &AppRecord> {
        self.records.values()
    }

    /// Records sorted by display name, for stable presentation.
    pub fn sorted_by_name(&self) -> Vec<&AppRecord> {
        let mut records: Vec<&AppRecord> = self.records.values().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }

    /// Merge another index into this one; the other index wins collisions.
    pub fn merge(&mut self, other: Self) {
        for record in other.records.into_values() {
            self.insert(record);
        }
    }
}
