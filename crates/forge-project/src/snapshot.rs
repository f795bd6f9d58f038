//! Project snapshots
//!
//! A [`ProjectSnapshot`] is the file set produced by one generation turn. It
//! is built once, never mutated, and superseded by the next turn's snapshot.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::file::ProjectFile;
use crate::hash::{ContentHash, FingerprintBuilder};
use crate::path::ProjectPath;

/// Unique snapshot identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SnapshotId(pub Ulid);

impl SnapshotId {
    /// Generate new snapshot ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for SnapshotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered file set, unique by path, for one generation turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    id: SnapshotId,
    created_at: DateTime<Utc>,
    summary: String,
    files: Vec<ProjectFile>,
}

impl ProjectSnapshot {
    /// Build a snapshot; later files with an already-seen path are dropped
    #[must_use]
    pub fn new(files: impl IntoIterator<Item = ProjectFile>, summary: impl Into<String>) -> Self {
        Self {
            id: SnapshotId::new(),
            created_at: Utc::now(),
            summary: summary.into(),
            files: dedup_by_path(files),
        }
    }

    /// Snapshot identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> SnapshotId {
        self.id
    }

    /// Creation time
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Summary text that accompanied the files
    #[inline]
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Files in emission order
    #[inline]
    #[must_use]
    pub fn files(&self) -> &[ProjectFile] {
        &self.files
    }

    /// Number of files
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the snapshot holds no files
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Look up a file by path
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&ProjectFile> {
        self.files.iter().find(|f| f.path().as_str() == path)
    }

    /// Fingerprint of the file set (paths and contents, in order)
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        fingerprint(&self.files)
    }
}

/// Fingerprint of an ordered file list
#[must_use]
pub fn fingerprint(files: &[ProjectFile]) -> ContentHash {
    let mut builder = FingerprintBuilder::new();
    for file in files {
        builder.entry(file.path().as_str(), file.content());
    }
    builder.finish()
}

/// Drop files whose path was already seen, preserving first-occurrence order
#[must_use]
pub fn dedup_by_path(files: impl IntoIterator<Item = ProjectFile>) -> Vec<ProjectFile> {
    let mut unique: IndexMap<ProjectPath, ProjectFile> = IndexMap::new();
    for file in files {
        unique.entry(file.path().clone()).or_insert(file);
    }
    unique.into_values().collect()
}
