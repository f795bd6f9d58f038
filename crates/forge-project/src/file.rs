//! Project files

use serde::{Deserialize, Serialize};

use crate::language::FileLanguage;
use crate::path::ProjectPath;

/// Where a file came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOrigin {
    /// Extracted from the model response
    #[default]
    Generated,
    /// Added by the completer to satisfy project invariants
    Synthesized,
}

/// One file of a generated project
///
/// `language` is derived from `path` at construction and cannot drift from it,
/// including on deserialization, where a stored language is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredFile")]
pub struct ProjectFile {
    path: ProjectPath,
    content: String,
    language: FileLanguage,
    origin: FileOrigin,
}

#[derive(Deserialize)]
struct StoredFile {
    path: ProjectPath,
    content: String,
    #[serde(default)]
    origin: FileOrigin,
}

impl From<StoredFile> for ProjectFile {
    fn from(stored: StoredFile) -> Self {
        Self::with_origin(stored.path, stored.content, stored.origin)
    }
}

impl ProjectFile {
    /// File extracted from model output
    #[must_use]
    pub fn generated(path: ProjectPath, content: impl Into<String>) -> Self {
        Self::with_origin(path, content, FileOrigin::Generated)
    }

    /// File added by the completer
    #[must_use]
    pub fn synthesized(path: ProjectPath, content: impl Into<String>) -> Self {
        Self::with_origin(path, content, FileOrigin::Synthesized)
    }

    fn with_origin(path: ProjectPath, content: impl Into<String>, origin: FileOrigin) -> Self {
        let language = FileLanguage::from_path(&path);
        Self {
            path,
            content: content.into(),
            language,
            origin,
        }
    }

    /// Project-relative path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &ProjectPath {
        &self.path
    }

    /// File content
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Language derived from the path extension
    #[inline]
    #[must_use]
    pub fn language(&self) -> FileLanguage {
        self.language
    }

    /// Origin of the file
    #[inline]
    #[must_use]
    pub fn origin(&self) -> FileOrigin {
        self.origin
    }

    /// Whether the file came from the model response
    #[inline]
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.origin == FileOrigin::Generated
    }
}
