//! Preview artifacts
//!
//! The single value handed to the rendering surface.

use std::fmt;

use serde::{Deserialize, Serialize};

use forge_project::ContentHash;

/// How the preview document was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    /// The root component runs in the document
    Live,
    /// Static markup lifted out of component source
    Approximated,
    /// Nothing could be rendered
    None,
}

impl PreviewMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Approximated => "approximated",
            Self::None => "none",
        }
    }
}

impl fmt::Display for PreviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Materialized preview of one file set
///
/// `mode == None` always comes with no document and at least one
/// diagnostic; every other mode carries a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewArtifact {
    mode: PreviewMode,
    document: Option<String>,
    diagnostics: Vec<String>,
    source: ContentHash,
}

impl PreviewArtifact {
    /// Artifact carrying a rendered document
    pub(crate) fn rendered(
        mode: PreviewMode,
        document: String,
        diagnostics: Vec<String>,
        source: ContentHash,
    ) -> Self {
        debug_assert!(mode != PreviewMode::None);
        Self {
            mode,
            document: Some(document),
            diagnostics,
            source,
        }
    }

    /// Terminal "no preview available" artifact
    pub(crate) fn unavailable(mut diagnostics: Vec<String>, source: ContentHash) -> Self {
        if diagnostics.is_empty() {
            diagnostics.push("no preview available".to_string());
        }
        Self {
            mode: PreviewMode::None,
            document: None,
            diagnostics,
            source,
        }
    }

    /// Rendering mode
    #[inline]
    #[must_use]
    pub fn mode(&self) -> PreviewMode {
        self.mode
    }

    /// Complete document, absent when `mode` is `None`
    #[inline]
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Non-blocking notices and failure explanations
    #[inline]
    #[must_use]
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Fingerprint of the file set this was built from
    #[inline]
    #[must_use]
    pub fn source(&self) -> ContentHash {
        self.source
    }

    /// Whether a document is available
    #[inline]
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.document.is_some()
    }

    /// Whether this artifact was built from the file set with `fingerprint`
    ///
    /// Rendering surfaces use this to drop artifacts of superseded snapshots.
    #[inline]
    #[must_use]
    pub fn is_current_for(&self, fingerprint: &ContentHash) -> bool {
        self.source == *fingerprint
    }
}
