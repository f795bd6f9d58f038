//! Error types for preview materialization
//!
//! Neither type escapes [`materialize`](crate::PreviewMaterializer::materialize):
//! both are folded into the artifact's diagnostics.

use forge_project::ProjectPath;

/// Why a render strategy could not produce a document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyUnavailable {
    /// No canonical root component in the file set
    #[error("no root application component found")]
    NoRootComponent,

    /// Root component found, but no identifier to mount
    #[error("no mountable component in {0}")]
    NoComponentName(ProjectPath),

    /// No component file yielded any static markup
    #[error("no component produced static markup")]
    NoMarkup,
}

/// Markup extraction failure for one file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The file returns no markup from any function
    #[error("no markup return found")]
    NoReturnMarkup,

    /// The grammar for the file could not be loaded
    #[error("grammar unavailable: {0}")]
    Grammar(String),

    /// The source did not parse cleanly around the markup
    #[error("syntax error at byte {offset}")]
    Syntax { offset: usize },

    /// A closing tag did not match the open element
    #[error("closing tag </{found}> does not match <{expected}> at byte {offset}")]
    MismatchedClose {
        expected: String,
        found: String,
        offset: usize,
    },
}

impl ExtractError {
    /// Create a mismatched-close error
    pub(crate) fn mismatched(expected: &str, found: &str, offset: usize) -> Self {
        Self::MismatchedClose {
            expected: expected.to_string(),
            found: found.to_string(),
            offset,
        }
    }
}
