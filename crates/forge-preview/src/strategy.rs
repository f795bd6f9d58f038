//! Render strategy trait

use std::fmt;

use forge_project::ProjectFile;

use crate::artifact::PreviewMode;
use crate::error::StrategyUnavailable;
use crate::options::PreviewOptions;

/// One way of turning a file set into a preview document
///
/// Implementations are pure: they read the files and options, may append
/// non-blocking diagnostics, and either return a complete document or
/// report why they cannot.
pub trait RenderStrategy: Send + Sync + fmt::Debug {
    /// Mode recorded on artifacts this strategy produces
    fn mode(&self) -> PreviewMode;

    /// Build the document
    ///
    /// # Errors
    /// [`StrategyUnavailable`] when the file set lacks what this strategy
    /// needs. Never produces a partial document.
    fn render(
        &self,
        files: &[ProjectFile],
        options: &PreviewOptions,
        diagnostics: &mut Vec<String>,
    ) -> Result<String, StrategyUnavailable>;
}
