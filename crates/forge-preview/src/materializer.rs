//! Preview materializer
//!
//! Tries the requested strategy chain in order and folds every failure into
//! the artifact's diagnostics. There is no error path out of
//! [`PreviewMaterializer::materialize`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use forge_project::{fingerprint, ProjectFile, ProjectSnapshot};

use crate::approximate::ApproximatedStrategy;
use crate::artifact::PreviewArtifact;
use crate::live::LiveStrategy;
use crate::options::PreviewOptions;
use crate::strategy::RenderStrategy;

/// Which strategy to start from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyPreference {
    /// Live first, approximated when live is unavailable
    #[default]
    Live,
    /// Approximated only, e.g. after the surface reported a live failure
    Approximated,
}

/// Projects a file set into a single preview document
#[derive(Debug, Clone, Default)]
pub struct PreviewMaterializer {
    options: PreviewOptions,
    live: LiveStrategy,
    approximated: ApproximatedStrategy,
}

impl PreviewMaterializer {
    /// Materializer with the given document options
    #[must_use]
    pub fn new(options: PreviewOptions) -> Self {
        Self {
            options,
            live: LiveStrategy,
            approximated: ApproximatedStrategy,
        }
    }

    /// Document options in use
    #[inline]
    #[must_use]
    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    fn chain(&self, preference: StrategyPreference) -> Vec<&dyn RenderStrategy> {
        match preference {
            StrategyPreference::Live => vec![&self.live as &dyn RenderStrategy, &self.approximated],
            StrategyPreference::Approximated => vec![&self.approximated as &dyn RenderStrategy],
        }
    }

    /// Build the preview artifact for `files`
    ///
    /// Never fails: when no strategy can render, the artifact has mode
    /// `None` and diagnostics saying why.
    #[must_use]
    pub fn materialize(&self, files: &[ProjectFile], preference: StrategyPreference) -> PreviewArtifact {
        let source = fingerprint(files);
        let mut diagnostics = Vec::new();

        for (attempt, strategy) in self.chain(preference).into_iter().enumerate() {
            match strategy.render(files, &self.options, &mut diagnostics) {
                Ok(document) => {
                    if attempt > 0 {
                        info!(mode = %strategy.mode(), "preview fell back");
                    }
                    debug!(mode = %strategy.mode(), source = %source.short(), "preview materialized");
                    return PreviewArtifact::rendered(strategy.mode(), document, diagnostics, source);
                }
                Err(reason) => {
                    debug!(mode = %strategy.mode(), %reason, "preview strategy unavailable");
                    diagnostics.push(format!("{} preview unavailable: {reason}", strategy.mode()));
                }
            }
        }

        info!(source = %source.short(), "no preview available");
        PreviewArtifact::unavailable(diagnostics, source)
    }

    /// Build the preview artifact for a snapshot
    #[must_use]
    pub fn materialize_snapshot(
        &self,
        snapshot: &ProjectSnapshot,
        preference: StrategyPreference,
    ) -> PreviewArtifact {
        self.materialize(snapshot.files(), preference)
    }
}

/// Materialize with default options
#[must_use]
pub fn materialize(files: &[ProjectFile], preference: StrategyPreference) -> PreviewArtifact {
    PreviewMaterializer::default().materialize(files, preference)
}
