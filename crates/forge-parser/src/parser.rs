//! Response parser
//!
//! Runs the strategy ladder and applies the post-processing every strategy
//! shares: inline path overrides, path normalization, first-wins
//! deduplication and extension-derived languages.

use serde::Serialize;
use tracing::{debug, info};

use forge_project::{dedup_by_path, signals, ProjectFile, ProjectPath};

use crate::block::{first_fence_offset, AssignedBlock};
use crate::strategy::{first_match, StrategyKind};

/// Summary used when no structure could be recognized
pub const DEGRADED_SUMMARY: &str =
    "The response did not contain recognizable code blocks, so its full text was used as the application component.";

/// Result of parsing one response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    /// Extracted files, unique by path, in emission order
    pub files: Vec<ProjectFile>,
    /// Prose preceding the code
    pub summary: String,
    /// Strategy that produced the files
    pub strategy: StrategyKind,
    /// Whether the whole-text fallback was used
    pub degraded: bool,
}

impl ParseOutcome {
    /// Split into `(files, summary)`
    #[must_use]
    pub fn into_parts(self) -> (Vec<ProjectFile>, String) {
        (self.files, self.summary)
    }
}

/// Turns free-form response text into project files
///
/// Stateless; one value can parse any number of responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseParser;

impl ResponseParser {
    /// Create a parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse a response; never fails and never returns zero files
    #[must_use]
    pub fn parse(&self, raw: &str) -> ParseOutcome {
        let (strategy, blocks) = first_match(raw);
        let degraded = strategy.is_degraded();

        let summary = if degraded {
            info!("no code blocks recognized, using whole response as root component");
            DEGRADED_SUMMARY.to_string()
        } else {
            summary_before(raw, &blocks)
        };

        let files = dedup_by_path(blocks.into_iter().map(into_file));
        debug!(%strategy, files = files.len(), "response parsed");

        ParseOutcome {
            files,
            summary,
            strategy,
            degraded,
        }
    }
}

/// Parse with a default [`ResponseParser`]
#[must_use]
pub fn parse(raw: &str) -> ParseOutcome {
    ResponseParser::new().parse(raw)
}

/// Text ahead of the first fence or the first block source, trimmed
fn summary_before(raw: &str, blocks: &[AssignedBlock]) -> String {
    let block_start = blocks.iter().map(|b| b.block.start).min();
    let cut = match (first_fence_offset(raw), block_start) {
        (Some(a), Some(b)) => a.min(b),
        (a, b) => a.or(b).unwrap_or(raw.len()),
    };
    raw.get(..cut).unwrap_or(raw).trim().to_string()
}

/// Final path for a block: a valid inline `filepath:` comment wins
fn into_file(assigned: AssignedBlock) -> ProjectFile {
    let AssignedBlock { block, path } = assigned;
    let path = signals::inline_path_comment(&block.body)
        .and_then(|raw| ProjectPath::parse(raw).ok())
        .unwrap_or(path);
    ProjectFile::generated(path, block.body)
}
