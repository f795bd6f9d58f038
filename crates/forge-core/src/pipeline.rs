//! Pipeline facade
//!
//! Wires prompt construction, parsing, completion and preview together.
//! Each call is independent: nothing is carried from one turn to the next
//! except what the caller passes back in.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use forge_completer::{CompletionGap, ProjectCompleter};
use forge_parser::{ResponseParser, StrategyKind};
use forge_preview::{PreviewArtifact, PreviewMaterializer, StrategyPreference};
use forge_project::{ProjectFile, ProjectSnapshot};

use crate::config::ForgeConfig;
use crate::error::Result;
use crate::prompt::{conversation_context, format_prompt, SYSTEM_PROMPT};

/// Model output for one turn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResponse {
    /// Response text, unparsed
    pub text: String,
    /// Files of the previous turn, for the next prompt only
    #[serde(default)]
    pub prior_files: Vec<ProjectFile>,
}

impl RawResponse {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            prior_files: Vec::new(),
        }
    }

    /// With prior-turn files
    #[must_use]
    pub fn with_prior_files(mut self, files: Vec<ProjectFile>) -> Self {
        self.prior_files = files;
        self
    }
}

/// Result of processing one response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationTurn {
    /// Completed project
    pub snapshot: ProjectSnapshot,
    /// Extraction strategy the parser used
    pub strategy: StrategyKind,
    /// Whether the whole response became one file
    pub degraded: bool,
    /// Files the completer had to add
    pub gaps: Vec<CompletionGap>,
}

/// Parse, complete and preview generated projects
#[derive(Debug)]
pub struct Forge {
    config: ForgeConfig,
    parser: ResponseParser,
    completer: ProjectCompleter,
    materializer: PreviewMaterializer,
}

impl Default for Forge {
    fn default() -> Self {
        Self::new(ForgeConfig::default())
    }
}

impl Forge {
    /// Create from configuration
    #[must_use]
    pub fn new(config: ForgeConfig) -> Self {
        let completer = ProjectCompleter::with_html_title(config.preview.document_title.clone());
        let materializer = PreviewMaterializer::new(config.preview.clone());
        Self {
            config,
            parser: ResponseParser::new(),
            completer,
            materializer,
        }
    }

    /// Create from a TOML config file
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Self::new(ForgeConfig::load(path)?))
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    /// Full prompt for the generation service
    ///
    /// System instructions, then the user prompt with the configured brand
    /// guidelines and, when `prior_files` is non-empty, the previous project
    /// as follow-up context.
    #[must_use]
    pub fn build_prompt(&self, user_prompt: &str, prior_files: &[ProjectFile]) -> String {
        let context = conversation_context(prior_files);
        let prompt = format_prompt(user_prompt, self.config.active_brand(), context.as_deref());
        format!("{SYSTEM_PROMPT}\n\n{prompt}")
    }

    /// Turn one response into a completed snapshot
    #[must_use]
    pub fn process_turn(&self, response: &RawResponse) -> GenerationTurn {
        let outcome = self.parser.parse(&response.text);
        let completion = self.completer.complete_with_gaps(&outcome.files);
        let snapshot = ProjectSnapshot::new(completion.files, outcome.summary);

        info!(
            snapshot = %snapshot.id(),
            strategy = %outcome.strategy,
            files = snapshot.len(),
            synthesized = completion.gaps.len(),
            "generation turn processed"
        );

        GenerationTurn {
            snapshot,
            strategy: outcome.strategy,
            degraded: outcome.degraded,
            gaps: completion.gaps,
        }
    }

    /// Preview artifact for a snapshot
    #[must_use]
    pub fn preview(&self, snapshot: &ProjectSnapshot, preference: StrategyPreference) -> PreviewArtifact {
        let artifact = self.materializer.materialize_snapshot(snapshot, preference);
        debug!(snapshot = %snapshot.id(), mode = %artifact.mode(), "preview built");
        artifact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_preview::PreviewMode;
    use forge_test_utils::{files, paths, HEADER_RESPONSE, PLAIN_RESPONSE};
    use pretty_assertions::assert_eq;

    #[test]
    fn prompt_starts_with_system_instructions() {
        let prompt = Forge::default().build_prompt("A pricing page", &[]);
        assert!(prompt.starts_with(SYSTEM_PROMPT));
        assert!(prompt.contains("\n\nA pricing page\n\nPlease follow these brand guidelines:"));
        assert!(!prompt.contains("follow-up request"));
    }

    #[test]
    fn follow_up_prompt_carries_prior_files() {
        let forge = Forge::new(ForgeConfig::new().without_brand());
        let prior = files(&[("src/App.jsx", "export default function App() {}")]);
        let prompt = forge.build_prompt("Add a footer", &prior);
        assert!(!prompt.contains("brand guidelines"));
        assert!(prompt.contains("### src/App.jsx\n```jsx\nexport default function App() {}\n```"));
    }

    #[test]
    fn header_response_is_completed() {
        let turn = Forge::default().process_turn(&RawResponse::new(HEADER_RESPONSE));
        assert_eq!(turn.strategy, StrategyKind::HeaderFence);
        assert!(!turn.degraded);
        assert!(turn.snapshot.get("index.html").is_some());
        assert!(turn.snapshot.get("src/App.jsx").is_some());
    }

    #[test]
    fn plain_response_is_degraded_but_complete() {
        let turn = Forge::default().process_turn(&RawResponse::new(PLAIN_RESPONSE));
        assert!(turn.degraded);
        assert_eq!(turn.strategy, StrategyKind::WholeText);
        assert_eq!(
            paths(turn.snapshot.files()),
            vec!["src/App.jsx", "src/index.jsx", "index.html", "src/index.css"]
        );
        assert_eq!(turn.gaps.len(), 3);
    }

    #[test]
    fn configured_title_reaches_host_and_preview() {
        let config = ForgeConfig::new().with_preview(
            forge_preview::PreviewOptions::default().with_document_title("Bakery"),
        );
        let forge = Forge::new(config);
        let turn = forge.process_turn(&RawResponse::new(HEADER_RESPONSE));
        let host = turn.snapshot.get("index.html").unwrap();
        assert!(host.content().contains("<title>Bakery</title>"));

        let artifact = forge.preview(&turn.snapshot, StrategyPreference::Live);
        assert_eq!(artifact.mode(), PreviewMode::Live);
        assert!(artifact.document().unwrap().contains("<title>Bakery</title>"));
    }
}
