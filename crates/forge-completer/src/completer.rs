//! Project completer
//!
//! Runs the completion checks in their fixed order over a growing file list.
//! Later checks see the files earlier checks added: the stylesheet and build
//! configuration checks inspect a synthesized App for framework usage.

use serde::Serialize;
use tracing::debug;

use forge_project::{ProjectFile, ProjectPath, ProjectSnapshot};

use crate::check::{
    AppComponentCheck, BuildConfigCheck, CompletionCheck, EntryPointCheck, HtmlHostCheck,
    StylesheetCheck,
};

/// A file added because a check did not hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionGap {
    /// Name of the failed check
    pub check: &'static str,
    /// Path of the synthesized file
    pub path: ProjectPath,
}

/// Completed file list plus the gaps that were filled
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Completion {
    pub files: Vec<ProjectFile>,
    pub gaps: Vec<CompletionGap>,
}

impl Completion {
    /// Whether the input already satisfied every check
    #[inline]
    #[must_use]
    pub fn was_complete(&self) -> bool {
        self.gaps.is_empty()
    }
}

/// Repairs a file list into a runnable project
///
/// Pure and idempotent: completing an already complete list returns it
/// unchanged. Existing files are never removed, reordered or replaced.
#[derive(Debug)]
pub struct ProjectCompleter {
    checks: Vec<Box<dyn CompletionCheck>>,
}

impl Default for ProjectCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectCompleter {
    /// Completer with the standard checks
    #[must_use]
    pub fn new() -> Self {
        Self::with_html_title("Generated UI")
    }

    /// Completer whose synthesized host document uses `title`
    #[must_use]
    pub fn with_html_title(title: impl Into<String>) -> Self {
        Self {
            checks: vec![
                Box::new(EntryPointCheck),
                Box::new(AppComponentCheck),
                Box::new(HtmlHostCheck::new(title)),
                Box::new(StylesheetCheck),
                Box::new(BuildConfigCheck),
            ],
        }
    }

    /// Names of the checks, in execution order
    #[must_use]
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Complete a file list
    #[must_use]
    pub fn complete(&self, files: &[ProjectFile]) -> Vec<ProjectFile> {
        self.complete_with_gaps(files).files
    }

    /// Complete a file list, reporting each synthesized file
    #[must_use]
    pub fn complete_with_gaps(&self, files: &[ProjectFile]) -> Completion {
        let mut completed = files.to_vec();
        let mut gaps = Vec::new();

        for check in &self.checks {
            if check.is_satisfied(&completed) {
                continue;
            }
            for file in check.synthesize(&completed) {
                if completed.iter().any(|f| f.path() == file.path()) {
                    continue;
                }
                debug!(check = check.name(), path = %file.path(), "completion gap filled");
                gaps.push(CompletionGap {
                    check: check.name(),
                    path: file.path().clone(),
                });
                completed.push(file);
            }
        }

        Completion {
            files: completed,
            gaps,
        }
    }

    /// New snapshot holding the completed files of `snapshot`
    #[must_use]
    pub fn complete_snapshot(&self, snapshot: &ProjectSnapshot) -> ProjectSnapshot {
        ProjectSnapshot::new(self.complete(snapshot.files()), snapshot.summary())
    }
}

/// Complete with a default [`ProjectCompleter`]
#[must_use]
pub fn complete(files: &[ProjectFile]) -> Vec<ProjectFile> {
    ProjectCompleter::new().complete(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_test_utils::{complete_project, file, paths};

    #[test]
    fn check_order_is_fixed() {
        assert_eq!(
            ProjectCompleter::new().check_names(),
            vec!["entry_point", "app_component", "html_host", "stylesheet", "build_config"]
        );
    }

    #[test]
    fn complete_project_is_untouched() {
        let files = complete_project();
        let completion = ProjectCompleter::new().complete_with_gaps(&files);
        assert!(completion.was_complete());
        assert_eq!(completion.files, files);
    }

    #[test]
    fn empty_input_gets_every_required_file() {
        let completed = complete(&[]);
        assert_eq!(
            paths(&completed),
            vec!["src/index.jsx", "src/App.jsx", "index.html", "src/index.css"]
        );
        assert!(completed.iter().all(|f| !f.is_generated()));
    }

    #[test]
    fn synthesized_app_feeds_framework_detection() {
        let files = vec![file(
            "src/components/Hero.jsx",
            "export default function Hero() { return <h1 className=\"text-4xl font-bold\">Hi</h1>; }",
        )];
        let completed = complete(&files);
        assert_eq!(
            paths(&completed),
            vec![
                "src/components/Hero.jsx",
                "src/index.jsx",
                "src/App.jsx",
                "index.html",
                "src/index.css",
                "tailwind.config.js",
                "postcss.config.js",
            ]
        );
        assert!(completed[4].content().starts_with("@tailwind base;"));
    }

    #[test]
    fn custom_host_title() {
        let completed = ProjectCompleter::with_html_title("Todo").complete(&[]);
        let host = completed.iter().find(|f| f.path().as_str() == "index.html").unwrap();
        assert!(host.content().contains("<title>Todo</title>"));
    }

    #[test]
    fn snapshot_completion_keeps_summary() {
        let snapshot = ProjectSnapshot::new(vec![file("src/App.jsx", "export default function App() {}")], "s");
        let completed = ProjectCompleter::new().complete_snapshot(&snapshot);
        assert_eq!(completed.summary(), "s");
        assert_eq!(completed.len(), 4);
        assert_ne!(completed.id(), snapshot.id());
    }
}
