//! Completion checks
//!
//! Each check owns one project invariant: a predicate over the current file
//! list and the files to add when the predicate does not hold. Checks only
//! ever add; the completer filters out anything that would collide with an
//! existing path.

use std::fmt;

use forge_project::{canonical, signals, FileLanguage, ProjectFile, ProjectPath, ScriptFlavor};

use crate::templates;

/// One completeness rule
pub trait CompletionCheck: Send + Sync + fmt::Debug {
    /// Whether the file list already satisfies the rule
    fn is_satisfied(&self, files: &[ProjectFile]) -> bool;

    /// Files that make the rule hold
    ///
    /// Only called when [`is_satisfied`](Self::is_satisfied) returned false.
    fn synthesize(&self, files: &[ProjectFile]) -> Vec<ProjectFile>;

    /// Check name (for logs)
    fn name(&self) -> &'static str;
}

fn dominant_flavor(files: &[ProjectFile]) -> ScriptFlavor {
    ScriptFlavor::dominant(files.iter().map(ProjectFile::path))
}

fn any_path(files: &[ProjectFile], pred: impl Fn(&ProjectPath) -> bool) -> bool {
    files.iter().any(|f| pred(f.path()))
}

/// Whether any file uses the utility framework (classes or directives)
pub(crate) fn framework_in_use(files: &[ProjectFile]) -> bool {
    files.iter().any(|f| signals::uses_utility_framework(f.content()))
}

/// A JS/TS entry point for the dominant flavor
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryPointCheck;

impl CompletionCheck for EntryPointCheck {
    fn is_satisfied(&self, files: &[ProjectFile]) -> bool {
        let names = canonical::entry_points(dominant_flavor(files));
        any_path(files, |p| canonical::is_one_of(p, names))
    }

    fn synthesize(&self, files: &[ProjectFile]) -> Vec<ProjectFile> {
        let stylesheet = canonical::STYLESHEETS
            .iter()
            .find(|name| any_path(files, |p| p.as_str() == **name))
            .copied()
            .unwrap_or(canonical::PRIMARY_STYLESHEET);
        let import = format!("./{}", stylesheet.trim_start_matches("src/"));
        vec![ProjectFile::synthesized(
            canonical::entry_point(dominant_flavor(files)),
            templates::entry_point(&import),
        )]
    }

    fn name(&self) -> &'static str {
        "entry_point"
    }
}

/// A root application component at a canonical path
#[derive(Debug, Clone, Copy, Default)]
pub struct AppComponentCheck;

impl AppComponentCheck {
    /// First generated component with a default export, in emission order
    fn candidate(files: &[ProjectFile]) -> Option<&ProjectFile> {
        files.iter().find(|f| {
            f.is_generated()
                && matches!(f.language(), FileLanguage::Js | FileLanguage::Jsx | FileLanguage::Tsx)
                && signals::has_default_component_export(f.content())
        })
    }
}

/// Import specifier for `path` as seen from `src/App.*`
pub(crate) fn import_specifier(path: &ProjectPath) -> String {
    let bare = path.without_extension();
    match bare.strip_prefix("src/") {
        Some(rest) => format!("./{rest}"),
        None => format!("../{bare}"),
    }
}

/// Local binding for an imported component
///
/// PascalCase of the file stem; `App` itself would clash with the wrapper.
pub(crate) fn component_binding(path: &ProjectPath) -> String {
    let mut binding: String = path
        .file_stem()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + chars.as_str()
            })
        })
        .collect();
    if binding.is_empty() || binding.starts_with(|c: char| c.is_ascii_digit()) {
        binding.insert_str(0, "Component");
    }
    if binding == "App" {
        binding.push_str("Root");
    }
    binding
}

impl CompletionCheck for AppComponentCheck {
    fn is_satisfied(&self, files: &[ProjectFile]) -> bool {
        any_path(files, canonical::is_app_component)
    }

    fn synthesize(&self, files: &[ProjectFile]) -> Vec<ProjectFile> {
        let content = match Self::candidate(files) {
            Some(component) => templates::wrapping_app(
                &component_binding(component.path()),
                &import_specifier(component.path()),
            ),
            None => templates::PLACEHOLDER_APP.to_string(),
        };
        vec![ProjectFile::synthesized(
            canonical::app_component(dominant_flavor(files)),
            content,
        )]
    }

    fn name(&self) -> &'static str {
        "app_component"
    }
}

/// A root-level HTML host document
#[derive(Debug, Clone)]
pub struct HtmlHostCheck {
    title: String,
}

impl HtmlHostCheck {
    /// Check whose synthesized host carries `title`
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl Default for HtmlHostCheck {
    fn default() -> Self {
        Self::new("Generated UI")
    }
}

impl CompletionCheck for HtmlHostCheck {
    fn is_satisfied(&self, files: &[ProjectFile]) -> bool {
        any_path(files, canonical::is_html_host)
    }

    fn synthesize(&self, _files: &[ProjectFile]) -> Vec<ProjectFile> {
        vec![ProjectFile::synthesized(
            canonical::canonical(canonical::HTML_HOST),
            templates::html_host(&self.title),
        )]
    }

    fn name(&self) -> &'static str {
        "html_host"
    }
}

/// A canonical stylesheet
#[derive(Debug, Clone, Copy, Default)]
pub struct StylesheetCheck;

impl CompletionCheck for StylesheetCheck {
    fn is_satisfied(&self, files: &[ProjectFile]) -> bool {
        any_path(files, canonical::is_stylesheet)
    }

    fn synthesize(&self, files: &[ProjectFile]) -> Vec<ProjectFile> {
        vec![ProjectFile::synthesized(
            canonical::canonical(canonical::PRIMARY_STYLESHEET),
            templates::stylesheet(framework_in_use(files)),
        )]
    }

    fn name(&self) -> &'static str {
        "stylesheet"
    }
}

/// Processor configuration when the utility framework is in use
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildConfigCheck;

impl BuildConfigCheck {
    fn has_tailwind(files: &[ProjectFile]) -> bool {
        any_path(files, |p| canonical::is_one_of(p, canonical::TAILWIND_CONFIGS))
    }

    fn has_postcss(files: &[ProjectFile]) -> bool {
        any_path(files, |p| canonical::is_one_of(p, canonical::POSTCSS_CONFIGS))
    }
}

impl CompletionCheck for BuildConfigCheck {
    fn is_satisfied(&self, files: &[ProjectFile]) -> bool {
        !framework_in_use(files) || (Self::has_tailwind(files) && Self::has_postcss(files))
    }

    fn synthesize(&self, files: &[ProjectFile]) -> Vec<ProjectFile> {
        let mut added = Vec::new();
        if !Self::has_tailwind(files) {
            added.push(ProjectFile::synthesized(
                canonical::canonical(canonical::TAILWIND_CONFIGS[0]),
                templates::TAILWIND_CONFIG,
            ));
        }
        if !Self::has_postcss(files) {
            added.push(ProjectFile::synthesized(
                canonical::canonical(canonical::POSTCSS_CONFIGS[0]),
                templates::POSTCSS_CONFIG,
            ));
        }
        added
    }

    fn name(&self) -> &'static str {
        "build_config"
    }
}
