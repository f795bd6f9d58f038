//! Content signals
//!
//! Fuzzy, text-level heuristics over file content. None of these parse a
//! grammar; each is a named predicate so the heuristics can be tuned without
//! touching pipeline control flow.

use once_cell::sync::Lazy;
use regex::Regex;

static ROOT_COMPONENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bfunction\s+App\s*[(<]|\b(?:const|let|var)\s+App\s*(?::[^=]+)?=|\bclass\s+App\s+extends\b")
        .unwrap()
});

static MOUNT_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:createRoot|hydrateRoot)\s*\(|\bReactDOM\.render\s*\(").unwrap()
});

static FRAMEWORK_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"@tailwind\s+[a-z]+|@apply\s+\S|@import\s+["']tailwindcss"#).unwrap()
});

static CLASS_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\b(?:className|class)\s*=\s*\{?\s*["'`]([^"'`]*)["'`]"#).unwrap()
});

static UTILITY_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[a-z]+:)*(?:flex|grid|hidden|block|inline-flex|container|rounded(?:-\w+)?|shadow(?:-\w+)?|(?:p|m)[xytrbl]?-\d+|(?:bg|text|border|ring|from|to|via)-[a-z]+(?:-\d{2,3})?|(?:w|h|min-h|max-w|gap|space-[xy])-\S+|(?:items|justify|font|leading|tracking)-[a-z]+)$",
    )
    .unwrap()
});

static DEFAULT_EXPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bexport\s+default\s+(?:async\s+)?(?:function\b|class\b|[A-Z][A-Za-z0-9_]*\s*(?:;|$|\n))|\bexport\s*\{[^}]*\bas\s+default\b",
    )
    .unwrap()
});

static DEFAULT_EXPORT_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bexport\s+default\s+(?:async\s+)?(?:function|class)\s+([A-Z]\w*)|\bexport\s+default\s+([A-Z]\w*)\s*(?:;|$|\n)|\bexport\s*\{\s*([A-Z]\w*)\s+as\s+default\s*\}",
    )
    .unwrap()
});

static DOCTYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*(?:<!doctype\s+html|<html[\s>])").unwrap());

static STYLE_RULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(?:[.#]?[A-Za-z_*:\[][^{};()=]*|@media[^{]*|@keyframes[^{]*)\{[^{}]*:[^{}]*\}").unwrap()
});

static SCRIPT_SYNTAX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bimport\s.+\bfrom\s|\bfunction\b|=>|\breturn\b|\bexport\b|\bconst\s").unwrap()
});

/// Defines the application root component (`function App`, `const App =`, ...)
#[must_use]
pub fn defines_root_component(content: &str) -> bool {
    ROOT_COMPONENT.is_match(content)
}

/// Contains a DOM mount/render call
#[must_use]
pub fn has_mount_call(content: &str) -> bool {
    MOUNT_CALL.is_match(content)
}

/// Contains utility-framework directives (`@tailwind`, `@apply`, ...)
#[must_use]
pub fn has_framework_directives(content: &str) -> bool {
    FRAMEWORK_DIRECTIVE.is_match(content)
}

/// Uses utility classes in `className`/`class` attributes
///
/// One utility-looking token is enough; plain semantic class names
/// (`card`, `header`) are not.
#[must_use]
pub fn uses_utility_classes(content: &str) -> bool {
    CLASS_ATTRIBUTE.captures_iter(content).any(|cap| {
        cap.get(1).is_some_and(|classes| {
            classes
                .as_str()
                .split_whitespace()
                .any(|token| UTILITY_CLASS.is_match(token))
        })
    })
}

/// Uses the utility framework at all (classes or directives)
#[inline]
#[must_use]
pub fn uses_utility_framework(content: &str) -> bool {
    has_framework_directives(content) || uses_utility_classes(content)
}

/// Has a default export of something component-shaped
///
/// Config objects (`export default {`) and factory calls
/// (`export default defineConfig(`) do not count.
#[must_use]
pub fn has_default_component_export(content: &str) -> bool {
    DEFAULT_EXPORT.is_match(content)
}

/// Name bound by the default export, if it is a capitalized identifier
#[must_use]
pub fn default_export_name(content: &str) -> Option<String> {
    DEFAULT_EXPORT_NAME.captures(content).and_then(|cap| {
        cap.get(1)
            .or_else(|| cap.get(2))
            .or_else(|| cap.get(3))
            .map(|m| m.as_str().to_string())
    })
}

/// Is a full markup document (doctype or `<html>` root)
#[must_use]
pub fn is_markup_document(content: &str) -> bool {
    DOCTYPE.is_match(content)
}

/// Looks like a stylesheet: directives or `selector { prop: value }` rules,
/// and no script syntax
#[must_use]
pub fn looks_like_stylesheet(content: &str) -> bool {
    if SCRIPT_SYNTAX.is_match(content) {
        return false;
    }
    has_framework_directives(content) || STYLE_RULE.is_match(content)
}

/// `filepath:` style path comment anywhere in the content
///
/// Returns the raw path token with trailing comment closers removed.
#[must_use]
pub fn inline_path_comment(content: &str) -> Option<&str> {
    static FILEPATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfilepath:\s*(\S+)").unwrap());
    FILEPATH.captures(content).and_then(|cap| {
        let token = cap.get(1)?.as_str();
        let token = token
            .trim_end_matches("-->")
            .trim_end_matches('}')
            .trim_end_matches("*/");
        (!token.is_empty()).then_some(token)
    })
}
