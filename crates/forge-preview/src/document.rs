//! Document assembly helpers shared by both strategies

use std::fmt::Write as _;

use once_cell::sync::Lazy;
use regex::Regex;

use forge_project::{canonical, signals, FileLanguage, ProjectFile};

use crate::options::PreviewOptions;

static SCRIPT_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</script").unwrap());
static STYLE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</style").unwrap());

/// Make text safe inside a `<script>` element
pub(crate) fn escape_script(source: &str) -> String {
    SCRIPT_CLOSE.replace_all(source, r"<\/script").into_owned()
}

/// Make text safe inside a `<style>` element
pub(crate) fn escape_style(source: &str) -> String {
    STYLE_CLOSE.replace_all(source, r"<\/style").into_owned()
}

/// Escape for text content and double-quoted attribute values
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Whether any file uses the utility framework
pub(crate) fn framework_in_use(files: &[ProjectFile]) -> bool {
    files.iter().any(|f| signals::uses_utility_framework(f.content()))
}

/// Stylesheets in emission order
pub(crate) fn stylesheets(files: &[ProjectFile]) -> impl Iterator<Item = &ProjectFile> {
    files.iter().filter(|f| f.language() == FileLanguage::Css)
}

/// One `<style>` element per stylesheet
///
/// With the framework runtime loaded, sheets carrying its directives are
/// typed so the runtime compiles them.
pub(crate) fn style_elements(files: &[ProjectFile], framework: bool) -> String {
    let mut out = String::new();
    for sheet in stylesheets(files) {
        let kind = if framework && signals::has_framework_directives(sheet.content()) {
            r#" type="text/tailwindcss""#
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<style data-source=\"{}\"{kind}>\n{}\n</style>",
            escape_html(sheet.path().as_str()),
            escape_style(sheet.content()),
        );
    }
    out
}

/// `<script>` loading the utility-framework runtime
pub(crate) fn framework_script(options: &PreviewOptions) -> String {
    format!("<script src=\"{}\"></script>\n", escape_html(&options.tailwind_url))
}

/// The project's host document, if it has one
///
/// Prefers the canonical host over other root-level HTML files.
pub(crate) fn host_document(files: &[ProjectFile]) -> Option<&ProjectFile> {
    files
        .iter()
        .find(|f| f.path().as_str() == canonical::HTML_HOST)
        .or_else(|| files.iter().find(|f| canonical::is_html_host(f.path())))
}

/// Skeleton document with `head` and `body` content filled in
pub(crate) fn skeleton(title: &str, head: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n<title>{}</title>\n{head}</head>\n<body>\n{body}</body>\n</html>\n",
        escape_html(title)
    )
}

/// Byte offset of `needle` in `haystack`, ASCII case-insensitive
pub(crate) fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
