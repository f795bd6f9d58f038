//! Canonical path vocabulary
//!
//! The fixed set of conventional locations that the parser assigns, the
//! completer checks for, and the materializer searches. Every component
//! matches these literally.

use crate::language::{FileLanguage, ScriptFlavor};
use crate::path::ProjectPath;

/// HTML host document
pub const HTML_HOST: &str = "index.html";

/// Id of the element the application mounts into
pub const MOUNT_ID: &str = "root";

/// Entry points recognized for JavaScript projects
pub const JS_ENTRY_POINTS: &[&str] = &["src/index.js", "src/index.jsx", "src/main.js", "src/main.jsx"];

/// Entry points recognized for TypeScript projects
pub const TS_ENTRY_POINTS: &[&str] = &["src/index.ts", "src/index.tsx", "src/main.ts", "src/main.tsx"];

/// Root application component paths, in live-preview search order
pub const APP_COMPONENTS: &[&str] = &["src/App.tsx", "src/App.jsx", "src/App.js"];

/// Stylesheet paths
pub const STYLESHEETS: &[&str] = &["src/index.css", "src/App.css", "src/styles.css"];

/// Stylesheet synthesized or assigned for framework directives
pub const PRIMARY_STYLESHEET: &str = "src/index.css";

/// Utility-framework config files (any one satisfies the check)
pub const TAILWIND_CONFIGS: &[&str] = &[
    "tailwind.config.js",
    "tailwind.config.cjs",
    "tailwind.config.mjs",
    "tailwind.config.ts",
];

/// CSS processor config files (any one satisfies the check)
pub const POSTCSS_CONFIGS: &[&str] = &["postcss.config.js", "postcss.config.cjs", "postcss.config.mjs"];

/// Directory for components whose name could not be inferred
pub const COMPONENTS_DIR: &str = "src/components";

/// Entry points for a flavor
#[must_use]
pub fn entry_points(flavor: ScriptFlavor) -> &'static [&'static str] {
    match flavor {
        ScriptFlavor::JavaScript => JS_ENTRY_POINTS,
        ScriptFlavor::TypeScript => TS_ENTRY_POINTS,
    }
}

/// Whether `path` is any recognized entry point (either flavor)
#[must_use]
pub fn is_entry_point(path: &ProjectPath) -> bool {
    is_one_of(path, JS_ENTRY_POINTS) || is_one_of(path, TS_ENTRY_POINTS)
}

/// Whether `path` is a recognized root application component
#[must_use]
pub fn is_app_component(path: &ProjectPath) -> bool {
    is_one_of(path, APP_COMPONENTS)
}

/// Whether `path` is a recognized stylesheet
#[must_use]
pub fn is_stylesheet(path: &ProjectPath) -> bool {
    is_one_of(path, STYLESHEETS)
}

/// Whether `path` is a root-level HTML document
#[must_use]
pub fn is_html_host(path: &ProjectPath) -> bool {
    path.is_root_level() && FileLanguage::from_path(path) == FileLanguage::Html
}

/// Whether `path` is a build tool config at the project root
#[must_use]
pub fn is_build_config(path: &ProjectPath) -> bool {
    path.is_root_level() && path.file_name().contains(".config.")
}

/// Literal membership test
#[inline]
#[must_use]
pub fn is_one_of(path: &ProjectPath, candidates: &[&str]) -> bool {
    candidates.contains(&path.as_str())
}

/// Canonical root component path for a flavor
#[must_use]
pub fn app_component(flavor: ScriptFlavor) -> ProjectPath {
    canonical(format!("src/App.{}", flavor.component_extension()))
}

/// Canonical entry point synthesized for a flavor
#[must_use]
pub fn entry_point(flavor: ScriptFlavor) -> ProjectPath {
    canonical(format!("src/index.{}", flavor.component_extension()))
}

/// Numbered fallback component path (`n` starts at 1)
#[must_use]
pub fn numbered_component(n: usize, flavor: ScriptFlavor) -> ProjectPath {
    canonical(format!(
        "{COMPONENTS_DIR}/Component{n}.{}",
        flavor.component_extension()
    ))
}

/// Parse one of the literals above
///
/// Only called with paths built from the constants in this module, which are
/// all valid.
#[must_use]
pub fn canonical(path: impl AsRef<str>) -> ProjectPath {
    match ProjectPath::parse(path.as_ref()) {
        Ok(parsed) => parsed,
        Err(_) => unreachable!("canonical path literal is valid: {}", path.as_ref()),
    }
}
