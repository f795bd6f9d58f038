//! Live strategy
//!
//! Runs the root component in the document: the component runtime comes
//! from an import map, JSX is transformed in the browser, and a mount call
//! is appended to the component source.

use std::fmt::Write as _;

use once_cell::sync::Lazy;
use regex::Regex;

use forge_project::{canonical, signals, FileLanguage, ProjectFile};

use crate::artifact::PreviewMode;
use crate::document::{
    escape_html, escape_script, framework_in_use, framework_script, skeleton, style_elements,
};
use crate::error::StrategyUnavailable;
use crate::options::PreviewOptions;
use crate::strategy::RenderStrategy;

static RELATIVE_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\s*import\s+(?:[^'";]*?\s+from\s+)?["'](\.{1,2}/[^"']+)["']"#).unwrap()
});

static REACT_BINDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bimport\s+(?:\*\s+as\s+)?React\b").unwrap());

/// Root component, by canonical name first, then any `App.*` component file
pub(crate) fn root_component(files: &[ProjectFile]) -> Option<&ProjectFile> {
    canonical::APP_COMPONENTS
        .iter()
        .find_map(|name| files.iter().find(|f| f.path().as_str() == *name))
        .or_else(|| {
            files.iter().find(|f| {
                f.path().file_stem() == "App"
                    && matches!(f.language(), FileLanguage::Js | FileLanguage::Jsx | FileLanguage::Tsx)
            })
        })
}

/// Identifier the mount call renders
fn mount_identifier(source: &str) -> Option<String> {
    signals::default_export_name(source)
        .or_else(|| signals::defines_root_component(source).then(|| "App".to_string()))
}

/// Relative import specifiers, which cannot resolve inside one document
fn relative_imports(source: &str) -> impl Iterator<Item = &str> {
    RELATIVE_IMPORT
        .captures_iter(source)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
}

/// Mount invocation appended after the component source
///
/// Imports are aliased so they cannot clash with the component's own
/// bindings; module imports hoist, so appending them is valid.
fn mount_script(identifier: &str, needs_react: bool) -> String {
    let mut script = String::new();
    if needs_react {
        script.push_str("import React from 'react';\n");
    }
    let _ = write!(
        script,
        "import {{ createElement as __forgeCreateElement }} from 'react';\n\
         import {{ createRoot as __forgeCreateRoot }} from 'react-dom/client';\n\
         __forgeCreateRoot(document.getElementById('{}')).render(__forgeCreateElement({identifier}));\n",
        canonical::MOUNT_ID
    );
    script
}

fn import_map(options: &PreviewOptions) -> String {
    let map = serde_json::json!({
        "imports": {
            "react": options.react_url,
            "react-dom/client": options.react_dom_url,
        }
    });
    format!("<script type=\"importmap\">{map}</script>\n")
}

/// Runs the generated root component
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveStrategy;

impl RenderStrategy for LiveStrategy {
    fn mode(&self) -> PreviewMode {
        PreviewMode::Live
    }

    fn render(
        &self,
        files: &[ProjectFile],
        options: &PreviewOptions,
        diagnostics: &mut Vec<String>,
    ) -> Result<String, StrategyUnavailable> {
        let app = root_component(files).ok_or(StrategyUnavailable::NoRootComponent)?;
        let source = app.content();
        let identifier = mount_identifier(source)
            .ok_or_else(|| StrategyUnavailable::NoComponentName(app.path().clone()))?;

        for specifier in relative_imports(source) {
            diagnostics.push(format!(
                "{} imports '{specifier}', which the live preview cannot resolve",
                app.path()
            ));
        }

        let framework = framework_in_use(files);
        let mut head = import_map(options);
        let _ = writeln!(head, "<script src=\"{}\"></script>", escape_html(&options.transform_url));
        if framework {
            head.push_str(&framework_script(options));
        }
        head.push_str(&style_elements(files, framework));

        let presets = if app.language() == FileLanguage::Tsx {
            "typescript,react"
        } else {
            "react"
        };
        let body = format!(
            "<div id=\"{mount}\"></div>\n<script type=\"text/babel\" data-type=\"module\" data-presets=\"{presets}\" data-source=\"{path}\">\n{source}\n{mount_call}</script>\n",
            mount = canonical::MOUNT_ID,
            path = escape_html(app.path().as_str()),
            source = escape_script(source),
            mount_call = escape_script(&mount_script(&identifier, !REACT_BINDING.is_match(source))),
        );

        Ok(skeleton(&options.document_title, &head, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_test_utils::files;

    fn render(project: &[ProjectFile]) -> (Result<String, StrategyUnavailable>, Vec<String>) {
        let mut diagnostics = Vec::new();
        let result = LiveStrategy.render(project, &PreviewOptions::default(), &mut diagnostics);
        (result, diagnostics)
    }

    #[test]
    fn canonical_app_preferred() {
        let project = files(&[
            ("src/pages/App.jsx", "export default function App() {}"),
            ("src/App.jsx", "export default function App() {}"),
            ("src/App.tsx", "export default function App() {}"),
        ]);
        assert_eq!(root_component(&project).unwrap().path().as_str(), "src/App.tsx");
        let project = files(&[("src/pages/App.jsx", "x"), ("App.css", "y")]);
        assert_eq!(root_component(&project).unwrap().path().as_str(), "src/pages/App.jsx");
    }

    #[test]
    fn document_embeds_source_and_mount() {
        let project = files(&[
            ("src/App.jsx", "import React from 'react';\nexport default function Dashboard() { return <div className=\"p-4\">Hi</div>; }"),
            ("src/index.css", "@tailwind base;"),
        ]);
        let (result, diagnostics) = render(&project);
        let doc = result.unwrap();
        assert!(diagnostics.is_empty());
        assert!(doc.contains(r#"<script type="importmap">"#));
        assert!(doc.contains("https://esm.sh/react@18.3.1"));
        assert!(doc.contains("babel.min.js"));
        assert!(doc.contains("https://cdn.tailwindcss.com"));
        assert!(doc.contains(r#"data-source="src/App.jsx""#));
        assert!(doc.contains("export default function Dashboard()"));
        assert!(doc.contains("render(__forgeCreateElement(Dashboard))"));
        assert!(!doc.contains("import React from 'react';\nimport { createElement"));
        assert!(doc.contains(r#"<div id="root"></div>"#));
    }

    #[test]
    fn react_import_added_when_missing() {
        let project = files(&[("src/App.jsx", "const App = () => <p/>;")]);
        let doc = render(&project).0.unwrap();
        assert!(doc.contains("import React from 'react';\nimport { createElement as __forgeCreateElement }"));
        assert!(doc.contains("__forgeCreateElement(App)"));
        assert!(!doc.contains("cdn.tailwindcss.com"));
    }

    #[test]
    fn script_closers_in_source_are_escaped() {
        let project = files(&[("src/App.jsx", "export default function App() { return '</script>'; }")]);
        let doc = render(&project).0.unwrap();
        assert!(doc.contains(r"return '<\/script>'"));
    }

    #[test]
    fn relative_imports_are_diagnosed() {
        let project = files(&[(
            "src/App.jsx",
            "import Hero from './components/Hero';\nimport './App.css';\nimport { useState } from 'react';\nexport default function App() { return <Hero/>; }",
        )]);
        let (result, diagnostics) = render(&project);
        assert!(result.is_ok());
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].contains("'./components/Hero'"));
        assert!(diagnostics[1].contains("'./App.css'"));
    }

    #[test]
    fn unavailable_without_root_component() {
        let (result, _) = render(&files(&[("src/index.css", "body {}")]));
        assert_eq!(result, Err(StrategyUnavailable::NoRootComponent));

        let (result, _) = render(&files(&[("src/App.jsx", "export const x = 1;")]));
        assert!(matches!(result, Err(StrategyUnavailable::NoComponentName(_))));
    }
}
