//! Approximated strategy
//!
//! Lifts static markup out of every component's return expression and
//! places it in the host document's mount element. No component code runs.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{trace, warn};

use forge_project::{canonical, ProjectFile};

use crate::artifact::PreviewMode;
use crate::document::{
    find_ignore_case, framework_in_use, framework_script, host_document, skeleton, style_elements,
};
use crate::error::{ExtractError, StrategyUnavailable};
use crate::markup::extract_markup;
use crate::options::PreviewOptions;
use crate::strategy::RenderStrategy;

static SOURCE_SCRIPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<script\b[^>]*\bsrc\s*=\s*["'](?:\.{0,2}/)?src/[^"']*["'][^>]*>.*?</script\s*>\s*"#).unwrap()
});

static MOUNT_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"(?i)<[a-z][a-z0-9-]*\b[^>]*\bid\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(canonical::MOUNT_ID)
    ))
    .unwrap()
});

/// Files that may hold component markup
fn component_files(files: &[ProjectFile]) -> impl Iterator<Item = &ProjectFile> {
    files.iter().filter(|f| {
        f.language().is_script()
            && !canonical::is_entry_point(f.path())
            && !canonical::is_build_config(f.path())
    })
}

/// Place `body` in the host's mount element and `head` before `</head>`
///
/// Script tags loading project sources are removed: nothing in the
/// approximated document executes project code.
pub(crate) fn inject(host: &str, head: &str, body: &str) -> String {
    let mut doc = SOURCE_SCRIPT.replace_all(host, "").into_owned();

    if let Some(mount) = MOUNT_OPEN.find(&doc) {
        doc.insert_str(mount.end(), body);
    } else {
        let element = format!("<div id=\"{}\">{body}</div>\n", canonical::MOUNT_ID);
        match find_ignore_case(&doc, "</body>") {
            Some(at) => doc.insert_str(at, &element),
            None => doc.push_str(&element),
        }
    }

    match find_ignore_case(&doc, "</head>") {
        Some(at) => doc.insert_str(at, head),
        None => doc.insert_str(0, head),
    }
    doc
}

/// Static markup, no component execution
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximatedStrategy;

impl RenderStrategy for ApproximatedStrategy {
    fn mode(&self) -> PreviewMode {
        PreviewMode::Approximated
    }

    fn render(
        &self,
        files: &[ProjectFile],
        options: &PreviewOptions,
        diagnostics: &mut Vec<String>,
    ) -> Result<String, StrategyUnavailable> {
        let mut fragments = Vec::new();
        for file in component_files(files) {
            match extract_markup(file.content(), file.language()) {
                Ok(html) if !html.trim().is_empty() => fragments.push(html),
                Ok(_) => trace!(path = %file.path(), "component markup is empty after stripping"),
                Err(ExtractError::NoReturnMarkup) => trace!(path = %file.path(), "no markup return"),
                Err(err) => {
                    warn!(path = %file.path(), %err, "markup extraction failed, skipping file");
                    diagnostics.push(format!("{}: markup extraction failed: {err}", file.path()));
                }
            }
        }
        if fragments.is_empty() {
            return Err(StrategyUnavailable::NoMarkup);
        }

        let framework = framework_in_use(files);
        let mut head = String::new();
        if framework {
            head.push_str(&framework_script(options));
        }
        head.push_str(&style_elements(files, framework));
        let body = fragments.join("\n");

        Ok(match host_document(files) {
            Some(host) => inject(host.content(), &head, &body),
            None => skeleton(
                &options.document_title,
                &head,
                &format!("<div id=\"{}\">{body}</div>\n", canonical::MOUNT_ID),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_test_utils::files;

    const HOST: &str = "<!DOCTYPE html>\n<html>\n<head>\n<title>T</title>\n</head>\n<body>\n<div id=\"root\"></div>\n<script type=\"module\" src=\"/src/main.jsx\"></script>\n</body>\n</html>";

    fn render(project: &[ProjectFile]) -> (Result<String, StrategyUnavailable>, Vec<String>) {
        let mut diagnostics = Vec::new();
        let result = ApproximatedStrategy.render(project, &PreviewOptions::default(), &mut diagnostics);
        (result, diagnostics)
    }

    #[test]
    fn inject_into_mount_and_head() {
        let doc = inject(HOST, "<style>x</style>\n", "<p>Hi</p>");
        assert!(doc.contains("<div id=\"root\"><p>Hi</p></div>"));
        assert!(doc.contains("<style>x</style>\n</head>"));
        assert!(!doc.contains("/src/main.jsx"));
    }

    #[test]
    fn inject_without_mount_adds_one_before_body_close() {
        let doc = inject("<html><head></head><BODY><h1>x</h1></BODY></html>", "", "<p>Hi</p>");
        assert!(doc.contains("<h1>x</h1><div id=\"root\"><p>Hi</p></div>\n</BODY>"));
    }

    #[test]
    fn external_scripts_are_kept() {
        let host = "<head><script src=\"https://cdn.example.com/lib.js\"></script></head><div id='root'></div>";
        let doc = inject(host, "", "<p/>");
        assert!(doc.contains("cdn.example.com/lib.js"));
        assert!(doc.contains("<div id='root'><p/></div>"));
    }

    #[test]
    fn fragments_follow_emission_order() {
        let project = files(&[
            ("index.html", HOST),
            ("src/main.jsx", "createRoot(el).render(<App />)"),
            ("src/App.jsx", "export default function App() { return (<main className=\"app\">Top</main>); }"),
            ("src/Footer.jsx", "export default function Footer() { return <footer>Bottom</footer>; }"),
            ("src/index.css", "body { margin: 0; }"),
        ]);
        let (result, diagnostics) = render(&project);
        let doc = result.unwrap();
        assert!(diagnostics.is_empty());
        let top = doc.find("<main class=\"app\">Top</main>").unwrap();
        let bottom = doc.find("<footer>Bottom</footer>").unwrap();
        assert!(top < bottom);
        assert!(doc.contains("<style data-source=\"src/index.css\">"));
        assert!(!doc.contains("<script type=\"module\""));
    }

    #[test]
    fn broken_file_is_skipped_with_diagnostic() {
        let project = files(&[
            ("src/App.jsx", "export default function App() { return (<div><span></div>); }"),
            ("src/Card.jsx", "export default function Card() { return <article>Card</article>; }"),
        ]);
        let (result, diagnostics) = render(&project);
        let doc = result.unwrap();
        assert!(doc.contains("<div id=\"root\"><article>Card</article></div>"));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].starts_with("src/App.jsx: markup extraction failed"));
    }

    #[test]
    fn compact_components_are_extracted() {
        let project = files(&[
            ("src/App.jsx", "const App = () => <h1 className=\"title\">Hi</h1>; export default App;"),
            ("src/Card.jsx", "export default function Card(){return<div>Card</div>}"),
            ("src/Badge.tsx", "export default function Badge({ n }: { n: number }) { return <b>New</b>; }"),
        ]);
        let (result, diagnostics) = render(&project);
        let doc = result.unwrap();
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert!(doc.contains("<h1 class=\"title\">Hi</h1>"));
        assert!(doc.contains("<div>Card</div>"));
        assert!(doc.contains("<b>New</b>"));
    }

    #[test]
    fn nothing_to_extract() {
        let (result, diagnostics) = render(&files(&[("src/util.js", "export const x = 1;")]));
        assert_eq!(result, Err(StrategyUnavailable::NoMarkup));
        assert!(diagnostics.is_empty());
    }
}
