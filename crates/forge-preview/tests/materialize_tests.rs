use forge_completer::complete;
use forge_parser::parse;
use forge_preview::{materialize, PreviewMode, StrategyPreference};
use forge_project::fingerprint;
use forge_test_utils::{file, files, HEADER_RESPONSE, MIXED_RESPONSE};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_end_to_end_live_preview() {
    let outcome = parse(HEADER_RESPONSE);
    let project = complete(&outcome.files);
    assert_eq!(project.len(), 4);

    let artifact = materialize(&project, StrategyPreference::Live);
    assert_eq!(artifact.mode(), PreviewMode::Live);
    let document = artifact.document().unwrap();
    assert!(document.contains("src/App.jsx"));
    assert!(document.contains("export default function App(){return <div>Hi</div>}"));
    assert!(document.contains("<style data-source=\"src/index.css\">"));
    assert_eq!(artifact.source(), fingerprint(&project));
}

#[test]
fn test_stylesheet_only_has_no_preview() {
    let project = files(&[("src/index.css", "body { margin: 0; }")]);

    for preference in [StrategyPreference::Live, StrategyPreference::Approximated] {
        let artifact = materialize(&project, preference);
        assert_eq!(artifact.mode(), PreviewMode::None);
        assert!(artifact.document().is_none());
        assert!(!artifact.diagnostics().is_empty());
    }
}

#[test]
fn test_approximated_after_live_failure() {
    let project = complete(&parse(MIXED_RESPONSE).files);
    let artifact = materialize(&project, StrategyPreference::Approximated);

    assert_eq!(artifact.mode(), PreviewMode::Approximated);
    let document = artifact.document().unwrap();
    assert!(document.contains("<main class=\"min-h-screen bg-gray-50\">"));
    assert!(document.contains("<h1 class=\"text-4xl font-bold\">Welcome</h1>"));
    assert!(document.contains("https://cdn.tailwindcss.com"));
    assert!(!document.contains("/src/index.jsx"));
}

#[test]
fn test_approximated_arrow_and_compact_return() {
    for component in [
        "const App = () => <h1 className=\"title\">Hi</h1>; export default App;",
        "export default function App(){return<h1 className=\"title\">Hi</h1>}",
    ] {
        let project = files(&[("src/App.jsx", component)]);
        let artifact = materialize(&project, StrategyPreference::Approximated);

        assert_eq!(artifact.mode(), PreviewMode::Approximated, "{component}");
        assert!(artifact.document().unwrap().contains("<h1 class=\"title\">Hi</h1>"));
    }
}

#[test]
fn test_materialize_does_not_mutate_input() {
    let project = vec![file("src/App.jsx", "export default function App() { return <p/>; }")];
    let before = project.clone();
    let _ = materialize(&project, StrategyPreference::Live);
    assert_eq!(project, before);
}

proptest! {
    #[test]
    fn prop_materialize_always_terminates(
        body in "[<>{}()a-zA-Z =\"'/;\n]{0,120}",
        approximated in any::<bool>(),
    ) {
        let source = format!("export default function App() {{ return ({body}); }}");
        let project = vec![file("src/Widget.jsx", &source)];
        let preference = if approximated {
            StrategyPreference::Approximated
        } else {
            StrategyPreference::Live
        };

        let artifact = materialize(&project, preference);
        prop_assert_eq!(artifact.mode() == PreviewMode::None, artifact.document().is_none());
        if artifact.mode() == PreviewMode::None {
            prop_assert!(!artifact.diagnostics().is_empty());
        }
    }
}
