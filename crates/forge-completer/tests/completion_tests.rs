use forge_completer::{complete, ProjectCompleter};
use forge_parser::parse;
use forge_project::{canonical, FileOrigin, ProjectFile, ProjectPath, ScriptFlavor};
use forge_test_utils::{complete_project, file, paths, HEADER_RESPONSE, TAGGED_RESPONSE};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn satisfies_invariants(files: &[ProjectFile]) -> bool {
    let flavor = ScriptFlavor::dominant(files.iter().map(ProjectFile::path));
    let has = |pred: &dyn Fn(&ProjectPath) -> bool| files.iter().any(|f| pred(f.path()));
    has(&|p| canonical::is_one_of(p, canonical::entry_points(flavor)))
        && has(&canonical::is_app_component)
        && has(&canonical::is_html_host)
        && has(&canonical::is_stylesheet)
}

#[test]
fn test_end_to_end_header_response() {
    let outcome = parse(HEADER_RESPONSE);
    let completion = ProjectCompleter::new().complete_with_gaps(&outcome.files);

    assert_eq!(
        paths(&completion.files),
        vec!["src/App.jsx", "src/index.jsx", "index.html", "src/index.css"]
    );
    assert_eq!(completion.files[0].origin(), FileOrigin::Generated);
    assert_eq!(completion.gaps.len(), 3);
    assert!(satisfies_invariants(&completion.files));
}

#[test]
fn test_tagged_response_only_needs_host() {
    let outcome = parse(TAGGED_RESPONSE);
    let completed = complete(&outcome.files);

    assert_eq!(
        &paths(&completed)[outcome.files.len()..],
        &["index.html", "tailwind.config.js", "postcss.config.js"]
    );
}

#[test]
fn test_minimality() {
    let files = complete_project();
    assert_eq!(complete(&files), files);
}

#[test]
fn test_typescript_project_gets_typescript_files() {
    let files = vec![
        file("src/components/Nav.tsx", "export default function Nav() { return <nav/>; }"),
        file("src/types.ts", "export type Item = { id: number };"),
    ];
    let completed = complete(&files);

    assert_eq!(
        paths(&completed),
        vec![
            "src/components/Nav.tsx",
            "src/types.ts",
            "src/index.tsx",
            "src/App.tsx",
            "index.html",
            "src/index.css",
        ]
    );
    assert!(completed[3].content().contains("import Nav from './components/Nav';"));
}

#[test]
fn test_existing_paths_are_never_replaced() {
    let files = vec![
        file("src/App.jsx", "export default function App() {}"),
        file("src/index.jsx", "// hand written"),
    ];
    let completed = complete(&files);
    assert_eq!(completed[1].content(), "// hand written");
    assert_eq!(completed.len(), 4);
}

fn arb_file() -> impl Strategy<Value = ProjectFile> {
    let path = prop::sample::select(vec![
        "index.html",
        "page.html",
        "src/index.js",
        "src/main.tsx",
        "src/App.jsx",
        "src/App.tsx",
        "src/index.css",
        "src/styles.css",
        "src/components/Card.jsx",
        "src/components/List.tsx",
        "src/util.ts",
        "tailwind.config.js",
        "postcss.config.cjs",
        "README.md",
    ]);
    let content = prop::sample::select(vec![
        "",
        "export default function Card() { return <div className=\"p-4 flex\">x</div>; }",
        "export default function List() { return <ul className=\"list\"></ul>; }",
        "export const helper = () => 1;",
        "@tailwind base;",
        "body { margin: 0; }",
        "<!DOCTYPE html><html><body><div id=\"root\"></div></body></html>",
    ]);
    (path, content).prop_map(|(path, content)| file(path, content))
}

proptest! {
    #[test]
    fn prop_completion_is_idempotent(files in proptest::collection::vec(arb_file(), 0..8)) {
        let files = forge_project::dedup_by_path(files);
        let once = complete(&files);
        let twice = complete(&once);
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn prop_completion_only_adds(files in proptest::collection::vec(arb_file(), 0..8)) {
        let files = forge_project::dedup_by_path(files);
        let completed = complete(&files);
        prop_assert_eq!(&completed[..files.len()], &files[..]);
        prop_assert!(satisfies_invariants(&completed));
        let unique: std::collections::HashSet<_> = completed.iter().map(ProjectFile::path).collect();
        prop_assert_eq!(unique.len(), completed.len());
    }
}
