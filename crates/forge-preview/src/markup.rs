//! Static markup extraction from component source
//!
//! Component files are parsed with tree-sitter: the TSX grammar for `.tsx`,
//! TypeScript for `.ts`, JavaScript (which includes JSX) for everything
//! else. Markup is taken from `return` statements and arrow-function
//! expression bodies, then rendered as plain HTML with everything that only
//! makes sense inside a component runtime stripped.

use tree_sitter::{Language, Node as SyntaxNode, Parser};

use forge_project::FileLanguage;

use crate::error::ExtractError;

/// One lowered JSX node
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Element {
        /// Tag name, empty for fragments
        name: String,
        attrs: Vec<Attr>,
        children: Vec<Node>,
        self_closing: bool,
    },
    Text(String),
    /// String literal child, e.g. `{"Hello"}`
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Attr {
    name: String,
    value: AttrValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrValue {
    /// Bare boolean attribute
    Flag,
    Literal(String),
    /// Anything computed at runtime
    Dynamic,
}

const MARKUP_KINDS: &[&str] = &["jsx_element", "jsx_self_closing_element", "jsx_fragment"];

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn grammar(language: FileLanguage) -> Language {
    match language {
        FileLanguage::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        FileLanguage::Ts => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        _ => tree_sitter_javascript::LANGUAGE.into(),
    }
}

fn strip_parens<'t>(mut node: SyntaxNode<'t>) -> SyntaxNode<'t> {
    while node.kind() == "parenthesized_expression" {
        match node.named_child(0) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Markup returned from functions, in source order
fn markup_roots<'t>(node: SyntaxNode<'t>, out: &mut Vec<SyntaxNode<'t>>) {
    let returned = match node.kind() {
        "return_statement" => node.named_child(0),
        "arrow_function" => node.child_by_field_name("body"),
        _ => None,
    };
    if let Some(expr) = returned.map(strip_parens) {
        if MARKUP_KINDS.contains(&expr.kind()) {
            out.push(expr);
        }
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        markup_roots(child, out);
    }
}

/// Offset of the first error or missing node under `node`
fn first_error(node: SyntaxNode<'_>) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_byte());
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found.or(Some(node.start_byte()))
}

/// Parse `source` and return every markup root as a lowered node with its span
fn lowered_roots(source: &str, language: FileLanguage) -> Result<Vec<(usize, Result<Node, ExtractError>)>, ExtractError> {
    let mut parser = Parser::new();
    parser
        .set_language(&grammar(language))
        .map_err(|err| ExtractError::Grammar(err.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or(ExtractError::Syntax { offset: 0 })?;
    let root = tree.root_node();

    let mut roots = Vec::new();
    markup_roots(root, &mut roots);
    if roots.is_empty() {
        return Err(match first_error(root) {
            Some(offset) => ExtractError::Syntax { offset },
            None => ExtractError::NoReturnMarkup,
        });
    }

    Ok(roots
        .into_iter()
        .map(|markup| {
            let span = markup.end_byte() - markup.start_byte();
            let node = match first_error(markup) {
                Some(offset) => Err(ExtractError::Syntax { offset }),
                None => lower(markup, source),
            };
            (span, node)
        })
        .collect())
}

/// Portable HTML for the longest markup any function returns
///
/// Fails with the first error only when no root lowers cleanly.
pub(crate) fn extract_markup(source: &str, language: FileLanguage) -> Result<String, ExtractError> {
    let mut first_err = None;
    let mut best: Option<(usize, Node)> = None;

    for (span, lowered) in lowered_roots(source, language)? {
        match lowered {
            Ok(node) => {
                if best.as_ref().map_or(true, |(len, _)| span > *len) {
                    best = Some((span, node));
                }
            }
            Err(err) => {
                first_err.get_or_insert(err);
            }
        }
    }

    match (best, first_err) {
        (Some((_, node)), _) => {
            let mut html = String::new();
            render(&node, &mut html);
            Ok(html)
        }
        (None, Some(err)) => Err(err),
        (None, None) => Err(ExtractError::NoReturnMarkup),
    }
}

fn text_of<'s>(node: SyntaxNode<'_>, src: &'s str) -> &'s str {
    src.get(node.byte_range()).unwrap_or_default()
}

fn lower(node: SyntaxNode<'_>, src: &str) -> Result<Node, ExtractError> {
    match node.kind() {
        "jsx_self_closing_element" => Ok(Node::Element {
            name: tag_name(node, src),
            attrs: attributes(node, src),
            children: Vec::new(),
            self_closing: true,
        }),
        "jsx_fragment" => {
            let text = text_of(node, src);
            let from = node.start_byte() + text.find('>').map_or(0, |i| i + 1);
            let to = node.start_byte() + text.rfind("</").unwrap_or(text.len());
            Ok(Node::Element {
                name: String::new(),
                attrs: Vec::new(),
                children: children(node, from, to, src)?,
                self_closing: false,
            })
        }
        _ => {
            let mut cursor = node.walk();
            let tags: Vec<_> = node
                .named_children(&mut cursor)
                .filter(|c| matches!(c.kind(), "jsx_opening_element" | "jsx_closing_element"))
                .collect();
            let (Some(open), Some(close)) = (tags.first().copied(), tags.last().copied()) else {
                return Err(ExtractError::Syntax {
                    offset: node.start_byte(),
                });
            };

            let name = tag_name(open, src);
            let closing = tag_name(close, src);
            if closing != name {
                return Err(ExtractError::mismatched(&name, &closing, close.start_byte()));
            }
            Ok(Node::Element {
                attrs: attributes(open, src),
                children: children(node, open.end_byte(), close.start_byte(), src)?,
                name,
                self_closing: false,
            })
        }
    }
}

fn tag_name(tag: SyntaxNode<'_>, src: &str) -> String {
    tag.child_by_field_name("name")
        .map(|n| text_of(n, src).to_string())
        .unwrap_or_default()
}

/// Elements, literals and text between `from` and `to`
///
/// Text is whatever source lies between structural children, so entity
/// references and spacing survive as written.
fn children(parent: SyntaxNode<'_>, from: usize, to: usize, src: &str) -> Result<Vec<Node>, ExtractError> {
    let mut out = Vec::new();
    let mut at = from;
    let mut cursor = parent.walk();

    for child in parent.named_children(&mut cursor) {
        let kind = child.kind();
        let structural = kind == "jsx_expression" || MARKUP_KINDS.contains(&kind);
        if !structural || child.start_byte() < from || child.end_byte() > to {
            continue;
        }
        push_text(src.get(at..child.start_byte()).unwrap_or_default(), &mut out);
        if kind == "jsx_expression" {
            if let Some(literal) = expression_literal(child, src) {
                out.push(Node::Literal(literal));
            }
        } else {
            out.push(lower(child, src)?);
        }
        at = child.end_byte();
    }
    push_text(src.get(at..to).unwrap_or_default(), &mut out);
    Ok(out)
}

fn push_text(raw: &str, out: &mut Vec<Node>) {
    let text = jsx_text(raw);
    if !text.is_empty() {
        out.push(Node::Text(text));
    }
}

fn attributes(tag: SyntaxNode<'_>, src: &str) -> Vec<Attr> {
    let mut cursor = tag.walk();
    let attrs = tag
        .named_children(&mut cursor)
        .filter(|c| c.kind() == "jsx_attribute")
        .map(|attr| attribute(attr, src))
        .collect();
    attrs
}

fn attribute(attr: SyntaxNode<'_>, src: &str) -> Attr {
    let name = attr
        .named_child(0)
        .map(|n| text_of(n, src).to_string())
        .unwrap_or_default();
    let value = match attr.named_child(1) {
        None => AttrValue::Flag,
        Some(v) if v.kind() == "string" => AttrValue::Literal(unquote(text_of(v, src)).to_string()),
        Some(v) if v.kind() == "jsx_expression" => {
            expression_literal(v, src).map_or(AttrValue::Dynamic, AttrValue::Literal)
        }
        Some(_) => AttrValue::Dynamic,
    };
    Attr { name, value }
}

fn unquote(text: &str) -> &str {
    if text.len() >= 2 {
        &text[1..text.len() - 1]
    } else {
        ""
    }
}

/// Contents of `{"..."}`, `{'...'}` or a placeholder-free template literal
fn expression_literal(expr: SyntaxNode<'_>, src: &str) -> Option<String> {
    let mut cursor = expr.walk();
    let values: Vec<_> = expr
        .named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect();
    let [value] = values.as_slice() else {
        return None;
    };
    if !matches!(value.kind(), "string" | "template_string") {
        return None;
    }

    let mut cursor = value.walk();
    let plain = value
        .named_children(&mut cursor)
        .all(|part| !matches!(part.kind(), "template_substitution" | "escape_sequence"));
    plain.then(|| unquote(text_of(*value, src)).to_string())
}

/// Render a node as portable HTML
pub(crate) fn render(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Literal(literal) => out.push_str(&escape_text(literal)),
        Node::Element {
            name,
            attrs,
            children,
            self_closing,
        } => {
            if is_unwrapped(name) {
                for child in children {
                    render(child, out);
                }
                return;
            }
            out.push('<');
            out.push_str(name);
            for attr in attrs {
                render_attr(attr, out);
            }
            out.push('>');
            if *self_closing && VOID_ELEMENTS.contains(&name.as_str()) {
                return;
            }
            for child in children {
                render(child, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

/// Fragments and capitalized (component) tags keep only their children
fn is_unwrapped(name: &str) -> bool {
    name.is_empty() || name.contains('.') || name.starts_with(|c: char| c.is_ascii_uppercase())
}

fn render_attr(attr: &Attr, out: &mut String) {
    let name = match attr.name.as_str() {
        "" | "key" | "ref" => return,
        "className" => "class",
        "htmlFor" => "for",
        other => other,
    };
    let value = match &attr.value {
        AttrValue::Flag => None,
        AttrValue::Literal(value) => Some(value.as_str()),
        AttrValue::Dynamic => return,
    };
    out.push(' ');
    out.push_str(name);
    if let Some(value) = value {
        out.push_str("=\"");
        out.push_str(&value.replace('"', "&quot;"));
        out.push('"');
    }
}

/// JSX whitespace rules: lines are trimmed and joined, blank lines dropped
fn jsx_text(text: &str) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portable(source: &str) -> String {
        extract_markup(source, FileLanguage::Jsx).unwrap()
    }

    fn root_count(source: &str) -> usize {
        lowered_roots(source, FileLanguage::Jsx).map_or(0, |roots| roots.len())
    }

    #[test]
    fn finds_return_sites() {
        let src = "function A() { return (\n  <div/>\n); }\nconst B = () => (<p/>);\nfunction C() { return <span/>; }\nfunction D(a, b) { if (a < b) return a; }";
        assert_eq!(root_count(src), 3);
    }

    #[test]
    fn arrow_expression_body_without_parens() {
        let src = "const App = () => <h1 className=\"title\">Hi</h1>;\nexport default App;";
        assert_eq!(portable(src), r#"<h1 class="title">Hi</h1>"#);
    }

    #[test]
    fn return_without_space() {
        let src = "export default function Card(){return<div>Card</div>}";
        assert_eq!(portable(src), "<div>Card</div>");
    }

    #[test]
    fn typed_component_in_tsx() {
        let src = "type Props = { title: string };\nexport default function Card({ title }: Props) {\n  return <section className=\"card\"><h2>{title}</h2></section>;\n}";
        assert_eq!(
            extract_markup(src, FileLanguage::Tsx).unwrap(),
            r#"<section class="card"><h2></h2></section>"#
        );
    }

    #[test]
    fn renames_and_strips_attributes() {
        let src = r#"function F({ id, go, r }) { return (<label className="field" htmlFor="email" key={id} onClick={() => go()} style={{ color: 'red' }} ref={r} {...rest}>Email</label>); }"#;
        assert_eq!(portable(src), r#"<label class="field" for="email">Email</label>"#);
    }

    #[test]
    fn keeps_string_literal_expressions() {
        let src = r#"function P({ name }) { return <p className={"lead"} title={'t'}>{"Hello"} {name}!</p>; }"#;
        assert_eq!(portable(src), r#"<p class="lead" title="t">Hello !</p>"#);
    }

    #[test]
    fn unwraps_fragments_and_components() {
        let src = "function L() {\n  return (\n    <>\n      <Header title=\"x\" />\n      <Card.Body><section>Hi</section></Card.Body>\n    </>\n  );\n}";
        assert_eq!(portable(src), "<section>Hi</section>");
    }

    #[test]
    fn drops_jsx_comments_and_expands_self_closing() {
        let src = "function D() { return (<div>{/* note */}<span className=\"dot\" /><br/><img src=\"a.png\" /></div>); }";
        assert_eq!(portable(src), r#"<div><span class="dot"></span><br><img src="a.png"></div>"#);
    }

    #[test]
    fn skips_nested_markup_inside_expressions() {
        let src = "function U({ items }) { return (<ul>{items.map(item => <li key={item.id}>{item.name}</li>)}<li>Static</li></ul>); }";
        assert_eq!(portable(src), "<ul><li>Static</li></ul>");
    }

    #[test]
    fn entities_and_multiline_text() {
        let src = "function H() {\n  return (\n    <h1>\n      Tom &amp; Jerry\n      forever\n    </h1>\n  );\n}";
        assert_eq!(portable(src), "<h1>Tom &amp; Jerry forever</h1>");
    }

    #[test]
    fn longest_site_wins() {
        let src = "function Empty() { return <span/>; }\nexport default function Page() {\n  return (\n    <main><h1>Title</h1></main>\n  );\n}";
        assert_eq!(portable(src), "<main><h1>Title</h1></main>");
    }

    #[test]
    fn crossed_tags_are_reported() {
        let err = extract_markup("function X() { return (<div><span></div></span>); }", FileLanguage::Jsx).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MismatchedClose { .. } | ExtractError::Syntax { .. }
        ));
    }

    #[test]
    fn broken_markup_is_reported() {
        for src in [
            "function X() { return (<div><span></div>); }",
            "function X() { return (<div className=\"x\">never closed",
        ] {
            let err = extract_markup(src, FileLanguage::Jsx).unwrap_err();
            assert!(
                matches!(err, ExtractError::Syntax { .. } | ExtractError::MismatchedClose { .. }),
                "{src}: {err:?}"
            );
        }
    }

    #[test]
    fn no_sites() {
        assert_eq!(
            extract_markup("export const x = 1;", FileLanguage::Js),
            Err(ExtractError::NoReturnMarkup)
        );
        assert_eq!(
            extract_markup("export const sum = (a: number, b: number) => a + b;", FileLanguage::Ts),
            Err(ExtractError::NoReturnMarkup)
        );
    }
}
