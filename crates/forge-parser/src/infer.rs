//! Path inference for blocks without an explicit path
//!
//! Covers the permissive end of the ladder: tagged fences (C), untagged
//! fences (D) and the whole-text fallback.

use forge_project::{canonical, signals, ProjectPath, ScriptFlavor};

use crate::block::{scan_fences, AssignedBlock, CodeBlock, Fence};

/// Hands out numbered component paths in assignment order
#[derive(Debug, Default)]
struct Numbering {
    assigned: usize,
}

impl Numbering {
    fn next(&mut self, flavor: ScriptFlavor) -> ProjectPath {
        self.assigned += 1;
        canonical::numbered_component(self.assigned, flavor)
    }
}

/// Path for a tagged block, by content signature
fn infer_tagged(tag: &str, body: &str, numbering: &mut Numbering) -> ProjectPath {
    if let Some(flavor) = ScriptFlavor::from_tag(tag) {
        if signals::defines_root_component(body) {
            return canonical::app_component(flavor);
        }
        if signals::has_mount_call(body) {
            return canonical::entry_point(flavor);
        }
        if signals::has_framework_directives(body) {
            return canonical::canonical(canonical::PRIMARY_STYLESHEET);
        }
        return numbering.next(flavor);
    }

    if signals::has_framework_directives(body) {
        return canonical::canonical(canonical::PRIMARY_STYLESHEET);
    }
    match tag {
        "html" | "htm" => canonical::canonical(canonical::HTML_HOST),
        "css" | "scss" => canonical::canonical("src/styles.css"),
        "json" => canonical::canonical("data.json"),
        other => ProjectPath::parse(&format!("file.{other}"))
            .unwrap_or_else(|_| canonical::canonical("file.txt")),
    }
}

/// Path for an untagged block, by sniffing
fn infer_untagged(body: &str, numbering: &mut Numbering) -> ProjectPath {
    if signals::is_markup_document(body) {
        canonical::canonical(canonical::HTML_HOST)
    } else if signals::looks_like_stylesheet(body) {
        canonical::canonical(canonical::PRIMARY_STYLESHEET)
    } else {
        numbering.next(ScriptFlavor::JavaScript)
    }
}

fn assign(fences: impl Iterator<Item = Fence>, mut infer: impl FnMut(&Fence) -> ProjectPath) -> Vec<AssignedBlock> {
    fences
        .enumerate()
        .map(|(order, fence)| {
            let path = infer(&fence);
            AssignedBlock::new(
                CodeBlock {
                    language_tag: fence.tag.unwrap_or_default(),
                    body: fence.body,
                    order,
                    start: fence.start,
                },
                path,
            )
        })
        .collect()
}

/// Strategy C: fences carrying a language tag
pub(crate) fn extract_tagged(text: &str) -> Vec<AssignedBlock> {
    let mut numbering = Numbering::default();
    let fences = scan_fences(text).into_iter().filter(|f| f.tag.is_some());
    assign(fences, |fence| {
        let tag = fence.tag.as_deref().unwrap_or_default();
        infer_tagged(tag, &fence.body, &mut numbering)
    })
}

/// Strategy D: fences with no language tag
pub(crate) fn extract_untagged(text: &str) -> Vec<AssignedBlock> {
    let mut numbering = Numbering::default();
    let fences = scan_fences(text).into_iter().filter(|f| f.tag.is_none());
    assign(fences, |fence| infer_untagged(&fence.body, &mut numbering))
}

/// Last resort: the whole trimmed text becomes the root component
///
/// Always yields exactly one block, which makes the ladder total.
pub(crate) fn extract_whole_text(text: &str) -> Vec<AssignedBlock> {
    vec![AssignedBlock::new(
        CodeBlock {
            language_tag: String::new(),
            body: text.trim().to_string(),
            order: 0,
            start: 0,
        },
        canonical::app_component(ScriptFlavor::JavaScript),
    )]
}
