//! Inline file annotations
//!
//! `// file: src/App.jsx` style comment lines that open a block. The body
//! runs until the next annotation, the first fence delimiter, or the end of
//! the text. Fence delimiters are the ones the markdown scanner reports.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use forge_project::ProjectPath;

use crate::block::{line_start, lines_with_offsets, scan_fences, tidy_body, AssignedBlock, CodeBlock};

static ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[ \t]*(?://|/\*|<!--|\{/\*|#)[ \t]*(?:file|filename|filepath|path)[ \t]*:[ \t]*(\S+?)[ \t]*(?:\*/\}?|-->)?[ \t]*$",
    )
    .unwrap()
});

/// Raw path token of an annotation line
pub(crate) fn annotation_target(line: &str) -> Option<&str> {
    let line = line.trim_end_matches(['\r', '\n']);
    ANNOTATION
        .captures(line)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Fence delimiter line, keyed by its starting offset
#[derive(Debug, Clone, PartialEq, Eq)]
enum Delimiter {
    Open(Option<String>),
    Close,
}

fn delimiter_lines(text: &str) -> HashMap<usize, Delimiter> {
    let mut lines = HashMap::new();
    for fence in scan_fences(text) {
        lines.insert(line_start(text, fence.start), Delimiter::Open(fence.tag));
        if let Some(closer) = fence.closer {
            lines.insert(closer, Delimiter::Close);
        }
    }
    lines
}

/// Strategy B: blocks opened by annotation comment lines
///
/// An annotation whose path does not normalize still ends the previous
/// block but opens none of its own.
pub(crate) fn extract(text: &str) -> Vec<AssignedBlock> {
    let lines: Vec<(usize, &str)> = lines_with_offsets(text).collect();
    let delimiters = delimiter_lines(text);
    let is_delimiter = |idx: usize| delimiters.contains_key(&lines[idx].0);
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let (start, line) = lines[i];
        i += 1;
        let Some(target) = annotation_target(line) else {
            continue;
        };

        let mut tag = String::new();
        let mut skip = i;
        while skip < lines.len() && lines[skip].1.trim().is_empty() {
            skip += 1;
        }
        if skip < lines.len() {
            if let Some(Delimiter::Open(fence_tag)) = delimiters.get(&lines[skip].0) {
                tag = fence_tag.clone().unwrap_or_default();
                i = skip + 1;
            }
        }

        let body_from = i;
        while i < lines.len() && !is_delimiter(i) && annotation_target(lines[i].1).is_none() {
            i += 1;
        }
        let body: String = lines[body_from..i].iter().map(|(_, l)| *l).collect();
        let body = tidy_body(&body);

        match ProjectPath::parse(target) {
            Ok(path) if !body.is_empty() => {
                let order = blocks.len();
                blocks.push(AssignedBlock::new(
                    CodeBlock {
                        language_tag: tag,
                        body,
                        order,
                        start,
                    },
                    path,
                ));
            }
            Ok(_) => {}
            Err(err) => tracing::trace!(path = target, %err, "annotation path rejected"),
        }
    }

    blocks
}
