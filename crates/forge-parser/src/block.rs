//! Code blocks and fence scanning
//!
//! [`CodeBlock`] is the parser-internal unit: a body of text plus the tag it
//! was fenced with. Blocks are discarded once a path has been assigned.

use pulldown_cmark::{CodeBlockKind, Event, Parser as MdParser, Tag, TagEnd};

use forge_project::ProjectPath;

/// A block of code pulled out of the response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Fence language tag, empty when untagged
    pub language_tag: String,
    /// Block body
    pub body: String,
    /// Emission order within the strategy that produced it
    pub order: usize,
    /// Byte offset where the block's source (header, annotation or fence) starts
    pub start: usize,
}

/// A block with the path a strategy assigned to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedBlock {
    pub block: CodeBlock,
    pub path: ProjectPath,
}

impl AssignedBlock {
    pub(crate) fn new(block: CodeBlock, path: ProjectPath) -> Self {
        Self { block, path }
    }
}

/// A fenced region of the response
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fence {
    /// Language tag, if any
    pub(crate) tag: Option<String>,
    /// Text between the delimiter lines
    pub(crate) body: String,
    /// Offset of the opening delimiter
    pub(crate) start: usize,
    /// Start of the line holding the closing delimiter; `None` when the
    /// fence runs to the end of the text
    pub(crate) closer: Option<usize>,
}

/// First word of a fence info string, lowercased
pub(crate) fn info_tag(info: &str) -> Option<String> {
    info.split_whitespace()
        .next()
        .map(str::to_ascii_lowercase)
}

/// Strip blank leading lines and trailing whitespace from a block body
pub(crate) fn tidy_body(body: &str) -> String {
    let mut rest = body;
    while let Some(idx) = rest.find('\n') {
        if rest[..idx].trim().is_empty() {
            rest = &rest[idx + 1..];
        } else {
            break;
        }
    }
    rest.trim_end().to_string()
}

/// Lines of `text` paired with their starting byte offsets
pub(crate) fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_inclusive('\n').scan(0usize, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

/// Start of the line holding byte `offset`
pub(crate) fn line_start(text: &str, offset: usize) -> usize {
    text.get(..offset)
        .and_then(|head| head.rfind('\n'))
        .map_or(0, |idx| idx + 1)
}

/// Every fenced code block, in order, as CommonMark sees it
///
/// A fence left open runs to the end of the text, so a truncated response
/// still yields its last block.
pub(crate) fn scan_fences(text: &str) -> Vec<Fence> {
    let mut fences = Vec::new();
    let mut open: Option<(Option<String>, usize, usize, String)> = None;

    for (event, range) in MdParser::new(text).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                let opener_end = text[range.start..range.end]
                    .find('\n')
                    .map_or(range.end, |idx| range.start + idx + 1);
                open = Some((info_tag(&info), range.start, opener_end, String::new()));
            }
            Event::Text(t) => {
                if let Some((_, _, body_end, body)) = open.as_mut() {
                    body.push_str(&t);
                    *body_end = (*body_end).max(range.end);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((tag, start, body_end, body)) = open.take() {
                    let rest = text.get(body_end..range.end).unwrap_or_default();
                    let closer = rest
                        .find(|c: char| !c.is_whitespace())
                        .map(|idx| line_start(text, body_end + idx));
                    fences.push(Fence {
                        tag,
                        body: tidy_body(&body),
                        start,
                        closer,
                    });
                }
            }
            _ => {}
        }
    }
    fences
}

/// Offset of the first fence delimiter, if any
pub(crate) fn first_fence_offset(text: &str) -> Option<usize> {
    scan_fences(text).first().map(|f| f.start)
}
