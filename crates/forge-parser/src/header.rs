//! Header + fence pairs
//!
//! Uses pulldown-cmark so that headings are recognized exactly where a
//! CommonMark renderer would see them (including headings that interrupt a
//! paragraph) and inline formatting inside the heading is dropped.

use once_cell::sync::Lazy;
use pulldown_cmark::{CodeBlockKind, Event, Parser as MdParser, Tag, TagEnd};
use regex::Regex;

use forge_project::ProjectPath;

use crate::block::{info_tag, tidy_body, AssignedBlock, CodeBlock};

static HEADER_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:\d+[.)]\s*)?(?:(?:file|filename|filepath|path)\s*:\s*)?(.+?)\s*:?$").unwrap()
});

/// Path named by a heading, if the heading is nothing but a path
///
/// A leading enumeration (`1.`) and a `File:` label are tolerated. The file
/// name must carry an extension so ordinary section titles never qualify.
pub(crate) fn header_path(heading: &str) -> Option<ProjectPath> {
    let cap = HEADER_PATH.captures(heading.trim())?;
    let path = ProjectPath::parse(cap.get(1)?.as_str()).ok()?;
    path.extension().is_some().then_some(path)
}

struct OpenBlock {
    tag: String,
    body: String,
    start: usize,
    path: ProjectPath,
}

/// Strategy A: a heading naming a path, immediately followed by a fenced block
pub(crate) fn extract(text: &str) -> Vec<AssignedBlock> {
    let mut blocks = Vec::new();
    let mut heading: Option<(usize, String)> = None;
    let mut pending: Option<(usize, usize, ProjectPath)> = None;
    let mut open: Option<OpenBlock> = None;

    for (event, range) in MdParser::new(text).into_offset_iter() {
        if let Some(block) = open.as_mut() {
            match event {
                Event::Text(t) => block.body.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(done) = open.take() {
                        let order = blocks.len();
                        blocks.push(AssignedBlock::new(
                            CodeBlock {
                                language_tag: done.tag,
                                body: tidy_body(&done.body),
                                order,
                                start: done.start,
                            },
                            done.path,
                        ));
                    }
                }
                _ => {}
            }
            continue;
        }

        if let Some((_, title)) = heading.as_mut() {
            match event {
                Event::Text(t) | Event::Code(t) => title.push_str(&t),
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((start, title)) = heading.take() {
                        pending = header_path(&title).map(|path| (start, range.end, path));
                    }
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::Heading { .. }) => {
                heading = Some((range.start, String::new()));
                pending = None;
            }
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                if let Some((start, heading_end, path)) = pending.take() {
                    let gap = text.get(heading_end..range.start).unwrap_or_default();
                    if gap.trim().is_empty() {
                        open = Some(OpenBlock {
                            tag: info_tag(&info).unwrap_or_default(),
                            body: String::new(),
                            start,
                            path,
                        });
                    }
                }
            }
            Event::Start(_) => pending = None,
            _ => {}
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_paths() {
        assert_eq!(header_path("src/App.jsx").unwrap().as_str(), "src/App.jsx");
        assert_eq!(header_path("File: ./index.html").unwrap().as_str(), "index.html");
        assert_eq!(header_path("2. src/index.css:").unwrap().as_str(), "src/index.css");
        assert!(header_path("Installation").is_none());
        assert!(header_path("How it works").is_none());
        assert!(header_path("src/components").is_none());
    }

    #[test]
    fn pairs_heading_with_following_fence() {
        let text = "Intro.\n### src/App.jsx\n```jsx\nexport default function App() {}\n```\n";
        let blocks = extract(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].path.as_str(), "src/App.jsx");
        assert_eq!(blocks[0].block.language_tag, "jsx");
        assert_eq!(blocks[0].block.body, "export default function App() {}");
        assert_eq!(blocks[0].block.start, 7);
    }

    #[test]
    fn inline_code_heading() {
        let text = "## `src/index.css`\n\n```css\nbody { margin: 0; }\n```\n";
        let blocks = extract(text);
        assert_eq!(blocks[0].path.as_str(), "src/index.css");
    }

    #[test]
    fn prose_between_heading_and_fence_breaks_pair() {
        let text = "### src/App.jsx\nSome explanation.\n```jsx\nx\n```\n";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn non_path_heading_is_ignored() {
        let text = "## Setup\n```bash\nnpm install\n```\n";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn multiple_pairs_keep_order() {
        let text = "### index.html\n```html\n<div id=\"root\"></div>\n```\n### src/main.tsx\n```tsx\nrender()\n```\n";
        let blocks = extract(text);
        let paths: Vec<_> = blocks.iter().map(|b| b.path.as_str()).collect();
        assert_eq!(paths, vec!["index.html", "src/main.tsx"]);
        assert_eq!(blocks[1].block.order, 1);
    }
}
