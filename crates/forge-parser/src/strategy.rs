//! The extraction ladder
//!
//! Strategies are plain functions with one signature, tried in a fixed
//! order. The first one that yields at least one block is used alone.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::block::AssignedBlock;
use crate::{annotation, header, infer};

/// Which extraction strategy produced a parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// A: markdown heading naming a path, then a fenced block
    HeaderFence,
    /// B: comment annotation naming a path
    InlineAnnotation,
    /// C: tagged fence, path inferred from content
    TaggedFence,
    /// D: untagged fence, path sniffed from content
    UntaggedFence,
    /// Whole response used as the root component
    WholeText,
}

impl StrategyKind {
    /// Short label for logs
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HeaderFence => "header_fence",
            Self::InlineAnnotation => "inline_annotation",
            Self::TaggedFence => "tagged_fence",
            Self::UntaggedFence => "untagged_fence",
            Self::WholeText => "whole_text",
        }
    }

    /// Whether this strategy means no structure was found
    #[inline]
    #[must_use]
    pub fn is_degraded(self) -> bool {
        matches!(self, Self::WholeText)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform strategy signature
pub(crate) type ExtractFn = fn(&str) -> Vec<AssignedBlock>;

/// One rung of the ladder
#[derive(Clone, Copy)]
pub(crate) struct Strategy {
    pub(crate) kind: StrategyKind,
    pub(crate) extract: ExtractFn,
}

/// Strategies in priority order; the last rung always yields
pub(crate) const LADDER: [Strategy; 5] = [
    Strategy {
        kind: StrategyKind::HeaderFence,
        extract: header::extract,
    },
    Strategy {
        kind: StrategyKind::InlineAnnotation,
        extract: annotation::extract,
    },
    Strategy {
        kind: StrategyKind::TaggedFence,
        extract: infer::extract_tagged,
    },
    Strategy {
        kind: StrategyKind::UntaggedFence,
        extract: infer::extract_untagged,
    },
    Strategy {
        kind: StrategyKind::WholeText,
        extract: infer::extract_whole_text,
    },
];

/// Run the ladder, first non-empty result wins
pub(crate) fn first_match(text: &str) -> (StrategyKind, Vec<AssignedBlock>) {
    for strategy in &LADDER {
        let blocks = (strategy.extract)(text);
        if !blocks.is_empty() {
            return (strategy.kind, blocks);
        }
    }
    (StrategyKind::WholeText, infer::extract_whole_text(text))
}
