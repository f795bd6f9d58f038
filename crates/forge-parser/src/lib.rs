//! Forge Response Parser
//!
//! Extracts project files from the free-form text a model returns.
//!
//! Extraction walks a fixed ladder of strategies, from strict to permissive:
//!
//! 1. markdown heading naming a path, followed by a fenced block
//! 2. comment annotation naming a path (`// file: src/App.jsx`)
//! 3. tagged fences, path inferred from content
//! 4. untagged fences, path sniffed from content
//! 5. the whole response as the root component
//!
//! The first rung that yields any block is used exclusively, so parsing is
//! total: every response produces at least one file.
//!
//! # Example
//!
//! ```rust
//! use forge_parser::{parse, StrategyKind};
//!
//! let outcome = parse("Here is your app.\n### src/App.jsx\n```jsx\nexport default function App() {}\n```");
//! assert_eq!(outcome.summary, "Here is your app.");
//! assert_eq!(outcome.strategy, StrategyKind::HeaderFence);
//! assert_eq!(outcome.files[0].path().as_str(), "src/App.jsx");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod annotation;
mod block;
mod header;
mod infer;
mod parser;
mod strategy;

pub use block::{AssignedBlock, CodeBlock};
pub use parser::{parse, ParseOutcome, ResponseParser, DEGRADED_SUMMARY};
pub use strategy::StrategyKind;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
