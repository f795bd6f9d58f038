//! Forge Project Completer
//!
//! Turns whatever files a response contained into a project that can run:
//! an entry point, a root component, an HTML host, a stylesheet and, when
//! the utility framework is used, its processor configuration.
//!
//! Completion only adds files, never touches existing ones, and is
//! idempotent.
//!
//! # Example
//!
//! ```rust
//! use forge_completer::ProjectCompleter;
//! use forge_project::{ProjectFile, ProjectPath};
//!
//! let app = ProjectFile::generated(
//!     ProjectPath::parse("src/App.jsx").unwrap(),
//!     "export default function App() { return <div>Hi</div>; }",
//! );
//! let completer = ProjectCompleter::new();
//! let files = completer.complete(&[app]);
//! assert_eq!(files.len(), 4);
//! assert_eq!(completer.complete(&files), files);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod check;
mod completer;
mod templates;

pub use check::{
    AppComponentCheck, BuildConfigCheck, CompletionCheck, EntryPointCheck, HtmlHostCheck,
    StylesheetCheck,
};
pub use completer::{complete, Completion, CompletionGap, ProjectCompleter};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
