//! Forge Project Model
//!
//! The shared vocabulary of the generation pipeline: what a generated file
//! is, where conventional files live, and which content signals the
//! pipeline stages key off.
//!
//! # Core Concepts
//!
//! - [`ProjectPath`]: normalized posix path, no leading slash
//! - [`ProjectFile`]: path + content, language derived from the extension
//! - [`ProjectSnapshot`]: immutable, path-unique file set for one turn
//! - [`canonical`]: conventional locations (entry point, App, host, stylesheet)
//! - [`signals`]: named content heuristics
//!
//! # Example
//!
//! ```rust
//! use forge_project::{ProjectFile, ProjectPath, ProjectSnapshot, FileLanguage};
//!
//! let path = ProjectPath::parse("./src/App.jsx").unwrap();
//! let file = ProjectFile::generated(path, "export default function App() {}");
//! assert_eq!(file.language(), FileLanguage::Jsx);
//!
//! let snapshot = ProjectSnapshot::new(vec![file], "Here is your app.");
//! assert_eq!(snapshot.files()[0].path().as_str(), "src/App.jsx");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod canonical;
pub mod signals;

mod file;
mod hash;
mod language;
mod path;
mod snapshot;

pub use file::{FileOrigin, ProjectFile};
pub use hash::{ContentHash, FingerprintBuilder, HashError};
pub use language::{FileLanguage, ScriptFlavor};
pub use path::{PathError, ProjectPath};
pub use snapshot::{dedup_by_path, fingerprint, ProjectSnapshot, SnapshotId};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
