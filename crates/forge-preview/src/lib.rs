//! Forge Preview Materializer
//!
//! Projects a completed file set into one self-contained document for an
//! isolated rendering surface.
//!
//! # Strategies
//!
//! - **live**: the root component's source runs in the document, with the
//!   component runtime and an in-browser JSX transform loaded from URLs in
//!   [`PreviewOptions`]
//! - **approximated**: static markup lifted from each component's return
//!   expression, placed in the host document's mount element
//!
//! Live is tried first unless the caller asks for approximated. When neither
//! can render, the artifact has mode `none` and diagnostics explain why;
//! materialization itself never fails.
//!
//! # Example
//!
//! ```rust
//! use forge_preview::{materialize, PreviewMode, StrategyPreference};
//! use forge_project::{ProjectFile, ProjectPath};
//!
//! let app = ProjectFile::generated(
//!     ProjectPath::parse("src/App.jsx").unwrap(),
//!     "export default function App() { return <h1>Hi</h1>; }",
//! );
//! let artifact = materialize(&[app], StrategyPreference::Live);
//! assert_eq!(artifact.mode(), PreviewMode::Live);
//! assert!(artifact.document().unwrap().contains("src/App.jsx"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod approximate;
mod artifact;
mod document;
mod error;
mod live;
mod markup;
mod materializer;
mod options;
mod strategy;

pub use approximate::ApproximatedStrategy;
pub use artifact::{PreviewArtifact, PreviewMode};
pub use error::{ExtractError, StrategyUnavailable};
pub use live::LiveStrategy;
pub use materializer::{materialize, PreviewMaterializer, StrategyPreference};
pub use options::PreviewOptions;
pub use strategy::RenderStrategy;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
