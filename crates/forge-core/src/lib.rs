//! Forge Core
//!
//! Facade over the generation pipeline:
//!
//! ```text
//! prompt ──► generation service ──► RawResponse
//!                                      │ parse
//!                                      ▼
//!                                 ProjectFile[] ──► complete ──► ProjectSnapshot
//!                                                                     │ preview
//!                                                                     ▼
//!                                                              PreviewArtifact
//! ```
//!
//! The generation service itself is outside this crate; [`Forge`] builds
//! the prompt sent to it and processes the text that comes back.
//!
//! # Modules
//!
//! - [`config`]: TOML configuration
//! - [`prompt`]: system prompt, brand guidelines, follow-up context
//! - [`pipeline`]: the [`Forge`] facade
//! - [`telemetry`]: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use forge_core::{Forge, ForgeConfig, RawResponse};
//! use forge_preview::{PreviewMode, StrategyPreference};
//!
//! let forge = Forge::new(ForgeConfig::default());
//! let response = RawResponse::new(
//!     "A greeting.\n### src/App.jsx\n```jsx\nexport default function App() { return <h1>Hi</h1>; }\n```",
//! );
//! let turn = forge.process_turn(&response);
//! assert_eq!(turn.snapshot.summary(), "A greeting.");
//!
//! let artifact = forge.preview(&turn.snapshot, StrategyPreference::Live);
//! assert_eq!(artifact.mode(), PreviewMode::Live);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompt;
pub mod telemetry;

pub use config::{ForgeConfig, LogFormat};
pub use error::{ConfigError, ForgeError, Result};
pub use pipeline::{Forge, GenerationTurn, RawResponse};
pub use prompt::{
    analyze_prompt, conversation_context, format_prompt, BrandSettings, Complexity,
    PromptAnalysis, PromptFeature, UiType, SYSTEM_PROMPT,
};
pub use telemetry::{init_from_config, init_tracing};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
