//! Error types for the pipeline facade
//!
//! Parsing, completion and materialization never fail; errors here come
//! from the ambient layers around them:
//! - Configuration loading
//! - Log filter directives

use std::path::PathBuf;

/// Main facade error type
#[derive(Debug, thiserror::Error)]
pub enum ForgeError {
    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log filter directive rejected
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}

impl ForgeError {
    /// Create invalid log filter error
    #[inline]
    pub fn invalid_log_filter(filter: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidLogFilter {
            filter: filter.into(),
            reason: reason.to_string(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for the schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, ForgeError>;
