//! Facade configuration
//!
//! Every section has defaults, so an empty TOML document is a valid config:
//!
//! ```toml
//! log_filter = "forge=debug"
//! log_format = "json"
//!
//! [preview]
//! document_title = "Storefront"
//!
//! [brand]
//! primary_color = "#0F766E"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use forge_preview::PreviewOptions;

use crate::error::ConfigError;
use crate::prompt::BrandSettings;

/// Output format of installed log subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Forge configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub log_filter: String,
    pub log_format: LogFormat,
    /// Preview document options
    pub preview: PreviewOptions,
    /// Brand guidelines appended to prompts
    pub brand: BrandSettings,
    /// Whether prompts carry brand guidelines
    pub apply_brand: bool,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_format: LogFormat::Text,
            preview: PreviewOptions::default(),
            brand: BrandSettings::default(),
            apply_brand: true,
        }
    }
}

impl ForgeConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// With log filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// With log format
    #[inline]
    #[must_use]
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// With preview options
    #[inline]
    #[must_use]
    pub fn with_preview(mut self, preview: PreviewOptions) -> Self {
        self.preview = preview;
        self
    }

    /// With brand settings
    #[inline]
    #[must_use]
    pub fn with_brand(mut self, brand: BrandSettings) -> Self {
        self.brand = brand;
        self.apply_brand = true;
        self
    }

    /// Without brand guidelines in prompts
    #[inline]
    #[must_use]
    pub fn without_brand(mut self) -> Self {
        self.apply_brand = false;
        self
    }

    /// Brand settings to apply, if enabled
    #[inline]
    #[must_use]
    pub fn active_brand(&self) -> Option<&BrandSettings> {
        self.apply_brand.then_some(&self.brand)
    }
}
