//! File language classification
//!
//! Language is always a function of the final path extension, never of the
//! fence tag the model happened to write.

use serde::{Deserialize, Serialize};

use crate::path::ProjectPath;

/// Language of a project file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileLanguage {
    Js,
    Ts,
    Jsx,
    Tsx,
    Css,
    Html,
    Json,
    Other,
}

impl FileLanguage {
    /// Detect language from a file extension (without dot, any case)
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Self::Js,
            "ts" | "mts" | "cts" => Self::Ts,
            "jsx" => Self::Jsx,
            "tsx" => Self::Tsx,
            "css" => Self::Css,
            "html" | "htm" => Self::Html,
            "json" => Self::Json,
            _ => Self::Other,
        }
    }

    /// Detect language from a path
    #[inline]
    #[must_use]
    pub fn from_path(path: &ProjectPath) -> Self {
        path.extension()
            .map_or(Self::Other, |ext| Self::from_extension(&ext))
    }

    /// Script languages (anything a component can live in)
    #[inline]
    #[must_use]
    pub fn is_script(self) -> bool {
        matches!(self, Self::Js | Self::Ts | Self::Jsx | Self::Tsx)
    }

    /// Script flavor, if this is a script language
    #[inline]
    #[must_use]
    pub fn flavor(self) -> Option<ScriptFlavor> {
        match self {
            Self::Js | Self::Jsx => Some(ScriptFlavor::JavaScript),
            Self::Ts | Self::Tsx => Some(ScriptFlavor::TypeScript),
            _ => None,
        }
    }

    /// Short lowercase name, also usable as a fence tag
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Ts => "ts",
            Self::Jsx => "jsx",
            Self::Tsx => "tsx",
            Self::Css => "css",
            Self::Html => "html",
            Self::Json => "json",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for FileLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JavaScript vs TypeScript variant of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScriptFlavor {
    #[default]
    JavaScript,
    TypeScript,
}

impl ScriptFlavor {
    /// Flavor named by a fence tag (`jsx`, `typescript`, ...), if any
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "javascript" | "react" | "mjs" => Some(Self::JavaScript),
            "ts" | "tsx" | "typescript" => Some(Self::TypeScript),
            _ => None,
        }
    }

    /// Extension used for component files of this flavor
    #[inline]
    #[must_use]
    pub fn component_extension(self) -> &'static str {
        match self {
            Self::JavaScript => "jsx",
            Self::TypeScript => "tsx",
        }
    }

    /// Majority flavor among script files under `src/`
    ///
    /// TypeScript only wins on a strict majority; ties and empty sets are
    /// JavaScript.
    #[must_use]
    pub fn dominant<'a>(paths: impl IntoIterator<Item = &'a ProjectPath>) -> Self {
        let (mut js, mut ts) = (0usize, 0usize);
        for path in paths.into_iter().filter(|p| p.is_under("src")) {
            match FileLanguage::from_path(path).flavor() {
                Some(Self::JavaScript) => js += 1,
                Some(Self::TypeScript) => ts += 1,
                None => {}
            }
        }
        if ts > js {
            Self::TypeScript
        } else {
            Self::JavaScript
        }
    }
}
