//! Project-relative file paths
//!
//! Provides [`ProjectPath`], a normalized posix-style path with no leading
//! slash. Paths arrive from loosely formatted model output, so construction
//! is forgiving about decoration but strict about escaping the project root.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Normalized path of a file inside a generated project
///
/// # Examples
/// - `./src/App.jsx` → `src/App.jsx`
/// - `` `src\components\Card.tsx` `` → `src/components/Card.tsx`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectPath(String);

impl ProjectPath {
    /// Normalize and validate a raw path
    ///
    /// # Errors
    /// Returns error if nothing is left after normalization or a segment
    /// would climb out of the project root.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let trimmed = raw
            .trim()
            .trim_matches(|c: char| matches!(c, '`' | '"' | '\'' | '*'))
            .trim();
        let unified = trimmed.replace('\\', "/");

        let mut segments = Vec::new();
        for segment in unified.split('/') {
            match segment {
                "" | "." => {}
                ".." => return Err(PathError::EscapesRoot(raw.to_string())),
                seg if seg.chars().any(char::is_whitespace) => {
                    return Err(PathError::InvalidSegment(seg.to_string()))
                }
                seg => segments.push(seg),
            }
        }

        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self(segments.join("/")))
    }

    /// Path as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final segment (file name)
    #[inline]
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// File name without its extension
    #[must_use]
    pub fn file_stem(&self) -> &str {
        let name = self.file_name();
        match name.rfind('.') {
            Some(0) | None => name,
            Some(idx) => &name[..idx],
        }
    }

    /// Lowercased extension, if any
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let name = self.file_name();
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(name[idx + 1..].to_ascii_lowercase()),
        }
    }

    /// Whether the file sits directly at the project root
    #[inline]
    #[must_use]
    pub fn is_root_level(&self) -> bool {
        !self.0.contains('/')
    }

    /// Whether this path lives under the given directory prefix
    #[inline]
    #[must_use]
    pub fn is_under(&self, dir: &str) -> bool {
        self.0
            .strip_prefix(dir.trim_end_matches('/'))
            .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Path without its extension (`src/components/Card.jsx` → `src/components/Card`)
    #[must_use]
    pub fn without_extension(&self) -> &str {
        let stem_len = self.0.len() - self.file_name().len() + self.file_stem().len();
        &self.0[..stem_len]
    }
}

impl Display for ProjectPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProjectPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProjectPath> for String {
    fn from(path: ProjectPath) -> Self {
        path.0
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors related to project paths
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Nothing left after normalization
    #[error("path is empty")]
    Empty,

    /// A `..` segment would leave the project
    #[error("path '{0}' escapes the project root")]
    EscapesRoot(String),

    /// Segment contains whitespace (prose, not a path)
    #[error("invalid path segment: '{0}'")]
    InvalidSegment(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_dot_slash() {
        let path = ProjectPath::parse("./src/App.jsx").unwrap();
        assert_eq!(path.as_str(), "src/App.jsx");
    }

    #[test]
    fn strips_leading_slash_and_decoration() {
        assert_eq!(ProjectPath::parse("/index.html").unwrap().as_str(), "index.html");
        assert_eq!(ProjectPath::parse("`src/index.css`").unwrap().as_str(), "src/index.css");
        assert_eq!(ProjectPath::parse("**src/App.tsx**").unwrap().as_str(), "src/App.tsx");
    }

    #[test]
    fn converts_backslashes_and_collapses_segments() {
        let path = ProjectPath::parse("src\\components//Card.tsx").unwrap();
        assert_eq!(path.as_str(), "src/components/Card.tsx");
    }

    #[test]
    fn rejects_empty_and_escaping_paths() {
        assert_eq!(ProjectPath::parse("  ./ "), Err(PathError::Empty));
        assert!(matches!(
            ProjectPath::parse("../etc/passwd"),
            Err(PathError::EscapesRoot(_))
        ));
        assert!(matches!(
            ProjectPath::parse("here is my app"),
            Err(PathError::InvalidSegment(_))
        ));
    }

    #[test]
    fn name_stem_and_extension() {
        let path = ProjectPath::parse("src/components/Card.Test.JSX").unwrap();
        assert_eq!(path.file_name(), "Card.Test.JSX");
        assert_eq!(path.file_stem(), "Card.Test");
        assert_eq!(path.extension().as_deref(), Some("jsx"));
        assert_eq!(path.without_extension(), "src/components/Card.Test");
    }

    #[test]
    fn dotfiles_have_no_extension() {
        let path = ProjectPath::parse(".gitignore").unwrap();
        assert_eq!(path.extension(), None);
        assert_eq!(path.file_stem(), ".gitignore");
    }

    #[test]
    fn root_level_and_prefix() {
        let html = ProjectPath::parse("index.html").unwrap();
        let app = ProjectPath::parse("src/App.jsx").unwrap();
        assert!(html.is_root_level());
        assert!(!app.is_root_level());
        assert!(app.is_under("src"));
        assert!(app.is_under("src/"));
        assert!(!ProjectPath::parse("srcx/App.jsx").unwrap().is_under("src"));
    }

    #[test]
    fn serde_roundtrip_validates() {
        let path = ProjectPath::parse("src/App.jsx").unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"src/App.jsx\"");
        let bad: Result<ProjectPath, _> = serde_json::from_str("\"../x\"");
        assert!(bad.is_err());
    }
}
