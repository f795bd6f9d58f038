//! Preview document options

use serde::{Deserialize, Serialize};

/// Runtime URLs and cosmetics for generated documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewOptions {
    /// `<title>` of documents built from scratch
    pub document_title: String,
    /// ES module URL for `react`
    pub react_url: String,
    /// ES module URL for `react-dom/client`
    pub react_dom_url: String,
    /// Script URL of the in-browser JSX transform
    pub transform_url: String,
    /// Script URL of the utility-framework runtime
    pub tailwind_url: String,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            document_title: "Generated UI".to_string(),
            react_url: "https://esm.sh/react@18.3.1".to_string(),
            react_dom_url: "https://esm.sh/react-dom@18.3.1/client".to_string(),
            transform_url: "https://unpkg.com/@babel/standalone@7/babel.min.js".to_string(),
            tailwind_url: "https://cdn.tailwindcss.com".to_string(),
        }
    }
}

impl PreviewOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set document title
    #[must_use]
    pub fn with_document_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = title.into();
        self
    }

    /// Set the component runtime module URLs
    #[must_use]
    pub fn with_runtime(mut self, react_url: impl Into<String>, react_dom_url: impl Into<String>) -> Self {
        self.react_url = react_url.into();
        self.react_dom_url = react_dom_url.into();
        self
    }

    /// Set the JSX transform script URL
    #[must_use]
    pub fn with_transform_url(mut self, url: impl Into<String>) -> Self {
        self.transform_url = url.into();
        self
    }

    /// Set the utility-framework runtime URL
    #[must_use]
    pub fn with_tailwind_url(mut self, url: impl Into<String>) -> Self {
        self.tailwind_url = url.into();
        self
    }
}
