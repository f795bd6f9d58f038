//! Prompt construction
//!
//! The system prompt asks for the response shape the parser handles best:
//! a short summary, then one `### path` header per file followed by a fenced
//! block. Follow-up turns carry the prior files in that same shape so the
//! model can rewrite them in place.

use std::fmt::{self, Write as _};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use forge_project::ProjectFile;

/// Fixed instructions sent ahead of every user prompt
pub const SYSTEM_PROMPT: &str = "You are an expert UI developer who creates React+Tailwind applications based on user requests.

RESPONSE FORMAT:
1. First provide a SHORT summary (1-2 sentences) of the UI you're building and your design decisions.
2. Then provide ALL the code needed for a complete working React app with Tailwind CSS.
3. Format each file with the following pattern EXACTLY:

### filepath/filename.ext
```jsx
// Code here
```

REQUIRED FILES - YOU MUST INCLUDE:
- index.html - The HTML entry with a div#root
- src/index.jsx - Entry point that renders the App component
- src/App.jsx - Main application component
- src/index.css - CSS with Tailwind imports (@tailwind base; @tailwind components; @tailwind utilities;)
- tailwind.config.js - Tailwind configuration

MUST-FOLLOW RULES:
- Use Tailwind CSS for all styling (no custom CSS except through Tailwind utilities)
- Use simple React components without complex dependencies
- Make sure all JSX components properly return markup
- Avoid complex state management solutions
- Keep component nesting minimal
- All imports must be either from 'react' or relative imports of your own files
- Triple check closing tags and element nesting in JSX
- Don't import from external component libraries except react itself
- Ensure the application will render in a browser with minimal dependencies

YOUR CODE MUST BE AS SELF-CONTAINED AND SIMPLE AS POSSIBLE TO ENSURE IT WILL RENDER IN A PREVIEW.";

/// Visual identity passed along with each prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub font: String,
}

impl Default for BrandSettings {
    fn default() -> Self {
        Self {
            primary_color: "#FF6B00".to_string(),
            secondary_color: "#000000".to_string(),
            font: "Space Grotesk".to_string(),
        }
    }
}

impl BrandSettings {
    /// With primary color
    #[inline]
    #[must_use]
    pub fn with_primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = color.into();
        self
    }

    /// With secondary color
    #[inline]
    #[must_use]
    pub fn with_secondary_color(mut self, color: impl Into<String>) -> Self {
        self.secondary_color = color.into();
        self
    }

    /// With font family
    #[inline]
    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }
}

/// User prompt with brand guidelines and follow-up context appended
#[must_use]
pub fn format_prompt(user_prompt: &str, brand: Option<&BrandSettings>, context: Option<&str>) -> String {
    let mut prompt = user_prompt.to_string();

    if let Some(brand) = brand {
        let _ = write!(
            prompt,
            "\n\nPlease follow these brand guidelines:\n- Primary color: {}\n- Secondary color: {}\n- Font family: {}",
            brand.primary_color, brand.secondary_color, brand.font
        );
    }

    if let Some(context) = context {
        let _ = write!(
            prompt,
            "\n\nThis is a follow-up request. Previous conversation context:\n{context}\n\nPlease update the previous code based on this new request."
        );
    }

    prompt
}

/// Prior files rendered as header-and-fence sections, `None` when there are none
///
/// The fence is widened past the longest backtick run in a file so the
/// content cannot close it early.
#[must_use]
pub fn conversation_context(prior_files: &[ProjectFile]) -> Option<String> {
    if prior_files.is_empty() {
        return None;
    }

    let mut context = String::new();
    for (i, file) in prior_files.iter().enumerate() {
        if i > 0 {
            context.push_str("\n\n");
        }
        let fence = "`".repeat(longest_backtick_run(file.content()).max(2) + 1);
        let body = file.content().trim_end_matches('\n');
        let _ = write!(
            context,
            "### {}\n{fence}{}\n{body}\n{fence}",
            file.path(),
            file.path().extension().unwrap_or_default()
        );
    }
    Some(context)
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for c in text.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}

/// Kind of interface a prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiType {
    Landing,
    Ecommerce,
    Dashboard,
    Form,
    General,
}

impl UiType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Ecommerce => "ecommerce",
            Self::Dashboard => "dashboard",
            Self::Form => "form",
            Self::General => "general",
        }
    }
}

impl fmt::Display for UiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rough size of the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    /// Classify by word count
    #[must_use]
    pub const fn from_word_count(words: usize) -> Self {
        if words > 30 {
            Self::Complex
        } else if words > 15 {
            Self::Medium
        } else {
            Self::Simple
        }
    }
}

/// Feature explicitly requested in a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptFeature {
    DarkMode,
    Animations,
    Responsive,
}

/// Keyword classification of a user prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    /// Leading excerpt of the prompt
    pub intent: String,
    pub ui_type: UiType,
    pub complexity: Complexity,
    /// Requested features, in a fixed order
    pub features: Vec<PromptFeature>,
}

/// Checked in order; the first matching kind wins
static UI_KEYWORDS: Lazy<[(UiType, Regex); 4]> = Lazy::new(|| {
    [
        (UiType::Landing, Regex::new(r"(?i)landing|home page").unwrap()),
        (UiType::Ecommerce, Regex::new(r"(?i)shop|store|product|ecommerce").unwrap()),
        (UiType::Dashboard, Regex::new(r"(?i)dashboard|admin|analytics").unwrap()),
        (UiType::Form, Regex::new(r"(?i)form|contact|signup|login").unwrap()),
    ]
});

const FEATURE_PHRASES: [(PromptFeature, &[&str]); 3] = [
    (PromptFeature::DarkMode, &["dark mode", "dark theme"]),
    (PromptFeature::Animations, &["animation", "motion"]),
    (PromptFeature::Responsive, &["responsive"]),
];

const INTENT_CHARS: usize = 50;

/// Classify a prompt by keywords and length
#[must_use]
pub fn analyze_prompt(prompt: &str) -> PromptAnalysis {
    let ui_type = UI_KEYWORDS
        .iter()
        .find(|(_, pattern)| pattern.is_match(prompt))
        .map_or(UiType::General, |(kind, _)| *kind);

    let complexity = Complexity::from_word_count(prompt.split_whitespace().count());

    let lowered = prompt.to_lowercase();
    let features = FEATURE_PHRASES
        .iter()
        .filter(|(_, phrases)| phrases.iter().any(|p| lowered.contains(p)))
        .map(|(feature, _)| *feature)
        .collect();

    let mut intent: String = prompt.chars().take(INTENT_CHARS).collect();
    intent.push_str("...");

    PromptAnalysis {
        intent,
        ui_type,
        complexity,
        features,
    }
}
