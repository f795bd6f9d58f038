//! Contents of synthesized files

use forge_project::canonical::MOUNT_ID;

/// Entry point mounting `./App` into the host's root node
pub(crate) fn entry_point(stylesheet_import: &str) -> String {
    format!(
        r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import App from './App';
import '{stylesheet_import}';

ReactDOM.createRoot(document.getElementById('{MOUNT_ID}')).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);
"#
    )
}

/// Root component rendering one existing component
pub(crate) fn wrapping_app(binding: &str, specifier: &str) -> String {
    format!(
        r"import React from 'react';
import {binding} from '{specifier}';

export default function App() {{
  return <{binding} />;
}}
"
    )
}

/// Root component used when nothing suitable was generated
pub(crate) const PLACEHOLDER_APP: &str = r#"import React from 'react';

export default function App() {
  return (
    <main className="placeholder">
      <h1>Generated UI</h1>
      <p>Your application is ready!</p>
    </main>
  );
}
"#;

/// Host document holding the mount element
pub(crate) fn html_host(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
</head>
<body>
  <div id="{MOUNT_ID}"></div>
</body>
</html>
"#
    )
}

/// Utility-framework layer directives
pub(crate) const FRAMEWORK_DIRECTIVES: &str = "@tailwind base;
@tailwind components;
@tailwind utilities;
";

/// Baseline reset shared by every synthesized stylesheet
pub(crate) const BASELINE_RESET: &str = r#"*,
*::before,
*::after {
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  margin: 0;
  padding: 0;
}
"#;

/// Stylesheet, optionally with framework directives on top
pub(crate) fn stylesheet(with_framework: bool) -> String {
    if with_framework {
        format!("{FRAMEWORK_DIRECTIVES}\n{BASELINE_RESET}")
    } else {
        BASELINE_RESET.to_string()
    }
}

pub(crate) const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

pub(crate) const POSTCSS_CONFIG: &str = r"export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
";

#[cfg(test)]
mod tests {
    use super::*;
    use forge_project::signals;

    #[test]
    fn entry_point_mounts_app() {
        let entry = entry_point("./index.css");
        assert!(signals::has_mount_call(&entry));
        assert!(entry.contains("import App from './App';"));
        assert!(entry.contains("getElementById('root')"));
        assert!(!signals::defines_root_component(&entry));
    }

    #[test]
    fn synthesized_apps_define_root_component() {
        assert!(signals::defines_root_component(PLACEHOLDER_APP));
        assert!(signals::defines_root_component(&wrapping_app("Hero", "./components/Hero")));
        assert!(!signals::uses_utility_framework(PLACEHOLDER_APP));
    }

    #[test]
    fn stylesheet_variants() {
        assert!(signals::has_framework_directives(&stylesheet(true)));
        assert!(!signals::has_framework_directives(&stylesheet(false)));
        assert!(signals::looks_like_stylesheet(&stylesheet(false)));
    }

    #[test]
    fn host_is_markup_document() {
        let host = html_host("Generated UI");
        assert!(signals::is_markup_document(&host));
        assert!(host.contains(r#"<div id="root"></div>"#));
    }
}
