//! Testing utilities for the Forge workspace
//!
//! Canned model responses and file builders shared by the integration tests.

#![allow(missing_docs)]

use forge_project::{ProjectFile, ProjectPath};

/// The canonical happy path: summary, one header, one fenced component
pub const HEADER_RESPONSE: &str = "Here is your app.\n### src/App.jsx\n```jsx\nexport default function App(){return <div>Hi</div>}\n```";

/// Header-annotated blocks mixed with bare fences
pub const MIXED_RESPONSE: &str = "\
I built a landing page.

### src/App.jsx
```jsx
import Hero from './components/Hero';

export default function App() {
  return (
    <main className=\"min-h-screen bg-gray-50\">
      <Hero />
    </main>
  );
}
```

### src/components/Hero.jsx
```jsx
export default function Hero() {
  return <h1 className=\"text-4xl font-bold\">Welcome</h1>;
}
```

You can also add this helper:

```js
export const noop = () => {};
```
";

/// Comment annotations instead of headers
pub const ANNOTATED_RESPONSE: &str = "\
Two files follow.

// file: src/App.tsx
import Card from './Card';

export default function App() {
  return <Card title=\"Hello\" />;
}

// file: src/Card.tsx
export default function Card({ title }: { title: string }) {
  return <section className=\"card\">{title}</section>;
}
";

/// Tagged fences without any path hints
pub const TAGGED_RESPONSE: &str = "\
Here you go:

```jsx
function App() {
  return <div className=\"p-4\">Todo</div>;
}
export default App;
```

```jsx
import { createRoot } from 'react-dom/client';
import App from './App';
createRoot(document.getElementById('root')).render(<App />);
```

```css
@tailwind base;
@tailwind components;
@tailwind utilities;
```

```jsx
export default function TodoItem({ text }) {
  return <li>{text}</li>;
}
```
";

/// No fences at all
pub const PLAIN_RESPONSE: &str = "  Sorry, I can only describe the layout: a header, a grid of cards and a footer.  \n";

/// Generated file at a path
pub fn file(path: &str, content: &str) -> ProjectFile {
    ProjectFile::generated(ProjectPath::parse(path).unwrap(), content)
}

/// Synthesized file at a path
pub fn synthesized(path: &str, content: &str) -> ProjectFile {
    ProjectFile::synthesized(ProjectPath::parse(path).unwrap(), content)
}

/// Generated files from `(path, content)` pairs
pub fn files(pairs: &[(&str, &str)]) -> Vec<ProjectFile> {
    pairs.iter().map(|(path, content)| file(path, content)).collect()
}

/// Paths of a file list, in order
pub fn paths(files: &[ProjectFile]) -> Vec<String> {
    files.iter().map(|f| f.path().as_str().to_string()).collect()
}

/// A JavaScript project that already satisfies every completeness check
pub fn complete_project() -> Vec<ProjectFile> {
    files(&[
        (
            "index.html",
            "<!DOCTYPE html>\n<html>\n<body>\n<div id=\"root\"></div>\n<script type=\"module\" src=\"/src/index.jsx\"></script>\n</body>\n</html>",
        ),
        (
            "src/index.jsx",
            "import React from 'react';\nimport ReactDOM from 'react-dom/client';\nimport App from './App';\nimport './index.css';\n\nReactDOM.createRoot(document.getElementById('root')).render(<App />);",
        ),
        (
            "src/App.jsx",
            "export default function App() {\n  return (\n    <div className=\"card\">\n      <h1>Hello</h1>\n    </div>\n  );\n}",
        ),
        ("src/index.css", "body {\n  margin: 0;\n}"),
    ])
}
