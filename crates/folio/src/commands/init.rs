//! Initialize a portfolio project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
///
/// Writes the config at `config_path` and a sample content file next to it.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    let root = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    if !root.exists() {
        fs::create_dir_all(root).context("Failed to create project directory")?;
    }

    write_if_absent(config_path, DEFAULT_CONFIG, yes)?;
    write_if_absent(&root.join("content.json"), DEFAULT_CONTENT, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Edit content.json, then run 'folio build'.");

    Ok(())
}

fn write_if_absent(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());
    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

[site]
# Content file (.json, .yaml or .toml)
content = "content.json"

# Output directory for built site
output = "dist"

# Theme id; overrides selectedTheme in the content file
# theme = "modern-blue"

# Custom theme catalog ([[themes]] tables or {"themes": [...]})
# themes_file = "themes.toml"

[build]
# Minify the stylesheet (palette hex values are rewritten in lowercase
# short form when enabled)
minify = false

# Escape content text in markup and script
escape = true
"#;

const DEFAULT_CONTENT: &str = r#"{
  "personalInfo": {
    "fullName": "Ada Lovelace",
    "title": "Mathematician & Writer",
    "profilePhoto": "",
    "email": "ada@example.com",
    "phone": "+44 20 7946 0000",
    "location": "London, UK"
  },
  "about": {
    "summary": "I write programs for machines that do not exist yet.",
    "skills": ["Mathematics", "Algorithms", "Technical Writing"],
    "languages": [
      { "name": "English", "level": 5 },
      { "name": "French", "level": 3 }
    ],
    "workStyle": "Careful notes, bold ideas.",
    "goals": "Show that engines can compose music.",
    "hobbies": ["Poetry", "Horse riding"]
  },
  "experience": [
    {
      "id": "1",
      "company": "Analytical Society",
      "role": "Translator & Annotator",
      "startDate": "1842",
      "endDate": "1843",
      "description": "Translated and extended notes on the Analytical Engine.",
      "current": false
    }
  ],
  "education": [
    {
      "id": "1",
      "institution": "Private tutoring",
      "degree": "Mathematics",
      "field": "Logic",
      "year": "1833"
    }
  ],
  "projects": [
    {
      "id": "1",
      "title": "Analytical Engine Sim",
      "description": "Computes Bernoulli numbers on a simulated engine.",
      "images": [],
      "techStack": ["C++"],
      "githubLink": "https://github.com/example/engine"
    }
  ],
  "socialLinks": {
    "github": "https://github.com/example",
    "website": "https://example.com"
  },
  "selectedTheme": "modern-blue"
}
"#;
