//! Theme catalog.
//!
//! A registry is an ordered list of themes. Lookups never fail: an unknown id
//! resolves to the first theme in the catalog.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Color palette of a theme. Values are hex strings such as `#3B82F6`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub card: String,
    pub text: String,
}

/// Layout family of a theme.
///
/// Informational only; generated styles do not branch on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Modern => "modern",
            Layout::Classic => "classic",
            Layout::Minimal => "minimal",
            Layout::Creative => "creative",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named palette with a layout tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Unique identifier (e.g., "modern-blue")
    pub id: String,

    /// Display name
    pub name: String,

    pub colors: Palette,

    #[serde(default)]
    pub layout: Layout,

    /// Preview image URL
    #[serde(default)]
    pub preview: String,
}

/// An ordered, read-only catalog of themes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

#[derive(Deserialize)]
struct CatalogFile {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    /// Create a registry from a custom catalog.
    ///
    /// The first theme becomes the fallback for unknown ids.
    pub fn new(themes: Vec<Theme>) -> Result<Self, ThemeError> {
        if themes.is_empty() {
            return Err(ThemeError::Empty);
        }

        let mut seen = HashSet::new();
        for theme in &themes {
            if !seen.insert(theme.id.as_str()) {
                return Err(ThemeError::DuplicateId(theme.id.clone()));
            }
        }

        Ok(Self { themes })
    }

    /// Parse a catalog from TOML (`[[themes]]` tables).
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        let catalog: CatalogFile =
            toml::from_str(source).map_err(|e| ThemeError::Parse(e.to_string()))?;
        Self::new(catalog.themes)
    }

    /// Parse a catalog from JSON (`{"themes": [...]}`).
    pub fn from_json_str(source: &str) -> Result<Self, ThemeError> {
        let catalog: CatalogFile =
            serde_json::from_str(source).map_err(|e| ThemeError::Parse(e.to_string()))?;
        Self::new(catalog.themes)
    }

    /// The built-in five-theme catalog.
    pub fn builtin() -> Self {
        Self {
            themes: builtin_themes(),
        }
    }

    /// Resolve a theme id, falling back to the default theme.
    pub fn resolve(&self, id: &str) -> &Theme {
        match self.get(id) {
            Some(theme) => theme,
            None => {
                let fallback = self.default_theme();
                tracing::warn!(
                    "Unknown theme '{}', falling back to '{}'",
                    id,
                    fallback.id
                );
                fallback
            }
        }
    }

    /// Look up a theme by exact id.
    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// The first catalog entry.
    pub fn default_theme(&self) -> &Theme {
        // Construction guarantees at least one theme.
        &self.themes[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Errors that can occur when building a theme catalog.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Theme catalog is empty")]
    Empty,

    #[error("Duplicate theme id: {0}")]
    DuplicateId(String),

    #[error("Failed to parse theme catalog: {0}")]
    Parse(String),
}

fn theme(
    id: &str,
    name: &str,
    colors: [&str; 6],
    layout: Layout,
    preview: &str,
) -> Theme {
    let [primary, secondary, accent, background, card, text] = colors;
    Theme {
        id: id.to_string(),
        name: name.to_string(),
        colors: Palette {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            card: card.to_string(),
            text: text.to_string(),
        },
        layout,
        preview: preview.to_string(),
    }
}

fn builtin_themes() -> Vec<Theme> {
    vec![
        theme(
            "modern-blue",
            "Modern Blue",
            ["#3B82F6", "#1E40AF", "#10B981", "#F8FAFC", "#FFFFFF", "#1F2937"],
            Layout::Modern,
            "https://images.pexels.com/photos/374720/pexels-photo-374720.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        theme(
            "elegant-purple",
            "Elegant Purple",
            ["#8B5CF6", "#7C3AED", "#F59E0B", "#FAFAF9", "#FFFFFF", "#374151"],
            Layout::Classic,
            "https://images.pexels.com/photos/159711/books-bookstore-book-reading-159711.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        theme(
            "minimal-green",
            "Minimal Green",
            ["#10B981", "#059669", "#F97316", "#F9FAFB", "#FFFFFF", "#111827"],
            Layout::Minimal,
            "https://images.pexels.com/photos/4348401/pexels-photo-4348401.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        theme(
            "creative-orange",
            "Creative Orange",
            ["#F97316", "#EA580C", "#3B82F6", "#FFFBEB", "#FFFFFF", "#1C1917"],
            Layout::Creative,
            "https://images.pexels.com/photos/3568520/pexels-photo-3568520.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        theme(
            "dark-mode",
            "Dark Professional",
            ["#60A5FA", "#3B82F6", "#34D399", "#111827", "#1F2937", "#F9FAFB"],
            Layout::Modern,
            "https://images.pexels.com/photos/4348404/pexels-photo-4348404.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_starts_with_modern_blue() {
        let registry = ThemeRegistry::builtin();

        assert_eq!(registry.len(), 5);
        assert_eq!(registry.default_theme().id, "modern-blue");
        assert_eq!(registry.default_theme().colors.primary, "#3B82F6");
    }

    #[test]
    fn resolves_known_theme() {
        let registry = ThemeRegistry::builtin();

        let theme = registry.resolve("dark-mode");

        assert_eq!(theme.name, "Dark Professional");
        assert_eq!(theme.colors.background, "#111827");
    }

    #[test]
    fn unknown_theme_falls_back_to_first_entry() {
        let registry = ThemeRegistry::builtin();

        assert_eq!(registry.resolve("neon-pink").id, "modern-blue");
        assert_eq!(registry.resolve("").id, "modern-blue");
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(ThemeRegistry::new(vec![]), Err(ThemeError::Empty)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut themes = builtin_themes();
        themes.push(themes[1].clone());

        let result = ThemeRegistry::new(themes);

        assert!(matches!(result, Err(ThemeError::DuplicateId(id)) if id == "elegant-purple"));
    }

    #[test]
    fn parses_toml_catalog() {
        let source = r##"
[[themes]]
id = "mono"
name = "Mono"
layout = "minimal"

[themes.colors]
primary = "#000000"
secondary = "#111111"
accent = "#222222"
background = "#FFFFFF"
card = "#FAFAFA"
text = "#333333"
"##;

        let registry = ThemeRegistry::from_toml_str(source).unwrap();

        assert_eq!(registry.ids(), vec!["mono"]);
        assert_eq!(registry.resolve("missing").colors.accent, "#222222");
        assert_eq!(registry.default_theme().layout, Layout::Minimal);
    }

    #[test]
    fn reports_malformed_catalog() {
        let result = ThemeRegistry::from_json_str(r#"{"themes": [{"id": "x"}]}"#);

        assert!(matches!(result, Err(ThemeError::Parse(_))));
    }
}
