//! Configuration file (folio.toml) shared by the commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use folio_model::ThemeRegistry;
use serde::Deserialize;

/// Configuration file structure (folio.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_content")]
    pub content: String,
    #[serde(default = "default_output")]
    pub output: String,
    /// Overrides the theme selected in the content file
    pub theme: Option<String>,
    /// Custom theme catalog (`.toml` or `.json`), relative to folio.toml
    pub themes_file: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: default_content(),
            output: default_output(),
            theme: None,
            themes_file: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    /// Minified output lowercases and shortens palette hex values
    #[serde(default)]
    pub minify: bool,
    #[serde(default = "default_true")]
    pub escape: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: false,
            escape: true,
        }
    }
}

fn default_content() -> String {
    "content.json".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_true() -> bool {
    true
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}

/// The configured theme catalog, or the built-in one.
///
/// A relative `themes_file` is resolved against the directory holding the
/// config file at `config_path`.
pub fn load_registry(config: &ConfigFile, config_path: &Path) -> Result<ThemeRegistry> {
    let Some(themes_file) = &config.site.themes_file else {
        return Ok(ThemeRegistry::builtin());
    };

    let path = config_path
        .parent()
        .unwrap_or(Path::new(""))
        .join(themes_file);
    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read theme catalog {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let registry = if is_json {
        ThemeRegistry::from_json_str(&source)
    } else {
        ThemeRegistry::from_toml_str(&source)
    }
    .with_context(|| format!("Invalid theme catalog {}", path.display()))?;

    tracing::info!("Loaded {} themes from {}", registry.len(), path.display());
    tracing::debug!("Themes: {}", registry.ids().join(", "));
    Ok(registry)
}
