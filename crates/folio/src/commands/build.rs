//! Portfolio site build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_model::load_content;
use folio_static::{BuildConfig, StaticBuilder};

use super::config::{load_config, load_registry};

/// Command-line values that take precedence over folio.toml.
#[derive(Debug, Default)]
pub struct Overrides {
    pub content: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub theme: Option<String>,
    pub minify: Option<bool>,
    pub escape: Option<bool>,
}

/// Run the build command.
pub fn run(config_path: &Path, overrides: Overrides) -> Result<()> {
    tracing::info!("Building portfolio site...");

    let file_config = load_config(config_path)?;
    let registry = load_registry(&file_config, config_path)?;

    let content_path = overrides
        .content
        .unwrap_or_else(|| PathBuf::from(&file_config.site.content));
    let mut record = load_content(&content_path)
        .with_context(|| format!("Failed to load content from {}", content_path.display()))?;

    if let Some(theme) = overrides.theme.or(file_config.site.theme) {
        record.selected_theme = theme;
    }

    let config = BuildConfig {
        output_dir: overrides
            .output
            .unwrap_or_else(|| PathBuf::from(&file_config.site.output)),
        minify: overrides.minify.unwrap_or(file_config.build.minify),
        escape: overrides.escape.unwrap_or(file_config.build.escape),
    };

    let result = StaticBuilder::new(config, registry).build(&record)?;

    for name in &result.files {
        tracing::info!("  wrote {}", name);
    }
    for (name, error) in &result.failed {
        tracing::error!("  failed {}: {}", name, error);
    }

    tracing::info!(
        "Built site with theme '{}' in {}ms",
        result.theme_id,
        result.duration_ms
    );
    tracing::info!("Output: {}", result.output_dir.display());

    if !result.failed.is_empty() {
        anyhow::bail!("{} file(s) could not be written", result.failed.len());
    }

    Ok(())
}
