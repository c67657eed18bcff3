//! List the theme catalog.

use std::path::Path;

use anyhow::Result;

use super::config::{load_config, load_registry};

/// Run the themes command.
pub fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let registry = load_registry(&config, config_path)?;

    for (index, theme) in registry.iter().enumerate() {
        let marker = if index == 0 { " (default)" } else { "" };
        println!(
            "{:<18} {:<18} {:<10} {}{}",
            theme.id,
            theme.name,
            theme.layout.as_str(),
            theme.colors.primary,
            marker
        );
    }

    Ok(())
}
