//! Loading content records from JSON, YAML or TOML files.

use std::fs;
use std::path::Path;

use crate::content::ContentRecord;

/// Supported content file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Yaml,
    Toml,
}

impl ContentFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parse a content record from source text.
pub fn parse_content(source: &str, format: ContentFormat) -> Result<ContentRecord, LoadError> {
    match format {
        ContentFormat::Json => {
            serde_json::from_str(source).map_err(|e| LoadError::InvalidJson(e.to_string()))
        }
        ContentFormat::Yaml => {
            serde_yaml::from_str(source).map_err(|e| LoadError::InvalidYaml(e.to_string()))
        }
        ContentFormat::Toml => {
            toml::from_str(source).map_err(|e| LoadError::InvalidToml(e.to_string()))
        }
    }
}

/// Read and parse a content record, choosing the format by extension.
pub fn load_content(path: &Path) -> Result<ContentRecord, LoadError> {
    let format = ContentFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.display().to_string()))?;

    let source = fs::read_to_string(path)
        .map_err(|e| LoadError::ReadError(format!("{}: {}", path.display(), e)))?;

    let record = parse_content(&source, format)?;
    tracing::debug!(
        "Loaded content from {} ({} projects, {} positions)",
        path.display(),
        record.projects.len(),
        record.experience.len()
    );

    Ok(record)
}

/// Errors that can occur when loading content.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read content file: {0}")]
    ReadError(String),

    #[error("Unsupported content format: {0} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat(String),

    #[error("Invalid JSON in content file: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML in content file: {0}")]
    InvalidYaml(String),

    #[error("Invalid TOML in content file: {0}")]
    InvalidToml(String),
}
