//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use folio_model::{ContentRecord, ThemeRegistry};
use folio_render::{GenerateOptions, RenderError, SiteGenerator};

use crate::bundle::Bundle;
use crate::delivery::{Delivery, DeliveryError, DeliveryReport, DirectoryDelivery};
use crate::readme::render_readme;

/// Configuration for building a portfolio site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Minify the stylesheet
    pub minify: bool,

    /// Escape user text in markup and script
    pub escape: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            minify: false,
            escape: true,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Id of the theme that was actually used
    pub theme_id: String,

    /// Files written, in delivery order
    pub files: Vec<&'static str>,

    /// Files that could not be written
    pub failed: Vec<(&'static str, DeliveryError)>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    RenderError(#[from] RenderError),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Generate a site, package it with a README and offer every file to `sink`.
///
/// Files are offered in bundle order. A file the sink rejects is recorded
/// in the report and the remaining files are still offered.
pub fn deliver(
    record: &ContentRecord,
    generator: &SiteGenerator,
    sink: &mut dyn Delivery,
) -> Result<DeliveryReport, RenderError> {
    let site = generator.generate(record)?;
    let theme_id = site.theme_id.clone();
    let registry = generator.registry();
    let theme = registry
        .get(&theme_id)
        .unwrap_or_else(|| registry.default_theme());
    let bundle = Bundle::assemble(site).with_readme(render_readme(record, theme));

    let mut report = DeliveryReport {
        theme_id,
        ..Default::default()
    };
    for file in bundle.files() {
        match sink.offer(file) {
            Ok(()) => {
                tracing::debug!("Delivered {} ({} bytes)", file.name, file.content.len());
                report.delivered.push(file.name);
            }
            Err(e) => {
                tracing::warn!("Failed to deliver {}: {}", file.name, e);
                report.failed.push((file.name, e));
            }
        }
    }

    let total = bundle.files().len();
    if report.is_complete() {
        tracing::info!("Delivered {} files", total);
    } else {
        tracing::warn!(
            "Delivered {} of {} files",
            report.delivered.len(),
            total
        );
    }

    Ok(report)
}

/// Builds a portfolio site into a directory.
pub struct StaticBuilder {
    config: BuildConfig,
    generator: SiteGenerator,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig, registry: ThemeRegistry) -> Self {
        let generator = SiteGenerator::new(
            registry,
            GenerateOptions {
                escape: config.escape,
                minify: config.minify,
                ..Default::default()
            },
        );
        Self { config, generator }
    }

    /// Build the site for a record.
    pub fn build(&self, record: &ContentRecord) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Ensure output directory exists
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let mut sink = DirectoryDelivery::new(&self.config.output_dir);
        let report = deliver(record, &self.generator, &mut sink)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            theme_id: report.theme_id,
            files: report.delivered,
            failed: report.failed,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }
}
