//! Site generation entry point.

use chrono::Datelike;

use folio_model::{ContentRecord, ThemeRegistry};

use crate::error::RenderError;
use crate::markup::render_markup;
use crate::script::BehaviorSynthesizer;
use crate::sections::RenderContext;
use crate::styles::StyleSynthesizer;
use crate::templates::TemplateEngine;

/// Options for generating a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Escape user text in markup and script
    pub escape: bool,

    /// Minify the stylesheet
    pub minify: bool,

    /// Year printed in the footer
    pub year: i32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            escape: true,
            minify: false,
            year: chrono::Local::now().year(),
        }
    }
}

/// The three generated texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    /// Id of the theme that was actually used
    pub theme_id: String,

    /// `index.html`
    pub markup: String,

    /// `styles.css`
    pub stylesheet: String,

    /// `script.js`
    pub script: String,
}

/// Generates sites from content records against a theme registry.
pub struct SiteGenerator {
    registry: ThemeRegistry,
    options: GenerateOptions,
    templates: TemplateEngine,
    styles: StyleSynthesizer,
}

impl SiteGenerator {
    /// Create a new generator.
    pub fn new(registry: ThemeRegistry, options: GenerateOptions) -> Self {
        let templates = TemplateEngine::new(options.escape);
        Self {
            registry,
            options,
            templates,
            styles: StyleSynthesizer::new(),
        }
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Generate markup, stylesheet and script for a record.
    ///
    /// An unknown theme id falls back to the registry's default theme.
    pub fn generate(&self, record: &ContentRecord) -> Result<GeneratedSite, RenderError> {
        let theme = self.registry.resolve(&record.selected_theme);
        let ctx = RenderContext {
            record,
            theme,
            year: self.options.year,
        };

        let markup = render_markup(&ctx, &self.templates)?;

        let (stylesheet, script) = rayon::join(
            || self.styles.render(theme),
            || BehaviorSynthesizer::render(record, self.options.escape),
        );
        let mut stylesheet = stylesheet?;
        if self.options.minify {
            stylesheet = StyleSynthesizer::minify_or_keep(stylesheet);
        }

        tracing::debug!(
            "Generated site with theme '{}' ({} bytes markup, {} bytes css, {} bytes js)",
            theme.id,
            markup.len(),
            stylesheet.len(),
            script.len()
        );

        Ok(GeneratedSite {
            theme_id: theme.id.clone(),
            markup,
            stylesheet,
            script,
        })
    }
}

impl Default for SiteGenerator {
    fn default() -> Self {
        Self::new(ThemeRegistry::builtin(), GenerateOptions::default())
    }
}

/// Generate a site with the built-in themes and default options.
pub fn generate(record: &ContentRecord) -> Result<GeneratedSite, RenderError> {
    SiteGenerator::default().generate(record)
}
