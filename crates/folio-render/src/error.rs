//! Render errors.

/// Errors that can occur while generating a site.
///
/// Content never causes these; they indicate a fault in a built-in template.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render template {template}: {message}")]
    Template { template: String, message: String },
}

impl RenderError {
    pub(crate) fn template(template: &str, err: minijinja::Error) -> Self {
        Self::Template {
            template: template.to_string(),
            message: err.to_string(),
        }
    }
}
