//! Template engine for rendering the page and its sections.

use minijinja::{AutoEscape, Environment, Value};
use serde::Serialize;

use crate::error::RenderError;
use crate::sections;

/// Name of the page template that wraps the rendered sections.
pub const PAGE_TEMPLATE: &str = "index.html";

/// A navigation link to an emitted section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Section anchor without the leading `#`
    pub anchor: &'static str,
    /// Display label
    pub label: &'static str,
}

/// Context for rendering the page template.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    /// Name shown in the title, logo and footer
    pub site_name: String,
    /// Professional title shown in the page title
    pub headline: String,
    /// Layout tag of the active theme
    pub layout: String,
    /// Links to the emitted sections, in page order
    pub nav: Vec<NavLink>,
    /// Rendered section fragments, in page order
    pub sections: Vec<String>,
}

/// Template engine using minijinja.
///
/// Auto-escaping follows the template extension (`.html` escapes) unless the
/// engine is created with escaping disabled.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new(escape: bool) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        if !escape {
            env.set_auto_escape_callback(|_| AutoEscape::None);
        }

        env.add_template(PAGE_TEMPLATE, PAGE)
            .expect("Failed to add page template");

        for &(name, source) in sections::TEMPLATES {
            env.add_template(name, source)
                .expect("Failed to add section template");
        }

        Self { env }
    }

    /// Render a named template with the given context.
    pub fn render(&self, template: &str, ctx: Value) -> Result<String, RenderError> {
        let tmpl = self
            .env
            .get_template(template)
            .map_err(|e| RenderError::template(template, e))?;

        tmpl.render(ctx)
            .map_err(|e| RenderError::template(template, e))
    }

    /// Render the full page around already rendered sections.
    pub fn render_page(&self, page: &PageContext) -> Result<String, RenderError> {
        self.render(PAGE_TEMPLATE, Value::from_serialize(page))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new(true)
    }
}

const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ site_name }} - {{ headline }}</title>
    <link rel="stylesheet" href="styles.css">
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" rel="stylesheet">
    <script src="https://cdn.jsdelivr.net/npm/lucide@latest/dist/umd/lucide.js"></script>
</head>
<body data-layout="{{ layout }}">
    <!-- Navigation -->
    <nav class="navbar">
        <div class="nav-container">
            <a href="#home" class="nav-logo">{{ site_name }}</a>
            <ul class="nav-menu">
            {% for link in nav %}
                <li><a href="#{{ link.anchor }}" class="nav-link">{{ link.label }}</a></li>
            {% endfor %}
            </ul>
            <button class="hamburger" aria-label="Toggle navigation">
                <span></span>
                <span></span>
                <span></span>
            </button>
        </div>
    </nav>
{% for section in sections %}

{{ section | safe }}
{% endfor %}

    <script src="script.js"></script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn page(site_name: &str) -> PageContext {
        PageContext {
            site_name: site_name.to_string(),
            headline: "Engineer".to_string(),
            layout: "modern".to_string(),
            nav: vec![
                NavLink {
                    anchor: "home",
                    label: "Home",
                },
                NavLink {
                    anchor: "contact",
                    label: "Contact",
                },
            ],
            sections: vec!["<section id=\"home\"></section>".to_string()],
        }
    }

    #[test]
    fn renders_page_shell() {
        let engine = TemplateEngine::default();

        let html = engine.render_page(&page("Ada")).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ada - Engineer</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="styles.css">"#));
        assert!(html.contains(r#"<script src="script.js"></script>"#));
        assert!(html.contains(r#"<body data-layout="modern">"#));
    }

    #[test]
    fn renders_navigation_links() {
        let engine = TemplateEngine::default();

        let html = engine.render_page(&page("Ada")).unwrap();

        assert!(html.contains(r##"<a href="#home" class="nav-link">Home</a>"##));
        assert!(html.contains(r##"<a href="#contact" class="nav-link">Contact</a>"##));
        assert!(!html.contains("#about"));
    }

    #[test]
    fn sections_are_inserted_verbatim() {
        let engine = TemplateEngine::default();

        let html = engine.render_page(&page("Ada")).unwrap();

        assert!(html.contains(r#"<section id="home"></section>"#));
    }

    #[test]
    fn escapes_site_name_by_default() {
        let engine = TemplateEngine::default();

        let html = engine.render_page(&page("<b>Ada</b>")).unwrap();

        assert!(html.contains("&lt;b&gt;Ada"));
        assert!(!html.contains("<b>Ada"));
    }

    #[test]
    fn raw_mode_inserts_text_unchanged() {
        let engine = TemplateEngine::new(false);

        let html = engine.render_page(&page("<b>Ada</b>")).unwrap();

        assert!(html.contains(r##"<a href="#home" class="nav-logo"><b>Ada</b></a>"##));
    }
}
