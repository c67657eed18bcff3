//! Page assembly.

use rayon::prelude::*;

use crate::error::RenderError;
use crate::sections::{self, RenderContext, Section};
use crate::templates::{PageContext, TemplateEngine};

/// Fallback page-title headline when the record has no professional title.
const HEADLINE_FALLBACK: &str = "Professional Portfolio";

/// A rendered section fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub section: Section,
    pub html: String,
}

/// Run every section renderer and keep the fragments that were emitted.
///
/// Renderers are independent and run in parallel; fragments come back in
/// page order.
pub fn render_sections(
    ctx: &RenderContext<'_>,
    templates: &TemplateEngine,
) -> Result<Vec<Fragment>, RenderError> {
    let renderers = sections::renderers();

    let results: Vec<Result<Option<Fragment>, RenderError>> = renderers
        .par_iter()
        .map(|renderer| {
            let section = renderer.section();
            renderer
                .render(ctx, templates)
                .map(|html| html.map(|html| Fragment { section, html }))
        })
        .collect();

    let mut fragments = Vec::with_capacity(results.len());
    for result in results {
        if let Some(fragment) = result? {
            tracing::debug!("Rendered section #{}", fragment.section.anchor());
            fragments.push(fragment);
        }
    }

    Ok(fragments)
}

/// Render the complete markup document.
///
/// Navigation links are derived from the emitted fragments, so every link
/// points at a section that exists.
pub fn render_markup(
    ctx: &RenderContext<'_>,
    templates: &TemplateEngine,
) -> Result<String, RenderError> {
    let fragments = render_sections(ctx, templates)?;

    let headline = ctx
        .record
        .personal_info
        .title
        .as_deref()
        .unwrap_or(HEADLINE_FALLBACK);

    let page = PageContext {
        site_name: ctx.site_name().to_string(),
        headline: headline.to_string(),
        layout: ctx.theme.layout.to_string(),
        nav: fragments.iter().map(|f| f.section.nav_link()).collect(),
        sections: fragments.into_iter().map(|f| f.html).collect(),
    };

    templates.render_page(&page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::TITLE_PLACEHOLDER;
    use folio_model::{ContentRecord, Education, ThemeRegistry};

    fn render(record: &ContentRecord) -> String {
        let registry = ThemeRegistry::builtin();
        let ctx = RenderContext {
            record,
            theme: registry.default_theme(),
            year: 2024,
        };
        render_markup(&ctx, &TemplateEngine::default()).unwrap()
    }

    #[test]
    fn blank_record_emits_foundational_sections_only() {
        let registry = ThemeRegistry::builtin();
        let record = ContentRecord::default();
        let ctx = RenderContext {
            record: &record,
            theme: registry.default_theme(),
            year: 2024,
        };

        let fragments = render_sections(&ctx, &TemplateEngine::default()).unwrap();
        let emitted: Vec<Section> = fragments.iter().map(|f| f.section).collect();

        assert_eq!(
            emitted,
            vec![Section::Hero, Section::About, Section::Contact]
        );
    }

    #[test]
    fn navigation_matches_emitted_sections() {
        let record = ContentRecord {
            education: vec![Education {
                degree: "BSc".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let html = render(&record);

        assert!(html.contains(r##"<a href="#education" class="nav-link">Education</a>"##));
        assert!(html.contains(r#"<section id="education""#));
        assert!(!html.contains("#experience"));
        assert!(!html.contains("#projects"));
    }

    #[test]
    fn sections_appear_in_page_order() {
        let record = ContentRecord {
            education: vec![Education::default()],
            ..Default::default()
        };

        let html = render(&record);

        let positions: Vec<usize> = ["id=\"home\"", "id=\"about\"", "id=\"education\"", "id=\"contact\""]
            .iter()
            .map(|needle| html.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn page_title_uses_fallbacks() {
        let html = render(&ContentRecord::default());

        assert!(html.contains("<title>Portfolio - Professional Portfolio</title>"));
        assert!(html.contains(r##"<a href="#home" class="nav-logo">Portfolio</a>"##));
        assert!(html.contains(TITLE_PLACEHOLDER));
    }
}
