//! Education grid.

use minijinja::context;

use super::{RenderContext, Section, SectionRenderer};
use crate::error::RenderError;
use crate::templates::TemplateEngine;

pub(crate) const TEMPLATE_NAME: &str = "sections/education.html";

/// Rendered only when the record lists at least one degree.
pub struct EducationRenderer;

impl SectionRenderer for EducationRenderer {
    fn section(&self) -> Section {
        Section::Education
    }

    fn render(
        &self,
        ctx: &RenderContext<'_>,
        templates: &TemplateEngine,
    ) -> Result<Option<String>, RenderError> {
        match ctx.record.education.as_slice() {
            [] => Ok(None),
            degrees => templates
                .render(TEMPLATE_NAME, context! { degrees => degrees })
                .map(Some),
        }
    }
}

pub(crate) const TEMPLATE: &str = r##"    <!-- Education Section -->
    <section id="education" class="education">
        <div class="container">
            <h2 class="section-title">Education</h2>
            <div class="education-grid">
            {% for edu in degrees %}
                <div class="education-card">
                    <i data-lucide="graduation-cap" class="education-icon"></i>
                    <h3 class="degree">{{ edu.degree }}</h3>
                    <h4 class="institution">{{ edu.institution }}</h4>
                {% if edu.field %}
                    <p class="field">{{ edu.field }}</p>
                {% endif %}
                    <p class="graduation-year">{{ edu.year }}</p>
                </div>
            {% endfor %}
            </div>
        </div>
    </section>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::render_with;
    use folio_model::{ContentRecord, Education};

    #[test]
    fn omitted_without_degrees() {
        assert!(render_with(&EducationRenderer, &ContentRecord::default(), true).is_none());
    }

    #[test]
    fn renders_degree_cards() {
        let record = ContentRecord {
            education: vec![
                Education {
                    id: "1".to_string(),
                    institution: "University of London".to_string(),
                    degree: "BSc".to_string(),
                    field: Some("Mathematics".to_string()),
                    year: "1835".to_string(),
                },
                Education {
                    id: "2".to_string(),
                    institution: "Open University".to_string(),
                    degree: "MSc".to_string(),
                    field: None,
                    year: "1840".to_string(),
                },
            ],
            ..Default::default()
        };

        let html = render_with(&EducationRenderer, &record, true).unwrap();

        assert!(html.contains(r#"<section id="education" class="education">"#));
        assert_eq!(html.matches("education-card").count(), 2);
        assert_eq!(html.matches(r#"<p class="field">"#).count(), 1);
        assert!(html.contains(r#"<p class="graduation-year">1840</p>"#));
    }
}
