//! Experience timeline.

use minijinja::context;
use serde::Serialize;

use folio_model::Experience;

use super::{RenderContext, Section, SectionRenderer};
use crate::error::RenderError;
use crate::templates::TemplateEngine;

pub(crate) const TEMPLATE_NAME: &str = "sections/experience.html";

#[derive(Debug, Serialize)]
struct TimelineEntry<'a> {
    role: &'a str,
    company: &'a str,
    start: &'a str,
    end: &'a str,
    description: Option<&'a str>,
}

impl<'a> From<&'a Experience> for TimelineEntry<'a> {
    fn from(exp: &'a Experience) -> Self {
        Self {
            role: &exp.role,
            company: &exp.company,
            start: &exp.start_date,
            end: exp.end_label(),
            description: exp.description.as_deref(),
        }
    }
}

/// Rendered only when the record lists at least one position.
///
/// Positions keep the order they were supplied in.
pub struct ExperienceRenderer;

impl SectionRenderer for ExperienceRenderer {
    fn section(&self) -> Section {
        Section::Experience
    }

    fn render(
        &self,
        ctx: &RenderContext<'_>,
        templates: &TemplateEngine,
    ) -> Result<Option<String>, RenderError> {
        let entries: Vec<TimelineEntry<'_>> = match ctx.record.experience.as_slice() {
            [] => return Ok(None),
            items => items.iter().map(TimelineEntry::from).collect(),
        };

        templates
            .render(TEMPLATE_NAME, context! { entries => entries })
            .map(Some)
    }
}

pub(crate) const TEMPLATE: &str = r##"    <!-- Experience Section -->
    <section id="experience" class="experience">
        <div class="container">
            <h2 class="section-title">Experience</h2>
            <div class="timeline">
            {% for entry in entries %}
                <div class="timeline-item">
                    <div class="timeline-marker"></div>
                    <div class="timeline-content">
                        <h3 class="job-title">{{ entry.role }}</h3>
                        <h4 class="company-name">{{ entry.company }}</h4>
                        <p class="job-period">{{ entry.start }} - {{ entry.end }}</p>
                    {% if entry.description %}
                        <p class="job-description">{{ entry.description }}</p>
                    {% endif %}
                    </div>
                </div>
            {% endfor %}
            </div>
        </div>
    </section>"##;
