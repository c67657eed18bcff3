//! Project gallery.

use minijinja::context;
use serde::Serialize;

use folio_model::Project;

use super::{RenderContext, Section, SectionRenderer};
use crate::error::RenderError;
use crate::templates::TemplateEngine;

pub(crate) const TEMPLATE_NAME: &str = "sections/projects.html";

/// Summary card for one project. Only the cover image is shown.
#[derive(Debug, Serialize)]
struct ProjectCard<'a> {
    title: &'a str,
    description: &'a str,
    cover: Option<&'a str>,
    category: Option<&'a str>,
    tech: &'a [String],
    live_link: Option<&'a str>,
    github_link: Option<&'a str>,
}

impl<'a> From<&'a Project> for ProjectCard<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            title: &project.title,
            description: &project.description,
            cover: project.cover_image(),
            category: project.category.as_deref(),
            tech: &project.tech_stack,
            live_link: project.live_link.as_deref(),
            github_link: project.github_link.as_deref(),
        }
    }
}

/// Rendered only when the record lists at least one project.
pub struct ProjectsRenderer;

impl SectionRenderer for ProjectsRenderer {
    fn section(&self) -> Section {
        Section::Projects
    }

    fn render(
        &self,
        ctx: &RenderContext<'_>,
        templates: &TemplateEngine,
    ) -> Result<Option<String>, RenderError> {
        let cards: Vec<ProjectCard<'_>> = match ctx.record.projects.as_slice() {
            [] => return Ok(None),
            projects => projects.iter().map(ProjectCard::from).collect(),
        };

        templates
            .render(TEMPLATE_NAME, context! { cards => cards })
            .map(Some)
    }
}

pub(crate) const TEMPLATE: &str = r##"    <!-- Projects Section -->
    <section id="projects" class="projects">
        <div class="container">
            <h2 class="section-title">Featured Projects</h2>
            <div class="projects-grid">
            {% for card in cards %}
                <div class="project-card">
                {% if card.cover %}
                    <div class="project-image">
                        <img src="{{ card.cover }}" alt="{{ card.title }}">
                    </div>
                {% endif %}
                    <div class="project-content">
                        <h3 class="project-title">{{ card.title }}</h3>
                    {% if card.category %}
                        <span class="project-category">{{ card.category }}</span>
                    {% endif %}
                        <p class="project-description">{{ card.description }}</p>
                    {% if card.tech %}
                        <div class="project-tech">
                        {% for tech in card.tech %}
                            <span class="tech-tag">{{ tech }}</span>
                        {% endfor %}
                        </div>
                    {% endif %}
                        <div class="project-links">
                        {% if card.live_link %}
                            <a href="{{ card.live_link }}" target="_blank" rel="noopener" class="project-link"><i data-lucide="external-link"></i> Live Demo</a>
                        {% endif %}
                        {% if card.github_link %}
                            <a href="{{ card.github_link }}" target="_blank" rel="noopener" class="project-link"><i data-lucide="github"></i> Code</a>
                        {% endif %}
                        </div>
                    </div>
                </div>
            {% endfor %}
            </div>
        </div>
    </section>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::render_with;
    use folio_model::ContentRecord;

    fn project(title: &str, images: &[&str]) -> Project {
        Project {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: "A project".to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
            tech_stack: vec!["C++".to_string()],
            ..Default::default()
        }
    }

    fn record_with(projects: Vec<Project>) -> ContentRecord {
        ContentRecord {
            projects,
            ..Default::default()
        }
    }

    #[test]
    fn omitted_without_projects() {
        assert!(render_with(&ProjectsRenderer, &ContentRecord::default(), true).is_none());
    }

    #[test]
    fn card_without_images_has_no_image_region() {
        let record = record_with(vec![project("Analytical Engine Sim", &[])]);

        let html = render_with(&ProjectsRenderer, &record, true).unwrap();

        assert!(html.contains(r#"<h3 class="project-title">Analytical Engine Sim</h3>"#));
        assert!(html.contains(r#"<span class="tech-tag">C++</span>"#));
        assert!(!html.contains("project-image"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn shows_only_cover_image() {
        let record = record_with(vec![project("Gallery", &["cover.png", "second.png"])]);

        let html = render_with(&ProjectsRenderer, &record, true).unwrap();

        assert!(html.contains(r#"<img src="cover.png" alt="Gallery">"#));
        assert!(!html.contains("second.png"));
    }

    #[test]
    fn optional_links_and_category() {
        let mut with_links = project("Linked", &[]);
        with_links.live_link = Some("demo".to_string());
        with_links.category = Some("Web".to_string());

        let html = render_with(&ProjectsRenderer, &record_with(vec![with_links]), true).unwrap();

        assert!(html.contains(r#"<a href="demo" target="_blank" rel="noopener" class="project-link">"#));
        assert!(html.contains("Live Demo"));
        assert!(!html.contains("> Code</a>"));
        assert!(html.contains(r#"<span class="project-category">Web</span>"#));
    }
}
