//! Hero section: photo, name, title and social links.

use minijinja::context;

use super::{RenderContext, Section, SectionRenderer, NAME_PLACEHOLDER, TITLE_PLACEHOLDER};
use crate::error::RenderError;
use crate::templates::TemplateEngine;

pub(crate) const TEMPLATE_NAME: &str = "sections/hero.html";

/// Always rendered; blank fields fall back to placeholders.
pub struct HeroRenderer;

impl SectionRenderer for HeroRenderer {
    fn section(&self) -> Section {
        Section::Hero
    }

    fn render(
        &self,
        ctx: &RenderContext<'_>,
        templates: &TemplateEngine,
    ) -> Result<Option<String>, RenderError> {
        let info = &ctx.record.personal_info;

        let html = templates.render(
            TEMPLATE_NAME,
            context! {
                name => info.full_name.as_deref().unwrap_or(NAME_PLACEHOLDER),
                title => info.title.as_deref().unwrap_or(TITLE_PLACEHOLDER),
                photo => info.profile_photo.as_deref(),
                photo_alt => info.full_name.as_deref().unwrap_or_default(),
                location => info.location.as_deref(),
                has_resume => ctx.record.has_resume(),
                social_links => ctx.record.social_links.present(),
            },
        )?;

        Ok(Some(html))
    }
}

pub(crate) const TEMPLATE: &str = r##"    <!-- Hero Section -->
    <section id="home" class="hero">
        <div class="hero-container">
        {% if photo %}
            <div class="hero-image">
                <img src="{{ photo }}" alt="{{ photo_alt }}" class="profile-photo">
            </div>
        {% endif %}
            <div class="hero-content">
                <h1 class="hero-title">{{ name }}</h1>
                <p class="hero-subtitle">{{ title }}</p>
            {% if location %}
                <p class="hero-location"><i data-lucide="map-pin"></i> {{ location }}</p>
            {% endif %}
                <div class="hero-buttons">
                    <a href="#contact" class="btn btn-primary">Get In Touch</a>
                {% if has_resume %}
                    <a href="#" class="btn btn-outline" onclick="downloadResume()">Download Resume</a>
                {% endif %}
                </div>
            {% if social_links %}
                <div class="social-links">
                {% for link in social_links %}
                    <a href="{{ link.url }}" target="_blank" rel="noopener"><i data-lucide="{{ link.icon }}"></i></a>
                {% endfor %}
                </div>
            {% endif %}
            </div>
        </div>
    </section>"##;
