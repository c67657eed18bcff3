//! Contact section and page footer.

use minijinja::context;

use super::{RenderContext, Section, SectionRenderer};
use crate::error::RenderError;
use crate::templates::TemplateEngine;

pub(crate) const TEMPLATE_NAME: &str = "sections/contact.html";

/// Always rendered. Carries the footer, whose year line is the only part of
/// the page that depends on the clock.
pub struct ContactRenderer;

impl SectionRenderer for ContactRenderer {
    fn section(&self) -> Section {
        Section::Contact
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
                email => info.email.as_deref(),
                phone => info.phone.as_deref(),
                has_resume => ctx.record.has_resume(),
                site_name => ctx.site_name(),
                year => ctx.year,
            },
        )?;

        Ok(Some(html))
    }
}

pub(crate) const TEMPLATE: &str = r##"    <!-- Contact Section -->
    <section id="contact" class="contact">
        <div class="container">
            <h2 class="section-title">Get In Touch</h2>
            <p class="contact-description">
                I'm always interested in new opportunities and interesting projects.
                Let's discuss how we can work together!
            </p>
            <div class="contact-info">
            {% if email %}
                <a href="mailto:{{ email }}" class="contact-item">
                    <i data-lucide="mail"></i>
                    <span>{{ email }}</span>
                </a>
            {% endif %}
            {% if phone %}
                <a href="tel:{{ phone }}" class="contact-item">
                    <i data-lucide="phone"></i>
                    <span>{{ phone }}</span>
                </a>
            {% endif %}
            </div>
            <div class="contact-buttons">
            {% if email %}
                <a href="mailto:{{ email }}" class="btn btn-primary">Send Message</a>
            {% endif %}
            {% if has_resume %}
                <a href="#" class="btn btn-outline" onclick="downloadResume()">Download Resume</a>
            {% endif %}
            </div>
        </div>
    </section>

    <!-- Footer -->
    <footer class="footer">
        <div class="container">
            <p>&copy; {{ year }} {{ site_name }}. All rights reserved.</p>
        </div>
    </footer>"##;
