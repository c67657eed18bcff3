//! Stylesheet synthesis.
//!
//! Structural rules are fixed; every color comes from the theme palette.
//! Tinted chip backgrounds append an alpha pair to a palette value
//! (`#10B981` becomes `#10B98120`).

use minijinja::{context, Environment};

use folio_model::Theme;

use crate::error::RenderError;

const TEMPLATE_NAME: &str = "styles.css";

/// Stylesheet generator for a theme palette.
pub struct StyleSynthesizer {
    env: Environment<'static>,
}

impl StyleSynthesizer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, STYLESHEET)
            .expect("Failed to add stylesheet template");
        Self { env }
    }

    /// Render the stylesheet for a theme.
    pub fn render(&self, theme: &Theme) -> Result<String, RenderError> {
        let tmpl = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| RenderError::template(TEMPLATE_NAME, e))?;

        tmpl.render(context! { colors => &theme.colors })
            .map_err(|e| RenderError::template(TEMPLATE_NAME, e))
    }

    /// Minify CSS using lightningcss.
    pub fn minify(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Minify, keeping the original text if minification fails.
    pub fn minify_or_keep(css: String) -> String {
        match Self::minify(&css) {
            Ok(minified) => minified,
            Err(e) => {
                tracing::warn!("Skipping stylesheet minification: {}", e);
                css
            }
        }
    }
}

impl Default for StyleSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

const STYLESHEET: &str = r#"/* Theme palette; rules below use these values literally */
:root {
    --primary-color: {{ colors.primary }};
    --secondary-color: {{ colors.secondary }};
    --accent-color: {{ colors.accent }};
}

/* Reset and Base Styles */
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: {{ colors.text }};
    background-color: {{ colors.background }};
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 2rem;
}

/* Navigation */
.navbar {
    position: fixed;
    top: 0;
    width: 100%;
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(10px);
    border-bottom: 1px solid rgba(0, 0, 0, 0.1);
    z-index: 1000;
    transition: all 0.3s ease;
}

.nav-container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 2rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: 70px;
}

.nav-logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: {{ colors.primary }};
    text-decoration: none;
}

.nav-menu {
    display: flex;
    list-style: none;
    gap: 2rem;
}

.nav-link {
    color: {{ colors.text }};
    text-decoration: none;
    font-weight: 500;
    transition: color 0.3s ease;
}

.nav-link:hover {
    color: {{ colors.primary }};
}

.hamburger {
    display: none;
    flex-direction: column;
    background: none;
    border: none;
    cursor: pointer;
}

.hamburger span {
    width: 25px;
    height: 3px;
    background: {{ colors.text }};
    margin: 3px 0;
    transition: 0.3s;
}

/* Hero Section */
.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    background: linear-gradient(135deg, {{ colors.primary }} 0%, {{ colors.secondary }} 100%);
    color: white;
    padding-top: 70px;
}

.hero-container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 2rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}

.hero-content {
    animation: fadeInUp 0.8s ease-out;
}

.hero-title {
    font-size: 3.5rem;
    font-weight: 700;
    line-height: 1.2;
    margin-bottom: 1rem;
}

.hero-subtitle {
    font-size: 1.5rem;
    margin-bottom: 1rem;
    opacity: 0.9;
}

.hero-location {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 2rem;
    opacity: 0.8;
}

.hero-buttons {
    display: flex;
    gap: 1rem;
    margin-bottom: 2rem;
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 1.5rem;
    border-radius: 8px;
    text-decoration: none;
    font-weight: 500;
    transition: all 0.3s ease;
    cursor: pointer;
    border: none;
    font-size: 1rem;
}

.btn-primary {
    background: white;
    color: {{ colors.primary }};
}

.btn-primary:hover {
    transform: translateY(-2px);
    box-shadow: 0 8px 25px rgba(0, 0, 0, 0.15);
}

.btn-outline {
    background: transparent;
    color: white;
    border: 2px solid white;
}

.btn-outline:hover {
    background: white;
    color: {{ colors.primary }};
}

.social-links {
    display: flex;
    gap: 1rem;
}

.social-links a {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 40px;
    height: 40px;
    background: rgba(255, 255, 255, 0.2);
    border-radius: 50%;
    color: white;
    transition: all 0.3s ease;
}

.social-links a:hover {
    background: white;
    color: {{ colors.primary }};
    transform: translateY(-2px);
}

.hero-image {
    display: flex;
    justify-content: center;
    animation: fadeIn 1s ease-out;
}

.profile-photo {
    width: 300px;
    height: 300px;
    border-radius: 50%;
    object-fit: cover;
    border: 8px solid rgba(255, 255, 255, 0.2);
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
}

/* Section Styles */
section {
    padding: 6rem 0;
}

.section-title {
    font-size: 2.5rem;
    font-weight: 700;
    text-align: center;
    margin-bottom: 3rem;
    color: {{ colors.primary }};
}

.subsection-title {
    font-size: 1.5rem;
    font-weight: 600;
    margin-bottom: 1.5rem;
    color: {{ colors.primary }};
}

/* About Section */
.about {
    background: {{ colors.card }};
}

.about-description {
    font-size: 1.2rem;
    text-align: center;
    max-width: 800px;
    margin: 0 auto 4rem;
    line-height: 1.8;
}

.skills-section,
.languages-section,
.personal-section {
    margin-bottom: 3rem;
}

.skills-grid,
.hobbies-grid {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    justify-content: center;
}

.skill-tag {
    padding: 0.5rem 1rem;
    background: {{ colors.accent }}20;
    color: {{ colors.accent }};
    border-radius: 25px;
    font-size: 0.9rem;
    font-weight: 500;
}

.languages-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 2rem;
    max-width: 600px;
    margin: 0 auto;
}

.language-item {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem;
    background: {{ colors.background }};
    border-radius: 8px;
}

.language-level {
    display: flex;
    gap: 0.25rem;
}

.star {
    width: 16px;
    height: 16px;
    color: #ccc;
}

.star.filled {
    color: #fbbf24;
    fill: #fbbf24;
}

.personal-section {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
    gap: 2rem;
    text-align: center;
}

.hobby-tag {
    padding: 0.5rem 1rem;
    background: {{ colors.primary }}20;
    color: {{ colors.primary }};
    border-radius: 25px;
    font-size: 0.9rem;
}

/* Experience Section */
.timeline {
    max-width: 800px;
    margin: 0 auto;
    position: relative;
}

.timeline::before {
    content: '';
    position: absolute;
    left: 50%;
    transform: translateX(-50%);
    width: 2px;
    height: 100%;
    background: {{ colors.primary }};
}

.timeline-item {
    display: flex;
    justify-content: flex-end;
    padding-right: 50%;
    position: relative;
    margin: 3rem 0;
}

.timeline-item:nth-child(odd) {
    justify-content: flex-start;
    padding-left: 50%;
    padding-right: 0;
}

.timeline-marker {
    position: absolute;
    left: 50%;
    transform: translateX(-50%);
    width: 16px;
    height: 16px;
    background: {{ colors.primary }};
    border-radius: 50%;
    border: 4px solid {{ colors.background }};
    z-index: 1;
}

.timeline-content {
    background: {{ colors.card }};
    padding: 2rem;
    border-radius: 8px;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    margin-left: 2rem;
    max-width: 400px;
}

.timeline-item:nth-child(odd) .timeline-content {
    margin-left: 0;
    margin-right: 2rem;
}

.job-title {
    font-size: 1.2rem;
    font-weight: 600;
    color: {{ colors.primary }};
    margin-bottom: 0.5rem;
}

.company-name {
    font-size: 1rem;
    font-weight: 500;
    margin-bottom: 0.5rem;
}

.job-period {
    font-size: 0.9rem;
    color: {{ colors.text }}80;
    margin-bottom: 1rem;
}

/* Education Section */
.education {
    background: {{ colors.card }};
}

.education-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 2rem;
}

.education-card {
    background: {{ colors.background }};
    padding: 2rem;
    border-radius: 12px;
    text-align: center;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    transition: transform 0.3s ease;
}

.education-card:hover {
    transform: translateY(-5px);
}

.education-icon {
    width: 48px;
    height: 48px;
    color: {{ colors.primary }};
    margin-bottom: 1rem;
}

.degree {
    font-size: 1.3rem;
    font-weight: 600;
    color: {{ colors.primary }};
    margin-bottom: 0.5rem;
}

.institution {
    font-size: 1rem;
    margin-bottom: 0.5rem;
}

.field {
    color: {{ colors.text }}80;
    margin-bottom: 0.5rem;
}

/* Projects Section */
.projects-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(350px, 1fr));
    gap: 2rem;
}

.project-card {
    background: {{ colors.card }};
    border-radius: 12px;
    overflow: hidden;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    transition: all 0.3s ease;
}

.project-card:hover {
    transform: translateY(-5px);
    box-shadow: 0 12px 24px rgba(0, 0, 0, 0.15);
}

.project-image {
    height: 200px;
    overflow: hidden;
}

.project-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.3s ease;
}

.project-card:hover .project-image img {
    transform: scale(1.05);
}

.project-content {
    padding: 1.5rem;
}

.project-title {
    font-size: 1.3rem;
    font-weight: 600;
    color: {{ colors.primary }};
    margin-bottom: 0.5rem;
}

.project-category {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    background: {{ colors.accent }}20;
    color: {{ colors.accent }};
    border-radius: 15px;
    font-size: 0.8rem;
    margin-bottom: 1rem;
}

.project-description {
    margin-bottom: 1rem;
    line-height: 1.6;
}

.project-tech {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-bottom: 1rem;
}

.tech-tag {
    padding: 0.25rem 0.5rem;
    background: {{ colors.primary }}20;
    color: {{ colors.primary }};
    border-radius: 12px;
    font-size: 0.8rem;
}

.project-links {
    display: flex;
    gap: 1rem;
}

.project-link {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: {{ colors.primary }};
    text-decoration: none;
    font-weight: 500;
    transition: opacity 0.3s ease;
}

.project-link:hover {
    opacity: 0.8;
}

/* Contact Section */
.contact {
    background: linear-gradient(135deg, {{ colors.secondary }} 0%, {{ colors.primary }} 100%);
    color: white;
    text-align: center;
}

.contact .section-title {
    color: white;
}

.contact-description {
    font-size: 1.2rem;
    max-width: 600px;
    margin: 0 auto 3rem;
    line-height: 1.8;
}

.contact-info {
    display: flex;
    justify-content: center;
    gap: 2rem;
    margin-bottom: 3rem;
}

.contact-item {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: white;
    text-decoration: none;
    font-size: 1.1rem;
    transition: opacity 0.3s ease;
}

.contact-item:hover {
    opacity: 0.8;
}

.contact-buttons {
    display: flex;
    justify-content: center;
    gap: 1rem;
}

/* Footer */
.footer {
    background: {{ colors.text }};
    color: white;
    text-align: center;
    padding: 2rem 0;
}

/* Animations */
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes fadeInUp {
    from {
        opacity: 0;
        transform: translateY(30px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

@keyframes spin {
    0% { transform: rotate(0deg); }
    100% { transform: rotate(360deg); }
}

/* Responsive Design */
@media (max-width: 768px) {
    .nav-menu {
        position: fixed;
        left: -100%;
        top: 70px;
        flex-direction: column;
        background-color: white;
        width: 100%;
        text-align: center;
        transition: 0.3s;
        box-shadow: 0 10px 27px rgba(0, 0, 0, 0.05);
        padding: 2rem 0;
    }

    .nav-menu.active {
        left: 0;
    }

    .hamburger {
        display: flex;
    }

    .hamburger.active span:nth-child(2) {
        opacity: 0;
    }

    .hamburger.active span:nth-child(1) {
        transform: translateY(8px) rotate(45deg);
    }

    .hamburger.active span:nth-child(3) {
        transform: translateY(-8px) rotate(-45deg);
    }

    .hero-container {
        grid-template-columns: 1fr;
        text-align: center;
        gap: 2rem;
    }

    .hero-title {
        font-size: 2.5rem;
    }

    .hero-subtitle {
        font-size: 1.2rem;
    }

    .profile-photo {
        width: 200px;
        height: 200px;
    }

    .container {
        padding: 0 1rem;
    }

    section {
        padding: 4rem 0;
    }

    .section-title {
        font-size: 2rem;
    }

    .timeline::before {
        left: 20px;
    }

    .timeline-item {
        justify-content: flex-start;
        padding-left: 60px;
        padding-right: 0;
    }

    .timeline-marker {
        left: 20px;
    }

    .timeline-content {
        margin-left: 0;
        margin-right: 0;
        max-width: none;
    }

    .contact-info {
        flex-direction: column;
        gap: 1rem;
    }

    .hero-buttons,
    .contact-buttons {
        flex-direction: column;
        align-items: center;
    }

    .projects-grid {
        grid-template-columns: 1fr;
    }
}

@media (max-width: 480px) {
    .hero-title {
        font-size: 2rem;
    }

    .hero-subtitle {
        font-size: 1rem;
    }

    .btn {
        width: 100%;
        justify-content: center;
    }

    .skills-grid {
        justify-content: flex-start;
    }
}
"#;
