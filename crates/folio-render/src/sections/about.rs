//! About section: summary, skills, languages and personal notes.

use minijinja::context;
use serde::Serialize;

use folio_model::LanguageSkill;

use super::{RenderContext, Section, SectionRenderer};
use crate::error::RenderError;
use crate::templates::TemplateEngine;

pub(crate) const TEMPLATE_NAME: &str = "sections/about.html";

/// Units on a language rating scale.
pub const RATING_SCALE: usize = 5;

/// A language with its star units, lowest index first.
///
/// Unit `i` is filled when `i < level`, so out-of-range levels saturate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct LanguageRating<'a> {
    name: &'a str,
    stars: [bool; RATING_SCALE],
}

impl<'a> From<&'a LanguageSkill> for LanguageRating<'a> {
    fn from(lang: &'a LanguageSkill) -> Self {
        let mut stars = [false; RATING_SCALE];
        for (i, star) in stars.iter_mut().enumerate() {
            *star = (i as f64) < lang.level;
        }
        Self {
            name: &lang.name,
            stars,
        }
    }
}

/// Always rendered; each block inside appears only when it has content.
pub struct AboutRenderer;

impl SectionRenderer for AboutRenderer {
    fn section(&self) -> Section {
        Section::About
    }

    fn render(
        &self,
        ctx: &RenderContext<'_>,
        templates: &TemplateEngine,
    ) -> Result<Option<String>, RenderError> {
        let about = &ctx.record.about;
        let languages: Vec<LanguageRating<'_>> =
            about.languages.iter().map(LanguageRating::from).collect();

        let html = templates.render(
            TEMPLATE_NAME,
            context! {
                summary => about.summary.as_deref(),
                skills => &about.skills,
                languages => languages,
                work_style => about.work_style.as_deref(),
                goals => about.goals.as_deref(),
                hobbies => &about.hobbies,
            },
        )?;

        Ok(Some(html))
    }
}

pub(crate) const TEMPLATE: &str = r##"    <!-- About Section -->
    <section id="about" class="about">
        <div class="container">
            <h2 class="section-title">About Me</h2>
        {% if summary %}
            <p class="about-description">{{ summary }}</p>
        {% endif %}
        {% if skills %}

            <div class="skills-section">
                <h3 class="subsection-title">Skills &amp; Technologies</h3>
                <div class="skills-grid">
                {% for skill in skills %}
                    <span class="skill-tag">{{ skill }}</span>
                {% endfor %}
                </div>
            </div>
        {% endif %}
        {% if languages %}

            <div class="languages-section">
                <h3 class="subsection-title">Languages</h3>
                <div class="languages-grid">
                {% for lang in languages %}
                    <div class="language-item">
                        <span class="language-name">{{ lang.name }}</span>
                        <div class="language-level">
                        {% for filled in lang.stars %}
                            <i data-lucide="star" class="star{% if filled %} filled{% endif %}"></i>
                        {% endfor %}
                        </div>
                    </div>
                {% endfor %}
                </div>
            </div>
        {% endif %}
        {% if work_style or goals or hobbies %}

            <div class="personal-section">
            {% if work_style %}
                <div class="personal-item">
                    <h3 class="subsection-title">Work Style</h3>
                    <p class="work-style">{{ work_style }}</p>
                </div>
            {% endif %}
            {% if goals %}
                <div class="personal-item">
                    <h3 class="subsection-title">Goals</h3>
                    <p class="goals">{{ goals }}</p>
                </div>
            {% endif %}
            {% if hobbies %}
                <div class="personal-item">
                    <h3 class="subsection-title">Hobbies &amp; Interests</h3>
                    <div class="hobbies-grid">
                    {% for hobby in hobbies %}
                        <span class="hobby-tag">{{ hobby }}</span>
                    {% endfor %}
                    </div>
                </div>
            {% endif %}
            </div>
        {% endif %}
        </div>
    </section>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::render_with;
    use folio_model::{AboutInfo, ContentRecord};

    fn record_with(about: AboutInfo) -> ContentRecord {
        ContentRecord {
            about,
            ..Default::default()
        }
    }

    #[test]
    fn fills_lowest_stars_up_to_level() {
        let lang = LanguageSkill {
            name: "French".to_string(),
            level: 3.0,
        };

        let rating = LanguageRating::from(&lang);

        assert_eq!(rating.stars, [true, true, true, false, false]);
    }

    #[test]
    fn out_of_range_levels_are_not_validated() {
        let negative = LanguageSkill {
            name: "Latin".to_string(),
            level: -1.0,
        };
        let excessive = LanguageSkill {
            name: "English".to_string(),
            level: 9.0,
        };
        let fractional = LanguageSkill {
            name: "Dutch".to_string(),
            level: 3.5,
        };

        let none = LanguageRating::from(&negative);
        let all = LanguageRating::from(&excessive);
        let partial = LanguageRating::from(&fractional);

        assert_eq!(none.stars, [false; RATING_SCALE]);
        assert_eq!(all.stars, [true; RATING_SCALE]);
        assert_eq!(partial.stars, [true, true, true, true, false]);
    }

    #[test]
    fn always_renders_section_heading() {
        let html = render_with(&AboutRenderer, &ContentRecord::default(), true).unwrap();

        assert!(html.contains(r#"<section id="about" class="about">"#));
        assert!(html.contains("About Me"));
        assert!(!html.contains("skills-section"));
        assert!(!html.contains("languages-section"));
        assert!(!html.contains("personal-section"));
    }

    #[test]
    fn renders_skills_in_order_without_dedup() {
        let record = record_with(AboutInfo {
            skills: vec!["Rust".to_string(), "Go".to_string(), "Rust".to_string()],
            ..Default::default()
        });

        let html = render_with(&AboutRenderer, &record, true).unwrap();

        assert_eq!(html.matches(r#"<span class="skill-tag">Rust</span>"#).count(), 2);
        let rust = html.find("Rust").unwrap();
        let go = html.find("Go").unwrap();
        assert!(rust < go);
    }

    #[test]
    fn renders_five_star_units_per_language() {
        let record = record_with(AboutInfo {
            languages: vec![LanguageSkill {
                name: "German".to_string(),
                level: 2.0,
            }],
            ..Default::default()
        });

        let html = render_with(&AboutRenderer, &record, true).unwrap();

        assert_eq!(html.matches(r#"data-lucide="star""#).count(), 5);
        assert_eq!(html.matches(r#"class="star filled""#).count(), 2);
    }

    #[test]
    fn renders_personal_notes_when_present() {
        let record = record_with(AboutInfo {
            work_style: Some("Remote first".to_string()),
            hobbies: vec!["Chess".to_string()],
            ..Default::default()
        });

        let html = render_with(&AboutRenderer, &record, true).unwrap();

        assert!(html.contains(r#"<p class="work-style">Remote first</p>"#));
        assert!(html.contains(r#"<span class="hobby-tag">Chess</span>"#));
        assert!(!html.contains(r#"class="goals""#));
    }

    #[test]
    fn escapes_summary_text() {
        let record = record_with(AboutInfo {
            summary: Some("<script>alert(1)</script>".to_string()),
            ..Default::default()
        });

        let escaped = render_with(&AboutRenderer, &record, true).unwrap();
        let raw = render_with(&AboutRenderer, &record, false).unwrap();

        assert!(!escaped.contains("<script>"));
        assert!(escaped.contains("&lt;script&gt;"));
        assert!(raw.contains("<script>alert(1)</script>"));
    }
}
