//! Section renderers.
//!
//! Each section of the page has its own renderer. A renderer looks only at
//! the content record and decides on its own whether its section appears, so
//! renderers can run in any order (or in parallel) with identical results.

mod about;
mod contact;
mod education;
mod experience;
mod hero;
mod projects;

use folio_model::{ContentRecord, Theme};

use crate::error::RenderError;
use crate::templates::{NavLink, TemplateEngine};

pub use about::AboutRenderer;
pub use contact::ContactRenderer;
pub use education::EducationRenderer;
pub use experience::ExperienceRenderer;
pub use hero::HeroRenderer;
pub use projects::ProjectsRenderer;

/// Placeholder shown when the record has no name.
pub const NAME_PLACEHOLDER: &str = "Your Name";

/// Placeholder shown when the record has no professional title.
pub const TITLE_PLACEHOLDER: &str = "Your Professional Title";

/// Name used in the logo, page title and footer when the record has no name.
pub const SITE_NAME_FALLBACK: &str = "Portfolio";

/// Section templates registered with the [`TemplateEngine`].
pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    (hero::TEMPLATE_NAME, hero::TEMPLATE),
    (about::TEMPLATE_NAME, about::TEMPLATE),
    (experience::TEMPLATE_NAME, experience::TEMPLATE),
    (education::TEMPLATE_NAME, education::TEMPLATE),
    (projects::TEMPLATE_NAME, projects::TEMPLATE),
    (contact::TEMPLATE_NAME, contact::TEMPLATE),
];

/// A region of the generated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Experience,
    Education,
    Projects,
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section, used as its navigation anchor.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn nav_link(&self) -> NavLink {
        NavLink {
            anchor: self.anchor(),
            label: self.label(),
        }
    }
}

/// Everything a renderer may read.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub record: &'a ContentRecord,
    pub theme: &'a Theme,
    /// Year printed in the footer
    pub year: i32,
}

impl RenderContext<'_> {
    /// Name for the logo, page title and footer.
    pub fn site_name(&self) -> &str {
        self.record
            .personal_info
            .full_name
            .as_deref()
            .unwrap_or(SITE_NAME_FALLBACK)
    }
}

/// Renders one section of the page.
pub trait SectionRenderer: Send + Sync {
    /// The section this renderer produces.
    fn section(&self) -> Section;

    /// Render the section, or `None` when the record has nothing to show.
    fn render(
        &self,
        ctx: &RenderContext<'_>,
        templates: &TemplateEngine,
    ) -> Result<Option<String>, RenderError>;
}

/// One renderer per section, in page order.
pub fn renderers() -> Vec<Box<dyn SectionRenderer>> {
    vec![
        Box::new(HeroRenderer),
        Box::new(AboutRenderer),
        Box::new(ExperienceRenderer),
        Box::new(EducationRenderer),
        Box::new(ProjectsRenderer),
        Box::new(ContactRenderer),
    ]
}
