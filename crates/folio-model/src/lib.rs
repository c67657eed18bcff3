//! Content record and theme registry for folio portfolio sites.
//!
//! This crate holds the data the generator consumes: the content record
//! assembled by whatever collects it (a form, a file, a test) and the catalog
//! of themes a record can select from.

pub mod content;
pub mod loader;
pub mod theme;

pub use content::{
    AboutInfo, ContentRecord, Education, Experience, LanguageSkill, PersonalInfo, Project,
    SocialLink, SocialLinks, DEFAULT_THEME_ID,
};
pub use loader::{load_content, parse_content, ContentFormat, LoadError};
pub use theme::{Layout, Palette, Theme, ThemeError, ThemeRegistry};
