//! Markup, stylesheet and script generation for folio portfolio sites.
//!
//! Generation is a pure function of a [`ContentRecord`](folio_model::ContentRecord)
//! and a [`ThemeRegistry`](folio_model::ThemeRegistry): the same record always
//! produces the same three texts, apart from the footer year which is taken
//! from [`GenerateOptions`].

pub mod error;
pub mod generator;
pub mod markup;
pub mod script;
pub mod sections;
pub mod styles;
pub mod templates;

pub use error::RenderError;
pub use generator::{generate, GenerateOptions, GeneratedSite, SiteGenerator};
pub use script::BehaviorSynthesizer;
pub use sections::{RenderContext, Section, SectionRenderer};
pub use styles::StyleSynthesizer;
pub use templates::TemplateEngine;
