//! Bundle assembly and delivery for folio portfolio sites.
//!
//! Packages the generated markup, stylesheet and script as named files, adds
//! a README at delivery time, and hands each file to a [`Delivery`] sink.

pub mod builder;
pub mod bundle;
pub mod delivery;
pub mod readme;

pub use builder::{deliver, BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use bundle::{Bundle, BundleFile, INDEX_HTML, README_MD, SCRIPT_JS, STYLES_CSS};
pub use delivery::{Delivery, DeliveryError, DeliveryReport, DirectoryDelivery, MemoryDelivery};
pub use readme::render_readme;
