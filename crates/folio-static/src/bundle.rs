//! Named file sets.

use folio_render::GeneratedSite;

pub const INDEX_HTML: &str = "index.html";
pub const STYLES_CSS: &str = "styles.css";
pub const SCRIPT_JS: &str = "script.js";
pub const README_MD: &str = "README.md";

/// A single named file of a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFile {
    /// File name, relative to the site root
    pub name: &'static str,

    /// MIME type
    pub mime: &'static str,

    pub content: String,
}

/// The files that make up a generated site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    files: Vec<BundleFile>,
}

impl Bundle {
    /// Package generated texts as `index.html`, `styles.css` and `script.js`.
    pub fn assemble(site: GeneratedSite) -> Self {
        Self {
            files: vec![
                BundleFile {
                    name: INDEX_HTML,
                    mime: "text/html",
                    content: site.markup,
                },
                BundleFile {
                    name: STYLES_CSS,
                    mime: "text/css",
                    content: site.stylesheet,
                },
                BundleFile {
                    name: SCRIPT_JS,
                    mime: "text/javascript",
                    content: site.script,
                },
            ],
        }
    }

    /// Append the generated README.
    pub fn with_readme(mut self, readme: String) -> Self {
        self.files.push(BundleFile {
            name: README_MD,
            mime: "text/markdown",
            content: readme,
        });
        self
    }

    pub fn files(&self) -> &[BundleFile] {
        &self.files
    }
}
