//! Delivery sinks.
//!
//! A sink receives bundle files one at a time. A failure on one file is
//! reported for that file alone; the remaining files are still offered.

use std::fs;
use std::path::PathBuf;

use crate::bundle::BundleFile;

/// Something that accepts bundle files for saving.
pub trait Delivery {
    /// Offer a single file.
    fn offer(&mut self, file: &BundleFile) -> Result<(), DeliveryError>;
}

/// Errors that can occur when saving a file.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Failed to write {path}: {message}")]
    WriteError { path: String, message: String },
}

/// Outcome of offering every file of a bundle.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    /// Id of the theme the site was generated with
    pub theme_id: String,

    /// Names of files that were saved, in offer order
    pub delivered: Vec<&'static str>,

    /// Files that could not be saved
    pub failed: Vec<(&'static str, DeliveryError)>,
}

impl DeliveryReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Writes files into a directory.
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Delivery for DirectoryDelivery {
    fn offer(&mut self, file: &BundleFile) -> Result<(), DeliveryError> {
        let path = self.dir.join(file.name);
        fs::write(&path, &file.content).map_err(|e| DeliveryError::WriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Collects files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDelivery {
    files: Vec<BundleFile>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[BundleFile] {
        &self.files
    }
}

impl Delivery for MemoryDelivery {
    fn offer(&mut self, file: &BundleFile) -> Result<(), DeliveryError> {
        self.files.push(file.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn file(name: &'static str, content: &str) -> BundleFile {
        BundleFile {
            name,
            mime: "text/plain",
            content: content.to_string(),
        }
    }

    #[test]
    fn directory_delivery_writes_file() {
        let temp = tempdir().unwrap();
        let mut sink = DirectoryDelivery::new(temp.path());

        sink.offer(&file("index.html", "<html></html>")).unwrap();

        let written = fs::read_to_string(temp.path().join("index.html")).unwrap();
        assert_eq!(written, "<html></html>");
    }

    #[test]
    fn directory_delivery_reports_missing_directory() {
        let temp = tempdir().unwrap();
        let mut sink = DirectoryDelivery::new(temp.path().join("missing"));

        let result = sink.offer(&file("index.html", ""));

        assert!(matches!(result, Err(DeliveryError::WriteError { .. })));
    }

    #[test]
    fn memory_delivery_keeps_offer_order() {
        let mut sink = MemoryDelivery::new();

        sink.offer(&file("a", "1")).unwrap();
        sink.offer(&file("b", "2")).unwrap();

        let names: Vec<&str> = sink.files().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
