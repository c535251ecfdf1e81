use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::{ImageScanner, ScanError, ScanSummary};

#[cfg(test)]
#[path = "./report.tests.rs"]
mod report_tests;

#[derive(Deserialize)]
struct ScanReport {
    #[serde(default)]
    images: HashMap<String, ScanSummary>,
}

/// [`ImageScanner`] backed by a pre-generated scan report.
///
/// The report is a YAML (or JSON) document that maps image references to vulnerability counts:
/// ```yaml
/// images:
///   nginx:1.27:
///     critical: 1
///     high: 4
/// ```
#[derive(Debug, Default)]
pub struct ReportScanner {
    images: HashMap<String, ScanSummary>,
}

impl ReportScanner {
    /// Creates new [`ReportScanner`] instance from the report content.
    pub fn from_yaml(content: &str) -> Result<Self, ScanError> {
        let report = serde_yaml::from_str::<ScanReport>(content)?;
        Ok(Self { images: report.images })
    }

    /// Loads the report from the specified `path`.
    pub async fn load(path: &Path) -> Result<Self, ScanError> {
        let content = tokio::fs::read_to_string(path).await?;
        let scanner = Self::from_yaml(&content)?;
        tracing::info!("Loaded scan report with {} image(s) from {}", scanner.len(), path.display());

        Ok(scanner)
    }

    /// Returns number of images in the report.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if the report has no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageScanner for ReportScanner {
    /// Looks up the `image` in the report.\
    /// **Note** that an untagged image is also looked up with the `latest` tag.
    fn scan(&self, image: &str) -> Result<ScanSummary, ScanError> {
        if let Some(summary) = self.images.get(image) {
            return Ok(*summary);
        }

        if !has_tag_or_digest(image)
            && let Some(summary) = self.images.get(&format!("{image}:latest"))
        {
            return Ok(*summary);
        }

        Err(ScanError::NotFound(image.to_owned()))
    }
}

fn has_tag_or_digest(image: &str) -> bool {
    let name = image.rsplit('/').next().unwrap_or(image);
    name.contains(':') || name.contains('@')
}
