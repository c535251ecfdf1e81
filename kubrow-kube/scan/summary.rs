use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Possible errors from the vulnerability scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Some images are queued for scanning, but have no results yet.
    #[error("scan of {images} image(s) is still pending")]
    Pending { images: usize },

    /// Scanner has no results for the image.
    #[error("no scan results for image '{0}'")]
    NotFound(String),

    /// Image scan failed earlier.
    #[error("scan of image '{0}' failed")]
    Failed(String),

    /// Cannot read the scan report.
    #[error("cannot read scan report")]
    IoError(#[from] std::io::Error),

    /// Cannot deserialize the scan report.
    #[error("cannot deserialize scan report")]
    SerializationError(#[from] serde_yaml::Error),
}

/// Number of vulnerabilities found, grouped by severity.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    #[serde(default)]
    pub critical: u32,

    #[serde(default)]
    pub high: u32,

    #[serde(default)]
    pub medium: u32,

    #[serde(default)]
    pub low: u32,
}

impl ScanSummary {
    /// Creates new [`ScanSummary`] instance.
    pub const fn new(critical: u32, high: u32, medium: u32, low: u32) -> Self {
        Self {
            critical,
            high,
            medium,
            low,
        }
    }

    /// Returns `true` if no vulnerabilities were found.
    pub fn is_clean(&self) -> bool {
        self.critical == 0 && self.high == 0 && self.medium == 0 && self.low == 0
    }
}

impl Add for ScanSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            critical: self.critical.saturating_add(rhs.critical),
            high: self.high.saturating_add(rhs.high),
            medium: self.medium.saturating_add(rhs.medium),
            low: self.low.saturating_add(rhs.low),
        }
    }
}

impl AddAssign for ScanSummary {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for ScanSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ScanSummary::default(), |acc, s| acc + s)
    }
}

impl Display for ScanSummary {
    /// Formats summary as `critical/high/medium/low` counts.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}/{}", self.critical, self.high, self.medium, self.low)
    }
}
