pub use self::cache::{ScanCache, ScanEntry};
pub use self::observer::{BgScanner, BgScannerError};
pub use self::report::ReportScanner;
pub use self::scorer::{CachedScorer, ImageScanner, VulnerabilityScorer};
pub use self::summary::{ScanError, ScanSummary};

mod cache;
mod observer;
mod report;
mod scorer;
mod summary;
