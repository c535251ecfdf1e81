pub use self::decode::{ConversionError, decode};
pub use self::manifest::{ManifestError, parse_manifests};

pub mod scan;
pub mod utils;

mod decode;
mod manifest;

/// Namespace value that means all namespaces.
pub const ALL_NAMESPACES: &str = "all";
