use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::ScanSummary;

/// Result of a single image scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEntry {
    Scanned(ScanSummary),
    Failed,
}

/// Thread safe cache of image scan results, shared between the scanner task and scorers.
#[derive(Default, Debug, Clone)]
pub struct ScanCache {
    entries: Arc<RwLock<HashMap<String, ScanEntry>>>,
}

impl ScanCache {
    /// Returns scan result for the specified `image`.
    pub fn get(&self, image: &str) -> Option<ScanEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(image)
            .copied()
    }

    /// Returns `true` if the `image` was already scanned.
    pub fn contains(&self, image: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(image)
    }

    /// Stores scan result for the specified `image`.
    pub fn insert(&self, image: impl Into<String>, entry: ScanEntry) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(image.into(), entry);
    }

    /// Returns number of scanned images.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if nothing was scanned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
