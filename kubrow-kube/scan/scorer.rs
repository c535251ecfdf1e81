use k8s_openapi::api::core::v1::PodSpec;
use tokio::sync::mpsc::UnboundedSender;

use super::{ScanCache, ScanEntry, ScanError, ScanSummary};
use crate::utils::pod_images;

#[cfg(test)]
#[path = "./scorer.tests.rs"]
mod scorer_tests;

/// Computes a vulnerability score for the pod.
pub trait VulnerabilityScorer: Send + Sync {
    /// Returns vulnerability score for all images used by the pod `spec`.
    fn score(&self, spec: &PodSpec) -> Result<String, ScanError>;
}

/// Scans a single container image.\
/// **Note** that the call can block, so it should be run outside of the render path.
pub trait ImageScanner: Send + Sync {
    /// Returns vulnerabilities found in the `image`.
    fn scan(&self, image: &str) -> Result<ScanSummary, ScanError>;
}

/// Non-blocking scorer that reads results from the [`ScanCache`].\
/// Images that were not scanned yet are sent to the scan queue and reported as pending.
#[derive(Clone)]
pub struct CachedScorer {
    cache: ScanCache,
    queue: Option<UnboundedSender<String>>,
}

impl CachedScorer {
    /// Creates new [`CachedScorer`] instance.
    pub fn new(cache: ScanCache, queue: Option<UnboundedSender<String>>) -> Self {
        Self { cache, queue }
    }

    fn enqueue(&self, image: &str) {
        if let Some(queue) = &self.queue
            && queue.send(image.to_owned()).is_err()
        {
            tracing::debug!("Scan queue is closed, image '{}' will not be scanned", image);
        }
    }
}

impl VulnerabilityScorer for CachedScorer {
    fn score(&self, spec: &PodSpec) -> Result<String, ScanError> {
        let mut total = ScanSummary::default();
        let mut pending = 0;
        let mut failed = None;

        for image in pod_images(spec) {
            match self.cache.get(image) {
                Some(ScanEntry::Scanned(summary)) => total += summary,
                Some(ScanEntry::Failed) => failed = Some(image),
                None => {
                    pending += 1;
                    self.enqueue(image);
                },
            }
        }

        if pending > 0 {
            Err(ScanError::Pending { images: pending })
        } else if let Some(image) = failed {
            Err(ScanError::Failed(image.to_owned()))
        } else {
            Ok(total.to_string())
        }
    }
}
