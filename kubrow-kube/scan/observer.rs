use kubrow_common::{Capabilities, Capability, tasks::wait_for_task};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::{CachedScorer, ImageScanner, ScanCache, ScanEntry};

#[cfg(test)]
#[path = "./observer.tests.rs"]
mod observer_tests;

/// Possible errors from [`BgScanner`].
#[derive(thiserror::Error, Debug)]
pub enum BgScannerError {
    /// Scanner is already started
    #[error("scanner is already started")]
    AlreadyStarted,

    /// Scanner was stopped and its queue is closed
    #[error("scanner was stopped and cannot be started again")]
    AlreadyStopped,
}

/// Background vulnerability scanner.\
/// It drains the scan queue filled by [`CachedScorer`]s and stores results in the shared [`ScanCache`].
pub struct BgScanner {
    runtime: Handle,
    capabilities: Capabilities,
    scanner: Arc<dyn ImageScanner>,
    cache: ScanCache,
    queue_tx: UnboundedSender<String>,
    queue_rx: Option<UnboundedReceiver<String>>,
    task: Option<JoinHandle<()>>,
    cancellation_token: Option<CancellationToken>,
}

impl BgScanner {
    /// Creates new [`BgScanner`] instance.
    pub fn new(runtime: Handle, capabilities: Capabilities, scanner: Arc<dyn ImageScanner>) -> Self {
        let (queue_tx, queue_rx) = unbounded_channel();
        Self {
            runtime,
            capabilities,
            scanner,
            cache: ScanCache::default(),
            queue_tx,
            queue_rx: Some(queue_rx),
            task: None,
            cancellation_token: None,
        }
    }

    /// Returns new [`CachedScorer`] connected to this scanner.
    pub fn scorer(&self) -> CachedScorer {
        CachedScorer::new(self.cache.clone(), Some(self.queue_tx.clone()))
    }

    /// Returns the scan results cache.
    pub fn cache(&self) -> &ScanCache {
        &self.cache
    }

    /// Starts the background scanning task and marks the vulnerability scanner capability as active.\
    /// **Note** that a stopped scanner cannot be started again.
    pub fn start(&mut self) -> Result<(), BgScannerError> {
        if self.cancellation_token.is_some() {
            return Err(BgScannerError::AlreadyStarted);
        }

        let Some(queue_rx) = self.queue_rx.take() else {
            return Err(BgScannerError::AlreadyStopped);
        };

        let cancellation_token = CancellationToken::new();
        let _cancellation_token = cancellation_token.clone();
        let scanner = Arc::clone(&self.scanner);
        let cache = self.cache.clone();

        let task = self.runtime.spawn(async move {
            scan_queue(queue_rx, scanner, cache, _cancellation_token).await;
        });

        self.cancellation_token = Some(cancellation_token);
        self.task = Some(task);
        self.capabilities.activate(Capability::VulnerabilityScanner);
        tracing::info!("Vulnerability scanner started");

        Ok(())
    }

    /// Cancels the background task and marks the vulnerability scanner capability as inactive.
    pub fn stop(&mut self) {
        if let Some(cancellation_token) = self.cancellation_token.take() {
            cancellation_token.cancel();
            wait_for_task(self.task.take(), "vulnerability scanner");
            self.capabilities.deactivate(Capability::VulnerabilityScanner);
            tracing::info!("Vulnerability scanner stopped");
        }
    }

    /// Returns `true` if the background task is running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Scans all not yet scanned `images` and waits for the results.\
    /// Useful to have scores available already for the first render.
    pub async fn prefetch<I, S>(&self, images: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for image in images {
            let image = image.into();
            if !self.cache.contains(&image) {
                scan_image(Arc::clone(&self.scanner), &self.cache, image).await;
            }
        }
    }
}

impl Drop for BgScanner {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn scan_queue(
    mut queue_rx: UnboundedReceiver<String>,
    scanner: Arc<dyn ImageScanner>,
    cache: ScanCache,
    cancellation_token: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancellation_token.cancelled() => break,
            image = queue_rx.recv() => {
                let Some(image) = image else {
                    break;
                };

                if !cache.contains(&image) {
                    scan_image(Arc::clone(&scanner), &cache, image).await;
                }
            },
        }
    }
}

async fn scan_image(scanner: Arc<dyn ImageScanner>, cache: &ScanCache, image: String) {
    let image_ref = image.clone();
    let entry = match tokio::task::spawn_blocking(move || scanner.scan(&image_ref)).await {
        Ok(Ok(summary)) => ScanEntry::Scanned(summary),
        Ok(Err(error)) => {
            tracing::warn!("Cannot scan image '{}': {}", image, error);
            ScanEntry::Failed
        },
        Err(error) => {
            tracing::error!("Scan task for image '{}' failed: {}", image, error);
            ScanEntry::Failed
        },
    };

    cache.insert(image, entry);
}
