use k8s_openapi::api::core::v1::{Container, PodSpec};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::*;
use crate::scan::{ScanError, ScanSummary, VulnerabilityScorer};

#[derive(Default)]
struct CountingScanner {
    calls: AtomicUsize,
}

impl ImageScanner for CountingScanner {
    fn scan(&self, image: &str) -> Result<ScanSummary, ScanError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if image.starts_with("private/") {
            Err(ScanError::NotFound(image.to_owned()))
        } else {
            Ok(ScanSummary::new(0, 1, 0, 0))
        }
    }
}

fn pod_spec(image: &str) -> PodSpec {
    PodSpec {
        containers: vec![Container {
            name: "main".to_owned(),
            image: Some(image.to_owned()),
            ..Default::default()
        }],
        ..Default::default()
    }
}

async fn wait_for_entries(cache: &ScanCache, expected: usize) {
    for _ in 0..200 {
        if cache.len() >= expected {
            return;
        }

        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn start_and_stop_toggle_capability_test() {
    let capabilities = Capabilities::default();
    let mut scanner = BgScanner::new(
        Handle::current(),
        capabilities.clone(),
        Arc::new(CountingScanner::default()),
    );

    assert!(!capabilities.is_active(Capability::VulnerabilityScanner));

    scanner.start().unwrap();
    assert!(capabilities.is_active(Capability::VulnerabilityScanner));
    assert!(scanner.is_running());
    assert!(matches!(scanner.start(), Err(BgScannerError::AlreadyStarted)));

    scanner.stop();
    assert!(!capabilities.is_active(Capability::VulnerabilityScanner));
    assert!(!scanner.is_running());
    assert!(matches!(scanner.start(), Err(BgScannerError::AlreadyStopped)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn pending_images_are_scanned_in_background_test() {
    let mut scanner = BgScanner::new(
        Handle::current(),
        Capabilities::default(),
        Arc::new(CountingScanner::default()),
    );
    scanner.start().unwrap();
    let scorer = scanner.scorer();
    let spec = pod_spec("nginx:1.27");

    assert!(matches!(scorer.score(&spec), Err(ScanError::Pending { images: 1 })));

    wait_for_entries(scanner.cache(), 1).await;

    assert_eq!("0/1/0/0", scorer.score(&spec).unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failed_scan_is_cached_test() {
    let mut scanner = BgScanner::new(
        Handle::current(),
        Capabilities::default(),
        Arc::new(CountingScanner::default()),
    );
    scanner.start().unwrap();
    let scorer = scanner.scorer();
    let spec = pod_spec("private/app:1");

    assert!(scorer.score(&spec).is_err());
    wait_for_entries(scanner.cache(), 1).await;

    assert_eq!(Some(ScanEntry::Failed), scanner.cache().get("private/app:1"));
    assert!(matches!(scorer.score(&spec), Err(ScanError::Failed(_))));
}

#[tokio::test]
async fn prefetch_scans_each_image_once_test() {
    let counting = Arc::new(CountingScanner::default());
    let scanner = BgScanner::new(Handle::current(), Capabilities::default(), counting.clone());

    scanner.prefetch(["nginx:1.27", "redis:7"]).await;
    scanner.prefetch(vec!["nginx:1.27".to_owned()]).await;

    assert_eq!(2, scanner.cache().len());
    assert_eq!(2, counting.calls.load(Ordering::SeqCst));
    assert_eq!(
        Some(ScanEntry::Scanned(ScanSummary::new(0, 1, 0, 0))),
        scanner.cache().get("redis:7")
    );
}
