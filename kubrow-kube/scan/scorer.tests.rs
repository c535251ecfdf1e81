use k8s_openapi::api::core::v1::Container;
use tokio::sync::mpsc::unbounded_channel;

use super::*;

fn pod_spec(images: &[&str]) -> PodSpec {
    PodSpec {
        containers: images
            .iter()
            .enumerate()
            .map(|(i, image)| Container {
                name: format!("c{i}"),
                image: Some((*image).to_owned()),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

#[test]
fn score_aggregates_cached_results_test() {
    let cache = ScanCache::default();
    cache.insert("nginx:1.27", ScanEntry::Scanned(ScanSummary::new(1, 2, 3, 4)));
    cache.insert("redis:7", ScanEntry::Scanned(ScanSummary::new(0, 1, 0, 10)));
    let scorer = CachedScorer::new(cache, None);

    assert_eq!("1/3/3/14", scorer.score(&pod_spec(&["nginx:1.27", "redis:7"])).unwrap());
}

#[test]
fn score_counts_shared_image_once_test() {
    let cache = ScanCache::default();
    cache.insert("nginx:1.27", ScanEntry::Scanned(ScanSummary::new(1, 0, 0, 0)));
    let scorer = CachedScorer::new(cache, None);

    assert_eq!("1/0/0/0", scorer.score(&pod_spec(&["nginx:1.27", "nginx:1.27"])).unwrap());
}

#[test]
fn score_without_images_test() {
    let scorer = CachedScorer::new(ScanCache::default(), None);

    assert_eq!("0/0/0/0", scorer.score(&PodSpec::default()).unwrap());
}

#[test]
fn score_enqueues_unknown_images_test() {
    let (tx, mut rx) = unbounded_channel();
    let cache = ScanCache::default();
    cache.insert("nginx:1.27", ScanEntry::Scanned(ScanSummary::default()));
    let scorer = CachedScorer::new(cache, Some(tx));

    let result = scorer.score(&pod_spec(&["nginx:1.27", "redis:7", "envoy:1.30"]));

    assert!(matches!(result, Err(ScanError::Pending { images: 2 })));
    assert_eq!(Some("envoy:1.30".to_owned()), rx.try_recv().ok());
    assert_eq!(Some("redis:7".to_owned()), rx.try_recv().ok());
    assert!(rx.try_recv().is_err());
}

#[test]
fn score_with_closed_queue_is_pending_test() {
    let (tx, rx) = unbounded_channel();
    drop(rx);
    let scorer = CachedScorer::new(ScanCache::default(), Some(tx));

    assert!(matches!(
        scorer.score(&pod_spec(&["nginx:1.27"])),
        Err(ScanError::Pending { images: 1 })
    ));
}

#[test]
fn score_reports_failed_image_test() {
    let cache = ScanCache::default();
    cache.insert("nginx:1.27", ScanEntry::Scanned(ScanSummary::default()));
    cache.insert("private/app:1", ScanEntry::Failed);
    let scorer = CachedScorer::new(cache, None);

    let result = scorer.score(&pod_spec(&["nginx:1.27", "private/app:1"]));

    assert!(matches!(result, Err(ScanError::Failed(image)) if image == "private/app:1"));
}
