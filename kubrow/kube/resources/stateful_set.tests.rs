use k8s_openapi::api::core::v1::PodSpec;
use kubrow_common::CapabilitySet;
use kubrow_kube::scan::ScanError;
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

const STATEFUL_SET: &str = "
apiVersion: apps/v1
kind: StatefulSet
metadata:
  name: web
  namespace: default
  labels:
    tier: front
    app: nginx
spec:
  serviceName: nginx
  selector:
    matchLabels:
      app: nginx
  template:
    metadata:
      labels:
        app: nginx
    spec:
      initContainers:
        - name: init
          image: busybox:1.36
      containers:
        - name: nginx
          image: nginx:1.27
        - name: sidecar
          image: envoy:1.30
status:
  replicas: 3
  readyReplicas: 2
";

const HEALTHY_STATEFUL_SET: &str = "
apiVersion: apps/v1
kind: StatefulSet
metadata:
  name: db
  namespace: data
  creationTimestamp: 2024-01-01T00:00:00Z
spec:
  selector:
    matchLabels:
      app: db
  template:
    spec:
      containers:
        - name: postgres
          image: postgres:16
status:
  replicas: 1
  readyReplicas: 1
";

const DEPLOYMENT: &str = "
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
  namespace: default
";

struct FixedScorer {
    score: Option<&'static str>,
    calls: AtomicUsize,
}

impl FixedScorer {
    fn new(score: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            score,
            calls: AtomicUsize::new(0),
        })
    }
}

impl VulnerabilityScorer for FixedScorer {
    fn score(&self, _spec: &PodSpec) -> Result<String, ScanError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.score
            .map(String::from)
            .ok_or_else(|| ScanError::NotFound("nginx:1.27".to_owned()))
    }
}

fn object(yaml: &str) -> DynamicObject {
    serde_yaml::from_str::<DynamicObject>(yaml).unwrap()
}

fn renderer(set: CapabilitySet, scorer: Arc<FixedScorer>) -> StatefulSetRenderer {
    StatefulSetRenderer::new(Capabilities::new(set), Some(scorer))
}

#[test]
fn kind_test() {
    let renderer = StatefulSetRenderer::new(Capabilities::default(), None);

    assert_eq!("StatefulSet", renderer.kind());
}

#[test]
fn header_with_scanner_test() {
    let renderer = renderer(CapabilitySet::all(), FixedScorer::new(None));

    assert_eq!(
        vec![
            "NAMESPACE",
            "NAME",
            "VS",
            "READY",
            "SELECTOR",
            "SERVICE",
            "CONTAINERS",
            "IMAGES",
            "LABELS",
            "VALID",
            "AGE"
        ],
        renderer.header("default").names()
    );
}

#[test]
fn header_without_scanner_test() {
    let renderer = renderer(CapabilitySet::none(), FixedScorer::new(None));
    let header = renderer.header("default");

    assert!(!header.has_column("VS"));
    assert_eq!(10, header.len());
}

#[test]
fn header_flags_test() {
    let renderer = renderer(CapabilitySet::none(), FixedScorer::new(None));
    let header = renderer.header("");
    let wide = header
        .columns()
        .iter()
        .filter(|c| c.is_wide)
        .map(|c| c.name.as_ref())
        .collect::<Vec<_>>();

    assert_eq!(vec!["SELECTOR", "CONTAINERS", "IMAGES", "LABELS", "VALID"], wide);
    assert_eq!(Some(9), header.index_of("AGE"));
    assert!(header.columns()[9].is_time);
}

#[rstest]
#[case(CapabilitySet::all())]
#[case(CapabilitySet::none())]
fn header_and_row_have_same_shape_test(#[case] set: CapabilitySet) {
    let renderer = renderer(set, FixedScorer::new(Some("0/1/0/0")));

    let header = renderer.header("default");
    let row = renderer.render(&object(STATEFUL_SET), "default").unwrap();

    assert_eq!(header.len(), row.len());
}

#[test]
fn toggling_scanner_removes_only_vs_test() {
    let capabilities = Capabilities::new(CapabilitySet::all());
    let renderer = StatefulSetRenderer::new(capabilities.clone(), Some(FixedScorer::new(Some("0/1/0/0"))));
    let object = object(STATEFUL_SET);

    let header_on = renderer.header("default");
    let row_on = renderer.render(&object, "default").unwrap();

    capabilities.deactivate(Capability::VulnerabilityScanner);
    let header_off = renderer.header("default");
    let row_off = renderer.render(&object, "default").unwrap();

    let vs = header_on.index_of("VS").unwrap();
    let mut expected_names = header_on.names();
    expected_names.remove(vs);
    let mut expected_fields = row_on.fields.to_vec();
    expected_fields.remove(vs);

    assert_eq!(expected_names, header_off.names());
    assert_eq!(expected_fields, row_off.fields.to_vec());
}

#[test]
fn render_test() {
    let renderer = renderer(CapabilitySet::none(), FixedScorer::new(None));

    let row = renderer.render(&object(STATEFUL_SET), "default").unwrap();

    assert_eq!("default/web", row.id);
    assert_eq!(
        vec![
            "default",
            "web",
            "2/3",
            "app=nginx",
            "nginx",
            "init,nginx,sidecar",
            "busybox:1.36,nginx:1.27,envoy:1.30",
            "app=nginx tier=front",
            "desiring 3 replicas got 2 available",
            "n/a",
        ],
        row.fields.to_vec()
    );
}

#[test]
fn render_healthy_test() {
    let renderer = renderer(CapabilitySet::none(), FixedScorer::new(None));
    let header = renderer.header("");

    let row = renderer.render(&object(HEALTHY_STATEFUL_SET), "").unwrap();

    assert_eq!("data/db", row.id);
    assert_eq!(Some("1/1"), row.field(header.index_of("READY").unwrap()));
    assert_eq!(Some("n/a"), row.field(header.index_of("SERVICE").unwrap()));
    assert_eq!(Some("<none>"), row.field(header.index_of("LABELS").unwrap()));
    assert_eq!(Some(""), row.field(header.index_of("VALID").unwrap()));
    assert!(row.field(header.index_of("AGE").unwrap()).is_some_and(|a| a.ends_with('h')));
}

#[test]
fn render_score_test() {
    let renderer = renderer(CapabilitySet::all(), FixedScorer::new(Some("1/2/3/4")));

    let row = renderer.render(&object(STATEFUL_SET), "default").unwrap();

    assert_eq!(Some("1/2/3/4"), row.field(2));
}

#[test]
fn render_score_failure_test() {
    let renderer = renderer(CapabilitySet::all(), FixedScorer::new(None));

    let row = renderer.render(&object(STATEFUL_SET), "default").unwrap();

    assert_eq!(Some("n/a"), row.field(2));
    assert_eq!(Some("2/3"), row.field(3));
}

#[test]
fn render_without_scorer_test() {
    let renderer = StatefulSetRenderer::new(Capabilities::new(CapabilitySet::all()), None);

    let row = renderer.render(&object(STATEFUL_SET), "default").unwrap();

    assert_eq!(Some("n/a"), row.field(2));
}

#[test]
fn scorer_not_called_when_scanner_inactive_test() {
    let scorer = FixedScorer::new(Some("0/0/0/0"));
    let renderer = renderer(CapabilitySet::none(), scorer.clone());

    renderer.render(&object(STATEFUL_SET), "default").unwrap();

    assert_eq!(0, scorer.calls.load(Ordering::Relaxed));
}

#[test]
fn render_is_idempotent_test() {
    let renderer = renderer(CapabilitySet::all(), FixedScorer::new(Some("0/1/0/0")));
    let object = object(STATEFUL_SET);

    let first = renderer.render(&object, "default").unwrap();
    let second = renderer.render(&object, "default").unwrap();

    assert_eq!(first, second);
}

#[test]
fn render_wrong_kind_test() {
    let renderer = renderer(CapabilitySet::all(), FixedScorer::new(None));

    let result = renderer.render(&object(DEPLOYMENT), "default");

    assert!(matches!(result, Err(ConversionError::KindMismatch { .. })));
}

#[test]
fn images_test() {
    let renderer = StatefulSetRenderer::new(Capabilities::default(), None);

    let mut images = renderer.images(&object(STATEFUL_SET));
    images.sort();

    assert_eq!(vec!["busybox:1.36", "envoy:1.30", "nginx:1.27"], images);
    assert!(renderer.images(&object(DEPLOYMENT)).is_empty());
}
