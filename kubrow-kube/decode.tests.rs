use k8s_openapi::api::apps::v1::StatefulSet;

use super::*;

const STATEFUL_SET: &str = "
apiVersion: apps/v1
kind: StatefulSet
metadata:
  name: web
  namespace: default
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
      containers:
        - name: nginx
          image: nginx:1.27
status:
  replicas: 3
  readyReplicas: 2
";

fn object(yaml: &str) -> DynamicObject {
    serde_yaml::from_str::<DynamicObject>(yaml).unwrap()
}

#[test]
fn decode_stateful_set_test() {
    let sts = decode::<StatefulSet>(&object(STATEFUL_SET)).unwrap();

    assert_eq!(Some("web"), sts.metadata.name.as_deref());
    assert_eq!(Some("default"), sts.metadata.namespace.as_deref());
    assert_eq!(3, sts.status.as_ref().map(|s| s.replicas).unwrap());
    assert_eq!(Some(2), sts.status.as_ref().and_then(|s| s.ready_replicas));
}

#[test]
fn decode_kind_mismatch_test() {
    let yaml = STATEFUL_SET.replace("kind: StatefulSet", "kind: Deployment");
    let error = decode::<StatefulSet>(&object(&yaml)).unwrap_err();

    assert!(matches!(error, ConversionError::KindMismatch { expected: "StatefulSet", .. }));
    assert_eq!(Some("Deployment"), error.observed_kind());
    assert_eq!("expected StatefulSet, but got Deployment (apps/v1)", error.to_string());
}

#[test]
fn decode_version_mismatch_test() {
    let yaml = STATEFUL_SET.replace("apiVersion: apps/v1", "apiVersion: apps/v1beta2");
    let error = decode::<StatefulSet>(&object(&yaml)).unwrap_err();

    assert!(matches!(error, ConversionError::KindMismatch { ref api_version, .. } if api_version == "apps/v1beta2"));
}

#[test]
fn decode_missing_type_test() {
    let mut object = object(STATEFUL_SET);
    object.types = None;

    let error = decode::<StatefulSet>(&object).unwrap_err();

    assert!(matches!(error, ConversionError::MissingType { expected: "StatefulSet" }));
    assert_eq!(None, error.observed_kind());
}

#[test]
fn decode_malformed_test() {
    let yaml = STATEFUL_SET.replace("replicas: 3", "replicas: three");
    let error = decode::<StatefulSet>(&object(&yaml)).unwrap_err();

    assert!(matches!(error, ConversionError::Malformed { .. }));
    assert_eq!(Some("StatefulSet"), error.observed_kind());
}
