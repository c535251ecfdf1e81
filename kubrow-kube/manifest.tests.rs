use kube::ResourceExt;

use super::*;

#[test]
fn parse_multiple_documents_test() {
    let content = "
apiVersion: apps/v1
kind: StatefulSet
metadata:
  name: web
  namespace: default
---
---
apiVersion: v1
kind: ConfigMap
metadata:
  name: settings
";

    let objects = parse_manifests(content).unwrap();

    assert_eq!(2, objects.len());
    assert_eq!("web", objects[0].name_any());
    assert_eq!(Some("StatefulSet"), objects[0].types.as_ref().map(|t| t.kind.as_str()));
    assert_eq!("settings", objects[1].name_any());
}

#[test]
fn parse_list_test() {
    let content = r#"
apiVersion: v1
kind: List
items:
  - apiVersion: apps/v1
    kind: StatefulSet
    metadata:
      name: db
      namespace: data
  - apiVersion: apps/v1
    kind: StatefulSet
    metadata:
      name: cache
      namespace: data
metadata:
  resourceVersion: ""
"#;

    let objects = parse_manifests(content).unwrap();

    assert_eq!(vec!["db", "cache"], objects.iter().map(|o| o.name_any()).collect::<Vec<_>>());
    assert_eq!(Some("data".to_owned()), objects[1].namespace());
}

#[test]
fn parse_json_test() {
    let content = r#"{"apiVersion":"apps/v1","kind":"StatefulSet","metadata":{"name":"web"}}"#;

    let objects = parse_manifests(content).unwrap();

    assert_eq!(1, objects.len());
    assert_eq!("web", objects[0].name_any());
}

#[test]
fn parse_empty_test() {
    assert!(parse_manifests("").unwrap().is_empty());
}

#[test]
fn parse_invalid_yaml_test() {
    let result = parse_manifests("kind: [StatefulSet");

    assert!(matches!(result, Err(ManifestError::YamlError(_))));
}

#[test]
fn parse_not_an_object_test() {
    let result = parse_manifests("- one\n- two\n");

    assert!(matches!(result, Err(ManifestError::ObjectError { index: 0, .. })));
}
