use super::*;

const MANIFESTS: &str = "
apiVersion: apps/v1
kind: StatefulSet
metadata:
  name: web
  namespace: default
---
apiVersion: v1
kind: ConfigMap
metadata:
  name: settings
  namespace: default
";

fn temp_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("kubrow-input-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn read_manifests_test() {
    let first = temp_file("first.yaml", MANIFESTS);
    let second = temp_file("second.yaml", MANIFESTS);

    let objects = read_manifests(&[first, second]).await.unwrap();

    assert_eq!(4, objects.len());
    assert_eq!(Some("web"), objects[2].metadata.name.as_deref());
}

#[tokio::test]
async fn read_manifests_missing_file_test() {
    let result = read_manifests(&[PathBuf::from("/non/existing/kubrow.yaml")]).await;

    let error = result.unwrap_err();
    assert!(error.to_string().contains("/non/existing/kubrow.yaml"));
}

#[tokio::test]
async fn read_manifests_invalid_yaml_test() {
    let path = temp_file("invalid.yaml", "kind: [unclosed");

    let result = read_manifests(&[path]).await;

    assert!(result.unwrap_err().to_string().contains("cannot parse manifests"));
}
