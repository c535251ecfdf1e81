use kubrow_config::ScannerConfig;

use super::*;
use crate::core::read_manifests;

const MANIFESTS: &str = "
apiVersion: apps/v1
kind: StatefulSet
metadata:
  name: web
  namespace: default
spec:
  selector:
    matchLabels:
      app: web
  template:
    spec:
      containers:
        - name: nginx
          image: nginx:1.27
status:
  replicas: 1
  readyReplicas: 1
---
apiVersion: v1
kind: ConfigMap
metadata:
  name: settings
  namespace: default
---
apiVersion: apps/v1
kind: StatefulSet
metadata:
  name: db
  namespace: data
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
  replicas: 2
  readyReplicas: 1
---
apiVersion: apps/v1
kind: StatefulSet
metadata:
  name: broken
  namespace: default
spec:
  replicas: three
";

const REPORT: &str = "
images:
  nginx:1.27:
    high: 1
  postgres:16:
    critical: 2
    low: 5
";

fn temp_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("kubrow-app-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

async fn objects(name: &str) -> Vec<DynamicObject> {
    read_manifests(&[temp_file(name, MANIFESTS)]).await.unwrap()
}

fn settings(namespace: Option<&str>, scan_report: Option<PathBuf>) -> Settings {
    Settings {
        namespace: namespace.map(String::from),
        wide: false,
        scan_report,
    }
}

#[test]
fn settings_test() {
    use clap::Parser;

    let config = Config {
        wide: true,
        scanner: ScannerConfig {
            enabled: true,
            report: Some(PathBuf::from("config.yaml")),
        },
    };

    let args = Args::try_parse_from(["kubrow", "-n", "default", "--no-scan"]).unwrap();
    let settings = Settings::new(&config, &args);

    assert_eq!(Some("default"), settings.namespace.as_deref());
    assert!(settings.wide);
    assert_eq!(None, settings.scan_report);
}

#[tokio::test]
async fn render_without_scanner_test() {
    let app = App::new(Handle::current(), settings(None, None));

    let output = app.render(&objects("all.yaml").await);

    assert!(!app.is_scanner_active());
    assert_eq!(1, output.tables.len());
    let table = &output.tables[0];
    assert_eq!("StatefulSet", table.kind);
    assert!(!table.header.has_column("VS"));
    assert_eq!(vec!["default/web", "data/db"], table.rows.iter().map(|r| r.id.as_str()).collect::<Vec<_>>());
    assert_eq!(2, output.errors.len());
    assert!(output.errors[0].starts_with("default/broken: cannot decode StatefulSet"));
    assert_eq!("default/settings: unsupported kind 'ConfigMap'", output.errors[1]);
}

#[tokio::test]
async fn render_namespace_test() {
    let app = App::new(Handle::current(), settings(Some("data"), None));

    let output = app.render(&objects("data.yaml").await);

    assert_eq!(1, output.tables.len());
    assert_eq!(1, output.tables[0].rows.len());
    assert_eq!("data/db", output.tables[0].rows[0].id);
    assert!(output.errors.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn render_with_scanner_test() {
    let report = temp_file("report.yaml", REPORT);
    let objects = objects("scanned.yaml").await;
    let mut app = App::new(Handle::current(), settings(None, Some(report)));

    app.start_scanner().await.unwrap();
    app.prefetch(&objects).await;
    let output = app.render(&objects);

    assert!(app.is_scanner_active());
    let table = &output.tables[0];
    let vs = table.header.index_of("VS").unwrap();
    assert_eq!(Some("0/1/0/0"), table.rows[0].field(vs));
    assert_eq!(Some("2/0/0/5"), table.rows[1].field(vs));
    assert!(table.rows.iter().all(|r| r.len() == table.header.len()));

    app.stop();
    assert!(!app.is_scanner_active());
    let output = app.render(&objects);
    assert!(!output.tables[0].header.has_column("VS"));
}

#[tokio::test]
async fn start_scanner_missing_report_test() {
    let mut app = App::new(Handle::current(), settings(None, Some(PathBuf::from("/non/existing/report.yaml"))));

    assert!(app.start_scanner().await.is_err());
    assert!(!app.is_scanner_active());
}
