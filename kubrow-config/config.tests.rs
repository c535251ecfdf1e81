use super::*;

fn temp_config_path(test_name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("{APP_NAME}-{}-{test_name}", std::process::id()))
        .join("config.yaml")
}

#[test]
fn deserialize_empty_test() {
    let config = serde_yaml::from_str::<Config>("{}").unwrap();

    assert_eq!(Config::default(), config);
    assert!(!config.wide);
    assert!(!config.scanner.enabled);
    assert_eq!(None, config.scan_report());
}

#[test]
fn deserialize_scanner_test() {
    let yaml = "
wide: true
scanner:
  enabled: true
  report: /tmp/report.yaml
";
    let config = serde_yaml::from_str::<Config>(yaml).unwrap();

    assert!(config.wide);
    assert_eq!(Some(Path::new("/tmp/report.yaml")), config.scan_report());
}

#[test]
fn disabled_scanner_has_no_report_test() {
    let config = Config {
        wide: false,
        scanner: ScannerConfig {
            enabled: false,
            report: Some(PathBuf::from("/tmp/report.yaml")),
        },
    };

    assert_eq!(None, config.scan_report());
}

#[tokio::test]
async fn load_or_create_writes_default_test() {
    let path = temp_config_path("create");
    let _ = tokio::fs::remove_file(&path).await;

    let config = Config::load_or_create_from(&path).await.unwrap();

    assert_eq!(Config::default(), config);
    assert!(path.exists());

    let loaded = Config::load(&path).await.unwrap();
    assert_eq!(config, loaded);
}

#[tokio::test]
async fn load_or_create_keeps_broken_file_test() {
    let path = temp_config_path("broken");
    tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
    tokio::fs::write(&path, "wide: [not, a, bool").await.unwrap();

    let config = Config::load_or_create_from(&path).await.unwrap();

    assert_eq!(Config::default(), config);
    assert_eq!("wide: [not, a, bool", tokio::fs::read_to_string(&path).await.unwrap());
}
