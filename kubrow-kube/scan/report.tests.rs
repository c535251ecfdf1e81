use rstest::rstest;

use super::*;

const REPORT: &str = "
images:
  nginx:1.27:
    critical: 1
    high: 4
  registry.local:5000/team/api:latest:
    medium: 2
    low: 7
  redis:
    low: 1
";

#[test]
fn from_yaml_test() {
    let scanner = ReportScanner::from_yaml(REPORT).unwrap();

    assert_eq!(3, scanner.len());
    assert_eq!(ScanSummary::new(1, 4, 0, 0), scanner.scan("nginx:1.27").unwrap());
}

#[test]
fn from_yaml_empty_test() {
    let scanner = ReportScanner::from_yaml("{}").unwrap();

    assert!(scanner.is_empty());
}

#[test]
fn from_yaml_invalid_test() {
    assert!(matches!(
        ReportScanner::from_yaml("images: [1, 2"),
        Err(ScanError::SerializationError(_))
    ));
}

#[rstest]
#[case(Some(ScanSummary::new(0, 0, 2, 7)), "registry.local:5000/team/api")]
#[case(Some(ScanSummary::new(0, 0, 2, 7)), "registry.local:5000/team/api:latest")]
#[case(None, "registry.local:5000/team/api:v2")]
#[case(Some(ScanSummary::new(0, 0, 0, 1)), "redis")]
#[case(None, "nginx")]
#[case(None, "nginx@sha256:abc")]
fn scan_test(#[case] expected: Option<ScanSummary>, #[case] image: &str) {
    let scanner = ReportScanner::from_yaml(REPORT).unwrap();

    assert_eq!(expected, scanner.scan(image).ok());
}

#[test]
fn scan_not_found_test() {
    let scanner = ReportScanner::from_yaml(REPORT).unwrap();

    assert!(matches!(scanner.scan("envoy:1.30"), Err(ScanError::NotFound(image)) if image == "envoy:1.30"));
}

#[tokio::test]
async fn load_missing_file_test() {
    let path = std::env::temp_dir().join(format!("kubrow-missing-report-{}.yaml", std::process::id()));

    assert!(matches!(ReportScanner::load(&path).await, Err(ScanError::IoError(_))));
}
