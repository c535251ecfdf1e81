use rstest::rstest;

use super::*;

fn args(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("kubrow").chain(args.iter().copied())).unwrap()
}

#[test]
fn files_test() {
    let args = args(&["a.yaml", "-", "b.yaml"]);

    assert_eq!(
        vec![PathBuf::from("a.yaml"), PathBuf::from("-"), PathBuf::from("b.yaml")],
        args.files
    );
}

#[rstest]
#[case(&[], None, None)]
#[case(&[], Some("default"), Some("default"))]
#[case(&["-n", "kube-system"], Some("default"), Some("kube-system"))]
#[case(&["--namespace", "all"], Some("default"), None)]
#[case(&["-A"], Some("default"), None)]
#[case(&["-A", "-n", "kube-system"], None, None)]
fn namespace_test(#[case] input: &[&str], #[case] default: Option<&str>, #[case] expected: Option<&str>) {
    assert_eq!(expected, args(input).namespace(default));
}

#[rstest]
#[case(&[], false, false)]
#[case(&[], true, true)]
#[case(&["-w"], false, true)]
fn wide_test(#[case] input: &[&str], #[case] default: bool, #[case] expected: bool) {
    assert_eq!(expected, args(input).wide(default));
}

#[rstest]
#[case(&[], Some("config.yaml"), Some("config.yaml"))]
#[case(&["--scan-report", "cli.yaml"], Some("config.yaml"), Some("cli.yaml"))]
#[case(&["--no-scan"], Some("config.yaml"), None)]
fn scan_report_test(#[case] input: &[&str], #[case] default: Option<&str>, #[case] expected: Option<&str>) {
    let args = args(input);

    assert_eq!(expected.map(Path::new), args.scan_report(default.map(Path::new)));
}

#[test]
fn no_scan_conflicts_with_scan_report_test() {
    let result = Args::try_parse_from(["kubrow", "--no-scan", "--scan-report", "report.yaml"]);

    assert!(result.is_err());
}
