use rstest::rstest;

use super::*;
use crate::{AGE, NAME, NAMESPACE};

fn header() -> Header {
    Header::from(vec![NAMESPACE, NAME, Column::new("READY"), Column::wide("LABELS"), AGE])
}

#[test]
fn index_of_test() {
    let header = header();

    assert_eq!(5, header.len());
    assert_eq!(Some(0), header.index_of("NAMESPACE"));
    assert_eq!(Some(3), header.index_of("LABELS"));
    assert_eq!(None, header.index_of("VS"));
    assert!(header.has_column("AGE"));
    assert!(!header.has_column("age"));
}

#[test]
fn names_test() {
    assert_eq!(vec!["NAMESPACE", "NAME", "READY", "LABELS", "AGE"], header().names());
}

#[rstest]
#[case(false, vec![0, 1, 2, 4])]
#[case(true, vec![0, 1, 2, 3, 4])]
fn visible_columns_test(#[case] show_wide: bool, #[case] expected: Vec<usize>) {
    assert_eq!(expected, header().visible_columns(show_wide));
}

#[test]
fn default_is_empty_test() {
    assert!(Header::default().is_empty());
}
