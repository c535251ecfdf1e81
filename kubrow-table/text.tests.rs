use super::*;
use crate::{AGE, Column, NAME, NAMESPACE};

fn header() -> Header {
    Header::from(vec![NAMESPACE, NAME, Column::wide("LABELS"), AGE])
}

fn row(namespace: &str, name: &str, labels: &str, age: &str) -> Row {
    Row::new(
        format!("{namespace}/{name}"),
        vec![namespace.to_owned(), name.to_owned(), labels.to_owned(), age.to_owned()].into_boxed_slice(),
    )
}

#[test]
fn lines_test() {
    let header = header();
    let rows = vec![row("default", "web", "app=web", "5m"), row("kube-system", "db", "app=db", "12d03h")];

    let table = TextTable::new(&header, &rows, false);

    assert_eq!(
        vec![
            "NAMESPACE    NAME     AGE",
            "default      web       5m",
            "kube-system  db    12d03h",
        ],
        table.lines()
    );
}

#[test]
fn lines_wide_test() {
    let header = header();
    let rows = vec![row("default", "web", "app=web tier=front", "5m")];

    let table = TextTable::new(&header, &rows, true);

    assert_eq!(
        vec![
            "NAMESPACE  NAME  LABELS              AGE",
            "default    web   app=web tier=front   5m",
        ],
        table.lines()
    );
}

#[test]
fn lines_missing_field_test() {
    let header = header();
    let rows = vec![Row::new("x".to_owned(), vec!["default".to_owned()].into_boxed_slice())];

    let table = TextTable::new(&header, &rows, false);

    assert_eq!("default    n/a   n/a", table.lines()[1]);
}

#[test]
fn display_test() {
    let header = Header::from(vec![NAME]);
    let rows = vec![Row::new("web".to_owned(), vec!["web".to_owned()].into_boxed_slice())];

    assert_eq!("NAME\nweb\n", TextTable::new(&header, &rows, false).to_string());
}
