use kubrow_table::{AGE, NAME};

use super::*;

const SCHEMA: ColumnSchema<4> = ColumnSchema::new([
    ColumnSpec::always(NAME),
    ColumnSpec::requires(Column::new("VS"), Capability::VulnerabilityScanner),
    ColumnSpec::always(Column::wide("LABELS")),
    ColumnSpec::always(AGE),
]);

fn values() -> [String; 4] {
    ["web".to_owned(), "0/1/0/0".to_owned(), "app=web".to_owned(), "5m".to_owned()]
}

#[test]
fn header_with_capability_test() {
    let header = SCHEMA.header(CapabilitySet::all());

    assert_eq!(vec!["NAME", "VS", "LABELS", "AGE"], header.names());
}

#[test]
fn header_without_capability_test() {
    let header = SCHEMA.header(CapabilitySet::none());

    assert_eq!(vec!["NAME", "LABELS", "AGE"], header.names());
    assert!(header.columns()[1].is_wide);
    assert!(header.columns()[2].is_time);
}

#[test]
fn row_with_capability_test() {
    let row = SCHEMA.row(CapabilitySet::all(), "default/web".to_owned(), values());

    assert_eq!("default/web", row.id);
    assert_eq!(vec!["web", "0/1/0/0", "app=web", "5m"], row.fields.to_vec());
}

#[test]
fn row_without_capability_test() {
    let row = SCHEMA.row(CapabilitySet::none(), "default/web".to_owned(), values());

    assert_eq!(vec!["web", "app=web", "5m"], row.fields.to_vec());
}

#[test]
fn header_and_row_have_same_shape_test() {
    for capabilities in [CapabilitySet::all(), CapabilitySet::none()] {
        let header = SCHEMA.header(capabilities);
        let row = SCHEMA.row(capabilities, String::new(), values());

        assert_eq!(header.len(), row.len());
    }
}
