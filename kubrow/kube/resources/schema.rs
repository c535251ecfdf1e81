use kubrow_common::{Capability, CapabilitySet};
use kubrow_table::{Column, Header, Row};

#[cfg(test)]
#[path = "./schema.tests.rs"]
mod schema_tests;

/// Column definition together with the capability it depends on.
pub struct ColumnSpec {
    pub column: Column,
    pub requires: Option<Capability>,
}

impl ColumnSpec {
    /// Creates new [`ColumnSpec`] for a column that is always present.
    pub const fn always(column: Column) -> Self {
        Self { column, requires: None }
    }

    /// Creates new [`ColumnSpec`] for a column that is present only when `capability` is active.
    pub const fn requires(column: Column, capability: Capability) -> Self {
        Self {
            column,
            requires: Some(capability),
        }
    }

    /// Returns `true` if the column is present for the given capabilities.
    pub fn is_included(&self, capabilities: CapabilitySet) -> bool {
        self.requires.is_none_or(|c| capabilities.has(c))
    }
}

/// Declarative list of all columns a resource kind can have.\
/// Both [`Header`] and [`Row`] are derived from it, so they always have the same shape.
pub struct ColumnSchema<const N: usize> {
    specs: [ColumnSpec; N],
}

impl<const N: usize> ColumnSchema<N> {
    /// Creates new [`ColumnSchema`] instance.
    pub const fn new(specs: [ColumnSpec; N]) -> Self {
        Self { specs }
    }

    /// Returns [`Header`] with columns present for the given capabilities.
    pub fn header(&self, capabilities: CapabilitySet) -> Header {
        self.specs
            .iter()
            .filter(|s| s.is_included(capabilities))
            .map(|s| s.column.clone())
            .collect::<Vec<_>>()
            .into()
    }

    /// Returns [`Row`] with `values` of columns present for the given capabilities.\
    /// **Note** that `values` must be in the schema order.
    pub fn row(&self, capabilities: CapabilitySet, id: String, values: [String; N]) -> Row {
        let fields = self
            .specs
            .iter()
            .zip(values)
            .filter(|(s, _)| s.is_included(capabilities))
            .map(|(_, v)| v)
            .collect::<Vec<_>>();

        Row::new(id, fields.into_boxed_slice())
    }
}
