use crate::Column;

#[cfg(test)]
#[path = "./header.tests.rs"]
mod header_tests;

/// Ordered list of columns for one resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    columns: Box<[Column]>,
}

impl Header {
    /// Creates new [`Header`] instance.
    pub fn new(columns: Box<[Column]>) -> Self {
        Self { columns }
    }

    /// Returns all header columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if header has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns index of the column with the given `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns `true` if header has a column with the given `name`.
    pub fn has_column(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns names of all columns.
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_ref()).collect()
    }

    /// Returns indexes of columns visible in the current view.
    pub fn visible_columns(&self, show_wide: bool) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| show_wide || !c.is_wide)
            .map(|(i, _)| i)
            .collect()
    }
}

impl From<Vec<Column>> for Header {
    fn from(value: Vec<Column>) -> Self {
        Self::new(value.into_boxed_slice())
    }
}
